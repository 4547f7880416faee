use std::{fs::File, io::Read, path::Path};

use tracing::instrument;

use crate::{
    error::DatasetError,
    models::{Course, DurationLevel, PriceLevel},
    services::fuzzy::FuzzyVariable,
};

pub const PRICE_LEVELS: [PriceLevel; 3] = [PriceLevel::Low, PriceLevel::Medium, PriceLevel::High];
pub const DURATION_LEVELS: [DurationLevel; 3] =
    [DurationLevel::Short, DurationLevel::Medium, DurationLevel::Long];

/// In-memory course dataset with its fuzzy price and duration variables
///
/// Built once at startup and shared read-only by every request. The fuzzy
/// sets are derived from the bounds of the full dataset and never change.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    price: FuzzyVariable<PriceLevel>,
    duration: FuzzyVariable<DurationLevel>,
}

impl CourseCatalog {
    /// Loads the catalog from a CSV file on disk
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parses CSV with a header row; columns are matched by name
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let courses = csv_reader
            .deserialize::<Course>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_courses(courses)
    }

    /// Builds the catalog and its fuzzy variables from already-parsed courses
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, DatasetError> {
        if courses.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (i, course) in courses.iter().enumerate() {
            // Row numbers are 1-based and skip the header line.
            let row = i + 2;
            if !course.price.is_finite() {
                return Err(DatasetError::NonFinite { row, field: "price" });
            }
            if !course.content_duration.is_finite() {
                return Err(DatasetError::NonFinite {
                    row,
                    field: "content_duration",
                });
            }
        }

        let (min_price, max_price) = bounds(courses.iter().map(|c| c.price));
        let (min_duration, max_duration) = bounds(courses.iter().map(|c| c.content_duration));

        tracing::info!(
            courses = courses.len(),
            min_price,
            max_price,
            min_duration,
            max_duration,
            "Course catalog loaded"
        );

        Ok(Self {
            price: FuzzyVariable::from_bounds(min_price, max_price, PRICE_LEVELS),
            duration: FuzzyVariable::from_bounds(min_duration, max_duration, DURATION_LEVELS),
            courses,
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn price(&self) -> &FuzzyVariable<PriceLevel> {
        &self.price
    }

    pub fn duration(&self) -> &FuzzyVariable<DurationLevel> {
        &self.duration
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
course_id,course_title,url,is_paid,price,num_subscribers,level,content_duration,subject
1,Ultimate Investment Banking Course,https://www.udemy.com/ultimate-investment-banking-course/,True,200,2147,All Levels,1.5,Business Finance
2,Complete GST Course & Certification,https://www.udemy.com/goods-and-services-tax/,True,75,2792,All Levels,39,Business Finance
3,Financial Modeling for Business Analysts,https://www.udemy.com/financial-modeling-for-business-analysts/,False,0,2174,Intermediate Level,2.5,Business Finance
";

    #[test]
    fn test_from_reader_ignores_extra_columns() {
        let catalog = CourseCatalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.courses()[1].course_title, "Complete GST Course & Certification");
        assert_eq!(catalog.courses()[2].level, "Intermediate Level");
    }

    #[test]
    fn test_bounds_drive_fuzzy_variables() {
        let catalog = CourseCatalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(catalog.price().bounds(), (0.0, 200.0));
        assert_eq!(catalog.duration().bounds(), (1.5, 39.0));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let catalog = CourseCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CourseCatalog::load(dir.path().join("missing.csv"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_malformed_price_is_error() {
        let csv = "course_title,url,price,level,content_duration,subject\n\
                   Piano,https://example.com,Free,All Levels,1,Music\n";
        let result = CourseCatalog::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "course_title,url,price,level,subject\n\
                   Piano,https://example.com,20,All Levels,Music\n";
        let result = CourseCatalog::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let csv = "course_title,url,price,level,content_duration,subject\n";
        let result = CourseCatalog::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_non_finite_value_is_error() {
        let csv = "course_title,url,price,level,content_duration,subject\n\
                   Piano,https://example.com,20,All Levels,NaN,Music\n";
        let result = CourseCatalog::from_reader(csv.as_bytes());
        assert!(matches!(
            result,
            Err(DatasetError::NonFinite {
                row: 2,
                field: "content_duration"
            })
        ));
    }
}
