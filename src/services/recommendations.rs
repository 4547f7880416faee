use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Course, DurationLevel, PriceLevel, RecommendationRequest},
    services::{catalog::CourseCatalog, similarity::title_similarity},
};

/// Upper bound on courses returned by a single recommendation
pub const MAX_RECOMMENDATIONS: usize = 5;

/// How candidate courses are narrowed before ranking
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Keep courses whose own price and duration buckets match the
    /// request's winning buckets
    #[default]
    Bucket,
    /// Keep every course; only title similarity decides the ranking
    Passthrough,
}

/// Ranked courses plus the fuzzy buckets that selected them
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub price_levels: Vec<PriceLevel>,
    pub duration_levels: Vec<DurationLevel>,
    pub candidates: usize,
    pub courses: Vec<Course>,
}

/// Recommends courses close to the requested title, price and duration
///
/// 1. Fuzzify the request price and duration and keep the winning bucket(s).
/// 2. Filter the catalog according to `mode`.
/// 3. Score every survivor by title similarity, stable-sort descending and
///    return at most `limit` courses, never more than [`MAX_RECOMMENDATIONS`].
pub fn recommend(
    catalog: &CourseCatalog,
    request: &RecommendationRequest,
    mode: FilterMode,
    limit: usize,
) -> AppResult<Recommendation> {
    if !request.price.is_finite() || !request.duration.is_finite() {
        return Err(AppError::InvalidInput(
            "price and duration must be finite numbers".to_string(),
        ));
    }

    let price_levels = catalog.price().memberships(request.price).winners();
    let duration_levels = catalog.duration().memberships(request.duration).winners();

    let mut scored: Vec<(f64, &Course)> = catalog
        .courses()
        .iter()
        .filter(|course| match mode {
            FilterMode::Passthrough => true,
            FilterMode::Bucket => {
                shares_level(
                    &catalog.price().memberships(course.price).winners(),
                    &price_levels,
                ) && shares_level(
                    &catalog.duration().memberships(course.content_duration).winners(),
                    &duration_levels,
                )
            }
        })
        .map(|course| (title_similarity(&request.title, &course.course_title), course))
        .collect();

    let candidates = scored.len();

    // sort_by is stable, so equal scores keep dataset order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let courses = scored
        .into_iter()
        .take(limit.min(MAX_RECOMMENDATIONS))
        .map(|(_, course)| course.clone())
        .collect();

    Ok(Recommendation {
        price_levels,
        duration_levels,
        candidates,
        courses,
    })
}

fn shares_level<L: PartialEq>(course_levels: &[L], wanted: &[L]) -> bool {
    course_levels.iter().any(|level| wanted.contains(level))
}
