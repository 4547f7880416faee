pub mod catalog;
pub mod fuzzy;
pub mod recommendations;
pub mod similarity;

pub use catalog::CourseCatalog;
pub use recommendations::{recommend, FilterMode, Recommendation, MAX_RECOMMENDATIONS};
