pub mod course;
pub mod fuzzy;

pub use course::{Course, RecommendationRequest};
pub use fuzzy::{DurationLevel, PriceLevel};
