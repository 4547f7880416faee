use serde::{Deserialize, Serialize};

/// A course row from the dataset
///
/// Deserialized from the CSV by header name (extra columns are ignored) and
/// serialized back with exactly the fields a recommendation exposes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub course_title: String,
    pub url: String,
    pub price: f64,
    /// Content length in hours
    pub content_duration: f64,
    pub level: String,
    pub subject: String,
}

/// Body of a recommendation request
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
    pub price: f64,
    pub duration: f64,
}
