/// Fuzzy categories over the price dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceLevel {
    Low,
    Medium,
    High,
}

/// Fuzzy categories over the content-duration dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationLevel {
    Short,
    Medium,
    Long,
}
