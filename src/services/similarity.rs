/// Normalized title similarity in [0, 1]
///
/// Case-sensitive Indel ratio, `2·LCS / (len_a + len_b)`, rounded half-to-even
/// to whole percentage points so near-identical scores tie and fall back to
/// dataset order. An empty title on either side scores 0.
pub fn title_similarity(query: &str, title: &str) -> f64 {
    if query.is_empty() || title.is_empty() {
        return 0.0;
    }
    let ratio = rapidfuzz::fuzz::ratio(query.chars(), title.chars());
    (ratio * 100.0).round_ties_even() / 100.0
}
