/// Fixed inputs for a run.
///
/// `count` is kept separate from `values` so callers can ask for fewer
/// elements than the array holds; it must never exceed `values.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Values to sum
    pub values: [i32; 3],

    /// Number of leading values to include in the total
    pub count: usize,

    /// Total the run must produce
    pub expected_total: i32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            values: [1, 2, 3],
            count: 3,
            expected_total: 6,
        }
    }
}
