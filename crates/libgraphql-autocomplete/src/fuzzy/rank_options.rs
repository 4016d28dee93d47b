/// Tuning for [`rank_with_options()`](crate::fuzzy::rank_with_options).
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RankOptions {
    /// Candidates scoring above this proximity are filtered out.
    pub max_proximity: f64,

    /// When filtering removes every candidate, return the unfiltered
    /// candidates (in their original order) instead of nothing.
    pub fall_back_to_unfiltered: bool,
}
impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_proximity: 2.0,
            fall_back_to_unfiltered: true,
        }
    }
}
