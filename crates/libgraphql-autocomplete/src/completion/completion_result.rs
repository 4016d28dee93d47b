use crate::candidates::CandidateEntry;

/// Ranked candidates along with the span of the cursor's line that an
/// accepted candidate replaces (`range_start..range_end`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CompletionResult {
    pub candidates: Vec<CandidateEntry>,
    pub line: usize,
    pub range_start: usize,
    pub range_end: usize,
}
