//! Fuzzy filtering and ordering of completion candidates against the text
//! typed so far.

mod distance;
mod rank_options;
mod ranker;

pub use distance::lexical_distance;
pub use distance::normalize;
pub use rank_options::RankOptions;
pub use ranker::proximity;
pub use ranker::rank;
pub use ranker::rank_with_options;

#[cfg(test)]
mod tests;
