//! Produces the completion candidates that make sense at a grammar position.

mod candidate_entry;
mod candidate_type;
mod generator;
mod known_fragment;

pub use candidate_entry::CandidateEntry;
pub use candidate_type::CandidateType;
pub use generator::generate;
pub use known_fragment::KnownFragment;
pub use known_fragment::KnownFragmentParseError;

#[cfg(test)]
mod tests;
