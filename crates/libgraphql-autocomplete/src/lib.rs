//! Schema-aware autocompletion for GraphQL executable documents.
//!
//! An editor's incremental GraphQL grammar hands us the chain of grammar
//! states enclosing the cursor ([`grammar::ParserStateChain`]) along with the
//! token under the cursor ([`completion::CursorToken`]). From those and a
//! [`schema::Schema`] this crate:
//!
//! 1. resolves the type-system context at the cursor
//!    ([`type_info::resolve()`]),
//! 2. generates the candidates that make sense at that grammar position
//!    ([`candidates::generate()`]),
//! 3. fuzzy-ranks them against the text typed so far ([`fuzzy::rank()`]),
//! 4. packages them with the span of text to replace
//!    ([`completion::assemble()`]).
//!
//! [`completion::Hinter`] runs the whole pipeline and notifies registered
//! listeners of each result.

mod ast;
pub mod candidates;
pub mod completion;
pub mod fuzzy;
pub mod grammar;
pub mod loc;
pub mod schema;
pub mod type_info;
pub mod types;

#[cfg(test)]
mod test_utils;
