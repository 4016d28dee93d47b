//! The chain of grammar states enclosing the cursor, as reported by an
//! editor's incremental GraphQL grammar.

mod grammar_kind;
mod grammar_state;
mod parser_state_chain;
mod state_chain_parse_error;

pub use grammar_kind::GrammarKind;
pub use grammar_state::GrammarState;
pub use parser_state_chain::ParserStateChain;
pub use state_chain_parse_error::StateChainParseError;
