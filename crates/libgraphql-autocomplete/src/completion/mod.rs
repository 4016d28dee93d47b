//! Packages ranked candidates into a [`CompletionResult`] and runs the whole
//! hint pipeline through [`Hinter`].

mod assembler;
mod completion_listener;
mod completion_result;
mod cursor_token;
mod hinter;

pub use assembler::assemble;
pub use assembler::replacement_range;
pub use completion_listener::CompletionListener;
pub use completion_result::CompletionResult;
pub use cursor_token::CursorToken;
pub use cursor_token::TokenClass;
pub use cursor_token::TokenClassParseError;
pub use hinter::HintRequest;
pub use hinter::Hinter;
