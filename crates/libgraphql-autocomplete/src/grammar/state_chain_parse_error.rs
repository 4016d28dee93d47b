use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StateChainParseError {
    #[error("A grammar state chain must contain at least one state")]
    EmptyChain,

    #[error("Grammar state #{index} in the chain is empty")]
    EmptySegment {
        index: usize,
    },

    #[error("The step in grammar state `{segment}` is not a non-negative integer")]
    InvalidStep {
        segment: String,
    },

    #[error("`{kind_name}` is not a known grammar kind")]
    UnknownGrammarKind {
        kind_name: String,
    },
}
