use crate::grammar::GrammarKind;
use crate::grammar::GrammarState;
use crate::grammar::StateChainParseError;
use smallvec::SmallVec;

const SEGMENT_SEPARATOR: &str = " > ";

/// The grammar states enclosing the cursor, ordered root (normally
/// [`GrammarKind::Document`]) to leaf.
///
/// Editors typically expose the chain as a leaf state with a back-link to its
/// enclosing state. [`ParserStateChain::collect_from_leaf()`] flattens such a
/// structure with one linear walk so nothing downstream needs to follow
/// links. The enclosing state of the entry at index `i` is the entry at
/// `i - 1`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParserStateChain {
    states: SmallVec<[GrammarState; 8]>,
}
impl ParserStateChain {
    /// Walk from `leaf` to the root via `prev_state`, converting each node
    /// with `to_state`, and store the result root-first.
    pub fn collect_from_leaf<'a, S: 'a>(
        leaf: &'a S,
        prev_state: impl Fn(&'a S) -> Option<&'a S>,
        to_state: impl Fn(&'a S) -> GrammarState,
    ) -> Self {
        let mut states = SmallVec::<[GrammarState; 8]>::new();
        let mut current = Some(leaf);
        while let Some(node) = current {
            states.push(to_state(node));
            current = prev_state(node);
        }
        states.reverse();
        Self { states }
    }

    /// The state enclosing the one at `index`.
    pub fn enclosing(&self, index: usize) -> Option<&GrammarState> {
        index.checked_sub(1).and_then(|idx| self.states.get(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GrammarState> {
        self.states.iter()
    }

    /// The state the cursor is in.
    pub fn leaf(&self) -> Option<&GrammarState> {
        self.states.last()
    }

    /// The kind of the state immediately enclosing the leaf.
    pub fn leaf_ancestor_kind(&self) -> Option<GrammarKind> {
        self.enclosing(self.states.len().checked_sub(1)?)
            .map(|state| state.kind)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new innermost state.
    pub fn push(&mut self, state: GrammarState) {
        self.states.push(state);
    }

    pub fn states(&self) -> &[GrammarState] {
        self.states.as_slice()
    }

    pub fn with(mut self, state: GrammarState) -> Self {
        self.push(state);
        self
    }
}
impl std::fmt::Display for ParserStateChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, state) in self.states.iter().enumerate() {
            if idx > 0 {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write!(f, "{state}")?;
        }
        Ok(())
    }
}
impl std::iter::FromIterator<GrammarState> for ParserStateChain {
    fn from_iter<I: IntoIterator<Item = GrammarState>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
impl std::str::FromStr for ParserStateChain {
    type Err = StateChainParseError;

    /// Parse `Document > Query > SelectionSet > Field:hero`. Whitespace
    /// around the `>` separators is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(StateChainParseError::EmptyChain);
        }
        s.split('>')
            .enumerate()
            .map(|(index, segment)| {
                if segment.trim().is_empty() {
                    return Err(StateChainParseError::EmptySegment { index });
                }
                segment.parse::<GrammarState>()
            })
            .collect()
    }
}
impl<'a> IntoIterator for &'a ParserStateChain {
    type Item = &'a GrammarState;
    type IntoIter = std::slice::Iter<'a, GrammarState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
