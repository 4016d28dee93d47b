use crate::candidates;
use crate::candidates::KnownFragment;
use crate::completion::assemble;
use crate::completion::CompletionListener;
use crate::completion::CompletionResult;
use crate::completion::CursorToken;
use crate::completion::TokenClass;
use crate::fuzzy;
use crate::fuzzy::RankOptions;
use crate::grammar::ParserStateChain;
use crate::schema::Schema;
use crate::type_info;

/// Everything the host's editor knows about the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct HintRequest {
    pub chain: ParserStateChain,
    pub token: CursorToken,
    pub line: usize,

    /// Fragments offered at fragment spreads.
    pub known_fragments: Vec<KnownFragment>,
}
impl HintRequest {
    pub fn new(chain: ParserStateChain, token: CursorToken) -> Self {
        Self {
            chain,
            token,
            line: 0,
            known_fragments: vec![],
        }
    }

    pub fn with_known_fragments(mut self, known_fragments: Vec<KnownFragment>) -> Self {
        self.known_fragments = known_fragments;
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// Runs resolution, candidate generation, ranking and assembly for a
/// [`HintRequest`] and notifies registered [`CompletionListener`]s of each
/// result.
///
/// A `Hinter` keeps no state between requests.
#[derive(Default)]
pub struct Hinter<'l> {
    listeners: Vec<Box<dyn CompletionListener + 'l>>,
    options: RankOptions,
}
impl<'l> Hinter<'l> {
    pub fn new(options: RankOptions) -> Self {
        Self {
            listeners: vec![],
            options,
        }
    }

    pub fn add_listener(&mut self, listener: impl CompletionListener + 'l) {
        self.listeners.push(Box::new(listener));
    }

    /// Compute the completions for `request`.
    ///
    /// Returns `None`, without notifying listeners, when there is no schema,
    /// when the cursor is in a comment, or when nothing can be suggested at
    /// the cursor's grammar position. Otherwise every listener is notified
    /// before the result is returned, even if ranking left no candidates.
    pub fn hint(
        &self,
        schema: Option<&Schema>,
        request: &HintRequest,
    ) -> Option<CompletionResult> {
        let Some(schema) = schema else {
            log::warn!("No schema available; skipping hint for `{}`", request.chain);
            return None;
        };

        if request.token.token_class == Some(TokenClass::Comment) {
            return None;
        }

        let leaf = request.chain.leaf()?;
        let ctx = type_info::resolve(schema, &request.chain);
        let Some(candidates) = candidates::generate(
            schema,
            &ctx,
            leaf,
            request.chain.leaf_ancestor_kind(),
            &request.known_fragments,
        ) else {
            log::debug!("Nothing to suggest at `{}`", request.chain);
            return None;
        };

        let ranked = fuzzy::rank_with_options(
            candidates,
            request.token.string.as_str(),
            &self.options,
        );
        let result = assemble(ranked, &request.token, request.line);
        log::debug!(
            "Hinting {} candidate(s) at `{}` for `{}`",
            result.candidates.len(),
            request.chain,
            request.token.string,
        );

        for listener in self.listeners.iter() {
            listener.on_completion(&result, &request.token);
        }

        Some(result)
    }

    pub fn options(&self) -> &RankOptions {
        &self.options
    }
}
