use crate::completion::CompletionResult;
use crate::completion::CursorToken;

/// Receives every [`CompletionResult`] a [`Hinter`](crate::completion::Hinter)
/// produces, together with the token it was produced for.
pub trait CompletionListener {
    fn on_completion(&self, result: &CompletionResult, token: &CursorToken);
}

impl<F> CompletionListener for F
where
    F: Fn(&CompletionResult, &CursorToken),
{
    fn on_completion(&self, result: &CompletionResult, token: &CursorToken) {
        self(result, token)
    }
}
