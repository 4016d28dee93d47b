use crate::candidates::CandidateEntry;
use crate::completion::CompletionResult;
use crate::completion::CursorToken;

/// The span of `token`'s line an accepted candidate replaces.
///
/// An unclassified (or empty) token is an insertion point at its end. A token
/// starting with a word character is replaced whole; otherwise its leading
/// punctuation (e.g. the `$` of a variable or the `@` of a directive) is kept.
pub fn replacement_range(token: &CursorToken) -> (usize, usize) {
    let range_start = match (token.token_class, token.string.chars().next()) {
        (None, _) | (_, None) => token.end,
        (Some(_), Some(first_char)) if first_char.is_ascii_alphanumeric() || first_char == '_' =>
            token.start,
        (Some(_), Some(_)) => token.start + 1,
    };
    (range_start, token.end)
}

pub fn assemble(
    candidates: Vec<CandidateEntry>,
    token: &CursorToken,
    line: usize,
) -> CompletionResult {
    let (range_start, range_end) = replacement_range(token);
    CompletionResult {
        candidates,
        line,
        range_start,
        range_end,
    }
}
