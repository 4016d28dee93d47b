use crate::candidates::CandidateEntry;
use crate::fuzzy::lexical_distance;
use crate::fuzzy::normalize;
use crate::fuzzy::RankOptions;

/// Score how well `candidate` matches `typed`, which must already be
/// normalized. Lower is better.
///
/// A candidate longer than the typed text isn't penalized for the extra
/// length, but gets a 0.5 penalty unless it starts with the typed text.
pub fn proximity(candidate: &str, typed: &str) -> f64 {
    let candidate = normalize(candidate);
    let mut proximity = lexical_distance(typed, candidate.as_str()) as f64;

    let candidate_len = candidate.chars().count();
    let typed_len = typed.chars().count();
    if candidate_len > typed_len {
        proximity -= (candidate_len - typed_len - 1) as f64;
        if !candidate.starts_with(typed) {
            proximity += 0.5;
        }
    }

    proximity
}

/// [`rank_with_options()`] with the default [`RankOptions`].
pub fn rank(candidates: Vec<CandidateEntry>, typed: &str) -> Vec<CandidateEntry> {
    rank_with_options(candidates, typed, &RankOptions::default())
}

/// Filter `candidates` down to those close to `typed` and order them best
/// match first, breaking ties by shorter text and then by input order.
///
/// When `typed` contains no word characters the candidates are returned as
/// given.
pub fn rank_with_options(
    candidates: Vec<CandidateEntry>,
    typed: &str,
    options: &RankOptions,
) -> Vec<CandidateEntry> {
    let typed = normalize(typed);
    if typed.is_empty() {
        return candidates;
    }

    let mut matches = candidates.iter()
        .enumerate()
        .map(|(idx, entry)| (proximity(entry.text(), typed.as_str()), idx))
        .filter(|(proximity, _)| *proximity <= options.max_proximity)
        .collect::<Vec<_>>();

    if matches.is_empty() {
        log::trace!(
            "fuzzy: no candidate within {} of `{typed}` (fall back: {})",
            options.max_proximity,
            options.fall_back_to_unfiltered,
        );
        return if options.fall_back_to_unfiltered {
            candidates
        } else {
            vec![]
        };
    }

    let text_len = |idx: usize| candidates[idx].text().chars().count();
    matches.sort_by(|(proximity1, idx1), (proximity2, idx2)| {
        proximity1.total_cmp(proximity2)
            .then_with(|| text_len(*idx1).cmp(&text_len(*idx2)))
    });

    log::trace!(
        "fuzzy: ranked {} of {} candidates against `{typed}`",
        matches.len(),
        candidates.len(),
    );

    let mut slots = candidates.into_iter().map(Some).collect::<Vec<_>>();
    matches.into_iter()
        .filter_map(|(_, idx)| slots[idx].take())
        .collect()
}
