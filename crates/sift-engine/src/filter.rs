#![forbid(unsafe_code)]

//! The refilter pass: query in, ordered original indices out.
//!
//! The filtered list is recomputed from scratch on every query change; it
//! is a pure function of the candidate set, the query, the matcher, and
//! the ranking flag, never patched incrementally.
//!
//! # Invariants
//!
//! | Invariant | Meaning |
//! |-----------|---------|
//! | membership | every returned index passed the matcher for the query |
//! | identity | zero tokens return the full set in original order |
//! | lazy rank | distance is computed only for candidates that matched |
//! | stability | equal distances keep their match-scan order |

use sift_core::Candidates;
use sift_match::{DistanceTable, MatchError, Matcher, fold_key, tokenize};

/// Recomputes the filtered list for `query`.
///
/// With `sort_by_distance` set and a non-empty token list, survivors are
/// ordered ascending by edit distance between the folded query and each
/// candidate's folded primary text; ties keep scan order. Otherwise
/// survivors stay in original candidate order. An empty token list (empty
/// or space-only query) matches everything and skips ranking entirely.
pub fn refilter<M: Matcher>(
    candidates: &Candidates,
    query: &str,
    matcher: &mut M,
    sort_by_distance: bool,
    table: &mut DistanceTable,
) -> Result<Vec<usize>, MatchError> {
    let tokens = tokenize(query);
    let ranked = sort_by_distance && !tokens.is_empty();
    let folded_query = ranked.then(|| fold_key(query));

    let mut matched = Vec::new();
    let mut scored: Vec<(usize, usize)> = Vec::new();
    for candidate in candidates.iter() {
        if matcher.is_match(&tokens, candidate)? {
            match &folded_query {
                Some(folded) => {
                    let score = table.distance(folded, &fold_key(candidate.text));
                    scored.push((candidate.index, score));
                }
                None => matched.push(candidate.index),
            }
        }
    }
    if folded_query.is_some() {
        // Vec::sort_by_key is stable, which keeps equal scores in scan
        // order; that ordering is observable and tested.
        scored.sort_by_key(|&(_, score)| score);
        matched = scored.into_iter().map(|(index, _)| index).collect();
    }

    tracing::debug!(
        total = candidates.len(),
        matched = matched.len(),
        ranked,
        "refiltered"
    );
    Ok(matched)
}
