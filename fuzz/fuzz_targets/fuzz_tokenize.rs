//! Fuzz the fold-and-tokenize pipeline on arbitrary text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift_core::CandidateRef;
use sift_match::{Matcher, TokenMatcher, fold_key, tokenize};

fuzz_target!(|data: &str| {
    let folded = fold_key(data);
    // Folding never leaves ASCII uppercase behind. (Full Unicode has
    // uppercase-only symbols with no decomposition, like the negative
    // squared capitals, so the general property does not hold.)
    assert!(!folded.chars().any(|c| c.is_ascii_uppercase()));

    let tokens = tokenize(data);
    // Splitting only ever drops fragments, never invents them.
    assert!(tokens.len() <= data.split(' ').count());
    for token in &tokens {
        assert!(!token.key().is_empty());
        // Spaces fold to themselves and fence off mark reordering, so a
        // fragment's fold is a contiguous piece of the whole fold.
        assert!(folded.contains(token.key()));
    }

    // The matcher must hold its contract on hostile input: text matches
    // its own tokens, and the empty query matches everything.
    let mut matcher = TokenMatcher::new();
    let this = CandidateRef {
        index: 0,
        text: data,
    };
    assert!(matcher.is_match(&tokens, this).unwrap());
    assert!(matcher.is_match(&tokenize(""), this).unwrap());
});
