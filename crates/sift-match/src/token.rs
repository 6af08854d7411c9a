#![forbid(unsafe_code)]

//! Query tokenization and comparison-key folding.
//!
//! Matching is case- and diacritic-insensitive on both sides: query
//! fragments and candidate fields go through the same [`fold_key`] before
//! any substring test. Splitting is on literal space characters only, so
//! `"web  browser"` produces the same two tokens as `"web browser"` (the
//! doubled space yields no empty fragment).
//!
//! # Example
//!
//! ```
//! use sift_match::token::{fold_key, tokenize};
//!
//! assert_eq!(fold_key("Café"), "cafe");
//!
//! let tokens = tokenize("Web  Browser");
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].key(), "web");
//! assert_eq!(tokens[1].key(), "browser");
//!
//! assert!(tokenize("   ").is_empty());
//! ```

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Token list for one query. Inline capacity covers typical queries of a
/// few fragments without heap traffic.
pub type TokenList = SmallVec<[Token; 4]>;

/// One normalized query fragment.
///
/// Construction folds the raw fragment, so two tokens compare equal
/// exactly when their folded keys do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    key: String,
}

impl Token {
    /// Folds `raw` into a token.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            key: fold_key(raw),
        }
    }

    /// The folded comparison key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Folds text into its comparison key: compatibility decomposition,
/// combining marks stripped, then lowercased.
///
/// Both queries and candidate fields are folded with this before
/// matching, so `"cafe"` as a query hits `"Café"` as a candidate and
/// vice versa.
#[must_use]
pub fn fold_key(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits a query into folded tokens.
///
/// Splits on literal `' '` only. Empty fragments are dropped, as are
/// fragments whose folded key is empty (a lone combining mark carries no
/// match information). An empty or space-only query yields no tokens,
/// which matchers read as "match everything".
#[must_use]
pub fn tokenize(query: &str) -> TokenList {
    let tokens: TokenList = query
        .split(' ')
        .filter(|fragment| !fragment.is_empty())
        .map(Token::new)
        .filter(|token| !token.key().is_empty())
        .collect();
    tracing::trace!(count = tokens.len(), "tokenized query");
    tokens
}
