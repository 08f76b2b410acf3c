use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::model::selection::Selection;

/// One token per run of text between `?`, `&` and `;` boundaries.
/// A leading `?` is optional so both `location.search` and a bare query work.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[?&;])([^?&;]+)").expect("token pattern is valid"));

/// Tokenize a raw query string into a token → present mapping.
///
/// A `key=value` token is recorded under its full `key=value` text, so it
/// never matches a checkbox whose value is `key`. Only bare tokens select
/// anything; the encoder never emits `=`.
pub fn decode_tokens(query: &str) -> IndexMap<String, bool> {
    let mut tokens = IndexMap::new();
    for caps in TOKEN_RE.captures_iter(query) {
        if let Some(token) = caps.get(1) {
            tokens.insert(token.as_str().to_string(), true);
        }
    }
    tokens
}

/// Decode a query string into a selection. Never fails: anything
/// unrecognisable degrades to fewer (or no) tokens.
pub fn decode(query: &str) -> Selection {
    decode_tokens(query)
        .into_iter()
        .filter(|(_, present)| *present)
        .map(|(token, _)| token)
        .collect()
}
