use crate::model::option::FilterOption;
use crate::model::selection::Selection;

/// Delimiter between tokens in the canonical query string
pub const DELIMITER: &str = ";";

/// Encode a selection as a canonical query string.
///
/// Tokens are emitted in the options' declaration order so the same
/// selection always produces the same string. Tokens with no matching
/// option are dropped.
pub fn encode(selection: &Selection, options: &[FilterOption]) -> String {
    options
        .iter()
        .filter(|opt| selection.contains(&opt.value))
        .map(|opt| opt.value.as_str())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Encode whatever is currently checked.
pub fn serialize_query(options: &[FilterOption]) -> String {
    options
        .iter()
        .filter(|opt| opt.checked)
        .map(|opt| opt.value.as_str())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// The address-bar form of a query: `?` + query, or nothing at all.
pub fn to_search(query: &str) -> String {
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}
