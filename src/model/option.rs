use serde::{Deserialize, Serialize};

/// One checkbox-backed filter value, as read off the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Token carried in the checkbox `value` attribute (unique per page)
    pub value: String,
    pub checked: bool,
    /// The widget also carries the always-on class: it starts checked and
    /// is never unchecked when a selection is replayed from the address bar
    #[serde(default)]
    pub always_on: bool,
}

impl FilterOption {
    pub fn new(value: impl Into<String>) -> Self {
        FilterOption {
            value: value.into(),
            checked: false,
            always_on: false,
        }
    }
}
