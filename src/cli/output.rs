use serde::Serialize;

use crate::ops::filter_ops::Visibility;
use crate::view::ViewState;
use crate::view::page::Page;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct FilterJson {
    /// Address bar after all actions
    pub search: String,
    /// Values of the checked filters
    pub checked: Vec<String>,
    /// Every filter checkbox in panel order
    pub filters: Vec<CheckboxJson>,
    pub producers: Vec<ProducerJson>,
}

#[derive(Serialize)]
pub struct CheckboxJson {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub checked: bool,
}

#[derive(Serialize)]
pub struct ProducerJson {
    pub name: String,
    pub visible: bool,
}

#[derive(Serialize)]
pub struct QueryJson {
    pub tokens: Vec<String>,
}

pub fn filter_to_json(page: &Page, visibility: &Visibility) -> FilterJson {
    FilterJson {
        search: page.location_search(),
        checked: page
            .checkboxes()
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.value.clone())
            .collect(),
        filters: page
            .checkboxes()
            .iter()
            .map(|c| CheckboxJson {
                value: c.value.clone(),
                label: c.label.clone(),
                checked: c.checked,
            })
            .collect(),
        producers: visibility
            .iter()
            .map(|(name, visible)| ProducerJson {
                name: name.clone(),
                visible: *visible,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Human-readable summary of a filtered page
pub fn format_filter(page: &Page, visibility: &Visibility) -> String {
    let json = filter_to_json(page, visibility);
    let mut lines = Vec::new();
    let search = if json.search.is_empty() {
        "(none)".to_string()
    } else {
        json.search
    };
    lines.push(format!("query:   {}", search));
    let checked = if json.checked.is_empty() {
        "(none)".to_string()
    } else {
        json.checked.join(", ")
    };
    lines.push(format!("checked: {}", checked));
    for producer in &json.producers {
        let mark = if producer.visible { "+" } else { "-" };
        lines.push(format!("  {} {}", mark, producer.name));
    }
    lines.join("\n")
}
