use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One filterable item in the rendered scorecard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerEntry {
    pub name: String,
    /// Tags in dataset order
    #[serde(default)]
    pub tags: IndexSet<String>,
}

impl ProducerEntry {
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProducerEntry {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// A filter checkbox declared by the dataset, in panel order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub always_on: bool,
}

/// The dataset a scorecard page is rendered from (`filters.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterData {
    /// Explicit filter panel. Empty means "one checkbox per tag".
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    #[serde(default)]
    pub producers: Vec<ProducerEntry>,
}

impl FilterData {
    /// The filter panel in declaration order. Without an explicit panel,
    /// every tag becomes a plain checkbox in first-seen order.
    pub fn filter_specs(&self) -> Vec<FilterSpec> {
        if !self.filters.is_empty() {
            return self.filters.clone();
        }
        let mut seen: IndexSet<&str> = IndexSet::new();
        for producer in &self.producers {
            for tag in &producer.tags {
                seen.insert(tag);
            }
        }
        seen.into_iter()
            .map(|value| FilterSpec {
                value: value.to_string(),
                label: None,
                always_on: false,
            })
            .collect()
    }
}
