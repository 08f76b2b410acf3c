use indexmap::IndexMap;
use tracing::trace;

use crate::model::producer::ProducerEntry;
use crate::model::selection::Selection;

/// Producer name → shown, in producer order
pub type Visibility = IndexMap<String, bool>;

/// Whether one producer survives every active filter (filters are ANDed).
pub fn is_visible(selection: &Selection, producer: &ProducerEntry) -> bool {
    selection.iter().all(|token| producer.has_tag(token))
}

/// Compute visibility for every producer. An empty selection shows everything.
pub fn compute_visibility(selection: &Selection, producers: &[ProducerEntry]) -> Visibility {
    producers
        .iter()
        .map(|producer| {
            let visible = is_visible(selection, producer);
            trace!(producer = %producer.name, visible, "computed visibility");
            (producer.name.clone(), visible)
        })
        .collect()
}

/// Names of the producers that are shown
pub fn visible_names(visibility: &Visibility) -> Vec<&str> {
    visibility
        .iter()
        .filter(|(_, shown)| **shown)
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Names of the producers that are hidden
pub fn hidden_names(visibility: &Visibility) -> Vec<&str> {
    visibility
        .iter()
        .filter(|(_, shown)| !**shown)
        .map(|(name, _)| name.as_str())
        .collect()
}
