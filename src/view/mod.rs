//! Bridge between filter state and the page that renders it.
//!
//! Everything the core needs from the page goes through [`ViewState`], so the
//! codec and matcher stay pure and the reactive loop can run against the
//! in-memory [`page::Page`].

pub mod page;

use tracing::debug;

use crate::model::config::DomConfig;
use crate::model::option::FilterOption;
use crate::model::producer::ProducerEntry;
use crate::model::selection::Selection;
use crate::ops::filter_ops::Visibility;

/// Whether a producer element is shown or hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Shown,
    Hidden,
}

impl From<bool> for Display {
    fn from(visible: bool) -> Self {
        if visible { Display::Shown } else { Display::Hidden }
    }
}

/// Error type for view updates
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("no element with id {0}")]
    MissingElement(String),
}

/// Page state the filter core reads and writes.
pub trait ViewState {
    /// Filter checkboxes in declaration order
    fn filter_options(&self) -> Vec<FilterOption>;

    /// Set the checked state of the checkbox carrying `value`.
    /// Unknown values are ignored.
    fn set_checked(&mut self, value: &str, checked: bool);

    /// Set the display state of an element by id.
    fn set_display(&mut self, element_id: &str, display: Display) -> Result<(), ViewError>;

    /// The address bar query string, including its leading `?` (empty if none)
    fn location_search(&self) -> String;

    /// Rewrite the address bar query string in place: the current history
    /// entry is replaced, nothing is pushed and nothing reloads.
    fn replace_location_search(&mut self, search: &str);
}

/// Values of the currently checked options, in declaration order.
pub fn read_selection<V: ViewState + ?Sized>(view: &V) -> Selection {
    view.filter_options()
        .into_iter()
        .filter(|opt| opt.checked)
        .map(|opt| opt.value)
        .collect()
}

/// Make the checkboxes reflect `selection`.
///
/// Always-on options are checked first and stay checked no matter what the
/// selection says; every other option is checked iff its value is selected.
pub fn apply_selection<V: ViewState + ?Sized>(view: &mut V, selection: &Selection) {
    let options = view.filter_options();
    for opt in options.iter().filter(|opt| opt.always_on) {
        view.set_checked(&opt.value, true);
    }
    for opt in options.iter().filter(|opt| !opt.always_on) {
        view.set_checked(&opt.value, selection.contains(&opt.value));
    }
}

/// Show or hide each producer's element. Producers without an element are
/// skipped.
pub fn apply_visibility<V: ViewState + ?Sized>(
    view: &mut V,
    dom: &DomConfig,
    producers: &[ProducerEntry],
    visibility: &Visibility,
) {
    for producer in producers {
        let visible = visibility.get(&producer.name).copied().unwrap_or(true);
        let id = dom.element_id(&producer.name);
        if let Err(e) = view.set_display(&id, Display::from(visible)) {
            debug!(error = %e, "skipping producer without an element");
        }
    }
}
