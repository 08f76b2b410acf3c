use indexmap::IndexMap;

use crate::model::config::{DisplayConfig, DomConfig, ScorecardConfig};
use crate::model::option::FilterOption;
use crate::model::producer::FilterData;
use crate::nav::{EventSender, NavEvent};
use crate::view::{Display, ViewError, ViewState};

/// A checkbox widget on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub value: String,
    pub label: Option<String>,
    pub classes: Vec<String>,
    pub checked: bool,
    /// Checked state in the markup, restored on a full page load
    pub default_checked: bool,
}

impl Checkbox {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory scorecard page: filter checkboxes, one element per producer,
/// and an address bar with its own history stack.
///
/// User actions (`click`, `navigate`, `back`, `forward`) mutate the page the
/// way a browser would and then notify the attached navigator, if any.
#[derive(Debug)]
pub struct Page {
    dom: DomConfig,
    display: DisplayConfig,
    checkboxes: Vec<Checkbox>,
    /// Element id → inline `display` style (None until first written)
    elements: IndexMap<String, Option<String>>,
    history: Vec<String>,
    cursor: usize,
    events: Option<EventSender>,
}

impl Page {
    /// Render `data` into a fresh page whose address bar holds `search`.
    pub fn render(data: &FilterData, config: &ScorecardConfig, search: &str) -> Self {
        let dom = config.dom.clone();
        let checkboxes = data
            .filter_specs()
            .into_iter()
            .map(|spec| {
                let mut classes = vec![dom.filter_class.clone()];
                if spec.always_on {
                    classes.push(dom.always_on_class.clone());
                }
                Checkbox {
                    value: spec.value,
                    label: spec.label,
                    classes,
                    checked: spec.always_on,
                    default_checked: spec.always_on,
                }
            })
            .collect();
        let elements = data
            .producers
            .iter()
            .map(|p| (dom.element_id(&p.name), None))
            .collect();

        Page {
            dom,
            display: config.display.clone(),
            checkboxes,
            elements,
            history: vec![normalize_search(search)],
            cursor: 0,
            events: None,
        }
    }

    /// Route user actions to a navigator's event queue.
    pub fn attach(&mut self, events: EventSender) {
        self.events = Some(events);
    }

    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }

    /// Current inline `display` of an element, if it exists and was written
    pub fn element_display(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).and_then(|d| d.as_deref())
    }

    /// Whether an element is currently rendered as shown. Elements nobody has
    /// styled yet count as shown.
    pub fn is_shown(&self, element_id: &str) -> bool {
        match self.element_display(element_id) {
            Some(display) => display != self.display.hidden,
            None => self.elements.contains_key(element_id),
        }
    }

    /// Drop an element from the page (markup out of sync with the dataset).
    pub fn remove_element(&mut self, element_id: &str) {
        self.elements.shift_remove(element_id);
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The document finished loading (DOMContentLoaded).
    pub fn loaded(&self) {
        self.notify(NavEvent::Load);
    }

    /// User clicks a checkbox. Returns false if no filter carries `value`.
    pub fn click(&mut self, value: &str) -> bool {
        let filter_class = self.dom.filter_class.clone();
        let Some(checkbox) = self
            .checkboxes
            .iter_mut()
            .find(|c| c.value == value && c.has_class(&filter_class))
        else {
            return false;
        };
        checkbox.checked = !checkbox.checked;
        self.notify(NavEvent::FilterChanged);
        true
    }

    /// User follows a link to `search`: a new history entry and a full load.
    /// Entries ahead of the cursor are discarded.
    pub fn navigate(&mut self, search: &str) {
        self.history.truncate(self.cursor + 1);
        self.history.push(normalize_search(search));
        self.cursor = self.history.len() - 1;
        for checkbox in &mut self.checkboxes {
            checkbox.checked = checkbox.default_checked;
        }
        self.notify(NavEvent::Load);
    }

    /// Browser back button. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.notify(NavEvent::PopState);
        true
    }

    /// Browser forward button. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        self.notify(NavEvent::PopState);
        true
    }

    fn notify(&self, event: NavEvent) {
        if let Some(ref events) = self.events {
            events.send(event);
        }
    }
}

impl ViewState for Page {
    fn filter_options(&self) -> Vec<FilterOption> {
        self.checkboxes
            .iter()
            .filter(|c| c.has_class(&self.dom.filter_class))
            .map(|c| FilterOption {
                value: c.value.clone(),
                checked: c.checked,
                always_on: c.has_class(&self.dom.always_on_class),
            })
            .collect()
    }

    fn set_checked(&mut self, value: &str, checked: bool) {
        if let Some(checkbox) = self.checkboxes.iter_mut().find(|c| c.value == value) {
            checkbox.checked = checked;
        }
    }

    fn set_display(&mut self, element_id: &str, display: Display) -> Result<(), ViewError> {
        let slot = self
            .elements
            .get_mut(element_id)
            .ok_or_else(|| ViewError::MissingElement(element_id.to_string()))?;
        let value = match display {
            Display::Shown => &self.display.shown,
            Display::Hidden => &self.display.hidden,
        };
        *slot = Some(value.clone());
        Ok(())
    }

    fn location_search(&self) -> String {
        self.history[self.cursor].clone()
    }

    fn replace_location_search(&mut self, search: &str) {
        self.history[self.cursor] = normalize_search(search);
    }
}

/// `location.search` never holds a lone `?`
fn normalize_search(search: &str) -> String {
    if search.is_empty() || search == "?" {
        String::new()
    } else if search.starts_with('?') {
        search.to_string()
    } else {
        format!("?{}", search)
    }
}
