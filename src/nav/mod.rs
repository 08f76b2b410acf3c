//! Event loop tying the address bar, the checkboxes and producer visibility
//! together.

use std::sync::mpsc;

use tracing::debug;

use crate::model::config::DomConfig;
use crate::model::producer::ProducerEntry;
use crate::ops::filter_ops::{Visibility, compute_visibility};
use crate::parse::{decode, serialize_query, to_search};
use crate::view::{ViewState, apply_selection, apply_visibility, read_selection};

/// Events the page raises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Initial page load
    Load,
    /// Back/forward navigation landed on another history entry
    PopState,
    /// The user toggled a filter checkbox (the widget already holds the new state)
    FilterChanged,
}

/// Handle for queueing events to a [`Navigator`].
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::Sender<NavEvent>,
}

impl EventSender {
    /// Queue an event. Events sent after the navigator is gone are dropped.
    pub fn send(&self, event: NavEvent) {
        let _ = self.tx.send(event);
    }
}

/// Reacts to page events, one at a time, in arrival order.
pub struct Navigator {
    producers: Vec<ProducerEntry>,
    dom: DomConfig,
    tx: mpsc::Sender<NavEvent>,
    rx: mpsc::Receiver<NavEvent>,
}

impl Navigator {
    pub fn new(producers: Vec<ProducerEntry>, dom: DomConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Navigator {
            producers,
            dom,
            tx,
            rx,
        }
    }

    pub fn producers(&self) -> &[ProducerEntry] {
        &self.producers
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Handle every queued event against `view`.
    /// Returns the visibility left by the last one, if any were queued.
    pub fn drain<V: ViewState + ?Sized>(&self, view: &mut V) -> Option<Visibility> {
        let mut last = None;
        while let Ok(event) = self.rx.try_recv() {
            last = Some(self.handle(view, event));
        }
        last
    }

    /// Run one event to completion and return the visibility it applied.
    pub fn handle<V: ViewState + ?Sized>(&self, view: &mut V, event: NavEvent) -> Visibility {
        debug!(?event, search = %view.location_search(), "handling navigation event");
        match event {
            NavEvent::Load | NavEvent::PopState => self.restore_from_address_bar(view),
            NavEvent::FilterChanged => self.sync_address_bar(view),
        }
        self.refresh(view)
    }

    /// Replay the address bar query onto the checkboxes.
    fn restore_from_address_bar<V: ViewState + ?Sized>(&self, view: &mut V) {
        let selection = decode(&view.location_search());
        apply_selection(view, &selection);
    }

    /// Write the checkbox state into the address bar, replacing the current
    /// history entry.
    fn sync_address_bar<V: ViewState + ?Sized>(&self, view: &mut V) {
        let search = to_search(&serialize_query(&view.filter_options()));
        if search != view.location_search() {
            debug!(%search, "replacing history entry");
            view.replace_location_search(&search);
        }
    }

    /// Recompute visibility from the checkboxes and apply it.
    fn refresh<V: ViewState + ?Sized>(&self, view: &mut V) -> Visibility {
        let selection = read_selection(view);
        let visibility = compute_visibility(&selection, &self.producers);
        apply_visibility(view, &self.dom, &self.producers, &visibility);
        visibility
    }
}
