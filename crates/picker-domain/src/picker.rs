//! Stateful picker container.

use crate::item::{Entry, Widget};
use crate::state::{reduce, Outcome, PickerEvent, PickerState};
use picker_core::{LogEntry, Loggable};

/// Receives the selected list whenever the picker changes it.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionObserver {
    fn on_change_selected(&mut self, selected: &[Entry<Widget>]);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&[Entry<Widget>]),
{
    fn on_change_selected(&mut self, selected: &[Entry<Widget>]) {
        self(selected)
    }
}

/// Owns a [`PickerState`] and applies events to it one at a time.
pub struct Picker<O: SelectionObserver> {
    state: PickerState,
    observer: O,
    logs: Vec<LogEntry>,
}

impl<O: SelectionObserver> Picker<O> {
    pub fn new(state: PickerState, observer: O) -> Self {
        Self {
            state,
            observer,
            logs: Vec::new(),
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn into_parts(self) -> (PickerState, O, Vec<LogEntry>) {
        (self.state, self.observer, self.logs)
    }

    /// Apply one event, notify the observer if the selection changed.
    pub fn dispatch(&mut self, event: PickerEvent) -> Outcome {
        let transition = reduce(&self.state, event);
        self.state = transition.state;

        if let Some(message) = describe_outcome(&transition.outcome) {
            self.add_log(message);
        }
        if let Some(selected) = transition.reported {
            self.observer.on_change_selected(&selected);
        }
        transition.outcome
    }
}

impl<O: SelectionObserver> Loggable for Picker<O> {
    fn add_log(&mut self, message: String) {
        self.logs.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}

fn describe_outcome(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Unchanged => None,
        Outcome::Rebuilt { changes } => {
            let mut causes = Vec::new();
            if changes.catalog {
                causes.push("catalog");
            }
            if changes.selection {
                causes.push("selection");
            }
            if changes.search {
                causes.push("search");
            }
            Some(format!("Rebuilt lists after {} change", causes.join(" and ")))
        }
        Outcome::Reordered { list, id, from, to } => Some(format!(
            "Reordered widget {} in {} list from {} to {}",
            id, list, from, to
        )),
        Outcome::Moved { id, from, to } => {
            Some(format!("Moved widget {} from {} to {}", id, from, to))
        }
        Outcome::Paged { list, page } => Some(format!("Showing page {} of {} list", page, list)),
    }
}
