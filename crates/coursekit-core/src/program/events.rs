//! Change notifications emitted by the program builder.

use std::sync::{Arc, Mutex};

/// A change to the program, delivered to listeners after it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramEvent {
    /// A course entered (`selected == true`) or left the program
    SelectionChanged { course_id: u64, selected: bool },
    /// The membership or order of the program changed; views should
    /// re-render and recompute the summary
    ProgramMutated,
}

/// Subscriber interface for program changes.
///
/// Both hooks default to no-ops so listeners only implement what they need.
pub trait ProgramListener {
    /// Called when a course is selected or deselected.
    fn on_selection_changed(&mut self, _course_id: u64, _selected: bool) {}

    /// Called after any structural change to the program.
    fn on_program_mutated(&mut self) {}

    /// Dispatches an event to the matching hook.
    fn on_event(&mut self, event: &ProgramEvent) {
        match *event {
            ProgramEvent::SelectionChanged {
                course_id,
                selected,
            } => self.on_selection_changed(course_id, selected),
            ProgramEvent::ProgramMutated => self.on_program_mutated(),
        }
    }
}

/// Listener that records every event into a shared buffer.
///
/// Clones share the same buffer, so one clone can be subscribed while the
/// other is kept to inspect the recorded events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ProgramEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    pub fn events(&self) -> Vec<ProgramEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<ProgramEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl ProgramListener for EventLog {
    fn on_event(&mut self, event: &ProgramEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(*event);
        }
    }
}
