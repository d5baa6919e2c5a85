//! Program listener used by the CLI to decide when to save.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use coursekit_core::ProgramListener;
use log::debug;

/// Logs program changes and remembers whether any happened.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    mutated: Arc<AtomicBool>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the program changed since the tracker was subscribed.
    pub fn is_mutated(&self) -> bool {
        self.mutated.load(Ordering::Relaxed)
    }
}

impl ProgramListener for ChangeTracker {
    fn on_selection_changed(&mut self, course_id: u64, selected: bool) {
        if selected {
            debug!("Course {course_id} selected");
        } else {
            debug!("Course {course_id} deselected");
        }
    }

    fn on_program_mutated(&mut self) {
        self.mutated.store(true, Ordering::Relaxed);
    }
}
