//! Batches painted cells from a drag session.
//!
//! Edits are accepted only between `begin` and `end`. Repeated edits to one
//! index keep their first position in the batch and the last value seen.
//! The first edit after a flush opens a fixed window; when it elapses the
//! pending batch is released even though the drag is still going, so fast
//! dragging emits at most one batch per window.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use super::signal::Edit;

#[derive(Debug)]
pub struct EditCoalescer {
    window: Duration,
    dragging: bool,
    pending: Vec<Edit>,
    slots: HashMap<u32, usize>,
    deadline: Option<Instant>,
}

impl EditCoalescer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            dragging: false,
            pending: Vec::new(),
            slots: HashMap::new(),
            deadline: None,
        }
    }

    pub fn begin(&mut self) {
        self.dragging = true;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// When the open window closes, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Buffers an edit. Returns `false` if no drag is active.
    pub fn push(&mut self, edit: Edit, now: Instant) -> bool {
        if !self.dragging {
            return false;
        }
        match self.slots.get(&edit.index) {
            Some(&slot) => self.pending[slot].value = edit.value,
            None => {
                self.slots.insert(edit.index, self.pending.len());
                self.pending.push(edit);
            }
        }
        self.deadline.get_or_insert(now + self.window);
        true
    }

    /// Releases the batch if its window has closed.
    pub fn flush_due(&mut self, now: Instant) -> Option<Vec<Edit>> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.take(),
            _ => None,
        }
    }

    /// Ends the drag and releases whatever is pending.
    pub fn end(&mut self) -> Option<Vec<Edit>> {
        self.dragging = false;
        self.take()
    }

    /// Drops the pending batch without releasing it. Returns how many edits
    /// were dropped.
    pub fn discard(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.slots.clear();
        self.deadline = None;
        dropped
    }

    fn take(&mut self) -> Option<Vec<Edit>> {
        self.deadline = None;
        self.slots.clear();
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}
