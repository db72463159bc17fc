//! Time source and the single-slot task handle used by timed components.
//!
//! Components never own OS timers. They record a deadline in a [`TaskSlot`]
//! and the event loop polls them with the current [`Clock`] reading, which is
//! what makes a sequence replayable under a simulated clock in tests.

use std::time::Instant;

/// Milliseconds since the clock's origin
pub type Millis = u64;

pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Simulated clock for tests. Clones share the same reading.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<Millis>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start_ms: Millis) -> Self {
        Self {
            now: std::rc::Rc::new(std::cell::Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: Millis) -> Millis {
        let next = self.now.get().saturating_add(ms);
        self.now.set(next);
        next
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

/// Identity of a scheduled task, unique per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub due_ms: Millis,
}

/// Holds at most one pending task. Scheduling replaces (and thereby
/// cancels) whatever was pending.
#[derive(Debug, Default)]
pub struct TaskSlot {
    pending: Option<ScheduledTask>,
    next_id: u64,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: Millis) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        if let Some(previous) = self.pending.replace(ScheduledTask { id, due_ms }) {
            tracing::trace!(task = ?previous.id, "Replaced pending task");
        }
        id
    }

    pub fn cancel(&mut self) -> Option<TaskId> {
        self.pending.take().map(|task| task.id)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_ms(&self) -> Option<Millis> {
        self.pending.map(|task| task.due_ms)
    }

    /// Remove and return the pending task if it is due at `now`
    pub fn take_due(&mut self, now: Millis) -> Option<ScheduledTask> {
        match self.pending {
            Some(task) if task.due_ms <= now => self.pending.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(5);
        let other = clock.clone();
        clock.advance(10);
        assert_eq!(other.now_ms(), 15);
        other.now.set(100);
        assert_eq!(clock.now_ms(), 100);
    }

    #[test]
    fn test_slot_holds_one_task() {
        let mut slot = TaskSlot::new();
        let first = slot.schedule(50);
        let second = slot.schedule(80);
        assert_ne!(first, second);
        assert_eq!(slot.due_ms(), Some(80));

        assert!(slot.take_due(79).is_none());
        let fired = slot.take_due(80).unwrap();
        assert_eq!(fired.id, second);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut slot = TaskSlot::new();
        let id = slot.schedule(10);
        assert_eq!(slot.cancel(), Some(id));
        assert_eq!(slot.cancel(), None);
        assert!(slot.take_due(1_000).is_none());
    }
}
