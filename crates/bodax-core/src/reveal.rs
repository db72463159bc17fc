//! Progressive text reveal (typing effect).
//!
//! The engine is an explicit state machine:
//!
//! ```text
//! Idle ──gate opens──▶ Waiting ──initial delay──▶ Revealing(n) ──last char──▶ Complete
//!   └────────────────────────── dispose ───────────────────────────▶ Disposed
//! ```
//!
//! There is exactly one [`TaskSlot`] per engine, so at most one pending
//! deadline exists at any time. The host loop calls [`RevealEngine::poll`]
//! with the current clock reading; every character is emitted at the time it
//! was due, not the time it was polled, so the output for a given clock
//! reading is the same however often the loop polls.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{Millis, TaskSlot};
use crate::geometry::ViewportSize;
use crate::signal::Subscription;
use crate::viewport::{Visibility, VisibilityHost};

/// Cursor blink half-period once typing has finished
pub const CURSOR_BLINK_MS: Millis = 530;

/// Timing and gating for one reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOptions {
    pub per_char_delay_ms: u64,
    pub initial_delay_ms: u64,
    /// Wait until the host element has been visible at least once
    #[serde(default)]
    pub use_viewport: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            per_char_delay_ms: 50,
            initial_delay_ms: 500,
            use_viewport: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Waiting for the visibility gate (or for `start`)
    Idle,
    /// Gate open, initial delay running
    Waiting,
    /// `n` characters revealed
    Revealing(usize),
    Complete,
    /// Stopped; the `n` characters revealed at that point stay revealed
    Disposed(usize),
}

/// Cursor drawn after the revealed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Solid while characters are still arriving
    Typing,
    /// Blinking after completion; `on` is the current blink phase
    Blinking { on: bool },
    Hidden,
}

/// Pending visibility observation. Dropping it disconnects the observer.
struct VisibilityGate {
    entered_at: Rc<Cell<Option<Millis>>>,
    _subscription: Subscription,
}

pub struct RevealEngine {
    text: String,
    /// Byte offset just past each character
    char_ends: Vec<usize>,
    options: RevealOptions,
    phase: RevealPhase,
    task: TaskSlot,
    gate: Option<VisibilityGate>,
    disposed: Rc<Cell<bool>>,
    completed_at: Option<Millis>,
}

impl std::fmt::Debug for RevealEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealEngine")
            .field("text", &self.text)
            .field("phase", &self.phase)
            .field("options", &self.options)
            .finish()
    }
}

impl RevealEngine {
    pub fn new(text: impl Into<String>, options: RevealOptions) -> Self {
        let text = text.into();
        let char_ends = text
            .char_indices()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .collect();
        Self {
            text,
            char_ends,
            options,
            phase: RevealPhase::Idle,
            task: TaskSlot::new(),
            gate: None,
            disposed: Rc::new(Cell::new(false)),
            completed_at: None,
        }
    }

    /// Arm the engine. Ungated engines start their initial delay at `now`.
    /// Gated engines check `host` immediately and otherwise observe it until
    /// the first transition into the viewport. A gated engine without a host
    /// has nothing to wait for and starts at `now`.
    pub fn start(&mut self, now: Millis, host: Option<&dyn VisibilityHost>, viewport: ViewportSize) {
        if self.phase != RevealPhase::Idle || self.gate.is_some() {
            return;
        }

        let host = match host {
            Some(host) if self.options.use_viewport => host,
            _ => {
                self.open_gate(now);
                return;
            }
        };

        if host.is_visible_in(viewport) {
            trace!(text = %self.text, "Reveal host already visible");
            self.open_gate(now);
            return;
        }

        let entered_at = Rc::new(Cell::new(None));
        let subscription = {
            let entered_at = Rc::clone(&entered_at);
            let disposed = Rc::clone(&self.disposed);
            host.observe(Box::new(move |change: &Visibility| {
                if disposed.get() {
                    return;
                }
                if change.visible && entered_at.get().is_none() {
                    entered_at.set(Some(change.at_ms));
                }
            }))
        };
        debug!(text = %self.text, "Reveal waiting for visibility");
        self.gate = Some(VisibilityGate {
            entered_at,
            _subscription: subscription,
        });
    }

    /// Replace the text or timing. The running sequence is cancelled and a
    /// fresh one starts; identical text and options leave it untouched.
    pub fn restart(
        &mut self,
        text: &str,
        options: RevealOptions,
        now: Millis,
        host: Option<&dyn VisibilityHost>,
        viewport: ViewportSize,
    ) {
        if self.text == text && self.options == options && !self.is_disposed() {
            return;
        }
        self.dispose();
        *self = RevealEngine::new(text, options);
        self.start(now, host, viewport);
    }

    /// Advance to `now`. Returns true when the revealed text or phase
    /// changed.
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.disposed.get() {
            return false;
        }

        let mut changed = false;

        if self.phase == RevealPhase::Idle {
            let entered = self.gate.as_ref().and_then(|gate| gate.entered_at.get());
            if let Some(at) = entered {
                // Fire once: disconnect before anything else can arrive.
                self.gate = None;
                self.open_gate(at);
                changed = true;
            }
        }

        while let Some(task) = self.task.take_due(now) {
            changed = true;
            match self.phase {
                RevealPhase::Waiting => {
                    self.phase = RevealPhase::Revealing(0);
                    self.after_emit(0, task.due_ms);
                }
                RevealPhase::Revealing(n) => {
                    let n = n + 1;
                    self.phase = RevealPhase::Revealing(n);
                    self.after_emit(n, task.due_ms);
                }
                RevealPhase::Idle | RevealPhase::Complete | RevealPhase::Disposed(_) => break,
            }
        }

        changed
    }

    fn open_gate(&mut self, at: Millis) {
        self.phase = RevealPhase::Waiting;
        self.task
            .schedule(at.saturating_add(self.options.initial_delay_ms));
    }

    fn after_emit(&mut self, revealed: usize, at: Millis) {
        if revealed >= self.char_ends.len() {
            self.phase = RevealPhase::Complete;
            self.completed_at = Some(at);
            self.task.cancel();
            trace!(text = %self.text, at, "Reveal complete");
        } else {
            self.task
                .schedule(at.saturating_add(self.options.per_char_delay_ms));
        }
    }

    /// Cancel any pending deadline and disconnect observers. Idempotent.
    pub fn dispose(&mut self) {
        self.disposed.set(true);
        self.task.cancel();
        self.gate = None;
        if !self.is_disposed() {
            self.phase = RevealPhase::Disposed(self.revealed_count());
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn revealed_count(&self) -> usize {
        match self.phase {
            RevealPhase::Revealing(n) | RevealPhase::Disposed(n) => n,
            RevealPhase::Complete => self.char_ends.len(),
            RevealPhase::Idle | RevealPhase::Waiting => 0,
        }
    }

    pub fn revealed(&self) -> &str {
        match self.revealed_count() {
            0 => "",
            n => &self.text[..self.char_ends[n - 1]],
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealing(_) | RevealPhase::Complete)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self.phase, RevealPhase::Disposed(_))
    }

    /// Whether the loop should poll at animation rate
    pub fn needs_update(&self) -> bool {
        self.task.is_pending()
            || self
                .gate
                .as_ref()
                .is_some_and(|gate| gate.entered_at.get().is_some())
    }

    /// Next deadline, if one is pending
    pub fn next_due(&self) -> Option<Millis> {
        self.task.due_ms()
    }

    pub fn cursor(&self, now: Millis) -> CursorState {
        match (self.phase, self.completed_at) {
            (RevealPhase::Complete, Some(done)) => {
                let on = (now.saturating_sub(done) / CURSOR_BLINK_MS) % 2 == 0;
                CursorState::Blinking { on }
            }
            (RevealPhase::Waiting | RevealPhase::Revealing(_), _) => CursorState::Typing,
            _ => CursorState::Hidden,
        }
    }
}

impl Drop for RevealEngine {
    fn drop(&mut self) {
        self.disposed.set(true);
    }
}
