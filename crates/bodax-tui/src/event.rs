use std::time::Duration;

use anyhow::Result;
use bodax_core::Snapshot;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while a slide or a reveal is in progress
    frame_rate: Duration,
}

/// Result of an async snapshot reload
pub enum ReloadResult {
    Success(Snapshot),
    Failure { error: String },
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 0)
    }

    /// Handler that polls at `fps` while animating. 0 disables the fast path.
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        let frame_rate = if fps == 0 {
            tick_rate
        } else {
            Duration::from_millis((1000 / u64::from(fps)).max(1)).min(tick_rate)
        };
        Self {
            tick_rate,
            frame_rate,
        }
    }

    /// Poll for the next event. `animating` shortens the wait so eased
    /// slides and typing stay smooth.
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        let timeout = if animating {
            self.frame_rate
        } else {
            self.tick_rate
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_never_slower_than_tick() {
        let handler = EventHandler::with_animation_fps(100, 60);
        assert_eq!(handler.frame_rate, Duration::from_millis(16));

        let handler = EventHandler::with_animation_fps(10, 30);
        assert_eq!(handler.frame_rate, Duration::from_millis(10));

        let handler = EventHandler::new(250);
        assert_eq!(handler.frame_rate, handler.tick_rate);
    }
}
