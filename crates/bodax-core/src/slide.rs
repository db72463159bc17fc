//! Eased slide between two strip offsets.
//!
//! Navigation marks a slide as pending; the next [`SlideAnimator::update`]
//! starts it from whatever offset is currently on screen, so several presses
//! inside one frame collapse into a single slide. A change of layout
//! generation (a resize) drops any slide in flight and snaps to the target.

use crate::clock::Millis;
use crate::config::EasingType;

/// Offsets closer than this are treated as equal
const OFFSET_EPSILON: f64 = 0.5;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Map progress in [0, 1] to eased progress in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Progress of an animation that started at `start` and lasts `duration`
#[inline]
pub fn progress(start: Millis, now: Millis, duration: Millis) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    (now.saturating_sub(start) as f64 / duration as f64).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy)]
struct ActiveSlide {
    start_ms: Millis,
    from: f64,
    to: f64,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct SlideAnimator {
    duration_ms: Millis,
    easing: EasingType,
    animation: Option<ActiveSlide>,
    current: f64,
    pending: bool,
}

impl SlideAnimator {
    pub fn new(duration_ms: Millis, easing: EasingType) -> Self {
        Self {
            duration_ms,
            easing,
            animation: None,
            current: 0.0,
            pending: false,
        }
    }

    pub fn is_smooth(&self) -> bool {
        self.duration_ms > 0 && self.easing != EasingType::None
    }

    /// Offset currently on screen
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn needs_update(&self) -> bool {
        self.pending || self.animation.is_some()
    }

    /// Request a slide to the next target seen by `update`
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Jump to `offset` with no animation
    pub fn snap(&mut self, offset: f64) {
        self.animation = None;
        self.pending = false;
        self.current = offset;
    }

    /// Advance to `now` toward `target`, computed under layout `generation`
    pub fn update(&mut self, now: Millis, target: f64, generation: u64) -> f64 {
        if let Some(anim) = self.animation {
            if anim.generation != generation {
                self.snap(target);
                return self.current;
            }
        }

        if !self.is_smooth() {
            self.snap(target);
            return self.current;
        }

        if self.pending {
            self.pending = false;
            if (target - self.current).abs() > OFFSET_EPSILON {
                self.animation = Some(ActiveSlide {
                    start_ms: now,
                    from: self.current,
                    to: target,
                    generation,
                });
            }
        }

        match self.animation {
            Some(anim) if (anim.to - target).abs() > OFFSET_EPSILON => {
                // target moved under us (items replaced); restart from here
                self.animation = Some(ActiveSlide {
                    start_ms: now,
                    from: self.current,
                    to: target,
                    generation,
                });
            }
            Some(anim) => {
                let t = progress(anim.start_ms, now, self.duration_ms);
                if t >= 1.0 {
                    self.snap(anim.to);
                } else {
                    self.current = lerp(anim.from, anim.to, self.easing.apply(t));
                }
            }
            None => self.current = target,
        }

        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [
            EasingType::None,
            EasingType::Linear,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [EasingType::Linear, EasingType::Cubic, EasingType::Quintic, EasingType::EaseOut] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(100, 100, 0), 1.0);
        assert_eq!(progress(100, 150, 100), 0.5);
        assert_eq!(progress(100, 50, 100), 0.0);
        assert_eq!(progress(100, 500, 100), 1.0);
    }

    #[test]
    fn test_slide_runs_to_target() {
        let mut slide = SlideAnimator::new(100, EasingType::Linear);
        slide.request();
        assert_eq!(slide.update(0, 680.0, 0), 0.0);
        assert!(slide.is_animating());
        assert_eq!(slide.update(50, 680.0, 0), 340.0);
        assert_eq!(slide.update(100, 680.0, 0), 680.0);
        assert!(!slide.needs_update());
    }

    #[test]
    fn test_generation_change_snaps() {
        let mut slide = SlideAnimator::new(100, EasingType::Cubic);
        slide.request();
        slide.update(0, 680.0, 0);
        slide.update(30, 680.0, 0);
        assert!(slide.current() > 0.0 && slide.current() < 680.0);

        assert_eq!(slide.update(31, 520.0, 1), 520.0);
        assert!(!slide.is_animating());
    }

    #[test]
    fn test_unrequested_target_change_is_immediate() {
        let mut slide = SlideAnimator::new(100, EasingType::Cubic);
        assert_eq!(slide.update(0, 300.0, 0), 300.0);
    }

    #[test]
    fn test_disabled_slide_is_instant() {
        let mut slide = SlideAnimator::new(0, EasingType::Cubic);
        slide.request();
        assert_eq!(slide.update(0, 680.0, 0), 680.0);
        assert!(!slide.needs_update());
    }
}
