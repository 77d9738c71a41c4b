//! Minimal time-based tween engine.
//!
//! Provides the two primitives the gallery choreography needs: "set now" and
//! "animate to a value over a duration with easing, reporting completion".
//! Tweens are advanced by the frame loop with the elapsed frame time.

use crate::smoothing::Interpolate;

/// Easing curves, named after their GSAP equivalents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-out.
    Power2Out,
    /// Quintic ease-out.
    Power4Out,
    /// Quintic ease-in-out.
    Power4InOut,
}

impl Ease {
    /// Map linear progress in \[0, 1\] to eased progress in \[0, 1\].
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::Power4InOut => {
                if t < 0.5 {
                    (2.0 * t).powi(5) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(5) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: f32,
    delay: f32,
    elapsed: f32,
    ease: Ease,
    finished: bool,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            ease,
            finished: false,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn target(&self) -> T {
        self.to
    }

    /// Linear progress in \[0, 1\]; 0 while still delayed.
    pub fn progress(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        let active = self.elapsed - self.delay;
        if active <= 0.0 {
            0.0
        } else if self.duration == 0.0 {
            1.0
        } else {
            (active / self.duration).min(1.0)
        }
    }

    pub fn value(&self) -> T {
        if self.finished {
            return self.to;
        }
        self.from.interpolate(self.to, self.ease.apply(self.progress()))
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds. Returns `true` only on the call that completes the tween.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.delay + self.duration {
            self.finished = true;
            return true;
        }
        false
    }
}

/// A value that is either at rest or driven by a tween.
#[derive(Clone, Copy, Debug)]
pub struct Animated<T> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Interpolate> Animated<T> {
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Apply immediately, cancelling any running tween.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.tween = None;
    }

    /// Start a tween from the current value, replacing any running one.
    pub fn animate_to(&mut self, to: T, duration: f32, delay: f32, ease: Ease) {
        self.tween = Some(Tween::new(self.value, to, duration, ease).with_delay(delay));
    }

    /// Returns `true` on the frame the running tween completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let completed = tween.advance(dt);
        self.value = tween.value();
        if completed {
            self.tween = None;
        }
        completed
    }
}
