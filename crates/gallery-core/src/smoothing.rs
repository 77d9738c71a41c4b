//! Per-frame exponential smoothing ("lerp toward target").
//!
//! Every animated quantity in the gallery is either a [`Smoothed`] value,
//! closing a fixed fraction of the remaining distance each frame, or a tween
//! (see [`crate::tween`]). Both rely on [`Interpolate`].

use glam::{Vec2, Vec3};

/// Linear interpolation between two values of the same type.
pub trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec2 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// One smoothing step: move `current` by `factor` of the way toward `target`.
#[inline]
pub fn lerp_step<T: Interpolate>(current: T, target: T, factor: f32) -> T {
    current.interpolate(target, factor)
}

/// A value with a target it converges toward, one step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed<T> {
    pub current: T,
    pub target: T,
}

impl<T: Interpolate> Smoothed<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn step(&mut self, factor: f32) {
        self.current = lerp_step(self.current, self.target, factor);
    }

    /// Snap both ends to `value`.
    pub fn reset(&mut self, value: T) {
        self.current = value;
        self.target = value;
    }
}

/// Per-card pointer deformation: local offset, flip rotation (degrees) and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub offset: Smoothed<Vec2>,
    pub rotation: Smoothed<f32>,
    pub scale: Smoothed<f32>,
    /// Fixed placement angle on the ring, radians.
    pub angle: f32,
}

impl TransformState {
    pub fn new(angle: f32) -> Self {
        Self {
            offset: Smoothed::new(Vec2::ZERO),
            rotation: Smoothed::new(0.0),
            scale: Smoothed::new(1.0),
            angle,
        }
    }

    pub fn step(&mut self, factor: f32) {
        self.offset.step(factor);
        self.rotation.step(factor);
        self.scale.step(factor);
    }

    pub fn set_targets(&mut self, targets: CardTargets) {
        self.offset.target = targets.offset;
        self.rotation.target = targets.rotation_deg;
        self.scale.target = targets.scale;
    }

    /// Back to the neutral pose, current and target alike.
    pub fn reset(&mut self) {
        self.offset.reset(Vec2::ZERO);
        self.rotation.reset(0.0);
        self.scale.reset(1.0);
    }
}

/// Target deformation for one card, as computed from the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTargets {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl CardTargets {
    pub const NEUTRAL: Self = Self {
        offset: Vec2::ZERO,
        rotation_deg: 0.0,
        scale: 1.0,
    };
}

/// Whole-ring tilt in degrees around x, y and z.
pub type ParallaxState = Smoothed<Vec3>;
