//! Ring layout and the pose types written to card and ring elements.

use crate::constants::{CARD_FACING_OFFSET_DEG, FRAME_PERSPECTIVE, MOUNT_PERSPECTIVE};
use crate::smoothing::{Interpolate, TransformState};
use glam::Vec2;
use std::f32::consts::TAU;

/// Where a card sits on the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    pub index: usize,
    /// Radians, `2πi/N`.
    pub angle: f32,
    pub position: Vec2,
    /// In-plane rotation that makes the card face the ring centre, degrees.
    pub facing_deg: f32,
}

impl CardPlacement {
    pub fn new(index: usize, count: usize, radius: f32) -> Self {
        let angle = index as f32 / count as f32 * TAU;
        Self {
            index,
            angle,
            position: ring_position(angle, radius),
            facing_deg: facing_deg(angle),
        }
    }

    /// Style applied when the card element is created.
    pub fn mount_pose(&self) -> CardPose {
        CardPose {
            position: self.position,
            rotation_y_deg: 0.0,
            rotation_deg: self.facing_deg,
            scale: 1.0,
            perspective: MOUNT_PERSPECTIVE,
        }
    }

    /// Style written by the pointer animator for the card's current deformation.
    pub fn frame_pose(&self, state: &TransformState) -> CardPose {
        CardPose {
            position: self.position + state.offset.current,
            rotation_y_deg: state.rotation.current,
            rotation_deg: self.facing_deg,
            scale: state.scale.current,
            perspective: FRAME_PERSPECTIVE,
        }
    }

    /// Undeformed pose cards settle into while a preview is shown.
    pub fn flattened_pose(&self, perspective: f32) -> CardPose {
        CardPose {
            position: self.position,
            rotation_y_deg: 0.0,
            rotation_deg: self.facing_deg,
            scale: 1.0,
            perspective,
        }
    }
}

#[inline]
pub fn ring_position(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

#[inline]
pub fn facing_deg(angle: f32) -> f32 {
    angle.to_degrees() + CARD_FACING_OFFSET_DEG
}

/// Place `count` cards evenly around a circle of `radius`.
pub fn ring_layout(count: usize, radius: f32) -> Vec<CardPlacement> {
    (0..count)
        .map(|i| CardPlacement::new(i, count, radius))
        .collect()
}

/// Full style of one card element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub position: Vec2,
    /// Flip around the card's vertical axis, degrees.
    pub rotation_y_deg: f32,
    /// In-plane rotation, degrees.
    pub rotation_deg: f32,
    pub scale: f32,
    pub perspective: f32,
}

impl Interpolate for CardPose {
    fn interpolate(self, to: Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(to.position, t),
            rotation_y_deg: self.rotation_y_deg.interpolate(to.rotation_y_deg, t),
            rotation_deg: self.rotation_deg.interpolate(to.rotation_deg, t),
            scale: self.scale.interpolate(to.scale, t),
            perspective: self.perspective.interpolate(to.perspective, t),
        }
    }
}

/// Transform of the ring element itself; animated by preview transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingTransform {
    pub scale: f32,
    pub translate: Vec2,
    pub rotation_deg: f32,
}

impl RingTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
        rotation_deg: 0.0,
    };
}

impl Default for RingTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolate for RingTransform {
    fn interpolate(self, to: Self, t: f32) -> Self {
        Self {
            scale: self.scale.interpolate(to.scale, t),
            translate: self.translate.lerp(to.translate, t),
            rotation_deg: self.rotation_deg.interpolate(to.rotation_deg, t),
        }
    }
}
