//! Pointer-reactive deformation: target computation and per-frame smoothing.

use crate::config::GalleryConfig;
use crate::constants::{FLIP_SCALE_BOOST, MAX_FLIP_DEG, PARALLAX_DEPTH_DEG, PARALLAX_TILT_DEG};
use crate::smoothing::{CardTargets, ParallaxState, TransformState};
use glam::{Vec2, Vec3};

/// Proximity intensity in \[0, 1\]: 1 at the card centre, 0 at `falloff` and beyond.
#[inline]
pub fn flip_factor(distance: f32, falloff: f32) -> f32 {
    (1.0 - distance / falloff).clamp(0.0, 1.0)
}

/// Target deformation of a card at ring `angle` whose centre is `distance` px from the pointer.
pub fn card_targets(distance: f32, angle: f32, config: &GalleryConfig) -> CardTargets {
    if distance.is_nan() || distance >= config.sensitivity {
        return CardTargets::NEUTRAL;
    }
    let flip = flip_factor(distance, config.effect_falloff);
    let move_amount = config.card_move_amount * flip;
    CardTargets {
        offset: Vec2::new(move_amount * angle.cos(), move_amount * angle.sin()),
        rotation_deg: MAX_FLIP_DEG * flip,
        scale: 1.0 + FLIP_SCALE_BOOST * flip,
    }
}

/// Ring tilt target (degrees around x, y, z) for a pointer relative to the container.
///
/// `container_size` is the container's layout size; its centre is the neutral point.
pub fn parallax_target(pointer: Vec2, container_size: Vec2) -> Vec3 {
    let center = container_size * 0.5;
    let percent = normalized_offset(pointer, center);
    Vec3::new(
        -percent.y * PARALLAX_TILT_DEG,
        percent.x * PARALLAX_TILT_DEG,
        percent.x * PARALLAX_DEPTH_DEG,
    )
}

#[inline]
fn normalized_offset(pointer: Vec2, center: Vec2) -> Vec2 {
    let axis = |p: f32, c: f32| if c > 0.0 { (p - c) / c } else { 0.0 };
    Vec2::new(axis(pointer.x, center.x), axis(pointer.y, center.y))
}

/// Recompute every card's target from the pointer position.
///
/// `card_centers[i]` is card `i`'s centre in the same screen space as `pointer`.
pub fn retarget_cards<'a>(
    states: impl IntoIterator<Item = &'a mut TransformState>,
    card_centers: &[Vec2],
    pointer: Vec2,
    config: &GalleryConfig,
) {
    for (state, center) in states.into_iter().zip(card_centers) {
        let distance = pointer.distance(*center);
        state.set_targets(card_targets(distance, state.angle, config));
    }
}

/// One animator frame: smooth the ring tilt and every card toward their targets.
pub fn smooth_frame<'a>(
    parallax: &mut ParallaxState,
    states: impl IntoIterator<Item = &'a mut TransformState>,
    factor: f32,
) {
    parallax.step(factor);
    for state in states {
        state.step(factor);
    }
}
