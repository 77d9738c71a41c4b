// Host-side tests for CSS transform formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use gallery_core::{CardPlacement, CardPose, RingTransform};
use glam::{Vec2, Vec3};
use style::*;

#[test]
fn card_transform_lists_components_in_order() {
    let pose = CardPose {
        position: Vec2::new(12.5, -3.0),
        rotation_y_deg: 45.0,
        rotation_deg: 90.0,
        scale: 1.25,
        perspective: 1000.0,
    };
    assert_eq!(
        card_transform(&pose),
        "perspective(1000.000px) translate3d(12.500px, -3.000px, 0px) rotate(90.000deg) rotateY(45.000deg) scale(1.2500)"
    );
}

#[test]
fn mount_pose_of_first_card_faces_centre() {
    let pose = CardPlacement::new(0, 20, 275.0).mount_pose();
    let css = card_transform(&pose);
    assert!(css.starts_with("perspective(800.000px)"), "{css}");
    assert!(css.contains("translate3d(275.000px, 0.000px, 0px)"), "{css}");
    assert!(css.contains("rotate(90.000deg)"), "{css}");
}

#[test]
fn identity_ring_transform() {
    assert_eq!(
        ring_transform(&RingTransform::IDENTITY),
        "translate3d(0.000px, 0.000px, 0px) rotate(0.000deg) scale(1.0000)"
    );
}

#[test]
fn preview_ring_transform() {
    let ring = RingTransform {
        scale: 5.0,
        translate: Vec2::new(0.0, 1300.0),
        rotation_deg: 540.0,
    };
    assert_eq!(
        ring_transform(&ring),
        "translate3d(0.000px, 1300.000px, 0px) rotate(540.000deg) scale(5.0000)"
    );
}

#[test]
fn tilt_applies_z_then_y_then_x() {
    assert_eq!(
        tilt_transform(Vec3::new(-15.0, 7.5, 2.5)),
        "rotateZ(2.500deg) rotateY(7.500deg) rotateX(-15.000deg)"
    );
}

#[test]
fn word_offsets_are_percentages() {
    assert_eq!(word_transform(125.0), "translateY(125.000%)");
    assert_eq!(word_transform(-125.0), "translateY(-125.000%)");
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity(0.5), "0.5000");
    assert_eq!(opacity(1.7), "1.0000");
    assert_eq!(opacity(-0.2), "0.0000");
}
