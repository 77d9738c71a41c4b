// Host-side tests for ring layout and the image collection.

use gallery_core::*;
use std::f32::consts::TAU;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn angles_and_positions_follow_the_circle() {
    let radius = 275.0;
    for n in [1usize, 5, 20, 100] {
        let placements = ring_layout(n, radius);
        assert_eq!(placements.len(), n);
        for (i, p) in placements.iter().enumerate() {
            let expected = TAU * i as f32 / n as f32;
            assert_eq!(p.index, i);
            assert!(approx(p.angle, expected), "n={n} i={i} angle={}", p.angle);
            assert!(approx(p.position.x, radius * expected.cos()));
            assert!(approx(p.position.y, radius * expected.sin()));
        }
    }
}

#[test]
fn cards_face_the_ring_centre() {
    let placements = ring_layout(4, 100.0);
    let facing: Vec<f32> = placements.iter().map(|p| p.facing_deg).collect();
    // 0°, 90°, 180°, 270° around the ring, plus the quarter turn
    for (got, want) in facing.iter().zip([90.0, 180.0, 270.0, 360.0]) {
        assert!(approx(*got, want), "got {got}, want {want}");
    }
}

#[test]
fn mount_pose_uses_placement_and_mount_perspective() {
    let p = CardPlacement::new(3, 20, 275.0);
    let pose = p.mount_pose();
    assert_eq!(pose.position, p.position);
    assert_eq!(pose.rotation_deg, p.facing_deg);
    assert_eq!(pose.rotation_y_deg, 0.0);
    assert_eq!(pose.scale, 1.0);
    assert_eq!(pose.perspective, MOUNT_PERSPECTIVE);
}

#[test]
fn frame_pose_adds_current_offset() {
    let p = CardPlacement::new(0, 4, 100.0);
    let mut state = TransformState::new(p.angle);
    state.offset.current = glam::Vec2::new(10.0, -5.0);
    state.rotation.current = 45.0;
    state.scale.current = 1.2;
    let pose = p.frame_pose(&state);
    assert!(approx(pose.position.x, 110.0));
    assert!(approx(pose.position.y, -5.0));
    assert_eq!(pose.rotation_y_deg, 45.0);
    assert_eq!(pose.scale, 1.2);
    assert_eq!(pose.perspective, FRAME_PERSPECTIVE);
}

#[test]
fn empty_ring_has_no_cards() {
    assert!(ring_layout(0, 275.0).is_empty());
}

#[test]
fn collection_wraps_when_cards_outnumber_images() {
    let collection = Collection::default();
    let len = collection.len();
    assert_eq!(collection.item_for_card(0), collection.item_for_card(len));
    assert_eq!(collection.item_for_card(3), collection.item_for_card(len * 2 + 3));
}

#[test]
fn empty_collection_is_rejected() {
    assert_eq!(
        Collection::new(Vec::new()).unwrap_err(),
        ConfigError::EmptyCollection
    );
}
