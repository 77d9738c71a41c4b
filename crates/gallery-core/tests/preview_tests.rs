// Host-side tests for the preview state machine.

use gallery_core::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn click(index: usize, count: usize) -> GalleryEvent {
    GalleryEvent::CardClicked {
        index,
        angle: TAU * index as f32 / count as f32,
    }
}

#[test]
fn card_click_in_idle_enters_preview() {
    let t = transition(PreviewPhase::Idle, click(5, 20));
    assert_eq!(t.phase, PreviewPhase::EnteringPreview { card: 5 });
    assert!(t.phase.is_preview_active());
    assert!(t.phase.is_transitioning());
    match t.effect {
        Some(PreviewEffect::Enter { card, rotation }) => {
            assert_eq!(card, 5);
            assert!(rotation > -PI && rotation <= PI);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn front_rotation_is_always_in_half_open_range() {
    for n in [1usize, 3, 7, 20, 100] {
        for i in 0..n {
            let r = front_rotation(TAU * i as f32 / n as f32);
            assert!(r > -PI && r <= PI, "n={n} i={i} r={r}");
        }
    }
}

#[test]
fn front_rotation_brings_card_to_front() {
    // a card already at the front needs no turn
    assert!(front_rotation(FRONT_ANGLE).abs() < 1e-5);
    // the card at angle 0 turns a quarter backwards
    assert!((front_rotation(0.0) + FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn shortest_rotation_wraps_both_ways() {
    assert!((shortest_rotation(3.0 * PI / 2.0) + FRAC_PI_2).abs() < 1e-5);
    assert!((shortest_rotation(-3.0 * PI / 2.0) - FRAC_PI_2).abs() < 1e-5);
    assert!((shortest_rotation(-PI) - PI).abs() < 1e-5);
    assert!((shortest_rotation(5.0 * TAU + 0.25) - 0.25).abs() < 1e-3);
}

#[test]
fn completion_moves_entering_to_active_and_exiting_to_idle() {
    let active = transition(
        PreviewPhase::EnteringPreview { card: 2 },
        GalleryEvent::TransitionComplete,
    );
    assert_eq!(active.phase, PreviewPhase::PreviewActive { card: 2 });
    assert!(active.phase.is_preview_active());
    assert!(!active.phase.is_transitioning());
    assert_eq!(active.effect, None);

    let idle = transition(PreviewPhase::ExitingPreview, GalleryEvent::TransitionComplete);
    assert_eq!(idle.phase, PreviewPhase::Idle);
    assert!(!idle.phase.is_preview_active());
}

#[test]
fn any_click_in_active_preview_exits() {
    for event in [GalleryEvent::BackgroundClicked, click(1, 20)] {
        let t = transition(PreviewPhase::PreviewActive { card: 4 }, event);
        assert_eq!(t.phase, PreviewPhase::ExitingPreview);
        assert_eq!(t.effect, Some(PreviewEffect::Exit));
        // still counts as preview until the exit tween completes
        assert!(t.phase.is_preview_active());
    }
}

#[test]
fn clicks_while_transitioning_are_dropped() {
    let busy = [
        PreviewPhase::EnteringPreview { card: 0 },
        PreviewPhase::ExitingPreview,
    ];
    for phase in busy {
        for event in [GalleryEvent::BackgroundClicked, click(3, 20)] {
            let t = transition(phase, event);
            assert_eq!(t.phase, phase);
            assert_eq!(t.effect, None);
        }
    }
}

#[test]
fn background_click_in_idle_does_nothing() {
    let t = transition(PreviewPhase::Idle, GalleryEvent::BackgroundClicked);
    assert_eq!(t.phase, PreviewPhase::Idle);
    assert_eq!(t.effect, None);
}

#[test]
fn stray_completion_is_ignored() {
    for phase in [PreviewPhase::Idle, PreviewPhase::PreviewActive { card: 1 }] {
        let t = transition(phase, GalleryEvent::TransitionComplete);
        assert_eq!(t.phase, phase);
    }
}

#[test]
fn focused_card_is_reported_while_entering_and_active() {
    assert_eq!(PreviewPhase::Idle.focused_card(), None);
    assert_eq!(PreviewPhase::EnteringPreview { card: 7 }.focused_card(), Some(7));
    assert_eq!(PreviewPhase::PreviewActive { card: 7 }.focused_card(), Some(7));
    assert_eq!(PreviewPhase::ExitingPreview.focused_card(), None);
}
