//! Preview state machine.
//!
//! ```text
//! Idle --card click--> EnteringPreview --ring tween done--> PreviewActive
//!   ^                                                            |
//!   +------ ring tween done <-- ExitingPreview <--- other click --+
//! ```
//!
//! Clicks arriving while a transition runs are dropped, never queued.

use crate::constants::FRONT_ANGLE;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewPhase {
    #[default]
    Idle,
    EnteringPreview {
        card: usize,
    },
    PreviewActive {
        card: usize,
    },
    ExitingPreview,
}

impl PreviewPhase {
    pub fn is_preview_active(self) -> bool {
        !matches!(self, PreviewPhase::Idle)
    }

    pub fn is_transitioning(self) -> bool {
        matches!(
            self,
            PreviewPhase::EnteringPreview { .. } | PreviewPhase::ExitingPreview
        )
    }

    pub fn focused_card(self) -> Option<usize> {
        match self {
            PreviewPhase::EnteringPreview { card } | PreviewPhase::PreviewActive { card } => {
                Some(card)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryEvent {
    /// A card was clicked; `angle` is its ring angle in radians.
    CardClicked { index: usize, angle: f32 },
    /// A click landed outside every card.
    BackgroundClicked,
    /// The ring tween of the running transition finished.
    TransitionComplete,
}

/// Choreography the caller must start for a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreviewEffect {
    /// Bring `card` to the front by turning the ring `rotation` radians.
    Enter { card: usize, rotation: f32 },
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub phase: PreviewPhase,
    pub effect: Option<PreviewEffect>,
}

impl Transition {
    fn stay(phase: PreviewPhase) -> Self {
        Self {
            phase,
            effect: None,
        }
    }
}

pub fn transition(phase: PreviewPhase, event: GalleryEvent) -> Transition {
    use GalleryEvent::*;
    use PreviewPhase::*;
    match (phase, event) {
        (Idle, CardClicked { index, angle }) => Transition {
            phase: EnteringPreview { card: index },
            effect: Some(PreviewEffect::Enter {
                card: index,
                rotation: front_rotation(angle),
            }),
        },
        // A click on a card that did not start a preview falls through to the page handler.
        (PreviewActive { .. }, CardClicked { .. } | BackgroundClicked) => Transition {
            phase: ExitingPreview,
            effect: Some(PreviewEffect::Exit),
        },
        (EnteringPreview { card }, TransitionComplete) => Transition::stay(PreviewActive { card }),
        (ExitingPreview, TransitionComplete) => Transition::stay(Idle),
        (other, _) => Transition::stay(other),
    }
}

/// Ring rotation that moves a card at `angle` to the front position.
#[inline]
pub fn front_rotation(angle: f32) -> f32 {
    shortest_rotation(FRONT_ANGLE - angle)
}

/// Wrap an angle difference into (−π, π].
pub fn shortest_rotation(delta: f32) -> f32 {
    let wrapped = (delta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
