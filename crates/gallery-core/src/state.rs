//! The gallery session: everything created at mount and dropped at unmount.
//!
//! `GalleryState` owns the cards, the smoothing state, the preview phase and
//! every running tween. Frontends feed it pointer moves, clicks and frame
//! ticks, then read poses back out and apply them to their elements.

use crate::animator::{parallax_target, retarget_cards, smooth_frame};
use crate::collection::{Collection, CollectionItem};
use crate::config::{ConfigError, GalleryConfig};
use crate::constants::*;
use crate::layout::{ring_layout, CardPlacement, CardPose, RingTransform};
use crate::preview::{transition, GalleryEvent, PreviewEffect, PreviewPhase};
use crate::smoothing::{ParallaxState, Smoothed, TransformState};
use crate::text::{Title, TitleId};
use crate::tween::{Animated, Ease, Tween};
use glam::{Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct Card {
    pub placement: CardPlacement,
    pub item: CollectionItem,
    pub transform: TransformState,
    pub pose: Animated<CardPose>,
}

impl Card {
    pub fn index(&self) -> usize {
        self.placement.index
    }
}

/// Title node lifecycle notifications for the frontend.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneChange {
    TitleCreated {
        id: TitleId,
        text: String,
        words: Vec<String>,
    },
    TitleRemoved(TitleId),
}

pub struct GalleryState {
    config: GalleryConfig,
    cards: Vec<Card>,
    parallax: ParallaxState,
    parallax_reset: Option<Tween<Vec3>>,
    ring: Animated<RingTransform>,
    caption_opacity: Animated<f32>,
    phase: PreviewPhase,
    title: Option<Title>,
    departing: Vec<Title>,
    next_title_id: u32,
    changes: Vec<SceneChange>,
    mounted: bool,
}

impl GalleryState {
    pub fn new(config: GalleryConfig, collection: &Collection) -> Result<Self, ConfigError> {
        config.validate()?;
        if collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        let cards = ring_layout(config.image_count, config.radius)
            .into_iter()
            .map(|placement| Card {
                item: collection.item_for_card(placement.index).clone(),
                transform: TransformState::new(placement.angle),
                pose: Animated::new(placement.mount_pose()),
                placement,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[gallery] {} cards, radius {}, mobile={}",
            cards.len(),
            config.radius,
            config.is_mobile
        );
        Ok(Self {
            config,
            cards,
            parallax: Smoothed::new(Vec3::ZERO),
            parallax_reset: None,
            ring: Animated::new(RingTransform::IDENTITY),
            caption_opacity: Animated::new(1.0),
            phase: PreviewPhase::Idle,
            title: None,
            departing: Vec::new(),
            next_title_id: 0,
            changes: Vec::new(),
            mounted: true,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> PreviewPhase {
        self.phase
    }

    pub fn is_preview_active(&self) -> bool {
        self.phase.is_preview_active()
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase.is_transitioning()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The title of the focused card, while it is shown or sliding in.
    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Every title node that still exists, including ones sliding out.
    pub fn titles(&self) -> impl Iterator<Item = &Title> {
        self.title.iter().chain(self.departing.iter())
    }

    pub fn ring(&self) -> RingTransform {
        self.ring.value()
    }

    /// Current ring-container tilt in degrees around x, y, z.
    pub fn container_tilt(&self) -> Vec3 {
        self.parallax.current
    }

    pub fn parallax(&self) -> &ParallaxState {
        &self.parallax
    }

    pub fn caption_opacity(&self) -> f32 {
        self.caption_opacity.value()
    }

    fn animator_enabled(&self) -> bool {
        self.mounted && !self.is_preview_active() && !self.is_transitioning()
    }

    /// Whether a pointer move would currently change anything.
    pub fn pointer_effects_enabled(&self) -> bool {
        self.animator_enabled() && !self.config.is_mobile
    }

    /// Card centres laid out flat around `origin`, ignoring ring tilt and scale.
    pub fn layout_centers(&self, origin: Vec2) -> Vec<Vec2> {
        self.cards
            .iter()
            .map(|c| origin + c.pose.value().position)
            .collect()
    }

    /// Update pointer-driven targets. Returns `false` when pointer effects are suppressed.
    pub fn pointer_move(
        &mut self,
        pointer: Vec2,
        container_size: Vec2,
        card_centers: &[Vec2],
    ) -> bool {
        if !self.pointer_effects_enabled() {
            return false;
        }
        self.parallax.target = parallax_target(pointer, container_size);
        retarget_cards(
            self.cards.iter_mut().map(|c| &mut c.transform),
            card_centers,
            pointer,
            &self.config,
        );
        true
    }

    /// A click on card `index`. Returns `true` when the click started a preview
    /// and should not propagate further.
    pub fn click_card(&mut self, index: usize) -> bool {
        let Some(card) = self.cards.get(index) else {
            return false;
        };
        let angle = card.placement.angle;
        matches!(
            self.dispatch(GalleryEvent::CardClicked { index, angle }),
            Some(PreviewEffect::Enter { .. })
        )
    }

    /// A click anywhere on the page that no card consumed.
    pub fn click_background(&mut self) -> bool {
        self.dispatch(GalleryEvent::BackgroundClicked).is_some()
    }

    /// Feed one event through the state machine and start its choreography.
    pub fn dispatch(&mut self, event: GalleryEvent) -> Option<PreviewEffect> {
        if !self.mounted {
            return None;
        }
        if let GalleryEvent::CardClicked { index, .. } = event {
            if index >= self.cards.len() {
                return None;
            }
        }
        let next = transition(self.phase, event);
        if next.phase != self.phase {
            log::debug!("[preview] {:?} -> {:?}", self.phase, next.phase);
        }
        self.phase = next.phase;
        match next.effect {
            Some(PreviewEffect::Enter { card, rotation }) => self.enter_preview(card, rotation),
            Some(PreviewEffect::Exit) => self.exit_preview(),
            None => {}
        }
        next.effect
    }

    fn enter_preview(&mut self, index: usize, rotation: f32) {
        log::info!("[preview] focusing card {}", index);
        for card in self.cards.iter_mut() {
            card.transform.reset();
            let perspective = card.pose.value().perspective;
            card.pose.animate_to(
                card.placement.flattened_pose(perspective),
                FLATTEN_CARD_DURATION,
                0.0,
                Ease::Power2Out,
            );
        }

        let ring = self.ring.value();
        self.ring.animate_to(
            RingTransform {
                scale: PREVIEW_RING_SCALE,
                translate: Vec2::new(ring.translate.x, PREVIEW_RING_Y),
                rotation_deg: rotation.to_degrees() + PREVIEW_EXTRA_TURN_DEG,
            },
            ENTER_RING_DURATION,
            0.0,
            Ease::Power4InOut,
        );

        self.parallax_reset = Some(Tween::new(
            self.parallax.current,
            Vec3::ZERO,
            PARALLAX_RESET_DURATION,
            Ease::Power2Out,
        ));

        let text = self.cards[index].item.title.clone();
        let id = TitleId(self.next_title_id);
        self.next_title_id = self.next_title_id.wrapping_add(1);
        let mut title = Title::new(id, &text);
        title.reveal();
        self.changes.push(SceneChange::TitleCreated {
            id,
            text,
            words: title.words.iter().map(|w| w.text.clone()).collect(),
        });
        if let Some(mut previous) = self.title.replace(title) {
            previous.hide();
            self.departing.push(previous);
        }

        self.caption_opacity.animate_to(
            0.0,
            CAPTION_FADE_OUT_DURATION,
            CAPTION_FADE_OUT_DELAY,
            Ease::Power4Out,
        );
    }

    fn exit_preview(&mut self) {
        log::info!("[preview] returning to ring");
        if let Some(mut title) = self.title.take() {
            title.hide();
            self.departing.push(title);
        }
        self.caption_opacity.animate_to(
            1.0,
            CAPTION_FADE_IN_DURATION,
            CAPTION_FADE_IN_DELAY,
            Ease::Power4Out,
        );
        self.ring.animate_to(
            RingTransform::IDENTITY,
            EXIT_RING_DURATION,
            0.0,
            Ease::Power4InOut,
        );
    }

    /// Advance one display frame by `dt` seconds.
    pub fn frame(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        if let Some(reset) = self.parallax_reset.as_mut() {
            let done = reset.advance(dt);
            self.parallax.current = reset.value();
            if done {
                self.parallax_reset = None;
            }
        }
        for card in self.cards.iter_mut() {
            card.pose.advance(dt);
        }
        self.caption_opacity.advance(dt);
        if let Some(title) = self.title.as_mut() {
            title.advance(dt);
        }
        for title in self.departing.iter_mut() {
            title.advance(dt);
        }
        let changes = &mut self.changes;
        self.departing.retain(|title| {
            let gone = title.is_gone();
            if gone {
                changes.push(SceneChange::TitleRemoved(title.id));
            }
            !gone
        });

        if self.ring.advance(dt) {
            self.dispatch(GalleryEvent::TransitionComplete);
        }

        if self.animator_enabled() {
            let factor = self.config.lerp_factor;
            smooth_frame(
                &mut self.parallax,
                self.cards.iter_mut().map(|c| &mut c.transform),
                factor,
            );
            for card in self.cards.iter_mut() {
                card.pose.set(card.placement.frame_pose(&card.transform));
            }
        }
    }

    /// Take the pending title create/remove notifications.
    pub fn drain_changes(&mut self) -> Vec<SceneChange> {
        std::mem::take(&mut self.changes)
    }

    /// Stop reacting to anything; later frames and events are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.changes.clear();
        log::debug!("[gallery] unmounted");
    }
}
