//! Applies gallery state to the DOM once per frame.

use crate::constants::TRANSFORM_ORIGIN;
use crate::dom::{self, set_style, Host};
use crate::style;
use crate::title::TitleNode;
use gallery_core::{GalleryState, SceneChange};
use glam::Vec2;
use web_sys as web;

pub struct Scene {
    pub host: Host,
    pub cards: Vec<web::HtmlElement>,
    titles: Vec<TitleNode>,
}

impl Scene {
    pub fn new(host: Host, state: &GalleryState) -> anyhow::Result<Self> {
        let cards = dom::create_cards(&host, state.cards())?;
        set_style(&host.container, "transform-origin", TRANSFORM_ORIGIN);
        Ok(Self {
            host,
            cards,
            titles: Vec::new(),
        })
    }

    /// Screen-space centre of every card element, in client coordinates.
    pub fn card_centers(&self) -> Vec<Vec2> {
        self.cards
            .iter()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                Vec2::new(
                    (rect.left() + rect.width() / 2.0) as f32,
                    (rect.top() + rect.height() / 2.0) as f32,
                )
            })
            .collect()
    }

    pub fn container_size(&self) -> Vec2 {
        Vec2::new(
            self.host.container.offset_width() as f32,
            self.host.container.offset_height() as f32,
        )
    }

    pub fn apply_changes(&mut self, changes: Vec<SceneChange>) {
        for change in changes {
            match change {
                SceneChange::TitleCreated { id, text, words } => {
                    match TitleNode::create(
                        &self.host.document,
                        &self.host.title_container,
                        id,
                        &text,
                        &words,
                    ) {
                        Ok(node) => self.titles.push(node),
                        Err(e) => log::warn!("[title] could not create {:?}: {:?}", id, e),
                    }
                }
                SceneChange::TitleRemoved(id) => {
                    if let Some(pos) = self.titles.iter().position(|t| t.id == id) {
                        self.titles.swap_remove(pos).remove();
                    }
                }
            }
        }
    }

    pub fn render(&self, state: &GalleryState) {
        set_style(
            &self.host.container,
            "transform",
            &style::tilt_transform(state.container_tilt()),
        );
        set_style(&self.host.ring, "transform", &style::ring_transform(&state.ring()));
        for (el, card) in self.cards.iter().zip(state.cards()) {
            set_style(el, "transform", &style::card_transform(&card.pose.value()));
        }
        set_style(
            &self.host.caption,
            "opacity",
            &style::opacity(state.caption_opacity()),
        );
        for title in state.titles() {
            if let Some(node) = self.titles.iter().find(|n| n.id == title.id) {
                node.render(title);
            }
        }
    }

    /// Remove everything the gallery created and clear the inline styles it set.
    pub fn teardown(&mut self) {
        for el in self.cards.drain(..) {
            el.remove();
        }
        for node in self.titles.drain(..) {
            node.remove();
        }
        for el in [&self.host.container, &self.host.ring, &self.host.caption] {
            _ = el.style().remove_property("transform");
        }
        _ = self.host.container.style().remove_property("transform-origin");
        _ = self.host.caption.style().remove_property("opacity");
    }
}
