use crate::constants::*;
use crate::style;
use anyhow::{anyhow, Context};
use gallery_core::Card;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Where host elements are looked up: the whole document or one subtree.
enum Scope {
    Document(web::Document),
    Element(web::Element),
}

impl Scope {
    fn query(&self, selector: &str) -> anyhow::Result<web::HtmlElement> {
        let found = match self {
            Scope::Document(d) => d.query_selector(selector),
            Scope::Element(e) => e.query_selector(selector),
        }
        .map_err(|e| anyhow!("bad selector {selector}: {:?}", e))?
        .ok_or_else(|| anyhow!("missing {selector}"))?;
        found
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("{selector} is not an HTML element"))
    }
}

/// Host page elements the gallery binds to. Probing fails when any is absent,
/// which leaves the gallery in its disabled mode.
pub struct Host {
    pub window: web::Window,
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub ring: web::HtmlElement,
    pub title_container: web::HtmlElement,
    pub caption: web::HtmlElement,
}

impl Host {
    pub fn probe(root_selector: Option<&str>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let scope = match root_selector {
            Some(sel) => Scope::Element(
                document
                    .query_selector(sel)
                    .map_err(|e| anyhow!("bad selector {sel}: {:?}", e))?
                    .ok_or_else(|| anyhow!("missing root {sel}"))?,
            ),
            None => Scope::Document(document.clone()),
        };
        Ok(Self {
            container: scope.query(CONTAINER_SELECTOR)?,
            ring: scope.query(RING_SELECTOR)?,
            title_container: scope.query(TITLE_CONTAINER_SELECTOR)?,
            caption: scope.query(CAPTION_SELECTOR)?,
            window,
            document,
        })
    }

    pub fn viewport_width(&self) -> f32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0) as f32
    }
}

/// Create one element per card inside the ring, placed at its mount pose.
/// Nothing is left behind when creation fails part-way.
pub fn create_cards(host: &Host, cards: &[Card]) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut out = Vec::with_capacity(cards.len());
    for card in cards {
        match create_card(host, card) {
            Ok(el) => out.push(el),
            Err(e) => {
                for el in &out {
                    el.remove();
                }
                return Err(e.context(format!("creating card {}", card.index())));
            }
        }
    }
    Ok(out)
}

fn create_card(host: &Host, card: &Card) -> anyhow::Result<web::HtmlElement> {
    let el = host
        .document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("card is not an HTML element"))?;
    el.set_class_name(CARD_CLASS);
    _ = el.set_attribute(DATA_INDEX, &card.index().to_string());
    _ = el.set_attribute(DATA_TITLE, &card.item.title);

    let img = host
        .document
        .create_element("img")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|_| anyhow!("img is not an image element"))?;
    img.set_src(&card.item.img);
    img.set_alt(&card.item.title);
    el.append_child(&img)
        .map_err(|e| anyhow!("{:?}", e))
        .context("appending card image")?;

    set_style(&el, "transform-origin", TRANSFORM_ORIGIN);
    set_style(&el, "transform", &style::card_transform(&card.pose.value()));
    host.ring
        .append_child(&el)
        .map_err(|e| anyhow!("{:?}", e))
        .context("appending card")?;
    Ok(el)
}
