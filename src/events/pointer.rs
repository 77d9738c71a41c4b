use super::Listener;
use crate::render::Scene;
use gallery_core::GalleryState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub state: Rc<RefCell<GalleryState>>,
    pub scene: Rc<RefCell<Scene>>,
}

/// Attach every gallery listener. The returned listeners detach when dropped.
pub fn wire_input_handlers(w: InputWiring) -> Vec<Listener> {
    let mut listeners = vec![wire_mousemove(&w), wire_page_click(&w)];
    listeners.extend(wire_card_clicks(&w));
    listeners
}

fn wire_mousemove(w: &InputWiring) -> Listener {
    let w = w.clone();
    let container: web::EventTarget = w.scene.borrow().host.container.clone().into();

    Listener::attach(&container, "mousemove", move |ev: web::MouseEvent| {
        // Skip layout reads entirely when the animator would ignore the move.
        if !w.state.borrow().pointer_effects_enabled() {
            return;
        }
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let (centers, size) = {
            let scene = w.scene.borrow();
            (scene.card_centers(), scene.container_size())
        };
        w.state.borrow_mut().pointer_move(pointer, size, &centers);
    })
}

fn wire_card_clicks(w: &InputWiring) -> Vec<Listener> {
    let cards: Vec<web::HtmlElement> = w.scene.borrow().cards.clone();
    cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let w = w.clone();
            let target: web::EventTarget = card.into();
            Listener::attach(&target, "click", move |ev: web::MouseEvent| {
                if w.state.borrow_mut().click_card(index) {
                    log::debug!("[click] card {}", index);
                    ev.stop_propagation();
                }
            })
        })
        .collect()
}

fn wire_page_click(w: &InputWiring) -> Listener {
    let w = w.clone();
    let document: web::EventTarget = w.scene.borrow().host.document.clone().into();

    Listener::attach(&document, "click", move |_ev: web::MouseEvent| {
        if w.state.borrow_mut().click_background() {
            log::debug!("[click] outside cards, leaving preview");
        }
    })
}
