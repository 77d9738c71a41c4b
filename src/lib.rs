#![cfg(target_arch = "wasm32")]
//! Browser binding for the ring gallery.
//!
//! JS mounts the gallery with [`mount_gallery`] once the host markup exists
//! and calls [`GalleryHandle::unmount`] when the component goes away. When the
//! host page lacks a required element the gallery stays in its *disabled*
//! mode: `mount_gallery` returns `undefined`, nothing is created and the page
//! keeps its static markup.

use gallery_core::{Collection, GalleryConfig, GalleryState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod style;
mod title;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ring-gallery loaded");
    Ok(())
}

/// Mount-time overrides; anything left unset uses the built-in defaults.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct GalleryOptions {
    image_count: Option<u32>,
    radius: Option<f32>,
    root_selector: Option<String>,
}

#[wasm_bindgen]
impl GalleryOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(setter)]
    pub fn set_image_count(&mut self, value: u32) {
        self.image_count = Some(value);
    }

    #[wasm_bindgen(setter)]
    pub fn set_radius(&mut self, value: f32) {
        self.radius = Some(value);
    }

    /// Restrict the host element lookup to the subtree under this selector.
    #[wasm_bindgen(setter)]
    pub fn set_root_selector(&mut self, value: String) {
        self.root_selector = Some(value);
    }
}

impl GalleryOptions {
    fn config(&self, viewport_width: f32) -> GalleryConfig {
        let mut config = GalleryConfig::for_viewport(viewport_width);
        if let Some(n) = self.image_count {
            config.image_count = n as usize;
        }
        if let Some(r) = self.radius {
            config.radius = r;
        }
        config
    }
}

struct Mounted {
    state: Rc<RefCell<GalleryState>>,
    scene: Rc<RefCell<render::Scene>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<events::Listener>,
}

#[wasm_bindgen]
pub struct GalleryHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// Stop the frame loop, detach listeners and remove every created node.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        let Some(m) = self.mounted.take() else {
            return;
        };
        m.frame_loop.cancel();
        drop(m.listeners);
        m.state.borrow_mut().unmount();
        m.scene.borrow_mut().teardown();
        log::info!("[gallery] unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn is_preview_active(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.state.borrow().is_preview_active())
    }

    pub fn is_transitioning(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.state.borrow().is_transitioning())
    }
}

impl Drop for GalleryHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Build the gallery into the host page. Returns `None` (disabled mode) when
/// the page cannot host it.
#[wasm_bindgen]
pub fn mount_gallery(options: Option<GalleryOptions>) -> Option<GalleryHandle> {
    let options = options.unwrap_or_default();
    match mount(&options) {
        Ok(mounted) => Some(GalleryHandle {
            mounted: Some(mounted),
        }),
        Err(e) => {
            log::warn!("[gallery] disabled: {:#}", e);
            None
        }
    }
}

fn mount(options: &GalleryOptions) -> anyhow::Result<Mounted> {
    let host = dom::Host::probe(options.root_selector.as_deref())?;
    let config = options.config(host.viewport_width());
    let state = GalleryState::new(config, &Collection::default())?;
    let scene = render::Scene::new(host, &state)?;
    log::info!(
        "[gallery] mounted {} cards (mobile={})",
        state.cards().len(),
        state.config().is_mobile
    );

    let state = Rc::new(RefCell::new(state));
    let scene = Rc::new(RefCell::new(scene));
    let listeners = events::wire_input_handlers(events::InputWiring {
        state: state.clone(),
        scene: scene.clone(),
    });
    let frame_loop = frame::start_loop(frame::FrameContext {
        state: state.clone(),
        scene: scene.clone(),
        last_instant: Instant::now(),
    });

    Ok(Mounted {
        state,
        scene,
        frame_loop,
        listeners,
    })
}
