//! Platform-free core of the ring gallery: layout, pointer animator, tweens
//! and the preview state machine. The web frontend drives it from DOM events
//! and `requestAnimationFrame`.

pub mod animator;
pub mod collection;
pub mod config;
pub mod constants;
pub mod layout;
pub mod preview;
pub mod smoothing;
pub mod state;
pub mod text;
pub mod tween;

pub use animator::*;
pub use collection::*;
pub use config::*;
pub use constants::*;
pub use layout::*;
pub use preview::*;
pub use smoothing::*;
pub use state::*;
pub use text::*;
pub use tween::*;
