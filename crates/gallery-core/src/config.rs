//! Fixed gallery configuration, read-only after mount.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("ring radius must be positive, got {0}")]
    Radius(f32),
    #[error("pointer sensitivity must be positive, got {0}")]
    Sensitivity(f32),
    #[error("effect falloff must be positive, got {0}")]
    Falloff(f32),
    #[error("lerp factor must lie in (0, 1], got {0}")]
    LerpFactor(f32),
    #[error("card move amount must be finite and non-negative, got {0}")]
    MoveAmount(f32),
    #[error("image collection is empty")]
    EmptyCollection,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub image_count: usize,
    pub radius: f32,
    pub sensitivity: f32,
    pub effect_falloff: f32,
    pub card_move_amount: f32,
    pub lerp_factor: f32,
    /// Set for narrow viewports; disables every pointer effect.
    pub is_mobile: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_count: DEFAULT_IMAGE_COUNT,
            radius: DEFAULT_RADIUS,
            sensitivity: DEFAULT_SENSITIVITY,
            effect_falloff: DEFAULT_EFFECT_FALLOFF,
            card_move_amount: DEFAULT_CARD_MOVE_AMOUNT,
            lerp_factor: DEFAULT_LERP_FACTOR,
            is_mobile: false,
        }
    }
}

impl GalleryConfig {
    /// Default configuration with the mobile flag derived from the viewport width.
    pub fn for_viewport(width_px: f32) -> Self {
        Self {
            is_mobile: is_mobile_width(width_px),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.radius) {
            return Err(ConfigError::Radius(self.radius));
        }
        if !is_positive(self.sensitivity) {
            return Err(ConfigError::Sensitivity(self.sensitivity));
        }
        if !is_positive(self.effect_falloff) {
            return Err(ConfigError::Falloff(self.effect_falloff));
        }
        if !(self.lerp_factor > 0.0 && self.lerp_factor <= 1.0) {
            return Err(ConfigError::LerpFactor(self.lerp_factor));
        }
        if !(self.card_move_amount.is_finite() && self.card_move_amount >= 0.0) {
            return Err(ConfigError::MoveAmount(self.card_move_amount));
        }
        Ok(())
    }
}

#[inline]
fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[inline]
pub fn is_mobile_width(width_px: f32) -> bool {
    width_px < MOBILE_BREAKPOINT_PX
}
