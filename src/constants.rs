/// Host page contract and DOM styling constants.
///
/// The host page provides the four elements below; everything else (cards,
/// title words) is created by the gallery and removed again on unmount.
// Required host elements
pub const CONTAINER_SELECTOR: &str = ".gallery-container";
pub const RING_SELECTOR: &str = ".gallery";
pub const TITLE_CONTAINER_SELECTOR: &str = ".title-container";
pub const CAPTION_SELECTOR: &str = ".desc-text";

// Created elements
pub const CARD_CLASS: &str = "card";
pub const WORD_CLASS: &str = "word";
pub const WORD_MASK_CLASS: &str = "word-mask";
pub const DATA_INDEX: &str = "data-index";
pub const DATA_TITLE: &str = "data-title";

// Inline styles
pub const TRANSFORM_ORIGIN: &str = "center center";
pub const WORD_MASK_STYLE: &str = "display:inline-block;overflow:hidden;vertical-align:top";
pub const WORD_STYLE: &str = "display:inline-block";

// Decimal places written into CSS values
pub const CSS_LENGTH_PRECISION: usize = 3;
pub const CSS_SCALE_PRECISION: usize = 4;
