use std::f32::consts::PI;

// Shared layout/animation tuning constants used by the gallery core and the web frontend.

// Ring layout
pub const DEFAULT_IMAGE_COUNT: usize = 20;
pub const DEFAULT_RADIUS: f32 = 275.0;
pub const CARD_FACING_OFFSET_DEG: f32 = 90.0; // turns a card's face toward the ring centre
pub const MOUNT_PERSPECTIVE: f32 = 800.0; // perspective applied when cards are first placed
pub const FRAME_PERSPECTIVE: f32 = 1000.0; // perspective applied by the per-frame animator

// Pointer reaction
pub const DEFAULT_SENSITIVITY: f32 = 500.0; // px, beyond this a card returns to neutral
pub const DEFAULT_EFFECT_FALLOFF: f32 = 250.0; // px, distance at which the flip factor reaches 0
pub const DEFAULT_CARD_MOVE_AMOUNT: f32 = 50.0; // px, max radial displacement
pub const DEFAULT_LERP_FACTOR: f32 = 0.15; // fraction of remaining distance closed per frame
pub const MAX_FLIP_DEG: f32 = 180.0;
pub const FLIP_SCALE_BOOST: f32 = 0.3;

// Parallax gains (degrees per unit of normalized pointer offset)
pub const PARALLAX_TILT_DEG: f32 = 15.0;
pub const PARALLAX_DEPTH_DEG: f32 = 5.0;

// Viewports narrower than this get no pointer effects
pub const MOBILE_BREAKPOINT_PX: f32 = 1000.0;

// Preview choreography
pub const FRONT_ANGLE: f32 = PI * 3.0 / 2.0; // ring angle that faces the viewer
pub const PREVIEW_RING_SCALE: f32 = 5.0;
pub const PREVIEW_RING_Y: f32 = 1300.0;
pub const PREVIEW_EXTRA_TURN_DEG: f32 = 360.0;
pub const ENTER_RING_DURATION: f32 = 2.0;
pub const EXIT_RING_DURATION: f32 = 1.5;
pub const FLATTEN_CARD_DURATION: f32 = 1.25;
pub const PARALLAX_RESET_DURATION: f32 = 0.5;

// Title word reveal/hide (offsets in percent of the word's own height)
pub const WORD_HIDDEN_BELOW_PCT: f32 = 125.0;
pub const WORD_HIDDEN_ABOVE_PCT: f32 = -125.0;
pub const WORD_STAGGER: f32 = 0.1;
pub const WORD_ENTER_DURATION: f32 = 0.75;
pub const WORD_ENTER_DELAY: f32 = 1.25;
pub const WORD_EXIT_DURATION: f32 = 0.5;
pub const WORD_EXIT_DELAY: f32 = 0.5;

// Ambient caption fade
pub const CAPTION_FADE_OUT_DURATION: f32 = 0.5;
pub const CAPTION_FADE_OUT_DELAY: f32 = 0.25;
pub const CAPTION_FADE_IN_DURATION: f32 = 0.75;
pub const CAPTION_FADE_IN_DELAY: f32 = 1.0;

// Largest frame step fed to tweens; a backgrounded tab resumes without a jump
pub const MAX_FRAME_DT: f32 = 0.1;
