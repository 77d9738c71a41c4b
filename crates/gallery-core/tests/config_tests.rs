// Host-side tests for configuration defaults, validation and constants.

use gallery_core::*;

#[test]
fn defaults_match_tuning_constants() {
    let c = GalleryConfig::default();
    assert_eq!(c.image_count, 20);
    assert_eq!(c.radius, 275.0);
    assert_eq!(c.sensitivity, 500.0);
    assert_eq!(c.effect_falloff, 250.0);
    assert_eq!(c.card_move_amount, 50.0);
    assert_eq!(c.lerp_factor, 0.15);
    assert!(!c.is_mobile);
    assert!(c.validate().is_ok());
}

#[test]
fn mobile_flag_follows_breakpoint() {
    assert!(GalleryConfig::for_viewport(999.0).is_mobile);
    assert!(!GalleryConfig::for_viewport(1000.0).is_mobile);
    assert!(!GalleryConfig::for_viewport(1920.0).is_mobile);
}

#[test]
fn validation_names_the_bad_field() {
    let base = GalleryConfig::default();
    let cases = [
        (
            GalleryConfig {
                radius: 0.0,
                ..base.clone()
            },
            ConfigError::Radius(0.0),
        ),
        (
            GalleryConfig {
                sensitivity: -1.0,
                ..base.clone()
            },
            ConfigError::Sensitivity(-1.0),
        ),
        (
            GalleryConfig {
                effect_falloff: 0.0,
                ..base.clone()
            },
            ConfigError::Falloff(0.0),
        ),
        (
            GalleryConfig {
                lerp_factor: 1.5,
                ..base.clone()
            },
            ConfigError::LerpFactor(1.5),
        ),
        (
            GalleryConfig {
                card_move_amount: -3.0,
                ..base.clone()
            },
            ConfigError::MoveAmount(-3.0),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
}

#[test]
fn nan_lerp_factor_is_rejected() {
    let c = GalleryConfig {
        lerp_factor: f32::NAN,
        ..GalleryConfig::default()
    };
    assert!(matches!(c.validate(), Err(ConfigError::LerpFactor(_))));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ConfigError::Radius(-2.0).to_string(),
        "ring radius must be positive, got -2"
    );
    assert_eq!(ConfigError::EmptyCollection.to_string(), "image collection is empty");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn choreography_constants_are_consistent() {
    // cards finish flattening before the ring settles
    assert!(FLATTEN_CARD_DURATION < ENTER_RING_DURATION);
    assert!(PARALLAX_RESET_DURATION < ENTER_RING_DURATION);
    // the falloff lies inside the sensitivity radius
    assert!(DEFAULT_EFFECT_FALLOFF <= DEFAULT_SENSITIVITY);
    assert!(DEFAULT_LERP_FACTOR > 0.0 && DEFAULT_LERP_FACTOR < 1.0);
    assert!(WORD_HIDDEN_ABOVE_PCT < 0.0 && WORD_HIDDEN_BELOW_PCT > 0.0);
}
