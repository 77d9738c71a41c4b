// Host-side tests for the host page contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn host_selectors_are_class_selectors() {
    for sel in [
        CONTAINER_SELECTOR,
        RING_SELECTOR,
        TITLE_CONTAINER_SELECTOR,
        CAPTION_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
        assert!(!sel.contains(' '), "{sel}");
    }
}

#[test]
fn host_selectors_are_distinct() {
    let mut all = vec![
        CONTAINER_SELECTOR,
        RING_SELECTOR,
        TITLE_CONTAINER_SELECTOR,
        CAPTION_SELECTOR,
    ];
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 4);
}

#[test]
fn created_class_names_do_not_collide_with_host() {
    for class in [CARD_CLASS, WORD_CLASS, WORD_MASK_CLASS] {
        let as_selector = format!(".{class}");
        assert_ne!(as_selector, CONTAINER_SELECTOR);
        assert_ne!(as_selector, RING_SELECTOR);
        assert_ne!(as_selector, TITLE_CONTAINER_SELECTOR);
        assert_ne!(as_selector, CAPTION_SELECTOR);
    }
}

#[test]
fn word_mask_clips_overflow() {
    assert!(WORD_MASK_STYLE.contains("overflow:hidden"));
    assert!(WORD_STYLE.contains("inline-block"));
}

#[test]
fn data_attributes_are_valid_names() {
    assert!(DATA_INDEX.starts_with("data-"));
    assert!(DATA_TITLE.starts_with("data-"));
}
