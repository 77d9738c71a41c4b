//! Title text split into word fragments for the staggered reveal.

use crate::constants::*;
use crate::tween::{Animated, Ease};
use smallvec::SmallVec;

/// Split `text` into words on any run of Unicode whitespace.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

#[derive(Clone, Debug)]
pub struct Word {
    pub text: String,
    /// Vertical offset in percent of the word's height; 0 is fully shown.
    pub offset_pct: Animated<f32>,
}

/// Identifies a title node across create/remove notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TitleId(pub u32);

#[derive(Clone, Debug)]
pub struct Title {
    pub id: TitleId,
    pub text: String,
    pub words: SmallVec<[Word; 8]>,
    leaving: bool,
}

impl Title {
    /// New title with every word parked below its line, ready to slide in.
    pub fn new(id: TitleId, text: &str) -> Self {
        let words = split_words(text)
            .into_iter()
            .map(|text| Word {
                text,
                offset_pct: Animated::new(WORD_HIDDEN_BELOW_PCT),
            })
            .collect();
        Self {
            id,
            text: text.to_owned(),
            words,
            leaving: false,
        }
    }

    pub fn reveal(&mut self) {
        for (i, word) in self.words.iter_mut().enumerate() {
            word.offset_pct.animate_to(
                0.0,
                WORD_ENTER_DURATION,
                WORD_ENTER_DELAY + WORD_STAGGER * i as f32,
                Ease::Power4Out,
            );
        }
    }

    /// Slide every word up and out; the title is done once [`Title::is_gone`].
    pub fn hide(&mut self) {
        self.leaving = true;
        for (i, word) in self.words.iter_mut().enumerate() {
            word.offset_pct.animate_to(
                WORD_HIDDEN_ABOVE_PCT,
                WORD_EXIT_DURATION,
                WORD_EXIT_DELAY + WORD_STAGGER * i as f32,
                Ease::Power4Out,
            );
        }
    }

    pub fn advance(&mut self, dt: f32) {
        for word in self.words.iter_mut() {
            word.offset_pct.advance(dt);
        }
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    pub fn is_gone(&self) -> bool {
        self.leaving && self.words.iter().all(|w| !w.offset_pct.is_animating())
    }
}
