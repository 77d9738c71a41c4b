use crate::constants::{WORD_CLASS, WORD_MASK_CLASS, WORD_MASK_STYLE, WORD_STYLE};
use crate::dom::set_style;
use crate::style;
use anyhow::anyhow;
use gallery_core::{Title, TitleId, WORD_HIDDEN_BELOW_PCT};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `<p>` in the title container with one masked span per word.
pub struct TitleNode {
    pub id: TitleId,
    paragraph: web::Element,
    words: Vec<web::HtmlElement>,
}

impl TitleNode {
    pub fn create(
        document: &web::Document,
        container: &web::HtmlElement,
        id: TitleId,
        text: &str,
        words: &[String],
    ) -> anyhow::Result<Self> {
        let paragraph = document
            .create_element("p")
            .map_err(|e| anyhow!("{:?}", e))?;
        _ = paragraph.set_attribute("aria-label", text);

        let mut spans = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                _ = paragraph.append_with_str_1(" ");
            }
            let mask = document
                .create_element("span")
                .map_err(|e| anyhow!("{:?}", e))?;
            mask.set_class_name(WORD_MASK_CLASS);
            _ = mask.set_attribute("style", WORD_MASK_STYLE);
            _ = mask.set_attribute("aria-hidden", "true");

            let span = document
                .create_element("span")
                .map_err(|e| anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|_| anyhow!("word span is not an HTML element"))?;
            span.set_class_name(WORD_CLASS);
            _ = span.set_attribute("style", WORD_STYLE);
            span.set_text_content(Some(word.as_str()));
            set_style(&span, "transform", &style::word_transform(WORD_HIDDEN_BELOW_PCT));

            _ = mask.append_child(&span);
            _ = paragraph.append_child(&mask);
            spans.push(span);
        }

        container
            .append_child(&paragraph)
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            id,
            paragraph,
            words: spans,
        })
    }

    pub fn render(&self, title: &Title) {
        for (el, word) in self.words.iter().zip(title.words.iter()) {
            set_style(el, "transform", &style::word_transform(word.offset_pct.value()));
        }
    }

    pub fn remove(self) {
        self.paragraph.remove();
    }
}
