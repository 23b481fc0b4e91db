use crate::constants::*;
use crate::dom;
use crate::style;
use coune_core::{Element, EntranceTimeline, UiFrame};
use web_sys as web;

/// Page elements whose inline style the UI loop drives.
#[derive(Default)]
pub struct PageElements {
    hero: Option<web::HtmlElement>,
    /// Each hero word with its letters.
    hero_words: Vec<(web::HtmlElement, Vec<web::HtmlElement>)>,
    nav: Option<web::HtmlElement>,
    background: Option<web::HtmlElement>,
    cursor: Option<web::HtmlElement>,
    rolling_text: Option<web::HtmlElement>,
    sub_header: Option<web::HtmlElement>,
    shown_phrase: Option<&'static str>,
}

impl PageElements {
    pub fn find(document: &web::Document) -> Self {
        let hero_words: Vec<_> = dom::elements_by_selector(document, HERO_WORD_SELECTOR)
            .into_iter()
            .map(|word| {
                let letters = dom::descendants_by_selector(&word, HERO_LETTER_SELECTOR);
                (word, letters)
            })
            .collect();
        log::info!(
            "[dom] {} hero words, {} letters",
            hero_words.len(),
            hero_words.iter().map(|(_, l)| l.len()).sum::<usize>()
        );
        Self {
            hero: dom::element_by_id(document, HERO_ID),
            hero_words,
            nav: dom::element_by_id(document, NAV_ID),
            background: dom::element_by_id(document, BACKGROUND_LAYER_ID),
            cursor: dom::element_by_id(document, CURSOR_ID),
            rolling_text: dom::element_by_id(document, ROLLING_TEXT_ID),
            sub_header: dom::element_by_id(document, SUB_HEADER_ID),
            shown_phrase: None,
        }
    }

    pub fn apply(&mut self, ui: &UiFrame, timeline: &EntranceTimeline) {
        if let Some(el) = &self.hero {
            dom::set_style(el, "opacity", &style::opacity(&ui.hero));
            dom::set_style(el, "transform", &style::transform(&ui.hero));
        }
        for (word, (word_el, letters)) in self.hero_words.iter().enumerate() {
            let props = timeline.sample(Element::HeroWord(word), ui.elapsed);
            dom::set_style(word_el, "opacity", &style::opacity(&props));
            dom::set_style(word_el, "transform", &style::transform(&props));
            for (index, el) in letters.iter().enumerate() {
                let props = timeline.sample(Element::HeroLetter { word, index }, ui.elapsed);
                dom::set_style(el, "opacity", &style::opacity(&props));
                dom::set_style(el, "transform", &style::transform(&props));
            }
        }
        if let Some(el) = &self.nav {
            dom::set_style(el, "opacity", &style::opacity(&ui.navigation));
            dom::set_style(el, "transform", &style::transform(&ui.navigation));
            _ = el
                .class_list()
                .toggle_with_force(NAV_SCROLLED_CLASS, ui.navigation_scrolled);
        }
        if let Some(el) = &self.background {
            dom::set_style(el, "opacity", &style::opacity(&ui.background));
        }
        if let Some(el) = &self.cursor {
            dom::set_style(el, "opacity", &style::opacity(&ui.cursor));
            dom::set_style(
                el,
                "transform",
                &style::cursor_transform(ui.cursor_position, &ui.cursor),
            );
        }
        if let Some(el) = &self.sub_header {
            dom::set_style(el, GLITCH_CSS_VAR, &style::glitch(ui.glitch_intensity));
        }
        if self.shown_phrase != Some(ui.phrase) {
            if let Some(el) = &self.rolling_text {
                el.set_text_content(Some(ui.phrase));
            }
            self.shown_phrase = Some(ui.phrase);
        }
    }
}
