use dioxus::prelude::*;

use crate::app::ThemeState;
use crate::math_generator::Flashcard;
use crate::widgets::{Badge, Card};

/// `"3 / 10 (7 left)"` for a zero-based index into a deck.
pub fn counter_text(current_index: usize, total: usize) -> String {
    let left = total.saturating_sub(current_index + 1);
    format!("{} / {} ({} left)", current_index + 1, total, left)
}

#[component]
pub fn CardCounter(current_index: usize, total: usize) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: center; margin-bottom: 8px;",
            Badge { label: counter_text(current_index, total), color: "secondarycontainer".to_string() }
        }
    }
}

/// One card: question side up, answer side after a click. Flip state resets
/// when the parent remounts it with a new key.
#[component]
pub fn FlashcardCard(card: Flashcard, index: usize) -> Element {
    let mut flipped = use_signal(|| false);
    let theme = use_context::<ThemeState>();
    let hint = theme.color("onsurfacevariant");

    rsx! {
        Card {
            bg_color: "surfacecontainerhigh".to_string(),
            onclick: move |_| {
                let showing_answer = flipped();
                flipped.set(!showing_answer);
            },
            div { style: "min-height: 180px; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; user-select: none;",
                if flipped() {
                    h2 { style: "margin: 0 0 8px;", "Answer" }
                    p { style: "font-size: 2rem; font-weight: 600; margin: 0;", "{card.answer}" }
                } else {
                    h2 { style: "margin: 0 0 8px;", "Question {index}" }
                    p { style: "font-size: 2rem; font-weight: 600; margin: 0;", "{card.question}" }
                }
                p { style: "color: {hint}; font-size: 0.8rem; margin-top: 16px;", "Click to flip" }
            }
        }
    }
}
