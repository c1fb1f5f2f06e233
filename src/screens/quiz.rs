use dioxus::prelude::*;
use rand::seq::SliceRandom;

use crate::math_generator::build_deck;
use crate::screens::{CardCounter, FlashcardCard, Header};
use crate::theme::spacing;
use crate::widgets::{Button, ButtonSize, ButtonVariant};

/// Time budget shown in the header: two seconds per card.
pub const SECONDS_PER_CARD: u32 = 2;

/// Owns the shuffled deck and the paging state. Previous/Next wrap around.
#[component]
pub fn QuizScreen(#[props(default = 10)] deck_size: u32) -> Element {
    let deck = use_signal(|| {
        let mut rng = rand::thread_rng();
        let mut cards = build_deck(deck_size, &mut rng);
        cards.shuffle(&mut rng);
        cards
    });
    let mut current = use_signal(|| 0usize);

    let total = deck.read().len();
    let card = deck.read().get(current()).cloned();
    let padding = spacing::SCREEN_PADDING;

    rsx! {
        div { style: "max-width: 640px; margin: 0 auto; padding: {padding};",
            Header { total_seconds: SECONDS_PER_CARD * total as u32 }
            CardCounter { current_index: current(), total }
            if let Some(card) = card {
                FlashcardCard { key: "{current()}", card, index: current() + 1 }
            }
            ControlButtons {
                on_previous: move |_| {
                    let i = current();
                    current.set(if i == 0 { total.saturating_sub(1) } else { i - 1 });
                },
                on_next: move |_| {
                    let i = current();
                    current.set(if i + 1 >= total { 0 } else { i + 1 });
                },
            }
        }
    }
}

#[component]
pub fn ControlButtons(on_previous: EventHandler<()>, on_next: EventHandler<()>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: center; gap: 16px; margin-top: 16px;",
            Button {
                label: "Previous",
                variant: ButtonVariant::Outline,
                color: "secondary".to_string(),
                size: ButtonSize::Lg,
                start_icon: "«".to_string(),
                onclick: move |_| on_previous.call(()),
            }
            Button {
                label: "Next",
                variant: ButtonVariant::Outline,
                color: "secondary".to_string(),
                size: ButtonSize::Lg,
                end_icon: "»".to_string(),
                onclick: move |_| on_next.call(()),
            }
        }
    }
}
