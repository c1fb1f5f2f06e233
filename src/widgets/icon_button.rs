use dioxus::prelude::*;

use crate::app::ThemeState;

/// Round single-glyph button; glyph color comes from the token's on-token.
#[component]
pub fn IconButton(
    icon: String,
    #[props(default = String::from("primary"))] color: String,
    onclick: EventHandler<()>,
) -> Element {
    let theme = use_context::<ThemeState>();
    let background = theme.color(&color);
    let foreground = theme.on_color(&color);

    rsx! {
        button {
            onclick: move |_| onclick.call(()),
            style: "width: 40px; height: 40px; border-radius: 50%; border: none; display: inline-flex; align-items: center; justify-content: center; font-size: 1.1rem; background: {background}; color: {foreground}; cursor: pointer;",
            "{icon}"
        }
    }
}
