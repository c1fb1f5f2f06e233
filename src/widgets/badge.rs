use dioxus::prelude::*;

use crate::app::ThemeState;

/// Small token-colored pill.
#[component]
pub fn Badge(label: String, #[props(default = String::from("primarycontainer"))] color: String) -> Element {
    let theme = use_context::<ThemeState>();
    let background = theme.color(&color);
    let foreground = theme.on_color(&color);

    rsx! {
        span {
            style: "display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 0.8rem; font-weight: 600; background: {background}; color: {foreground};",
            "{label}"
        }
    }
}
