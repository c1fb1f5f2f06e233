use dioxus::prelude::*;

use crate::app::ThemeState;
use crate::theme::spacing;

/// Surface container wrapper. Clickable when an onclick handler is given.
#[component]
pub fn Card(
    #[props(default = String::from("surfacecontainerlow"))] bg_color: String,
    #[props(default)] onclick: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let theme = use_context::<ThemeState>();
    let background = theme.color(&bg_color);
    let foreground = theme.on_color(&bg_color);
    let padding = spacing::CARD_PADDING;
    let margin = spacing::SM;
    let cursor = if onclick.is_some() { "pointer" } else { "default" };

    rsx! {
        div {
            style: "background: {background}; color: {foreground}; border-radius: 12px; padding: {padding}; margin: {margin}; cursor: {cursor};",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {children}
        }
    }
}
