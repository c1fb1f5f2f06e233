use dioxus::prelude::*;

use crate::app::ThemeState;

/// `m:ss` with a leading zero on the seconds.
pub fn format_time(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[component]
pub fn Header(total_seconds: u32) -> Element {
    let theme = use_context::<ThemeState>();
    let on_surface = theme.color("onsurface");
    let primary = theme.color("primary");
    let allowed = format_time(total_seconds);

    rsx! {
        header { style: "text-align: center; margin-bottom: 16px;",
            h1 { style: "color: {on_surface}; margin-bottom: 4px;", "Ultimate Mental Math Quiz" }
            p { style: "color: {on_surface}; opacity: 0.8; margin: 0 0 8px;",
                "Test your arithmetic skills with random math questions!"
            }
            p { style: "color: {primary}; font-weight: 600; margin: 0;", "Time allowed: {allowed}" }
        }
    }
}
