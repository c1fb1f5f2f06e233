use dioxus::prelude::*;

use crate::app::ThemeState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Fill,
    Outline,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

impl ButtonSize {
    fn padding(self) -> &'static str {
        match self {
            ButtonSize::Sm => "4px 12px",
            ButtonSize::Md => "8px 16px",
            ButtonSize::Lg => "12px 24px",
        }
    }

    fn font_size(self) -> &'static str {
        match self {
            ButtonSize::Sm => "0.8rem",
            ButtonSize::Md => "0.9rem",
            ButtonSize::Lg => "1rem",
        }
    }
}

/// Token-colored button. Fill paints the token as background with its
/// on-token as text; outline and text keep the token as foreground only.
#[component]
pub fn Button(
    label: String,
    #[props(default = ButtonVariant::Fill)] variant: ButtonVariant,
    #[props(default = String::from("primary"))] color: String,
    #[props(default = ButtonSize::Md)] size: ButtonSize,
    #[props(default)] start_icon: Option<String>,
    #[props(default)] end_icon: Option<String>,
    onclick: EventHandler<()>,
) -> Element {
    let theme = use_context::<ThemeState>();
    let accent = theme.color(&color);
    let (background, foreground, border) = match variant {
        ButtonVariant::Fill => (accent.clone(), theme.on_color(&color), "none".to_string()),
        ButtonVariant::Outline => (
            "transparent".to_string(),
            accent.clone(),
            format!("1px solid {accent}"),
        ),
        ButtonVariant::Text => ("transparent".to_string(), accent.clone(), "none".to_string()),
    };
    let padding = size.padding();
    let font_size = size.font_size();

    rsx! {
        button {
            onclick: move |_| onclick.call(()),
            style: "display: inline-flex; align-items: center; gap: 8px; padding: {padding}; font-size: {font_size}; border-radius: 8px; border: {border}; background: {background}; color: {foreground}; cursor: pointer;",
            if let Some(ref icon) = start_icon {
                span { "{icon}" }
            }
            span { "{label}" }
            if let Some(ref icon) = end_icon {
                span { "{icon}" }
            }
        }
    }
}
