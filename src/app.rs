use dioxus::prelude::*;

use crate::screens::QuizScreen;
use crate::theme::{on_token, spacing, ColorMode, KeyPalette, Theme};
use crate::widgets::{Dropdown, DropdownCoordinator, IconButton};

/// Theme handle shared through context: the generated scheme plus the active
/// color mode. Widgets resolve token strings to hex through this.
#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: Signal<Theme>,
    mode: Signal<ColorMode>,
}

impl ThemeState {
    pub fn color(&self, token: &str) -> String {
        self.theme.read().scheme(*self.mode.read()).color(token).to_string()
    }

    /// Contrasting foreground for a background token.
    pub fn on_color(&self, token: &str) -> String {
        self.color(&on_token(token))
    }

    pub fn mode(&self) -> ColorMode {
        *self.mode.read()
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode.set(mode);
    }
}

#[component]
pub fn App() -> Element {
    let theme = use_signal(|| Theme::from_palette(&KeyPalette::default()));
    let mode = use_signal(|| ColorMode::Light);
    let theme_state = use_context_provider(|| ThemeState { theme, mode });
    use_context_provider(DropdownCoordinator::new);

    let mut deck_size = use_signal(|| 10u32);

    let background = theme_state.color("surface");
    let on_surface = theme_state.color("onsurface");
    let bar_padding = spacing::MD;
    let gap = spacing::SM;
    let mode_glyph = if theme_state.mode().is_dark() { "☀" } else { "☾" };

    rsx! {
        div { style: "font-family: system-ui, sans-serif; min-height: 100vh; background: {background}; color: {on_surface};",
            div { style: "display: flex; justify-content: flex-end; align-items: center; gap: {gap}; padding: {bar_padding};",
                Dropdown {
                    label: format!("{} cards", deck_size()),
                    items: vec!["10 cards".to_string(), "20 cards".to_string(), "30 cards".to_string()],
                    on_select: move |choice: String| {
                        if let Some(n) = choice.split_whitespace().next().and_then(|s| s.parse().ok()) {
                            deck_size.set(n);
                        }
                    },
                }
                IconButton {
                    icon: mode_glyph.to_string(),
                    color: "inversesurface".to_string(),
                    onclick: move |_| {
                        let mut state = theme_state;
                        let next = state.mode().toggled();
                        state.set_mode(next);
                    },
                }
            }
            QuizScreen { key: "{deck_size}", deck_size: deck_size() }
        }
    }
}
