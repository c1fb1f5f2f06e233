//! App theme: token vocabulary, on-token derivation, scheme generation, spacing.

pub mod scheme;
pub mod tokens;
pub mod tonal;

pub use scheme::{KeyPalette, Scheme, Theme};
pub use tokens::{has_own_on_token, on_token, TOKENS_WITHOUT_ON, TOKENS_WITH_ON};
pub use tonal::TonalPalette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// 8dp grid spacing (Material 3).
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const CARD_PADDING: &str = "16px";
    pub const SCREEN_PADDING: &str = "16px";
}
