//! Scheme generation: nine seed colors in, full light/dark role maps out.
//!
//! Tone assignments per role follow the Material convention: accents sit at
//! tone 40 (light) / 80 (dark), containers at 90/30, fixed roles at 90/80
//! in both modes, and the neutral group fans out into the surface ladder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tonal::TonalPalette;

/// Looked up when a widget asks for a token the scheme does not carry.
const FALLBACK_HEX: &str = "#000000";

/// The nine seed colors a whole theme is generated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyPalette {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub neutral: String,
    pub neutralvariant: String,
    pub error: String,
    pub warning: String,
    pub success: String,
    pub info: String,
}

impl Default for KeyPalette {
    fn default() -> Self {
        KeyPalette {
            primary: "#035eff".to_string(),
            secondary: "#badcff".to_string(),
            tertiary: "#00ddfe".to_string(),
            neutral: "#000000".to_string(),
            neutralvariant: "#3f4f5b".to_string(),
            error: "#dd305c".to_string(),
            warning: "#feb600".to_string(),
            success: "#0cfecd".to_string(),
            info: "#175bfc".to_string(),
        }
    }
}

impl KeyPalette {
    fn groups(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("tertiary", &self.tertiary),
            ("neutral", &self.neutral),
            ("neutralvariant", &self.neutralvariant),
            ("error", &self.error),
            ("warning", &self.warning),
            ("success", &self.success),
            ("info", &self.info),
        ]
    }

    /// Export the palette as pretty JSON (the theme controller's copy-out).
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Role -> hex map for one color mode. Keys are lowercase token names
/// (`onprimarycontainer`, `surfacecontainerhigh`, ...).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scheme {
    colors: BTreeMap<String, String>,
}

impl Scheme {
    /// Hex for a token, or a plain fallback for tokens outside the scheme.
    /// No validation; token strings are styling keys, not a closed enum.
    pub fn color(&self, token: &str) -> &str {
        self.colors.get(token).map(String::as_str).unwrap_or(FALLBACK_HEX)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.colors.contains_key(token)
    }

    fn set(&mut self, token: &str, hex: String) {
        self.colors.insert(token.to_string(), hex);
    }
}

/// Light and dark schemes generated from one key palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub light: Scheme,
    pub dark: Scheme,
}

impl Theme {
    pub fn from_palette(palette: &KeyPalette) -> Self {
        let mut light = Scheme::default();
        let mut dark = Scheme::default();

        for (group, hex) in palette.groups() {
            let tones = TonalPalette::from_hex(hex).unwrap_or_else(TonalPalette::neutral);
            match group {
                "neutral" => {
                    light.set("background", tones.tone(99));
                    light.set("onbackground", tones.tone(10));
                    light.set("surfacedim", tones.tone(87));
                    light.set("surface", tones.tone(98));
                    light.set("surfacebright", tones.tone(98));
                    light.set("surfacecontainerlowest", "#ffffff".to_string());
                    light.set("surfacecontainerlow", tones.tone(96));
                    light.set("surfacecontainer", tones.tone(94));
                    light.set("surfacecontainerhigh", tones.tone(92));
                    light.set("surfacecontainerhighest", tones.tone(90));
                    light.set("onsurface", tones.tone(10));
                    light.set("inversesurface", tones.tone(20));
                    light.set("inverseonsurface", tones.tone(95));

                    dark.set("background", tones.tone(10));
                    dark.set("onbackground", tones.tone(85));
                    dark.set("surfacecontainerlowest", tones.tone(4));
                    dark.set("surfacedim", tones.tone(6));
                    dark.set("surface", tones.tone(6));
                    dark.set("surfacecontainerlow", tones.tone(10));
                    dark.set("surfacecontainer", tones.tone(12));
                    dark.set("surfacecontainerhigh", tones.tone(17));
                    dark.set("surfacecontainerhighest", tones.tone(22));
                    dark.set("surfacebright", tones.tone(24));
                    dark.set("onsurface", tones.tone(90));
                    dark.set("inversesurface", tones.tone(98));
                    dark.set("inverseonsurface", tones.tone(10));
                }
                "neutralvariant" => {
                    light.set("surfacevariant", tones.tone(80));
                    light.set("onsurfacevariant", tones.tone(40));
                    light.set("outline", tones.tone(60));
                    light.set("outlinevariant", tones.tone(90));

                    dark.set("surfacevariant", tones.tone(20));
                    dark.set("onsurfacevariant", tones.tone(60));
                    dark.set("outline", tones.tone(50));
                    dark.set("outlinevariant", tones.tone(30));
                }
                "primary" | "secondary" | "tertiary" => {
                    set_accent(&mut light, &mut dark, group, &tones);
                    set_fixed(&mut light, group, &tones);
                    set_fixed(&mut dark, group, &tones);
                    if group == "primary" {
                        light.set("inverseprimary", tones.tone(80));
                        dark.set("inverseprimary", tones.tone(80));
                    }
                }
                _ => set_accent(&mut light, &mut dark, group, &tones),
            }
        }

        for scheme in [&mut light, &mut dark] {
            scheme.set("shadow", "#000000".to_string());
            scheme.set("scrim", "#000000".to_string());
            scheme.set("white", "#ffffff".to_string());
        }

        Theme { light, dark }
    }

    pub fn scheme(&self, mode: super::ColorMode) -> &Scheme {
        match mode {
            super::ColorMode::Light => &self.light,
            super::ColorMode::Dark => &self.dark,
        }
    }
}

fn set_accent(light: &mut Scheme, dark: &mut Scheme, group: &str, tones: &TonalPalette) {
    light.set(group, tones.tone(40));
    light.set(&format!("on{group}"), tones.tone(98));
    light.set(&format!("{group}container"), tones.tone(90));
    light.set(&format!("on{group}container"), tones.tone(10));

    dark.set(group, tones.tone(80));
    dark.set(&format!("on{group}"), tones.tone(20));
    dark.set(&format!("{group}container"), tones.tone(30));
    dark.set(&format!("on{group}container"), tones.tone(90));
}

// Fixed roles keep the same tones in both modes.
fn set_fixed(scheme: &mut Scheme, group: &str, tones: &TonalPalette) {
    scheme.set(&format!("{group}fixed"), tones.tone(90));
    scheme.set(&format!("{group}fixeddim"), tones.tone(80));
    scheme.set(&format!("on{group}fixed"), tones.tone(10));
    scheme.set(&format!("on{group}fixedvariant"), tones.tone(30));
}
