//! Scheme generation tests: tone assignments, token coverage, palette export.

use mathdeck::theme::{
    on_token, ColorMode, KeyPalette, Theme, TonalPalette, TOKENS_WITHOUT_ON, TOKENS_WITH_ON,
};
use pretty_assertions::assert_eq;

fn default_theme() -> Theme {
    Theme::from_palette(&KeyPalette::default())
}

#[test]
fn light_and_dark_schemes_differ() {
    let theme = default_theme();
    assert_ne!(theme.light.color("primary"), theme.dark.color("primary"));
    assert_ne!(theme.light.color("surface"), theme.dark.color("surface"));
}

#[test]
fn fixed_roles_are_identical_in_both_modes() {
    let theme = default_theme();
    for token in ["primaryfixed", "primaryfixeddim", "onprimaryfixed", "onprimaryfixedvariant"] {
        assert_eq!(theme.light.color(token), theme.dark.color(token), "token: {token}");
    }
}

#[test]
fn constant_roles() {
    let theme = default_theme();
    assert_eq!(theme.light.color("white"), "#ffffff");
    assert_eq!(theme.light.color("shadow"), "#000000");
    assert_eq!(theme.light.color("scrim"), "#000000");
    assert_eq!(theme.light.color("surfacecontainerlowest"), "#ffffff");
}

#[test]
fn every_vocabulary_token_resolves_to_a_hex_color() {
    let theme = default_theme();
    for mode in [ColorMode::Light, ColorMode::Dark] {
        let scheme = theme.scheme(mode);
        for token in TOKENS_WITH_ON.iter().chain(TOKENS_WITHOUT_ON) {
            assert!(scheme.contains(token), "missing role: {token}");
            let hex = scheme.color(token);
            assert!(hex.starts_with('#') && hex.len() == 7, "bad hex for {token}: {hex}");
        }
    }
}

#[test]
fn derived_on_tokens_exist_in_the_scheme() {
    let theme = default_theme();
    let scheme = theme.scheme(ColorMode::Light);
    for token in TOKENS_WITH_ON
        .iter()
        .chain(TOKENS_WITHOUT_ON.iter().filter(|t| !t.starts_with("on")))
    {
        let on = on_token(token);
        assert!(scheme.contains(&on), "{token} derives missing role {on}");
    }
}

#[test]
fn unknown_tokens_get_the_fallback_color() {
    let theme = default_theme();
    assert_eq!(theme.light.color("notatoken"), "#000000");
}

#[test]
fn tonal_palette_endpoints() {
    let tones = TonalPalette::from_hex("#035eff").expect("seed parses");
    assert_eq!(tones.tone(0), "#000000");
    assert_eq!(tones.tone(100), "#ffffff");
}

#[test]
fn achromatic_seed_stays_gray() {
    let tones = TonalPalette::from_hex("#000000").expect("seed parses");
    assert_eq!(tones.tone(50), "#808080");
}

#[test]
fn bad_seeds_do_not_parse() {
    assert!(TonalPalette::from_hex("zzz").is_none());
    assert!(TonalPalette::from_hex("#12345").is_none());
    assert!(TonalPalette::from_hex("#1234567").is_none());
}

#[test]
fn palette_exports_and_reimports_as_json() {
    let palette = KeyPalette::default();
    let json = palette.to_json();
    let back: KeyPalette = serde_json::from_str(&json).expect("palette json parses");
    assert_eq!(back, palette);
}
