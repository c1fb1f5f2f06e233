//! On-token derivation tests: literal mappings, precedence, round-trips,
//! the lenient fallback.

use mathdeck::theme::{has_own_on_token, on_token};
use pretty_assertions::assert_eq;

#[test]
fn known_mappings() {
    assert_eq!(on_token("surfacecontainerhigh"), "onsurface");
    assert_eq!(on_token("outline"), "onsurfacevariant");
    assert_eq!(on_token("inverseprimary"), "onprimarycontainer");
    assert_eq!(on_token("shadow"), "white");
    assert_eq!(on_token("scrim"), "white");
    // dim strips its suffix and picks up the variant form
    assert_eq!(on_token("primaryfixeddim"), "onprimaryfixedvariant");
}

#[test]
fn surface_family_maps_to_onsurface() {
    for token in [
        "surfacecontainerlowest",
        "surfacecontainerlow",
        "surfacecontainer",
        "surfacecontainerhigh",
        "surfacecontainerhighest",
        "surfacedim",
        "surfacebright",
    ] {
        assert_eq!(on_token(token), "onsurface", "token: {token}");
    }
}

#[test]
fn fixed_tokens_gain_and_shed_the_on_prefix() {
    assert_eq!(on_token("primaryfixed"), "onprimaryfixed");
    assert_eq!(on_token("onprimaryfixed"), "primaryfixed");
    assert_eq!(on_token("tertiaryfixeddim"), "ontertiaryfixedvariant");
}

#[test]
fn variant_outside_the_fixed_family_is_not_rewritten() {
    // `surfacevariant` and `outlinevariant` must not derive a fixed token.
    assert_eq!(on_token("surfacevariant"), "onsurfacevariant");
    assert_eq!(on_token("outlinevariant"), "onsurfacevariant");
}

#[test]
fn inverse_surface_pair_round_trips() {
    assert_eq!(on_token("inversesurface"), "inverseonsurface");
    assert_eq!(on_token("inverseonsurface"), "inversesurface");
}

#[test]
fn documented_pairs_round_trip() {
    // Every token whose on-token is the plain `on` prefix comes straight back.
    for token in [
        "primary",
        "primarycontainer",
        "secondary",
        "secondarycontainer",
        "tertiary",
        "tertiarycontainer",
        "error",
        "errorcontainer",
        "success",
        "successcontainer",
        "warning",
        "warningcontainer",
        "info",
        "infocontainer",
        "background",
        "surface",
        "surfacevariant",
        "primaryfixed",
        "secondaryfixed",
        "tertiaryfixed",
    ] {
        assert_eq!(on_token(token), format!("on{token}"), "token: {token}");
        assert_eq!(on_token(&on_token(token)), token, "round trip: {token}");
    }
}

#[test]
fn unknown_tokens_fall_back_to_the_generic_prefix() {
    assert_eq!(on_token("magenta"), "onmagenta");
    assert_eq!(on_token(""), "on");
}

#[test]
fn vocabulary_split() {
    assert!(has_own_on_token("primary"));
    assert!(has_own_on_token("inversesurface"));
    assert!(!has_own_on_token("outline"));
    assert!(!has_own_on_token("primaryfixeddim"));
    assert!(!has_own_on_token("magenta"));
}
