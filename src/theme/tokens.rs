//! Semantic color-token names and the on-token derivation cascade.
//!
//! `on_token` picks the foreground ("on") token that contrasts with a given
//! background token. The rules are an ordered cascade over the token's shape;
//! the first match wins, and anything unrecognized falls through to the
//! generic `on<token>` form rather than erroring.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tokens that have a dedicated `on<token>` partner in the scheme.
pub const TOKENS_WITH_ON: &[&str] = &[
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
    "surfacecontainerlowest",
    "surfacecontainerlow",
    "surfacecontainer",
    "surfacecontainerhigh",
    "surfacecontainerhighest",
    "inversesurface",
    "primaryfixed",
    "secondaryfixed",
    "tertiaryfixed",
];

/// Tokens without a dedicated partner; their on-color is derived.
pub const TOKENS_WITHOUT_ON: &[&str] = &[
    "onprimaryfixed",
    "primaryfixeddim",
    "onprimaryfixedvariant",
    "onsecondaryfixed",
    "secondaryfixeddim",
    "onsecondaryfixedvariant",
    "ontertiaryfixed",
    "tertiaryfixeddim",
    "ontertiaryfixedvariant",
    "surfacedim",
    "surfacebright",
    "outline",
    "outlinevariant",
];

static WITH_ON: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TOKENS_WITH_ON.iter().copied().collect());

/// Whether `token` has a dedicated `on<token>` partner (as opposed to a
/// derived or shared one).
pub fn has_own_on_token(token: &str) -> bool {
    WITH_ON.contains(token)
}

/// Derive the on-token paired with `token`.
///
/// Rules, in precedence order (first match wins):
/// 1. already an on-token (`on*` / `inverseon*`): hand back the base token
/// 2. surface container / dim / bright family: `onsurface`
/// 3. `inversesurface`, `inverseprimary`, `shadow`, `scrim`: special cases
/// 4. fixed family (`*fixed`, `*fixeddim`, `*fixedvariant`): suffix rewrites
/// 5. `outline` / `outlinevariant`: `onsurfacevariant`
/// 6. anything else: `on<token>` (lenient fallback, unknown tokens included)
pub fn on_token(token: &str) -> String {
    if token.starts_with("on") || token.starts_with("inverseon") {
        if token == "inverseonsurface" {
            return "inversesurface".to_string();
        }
        return token[2..].to_string();
    }

    match token {
        "surfacecontainerlowest" | "surfacecontainerlow" | "surfacecontainer"
        | "surfacecontainerhigh" | "surfacecontainerhighest" | "surfacedim"
        | "surfacebright" => return "onsurface".to_string(),
        "inversesurface" => return "inverseonsurface".to_string(),
        "inverseprimary" => return "onprimarycontainer".to_string(),
        "shadow" | "scrim" => return "white".to_string(),
        _ => {}
    }

    // Suffix rewrites apply only inside the fixed family; without that scope
    // `surfacevariant` would derive `onsurfacefixed` instead of falling
    // through to the default.
    if token.contains("fixed") {
        if token.ends_with("fixed") {
            return format!("on{token}");
        }
        if token.ends_with("dim") {
            if let Some(root) = token.get(..token.len() - 3) {
                return format!("on{root}variant");
            }
        }
        if token.ends_with("variant") {
            if let Some(root) = token.get(..token.len() - 8) {
                return format!("on{root}fixed");
            }
        }
    }

    if token == "outline" || token == "outlinevariant" {
        return "onsurfacevariant".to_string();
    }

    format!("on{token}")
}
