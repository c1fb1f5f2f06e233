//! Tone->hex mapping for one key color.
//!
//! A tonal palette keeps the hue and saturation of its seed color and varies
//! only lightness, so `tone(0)` is black, `tone(100)` is white, and the steps
//! between stay recognizably "the same color". This is the small stand-in for
//! the full Material tonal-palette math, which is out of scope here.

/// Hue/saturation pair extracted from a seed color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    saturation: f64,
}

impl TonalPalette {
    /// Build from a `#rrggbb` hex string. `None` if the string does not parse.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let (r, g, b) = parse_hex(hex)?;
        let (hue, saturation, _) = rgb_to_hsl(r, g, b);
        Some(TonalPalette { hue, saturation })
    }

    /// Achromatic palette (plain grays). Fallback for unparseable seeds.
    pub fn neutral() -> Self {
        TonalPalette { hue: 0.0, saturation: 0.0 }
    }

    /// Hex color at the given tone (0 = black .. 100 = white).
    pub fn tone(&self, tone: u8) -> String {
        let lightness = f64::from(tone.min(100)) / 100.0;
        let (r, g, b) = hsl_to_rgb(self.hue, self.saturation, lightness);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// RGB (0-255 each) to HSL: hue in degrees [0, 360), saturation and
/// lightness in [0, 1].
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    } * 60.0;

    (hue, saturation, lightness)
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    if saturation == 0.0 {
        let v = (lightness * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let h = hue / 360.0;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);
    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
