//! Color types and conversion functions for colorscope.
//!
//! The canonical representation is [`Rgb`]: three 8-bit channels. Every
//! other format (hex strings, [`Hsl`], [`Hsv`], [`Cmyk`]) is derived from
//! it on demand and never stored independently, so the formats cannot
//! drift apart. Conversions are pure functions.
//!
//! Hex strings are accepted case-insensitively with an optional leading
//! `#` and always serialized uppercase with the `#`.

use crate::error::ColorError;
use crate::prng::Xorshift64;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Warmth above this classifies a color as [`Temperature::Warm`].
pub const WARM_THRESHOLD: f64 = 0.1;
/// Warmth below this classifies a color as [`Temperature::Cool`].
pub const COOL_THRESHOLD: f64 = -0.1;

/// The six legacy web-safe channel levels.
const WEB_SAFE_LEVELS: [u8; 6] = [0, 51, 102, 153, 204, 255];

/// An 8-bit RGB color.
///
/// Channel range is enforced by the type: an `Rgb` value is always a real
/// color, so conversion functions never need to clamp their input.
///
/// Serializes as an uppercase hex string `"#RRGGBB"` for human-readable
/// formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL record with rounded integer components, `h` in [0, 360),
/// `s`/`l` in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// HSV record with rounded integer components, `h` in [0, 360),
/// `s`/`v` in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// CMYK record with rounded integer components in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// Warm/cool classification from the red-blue balance.
///
/// Approximate by design: the boundaries are [`WARM_THRESHOLD`] and
/// [`COOL_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Temperature::Warm => write!(f, "Warm"),
            Temperature::Cool => write!(f, "Cool"),
            Temperature::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Returns true iff `s`, after stripping an optional leading `#`, is
/// exactly 6 or exactly 3 hex digits (case-insensitive).
///
/// Nothing else is valid — not even surrounding whitespace.
pub fn is_valid_hex(s: &str) -> bool {
    let s = s.strip_prefix('#').unwrap_or(s);
    (s.len() == 6 || s.len() == 3) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validates a hex string and normalizes it to the canonical uppercase
/// 6-digit `#RRGGBB` form, expanding the 3-digit shorthand by duplicating
/// each digit.
pub fn normalize_hex(s: &str) -> Result<String, ColorError> {
    if !is_valid_hex(s) {
        return Err(ColorError::InvalidColor(s.to_string()));
    }
    let digits = s.strip_prefix('#').unwrap_or(s);
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    Ok(format!("#{}", expanded.to_ascii_uppercase()))
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a 6-digit hex color like `"#3B82F6"` or `"3b82f6"`
    /// (case insensitive, optional `#`).
    ///
    /// The 3-digit shorthand is deliberately rejected here; callers that
    /// accept it expand via [`normalize_hex`] first. Returns
    /// `ColorError::InvalidColor` for anything that is not exactly 6 hex
    /// digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorError::InvalidColor(hex.to_string()));
        }
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|_| ColorError::InvalidColor(hex.to_string()))?;
        Ok(Rgb { r, g, b })
    }

    /// Formats the color as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the 3-digit shorthand `#RGB` iff every channel's two hex
    /// digits are identical; `None` means "not shortenable", which is
    /// distinct from a parse failure.
    pub fn short_hex(self) -> Option<String> {
        let repeats = |c: u8| (c >> 4) == (c & 0x0F);
        if repeats(self.r) && repeats(self.g) && repeats(self.b) {
            Some(format!(
                "#{:X}{:X}{:X}",
                self.r >> 4,
                self.g >> 4,
                self.b >> 4
            ))
        } else {
            None
        }
    }

    /// Per-channel inversion (`255 - c`). An involution: inverting twice
    /// returns the original color.
    pub fn invert(self) -> Rgb {
        Rgb {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    /// Snaps each channel independently to the nearest of the six legacy
    /// web-safe levels {0, 51, 102, 153, 204, 255}.
    ///
    /// The levels are 51 apart, so no 8-bit value is ever equidistant
    /// from two of them.
    pub fn web_safe(self) -> Rgb {
        fn snap(v: u8) -> u8 {
            WEB_SAFE_LEVELS
                .iter()
                .copied()
                .min_by_key(|&level| (i16::from(level) - i16::from(v)).abs())
                .expect("web-safe level table is non-empty")
        }
        Rgb {
            r: snap(self.r),
            g: snap(self.g),
            b: snap(self.b),
        }
    }

    /// Classifies the color as warm, cool, or neutral from the red-blue
    /// balance `(r - b) / 255`.
    pub fn temperature(self) -> Temperature {
        let warmth = (f64::from(self.r) - f64::from(self.b)) / 255.0;
        if warmth > WARM_THRESHOLD {
            Temperature::Warm
        } else if warmth < COOL_THRESHOLD {
            Temperature::Cool
        } else {
            Temperature::Neutral
        }
    }

    /// The decimal channel listing, e.g. `"59, 130, 246"`.
    pub fn decimal_string(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// The rounded percent channel listing, e.g. `"23%, 51%, 96%"`.
    pub fn percent_string(self) -> String {
        let pct = |c: u8| (f64::from(c) / 255.0 * 100.0).round() as u8;
        format!("{}%, {}%, {}%", pct(self.r), pct(self.g), pct(self.b))
    }

    /// Draws a uniformly distributed color from the full 24-bit range.
    ///
    /// Deterministic for a given PRNG state: equal seeds produce equal
    /// color sequences.
    pub fn random(rng: &mut Xorshift64) -> Rgb {
        let v = rng.next_usize(0x100_0000) as u32;
        Rgb {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Converts RGB to HSL with rounded integer components.
///
/// Hue uses the conventional max-channel branch with wrap-around for
/// negative intermediates, reduced into [0, 360) after rounding.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        (hue_sector(r, g, b, max, d), s)
    };

    Hsl {
        h: round_hue(h),
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Converts RGB to HSV with rounded integer components.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 {
        0.0
    } else {
        hue_sector(r, g, b, max, d)
    };

    Hsv {
        h: round_hue(h),
        s: (s * 100.0).round() as u8,
        v: (max * 100.0).round() as u8,
    }
}

/// Converts RGB to CMYK with rounded integer components.
///
/// Pure black (K = 100) defines C = M = Y = 0 rather than dividing by
/// zero.
pub fn rgb_to_cmyk(c: Rgb) -> Cmyk {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    let (cc, m, y) = if k == 1.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            (1.0 - r - k) / (1.0 - k),
            (1.0 - g - k) / (1.0 - k),
            (1.0 - b - k) / (1.0 - k),
        )
    };

    Cmyk {
        c: (cc * 100.0).round() as u8,
        m: (m * 100.0).round() as u8,
        y: (y * 100.0).round() as u8,
        k: (k * 100.0).round() as u8,
    }
}

/// Converts HSL components to RGB.
///
/// Takes `f64` components (`h` in degrees, `s`/`l` in percent) so that
/// series generators can feed fractional lightness between the integer
/// steps of [`Hsl`]. Out-of-range saturation/lightness are clamped and
/// hue is wrapped into [0, 360).
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

impl Hsl {
    /// Converts back to RGB (8-bit quantization applies).
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }
}

/// Shared hue computation for HSL/HSV: which sextant of the hue wheel the
/// max channel puts the color in, as a fraction in [0, 1).
fn hue_sector(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Rounds a hue fraction to integer degrees in [0, 360).
///
/// Rounding alone can emit 360 for hues just under the wrap point.
fn round_hue(h: f64) -> u16 {
    (((h * 360.0).round() as i32).rem_euclid(360)) as u16
}

/// One channel of the HSL-to-RGB transform.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
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
