//! WCAG luminance and contrast math.
//!
//! Relative luminance feeds the contrast ratio, which drives the
//! AAA/AA/A ratings and the accessibility checks. All thresholds are
//! named constants so boundary values can be probed precisely.

use crate::color::Rgb;
use serde::Serialize;

/// sRGB channel values at or below this (normalized to [0, 1]) use the
/// linear segment of the gamma curve.
pub const LUMINANCE_LINEAR_THRESHOLD: f64 = 0.03928;

/// Minimum contrast ratio for each WCAG rating (inclusive).
pub const AAA_MIN_RATIO: f64 = 7.0;
pub const AA_MIN_RATIO: f64 = 4.5;
pub const A_MIN_RATIO: f64 = 3.0;

/// Luminance above this picks black text, at or below picks white.
pub const BEST_TEXT_LUMINANCE: f64 = 0.5;

/// WCAG contrast rating for a ratio, from AAA down to Poor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContrastRating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A")]
    A,
    Poor,
}

impl ContrastRating {
    /// Classifies a contrast ratio. Boundaries are inclusive: a ratio of
    /// exactly 7 rates AAA.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_MIN_RATIO {
            ContrastRating::Aaa
        } else if ratio >= AA_MIN_RATIO {
            ContrastRating::Aa
        } else if ratio >= A_MIN_RATIO {
            ContrastRating::A
        } else {
            ContrastRating::Poor
        }
    }
}

impl std::fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastRating::Aaa => write!(f, "AAA"),
            ContrastRating::Aa => write!(f, "AA"),
            ContrastRating::A => write!(f, "A"),
            ContrastRating::Poor => write!(f, "Poor"),
        }
    }
}

/// WCAG conformance level for text accessibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    A,
    Aa,
    Aaa,
}

impl AccessLevel {
    /// The minimum contrast ratio this level requires.
    pub fn min_ratio(self) -> f64 {
        match self {
            AccessLevel::A => A_MIN_RATIO,
            AccessLevel::Aa => AA_MIN_RATIO,
            AccessLevel::Aaa => AAA_MIN_RATIO,
        }
    }

    /// Parses a level name case-insensitively. Anything unrecognized
    /// defaults to AA.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "A" => AccessLevel::A,
            "AAA" => AccessLevel::Aaa,
            _ => AccessLevel::Aa,
        }
    }

    /// The WCAG name of this level.
    pub fn name(self) -> &'static str {
        match self {
            AccessLevel::A => "A",
            AccessLevel::Aa => "AA",
            AccessLevel::Aaa => "AAA",
        }
    }
}

/// WCAG relative luminance in [0, 1].
///
/// Each channel is linearized through the sRGB piecewise gamma curve
/// (linear below [`LUMINANCE_LINEAR_THRESHOLD`], power 2.4 above) and the
/// channels are combined with weights 0.2126 / 0.7152 / 0.0722.
pub fn relative_luminance(c: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let v = f64::from(channel) / 255.0;
        if v <= LUMINANCE_LINEAR_THRESHOLD {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// Perceived brightness as an integer percentage 0-100
/// (`round((299R + 587G + 114B) / 1000)` scaled).
pub fn perceived_brightness(c: Rgb) -> u8 {
    let weighted =
        (299.0 * f64::from(c.r) + 587.0 * f64::from(c.g) + 114.0 * f64::from(c.b)) / 1000.0;
    (weighted / 255.0 * 100.0).round() as u8
}

/// Contrast ratio between two luminances: `(max + 0.05) / (min + 0.05)`.
///
/// Symmetric in its arguments and always >= 1.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// True iff `text` on `bg` meets the contrast requirement of `level`.
pub fn is_accessible_text(bg: Rgb, text: Rgb, level: AccessLevel) -> bool {
    let ratio = contrast_ratio(relative_luminance(bg), relative_luminance(text));
    ratio >= level.min_ratio()
}

/// Black for light backgrounds, white for dark ones.
///
/// A binary heuristic on luminance, not a full contrast search.
pub fn best_text_color(bg: Rgb) -> Rgb {
    if relative_luminance(bg) > BEST_TEXT_LUMINANCE {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Rounds a ratio or luminance to two decimals for display records.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
