//! UI theme generation from a single brand color.
//!
//! A [`Theme`] derives light/dark variants and companion hues from the
//! base, pairs every surface with a readable text color, and carries the
//! fixed status colors. Serializes with each entry as a hex string.

use colorscope_core::adjust::{lighten, shift_hue};
use colorscope_core::contrast::{
    best_text_color, contrast_ratio, is_accessible_text, relative_luminance, AccessLevel,
};
use colorscope_core::Rgb;
use serde::Serialize;

/// Lightness delta between the primary color and its light/dark pair.
pub const PRIMARY_LIGHTNESS_DELTA: f64 = 20.0;
/// Hue offset of the accent color from the primary.
pub const ACCENT_HUE_OFFSET: f64 = 60.0;

/// Fixed status and surface colors shared by every theme.
const SUCCESS: Rgb = Rgb::new(0x4C, 0xAF, 0x50);
const WARNING: Rgb = Rgb::new(0xFF, 0x98, 0x00);
const ERROR: Rgb = Rgb::new(0xF4, 0x43, 0x36);
const INFO: Rgb = Rgb::new(0x21, 0x96, 0xF3);
const BACKGROUND: Rgb = Rgb::WHITE;
const SURFACE: Rgb = Rgb::new(0xF5, 0xF5, 0xF5);

/// The standard text colors tried when pairing text with a background.
pub const TEXT_CANDIDATES: [Rgb; 6] = [
    Rgb::WHITE,
    Rgb::BLACK,
    Rgb::new(0xF5, 0xF5, 0xF5),
    Rgb::new(0x33, 0x33, 0x33),
    Rgb::new(0x66, 0x66, 0x66),
    Rgb::new(0x99, 0x99, 0x99),
];

/// A full application color theme derived from one base color.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub primary: Rgb,
    pub primary_light: Rgb,
    pub primary_dark: Rgb,
    /// The complement of the primary.
    pub secondary: Rgb,
    /// The primary rotated by [`ACCENT_HUE_OFFSET`] degrees.
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub info: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
    pub on_primary: Rgb,
    pub on_secondary: Rgb,
    pub on_background: Rgb,
    pub on_surface: Rgb,
}

impl Theme {
    /// Derives a theme from `base`.
    pub fn from_base(base: Rgb) -> Self {
        let secondary = shift_hue(base, 180.0);
        Theme {
            primary: base,
            primary_light: lighten(base, PRIMARY_LIGHTNESS_DELTA),
            primary_dark: lighten(base, -PRIMARY_LIGHTNESS_DELTA),
            secondary,
            accent: shift_hue(base, ACCENT_HUE_OFFSET),
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
            info: INFO,
            background: BACKGROUND,
            surface: SURFACE,
            on_primary: best_text_color(base),
            on_secondary: best_text_color(secondary),
            on_background: Rgb::BLACK,
            on_surface: Rgb::BLACK,
        }
    }
}

/// A background/text pairing that passes AA.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccessiblePair {
    pub background: Rgb,
    pub text: Rgb,
    /// Contrast ratio, rounded to two decimals.
    pub contrast: f64,
}

/// Filters the standard text colors down to those readable on `base`
/// at AA, with their contrast ratios.
pub fn accessible_pairs(base: Rgb) -> Vec<AccessiblePair> {
    let base_luminance = relative_luminance(base);
    TEXT_CANDIDATES
        .iter()
        .filter(|&&text| is_accessible_text(base, text, AccessLevel::Aa))
        .map(|&text| {
            let ratio = contrast_ratio(base_luminance, relative_luminance(text));
            AccessiblePair {
                background: base,
                text,
                contrast: (ratio * 100.0).round() / 100.0,
            }
        })
        .collect()
}
