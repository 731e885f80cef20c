//! Adjustment operators: lightness, saturation, hue rotation, and the
//! bounded search for accessible variations.
//!
//! Lightness and saturation deltas are additive percentages clamped to
//! [0, 100]; hue rotation wraps mod 360. Every operator goes through the
//! rounded HSL form of the base color, so repeated small adjustments
//! quantize the same way the display values do.

use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgb};
use crate::contrast::{contrast_ratio, relative_luminance, round2};
use serde::Serialize;

/// Lightness step used by the accessible-variation search.
pub const VARIATION_STEP: f64 = 5.0;

/// Lightens `base` by `pct` percentage points (negative darkens).
pub fn lighten(base: Rgb, pct: f64) -> Rgb {
    let hsl = rgb_to_hsl(base);
    let l = (f64::from(hsl.l) + pct).clamp(0.0, 100.0);
    hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), l)
}

/// Darkens `base` by `pct` percentage points.
pub fn darken(base: Rgb, pct: f64) -> Rgb {
    lighten(base, -pct)
}

/// Saturates `base` by `pct` percentage points (negative desaturates).
pub fn saturate(base: Rgb, pct: f64) -> Rgb {
    let hsl = rgb_to_hsl(base);
    let s = (f64::from(hsl.s) + pct).clamp(0.0, 100.0);
    hsl_to_rgb(f64::from(hsl.h), s, f64::from(hsl.l))
}

/// Desaturates `base` by `pct` percentage points.
pub fn desaturate(base: Rgb, pct: f64) -> Rgb {
    saturate(base, -pct)
}

/// Rotates the hue of `base` by `degrees`, wrapping into [0, 360).
/// Saturation and lightness are preserved.
pub fn shift_hue(base: Rgb, degrees: f64) -> Rgb {
    let hsl = rgb_to_hsl(base);
    let h = (f64::from(hsl.h) + degrees).rem_euclid(360.0);
    hsl_to_rgb(h, f64::from(hsl.s), f64::from(hsl.l))
}

/// Picks the candidate with the highest contrast ratio against `base`.
///
/// Returns `None` for an empty candidate list. The first candidate at
/// the maximum wins ties.
pub fn most_contrasting(base: Rgb, candidates: &[Rgb]) -> Option<Rgb> {
    let base_luminance = relative_luminance(base);
    let mut best: Option<(Rgb, f64)> = None;
    for &candidate in candidates {
        let ratio = contrast_ratio(base_luminance, relative_luminance(candidate));
        if best.map_or(true, |(_, r)| ratio > r) {
            best = Some((candidate, ratio));
        }
    }
    best.map(|(c, _)| c)
}

/// Which direction an accessible variation moved from the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationDirection {
    Lighter,
    Darker,
}

/// A lightness variation of the base color meeting a contrast target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccessibleVariation {
    pub color: Rgb,
    /// Contrast ratio against the base, rounded to two decimals.
    pub contrast: f64,
    pub direction: VariationDirection,
}

/// Searches lightness away from `base` in [`VARIATION_STEP`] increments
/// (upward first, then downward) and returns the first variation in each
/// direction whose contrast ratio against the base meets
/// `target_contrast`.
///
/// Zero, one, or two variations come back; the search is bounded by the
/// [0, 100] lightness range and always terminates.
pub fn accessible_variations(base: Rgb, target_contrast: f64) -> Vec<AccessibleVariation> {
    let hsl = rgb_to_hsl(base);
    let base_luminance = relative_luminance(base);
    let mut variations = Vec::new();

    let mut l = f64::from(hsl.l) + VARIATION_STEP;
    while l <= 100.0 {
        if let Some(v) = check_variation(
            hsl.h,
            hsl.s,
            l,
            base_luminance,
            target_contrast,
            VariationDirection::Lighter,
        ) {
            variations.push(v);
            break;
        }
        l += VARIATION_STEP;
    }

    let mut l = f64::from(hsl.l) - VARIATION_STEP;
    while l >= 0.0 {
        if let Some(v) = check_variation(
            hsl.h,
            hsl.s,
            l,
            base_luminance,
            target_contrast,
            VariationDirection::Darker,
        ) {
            variations.push(v);
            break;
        }
        l -= VARIATION_STEP;
    }

    variations
}

fn check_variation(
    h: u16,
    s: u8,
    l: f64,
    base_luminance: f64,
    target_contrast: f64,
    direction: VariationDirection,
) -> Option<AccessibleVariation> {
    let color = hsl_to_rgb(f64::from(h), f64::from(s), l);
    let ratio = contrast_ratio(base_luminance, relative_luminance(color));
    (ratio >= target_contrast).then_some(AccessibleVariation {
        color,
        contrast: round2(ratio),
        direction,
    })
}
