#![deny(unsafe_code)]
//! Palette registry: maps palette kind names to the core generation
//! routines and classifies existing palettes by harmony.
//!
//! This crate sits between `colorscope-core` (the conversion and series
//! math) and the CLI, which depends on it for string-based dispatch and
//! for rendering palettes into export artifacts (see [`export`]).

pub mod data;
pub mod export;
pub mod theme;

use colorscope_core::harmony::HarmonyKind;
use colorscope_core::series;
use colorscope_core::{ColorError, Rgb, Xorshift64};
use colorscope_core::color::rgb_to_hsl;
use serde::Serialize;

/// All recognized palette kind names, in registry order.
const PALETTE_NAMES: &[&str] = &[
    "shades",
    "tints",
    "monochromatic",
    "complementary",
    "triadic",
    "tetradic",
    "analogous",
    "split-complementary",
];

/// Average hue spacing below this classifies a palette as analogous.
pub const ANALOGOUS_MAX_SPACING: f64 = 30.0;
/// Target average spacings for the spaced harmonies.
pub const TRIADIC_SPACING: f64 = 120.0;
pub const COMPLEMENTARY_SPACING: f64 = 180.0;
pub const TETRADIC_SPACING: f64 = 90.0;
/// How far the average spacing may sit from a target and still match.
pub const SPACING_TOLERANCE: f64 = 20.0;

/// Enumeration of every palette the generator can produce.
///
/// Use [`PaletteKind::from_name`] for string-based construction (CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Shades,
    Tints,
    Monochromatic,
    Complementary,
    Triadic,
    Tetradic,
    Analogous,
    SplitComplementary,
}

impl PaletteKind {
    /// Constructs a palette kind by name.
    ///
    /// Returns `ColorError::UnknownPalette` if the name is not
    /// recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "shades" => Ok(PaletteKind::Shades),
            "tints" => Ok(PaletteKind::Tints),
            "monochromatic" => Ok(PaletteKind::Monochromatic),
            other => HarmonyKind::from_name(other).map(PaletteKind::from),
        }
    }

    /// Returns a slice of all recognized palette kind names.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// The registry name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Shades => "shades",
            PaletteKind::Tints => "tints",
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Tetradic => "tetradic",
            PaletteKind::Analogous => "analogous",
            PaletteKind::SplitComplementary => "split-complementary",
        }
    }

    /// Generates the palette for `base`.
    ///
    /// Series kinds (shades/tints/monochromatic) honor `count`; harmony
    /// kinds have fixed sizes determined by their hue offsets.
    pub fn generate(self, base: Rgb, count: usize) -> Vec<Rgb> {
        match self {
            PaletteKind::Shades => series::shades(base, count),
            PaletteKind::Tints => series::tints(base, count),
            PaletteKind::Monochromatic => series::monochromatic(base, count),
            PaletteKind::Complementary => HarmonyKind::Complementary.generate(base),
            PaletteKind::Triadic => HarmonyKind::Triadic.generate(base),
            PaletteKind::Tetradic => HarmonyKind::Tetradic.generate(base),
            PaletteKind::Analogous => HarmonyKind::Analogous.generate(base),
            PaletteKind::SplitComplementary => HarmonyKind::SplitComplementary.generate(base),
        }
    }
}

impl From<HarmonyKind> for PaletteKind {
    fn from(kind: HarmonyKind) -> Self {
        match kind {
            HarmonyKind::Complementary => PaletteKind::Complementary,
            HarmonyKind::Triadic => PaletteKind::Triadic,
            HarmonyKind::Tetradic => PaletteKind::Tetradic,
            HarmonyKind::Analogous => PaletteKind::Analogous,
            HarmonyKind::SplitComplementary => PaletteKind::SplitComplementary,
        }
    }
}

/// Heuristic classification of an arbitrary color set.
///
/// Not an exact inverse of generation: palettes that wrap the hue wheel
/// can land in a neighboring class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmonyClass {
    SingleColor,
    Analogous,
    Triadic,
    Complementary,
    Tetradic,
    Custom,
}

impl std::fmt::Display for HarmonyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarmonyClass::SingleColor => write!(f, "Single Color"),
            HarmonyClass::Analogous => write!(f, "Analogous"),
            HarmonyClass::Triadic => write!(f, "Triadic"),
            HarmonyClass::Complementary => write!(f, "Complementary"),
            HarmonyClass::Tetradic => write!(f, "Tetradic"),
            HarmonyClass::Custom => write!(f, "Custom Harmony"),
        }
    }
}

/// Classifies a palette by sorting its hues, averaging the consecutive
/// differences, and matching the average against the harmony bands.
pub fn analyze_harmony(colors: &[Rgb]) -> HarmonyClass {
    if colors.len() < 2 {
        return HarmonyClass::SingleColor;
    }

    let mut hues: Vec<u16> = colors.iter().map(|c| rgb_to_hsl(*c).h).collect();
    hues.sort_unstable();

    let total: f64 = hues
        .windows(2)
        .map(|w| f64::from(w[1]) - f64::from(w[0]))
        .sum();
    let average = total / (hues.len() - 1) as f64;

    if average < ANALOGOUS_MAX_SPACING {
        HarmonyClass::Analogous
    } else if (average - TRIADIC_SPACING).abs() < SPACING_TOLERANCE {
        HarmonyClass::Triadic
    } else if (average - COMPLEMENTARY_SPACING).abs() < SPACING_TOLERANCE {
        HarmonyClass::Complementary
    } else if (average - TETRADIC_SPACING).abs() < SPACING_TOLERANCE {
        HarmonyClass::Tetradic
    } else {
        HarmonyClass::Custom
    }
}

/// `count` random colors from a seeded source.
///
/// Deterministic: equal seeds produce equal palettes.
pub fn random_palette(rng: &mut Xorshift64, count: usize) -> Vec<Rgb> {
    (0..count).map(|_| Rgb::random(rng)).collect()
}
