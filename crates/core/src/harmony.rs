//! Hue-offset color harmonies.
//!
//! Each harmony is a fixed set of degree offsets applied to the base
//! hue, with the base saturation and lightness preserved. Offset 0
//! returns the base color untouched rather than re-quantizing it through
//! HSL.

use crate::adjust::shift_hue;
use crate::color::Rgb;
use crate::error::ColorError;

/// All recognized harmony names, in registry order.
const HARMONY_NAMES: &[&str] = &[
    "complementary",
    "triadic",
    "tetradic",
    "analogous",
    "split-complementary",
];

/// A hue-offset relationship between palette members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyKind {
    /// Base and its opposite: {0, 180}.
    Complementary,
    /// Three evenly spaced hues: {0, 120, 240}.
    Triadic,
    /// Four evenly spaced hues: {0, 90, 180, 270}.
    Tetradic,
    /// Immediate neighbors around the base: {-30, 0, 30}.
    Analogous,
    /// Base plus the neighbors of its opposite: {0, 150, 210}.
    SplitComplementary,
}

impl HarmonyKind {
    /// The hue offsets (in degrees) this harmony applies to the base.
    pub fn offsets(self) -> &'static [f64] {
        match self {
            HarmonyKind::Complementary => &[0.0, 180.0],
            HarmonyKind::Triadic => &[0.0, 120.0, 240.0],
            HarmonyKind::Tetradic => &[0.0, 90.0, 180.0, 270.0],
            HarmonyKind::Analogous => &[-30.0, 0.0, 30.0],
            HarmonyKind::SplitComplementary => &[0.0, 150.0, 210.0],
        }
    }

    /// The registry name of this harmony.
    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Tetradic => "tetradic",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::SplitComplementary => "split-complementary",
        }
    }

    /// Looks up a harmony by name. Accepts the camel-case spelling of
    /// split-complementary for compatibility with older palette files.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "complementary" => Ok(HarmonyKind::Complementary),
            "triadic" => Ok(HarmonyKind::Triadic),
            "tetradic" => Ok(HarmonyKind::Tetradic),
            "analogous" => Ok(HarmonyKind::Analogous),
            "split-complementary" | "splitComplementary" => Ok(HarmonyKind::SplitComplementary),
            _ => Err(ColorError::UnknownPalette(name.to_string())),
        }
    }

    /// All recognized harmony names.
    pub fn list_names() -> &'static [&'static str] {
        HARMONY_NAMES
    }

    /// Generates the harmony colors for `base`, in offset order.
    ///
    /// The sequence length is fixed per kind: 2 for complementary, 3 for
    /// triadic/analogous/split-complementary, 4 for tetradic.
    pub fn generate(self, base: Rgb) -> Vec<Rgb> {
        self.offsets()
            .iter()
            .map(|&degrees| {
                if degrees == 0.0 {
                    base
                } else {
                    shift_hue(base, degrees)
                }
            })
            .collect()
    }
}
