//! The derived inspection record for a color.
//!
//! [`ColorData`] is recomputed wholesale from a hex string on every
//! request — there are no partial updates, so the derived formats can
//! never drift from the canonical RGB triple.

use crate::color::{rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, Cmyk, Hsl, Hsv, Rgb, Temperature};
use crate::contrast::{
    contrast_ratio, perceived_brightness, relative_luminance, round2, ContrastRating,
};
use crate::error::ColorError;
use crate::named::nearest_named;
use serde::{Serialize, Serializer};

/// Every derived representation and metric for one color.
///
/// Immutable once produced. Ratios and luminance are rounded to two
/// decimals for display; the exact values can be recomputed from `rgb`.
#[derive(Debug, Clone, Serialize)]
pub struct ColorData {
    /// Canonical uppercase `#RRGGBB`.
    pub hex: String,
    /// 3-digit shorthand, present only when all channel pairs repeat.
    pub short_hex: Option<String>,
    #[serde(serialize_with = "serialize_channels")]
    pub rgb: Rgb,
    pub rgb_decimal: String,
    pub rgb_percent: String,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub cmyk: Cmyk,
    /// WCAG relative luminance, rounded to two decimals.
    pub luminance: f64,
    /// Perceived brightness percentage, 0-100.
    pub brightness: u8,
    pub inverted: String,
    pub web_safe: String,
    pub temperature: Temperature,
    pub nearest_name: &'static str,
    pub contrast_white: ContrastRating,
    pub contrast_black: ContrastRating,
    pub contrast_white_ratio: f64,
    pub contrast_black_ratio: f64,
}

impl ColorData {
    /// Builds the full record from a 6-digit hex string.
    ///
    /// The 3-digit shorthand is expanded upstream by
    /// [`normalize_hex`](crate::color::normalize_hex); malformed input
    /// fails with `ColorError::InvalidColor`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb = Rgb::from_hex(hex)?;
        Ok(Self::from_rgb(rgb))
    }

    /// Builds the full record from an RGB triple.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let luminance = relative_luminance(rgb);
        let white_ratio = contrast_ratio(luminance, 1.0);
        let black_ratio = contrast_ratio(luminance, 0.0);

        ColorData {
            hex: rgb.to_hex(),
            short_hex: rgb.short_hex(),
            rgb,
            rgb_decimal: rgb.decimal_string(),
            rgb_percent: rgb.percent_string(),
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
            cmyk: rgb_to_cmyk(rgb),
            luminance: round2(luminance),
            brightness: perceived_brightness(rgb),
            inverted: rgb.invert().to_hex(),
            web_safe: rgb.web_safe().to_hex(),
            temperature: rgb.temperature(),
            nearest_name: nearest_named(rgb),
            contrast_white: ContrastRating::from_ratio(white_ratio),
            contrast_black: ContrastRating::from_ratio(black_ratio),
            contrast_white_ratio: round2(white_ratio),
            contrast_black_ratio: round2(black_ratio),
        }
    }
}

/// Serializes the RGB field as channel numbers (`{"r":..,"g":..,"b":..}`)
/// instead of the hex-string form `Rgb` uses elsewhere; the record
/// already carries the hex separately.
fn serialize_channels<S: Serializer>(c: &Rgb, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut st = s.serialize_struct("Rgb", 3)?;
    st.serialize_field("r", &c.r)?;
    st.serialize_field("g", &c.g)?;
    st.serialize_field("b", &c.b)?;
    st.end()
}
