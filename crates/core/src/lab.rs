//! CIE XYZ / Lab conversions and the CIE76 color difference.
//!
//! The pipeline is sRGB -> linear -> XYZ (D65) -> Lab. Delta E is the
//! Euclidean distance in Lab space: larger means more visually distinct,
//! 0 means identical. Uses `f64` throughout.

use crate::color::Rgb;

/// sRGB channel values above this (normalized to [0, 1]) use the
/// power-law segment of the gamma curve.
const GAMMA_THRESHOLD: f64 = 0.04045;

/// Ratio threshold between the cube-root and linear branches of the Lab
/// transfer function.
const LAB_EPSILON: f64 = 0.008856;

/// D65 reference white, scaled x100 like the XYZ values.
const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

/// CIE XYZ tristimulus values, scaled x100 (Y = 100 for white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE Lab color: L in [0, 100], a/b unbounded around 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Converts RGB to XYZ via sRGB gamma decoding and the D65 matrix.
pub fn rgb_to_xyz(c: Rgb) -> Xyz {
    fn decode(channel: u8) -> f64 {
        let v = f64::from(channel) / 255.0;
        if v > GAMMA_THRESHOLD {
            ((v + 0.055) / 1.055).powf(2.4)
        } else {
            v / 12.92
        }
    }
    let r = decode(c.r);
    let g = decode(c.g);
    let b = decode(c.b);

    Xyz {
        x: (r * 0.4124564 + g * 0.3575761 + b * 0.1804375) * 100.0,
        y: (r * 0.2126729 + g * 0.7151522 + b * 0.0721750) * 100.0,
        z: (r * 0.0193339 + g * 0.1191920 + b * 0.9503041) * 100.0,
    }
}

/// Converts XYZ to Lab against the D65 reference white.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    fn transfer(t: f64) -> f64 {
        if t > LAB_EPSILON {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    }
    let fx = transfer(xyz.x / D65_WHITE.x);
    let fy = transfer(xyz.y / D65_WHITE.y);
    let fz = transfer(xyz.z / D65_WHITE.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convenience: RGB to Lab via the chain RGB -> XYZ -> Lab.
pub fn rgb_to_lab(c: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(c))
}

/// Perceptual color difference (CIE76): Euclidean distance in Lab space.
///
/// No upper bound; 0 means identical colors.
pub fn delta_e(a: Rgb, b: Rgb) -> f64 {
    let lab1 = rgb_to_lab(a);
    let lab2 = rgb_to_lab(b);
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- XYZ tests --

    #[test]
    fn white_maps_to_reference_white() {
        let xyz = rgb_to_xyz(Rgb::WHITE);
        assert!((xyz.x - 95.047).abs() < 0.01, "x: {}", xyz.x);
        assert!((xyz.y - 100.0).abs() < 0.01, "y: {}", xyz.y);
        assert!((xyz.z - 108.883).abs() < 0.01, "z: {}", xyz.z);
    }

    #[test]
    fn black_maps_to_zero() {
        let xyz = rgb_to_xyz(Rgb::BLACK);
        assert!(xyz.x.abs() < 1e-9 && xyz.y.abs() < 1e-9 && xyz.z.abs() < 1e-9);
    }

    // -- Lab tests --

    #[test]
    fn white_has_l_100_and_neutral_ab() {
        let lab = rgb_to_lab(Rgb::WHITE);
        assert!((lab.l - 100.0).abs() < 0.01, "L: {}", lab.l);
        assert!(lab.a.abs() < 0.01, "a: {}", lab.a);
        assert!(lab.b.abs() < 0.01, "b: {}", lab.b);
    }

    #[test]
    fn black_has_l_0() {
        let lab = rgb_to_lab(Rgb::BLACK);
        assert!(lab.l.abs() < 0.01, "L: {}", lab.l);
    }

    #[test]
    fn grays_stay_neutral() {
        let lab = rgb_to_lab(Rgb::new(128, 128, 128));
        assert!(lab.a.abs() < 0.01, "a: {}", lab.a);
        assert!(lab.b.abs() < 0.01, "b: {}", lab.b);
        assert!(lab.l > 0.0 && lab.l < 100.0);
    }

    #[test]
    fn red_has_positive_a() {
        let lab = rgb_to_lab(Rgb::new(255, 0, 0));
        assert!(lab.a > 0.0, "red should have positive a, got {}", lab.a);
    }

    #[test]
    fn blue_has_negative_b() {
        let lab = rgb_to_lab(Rgb::new(0, 0, 255));
        assert!(lab.b < 0.0, "blue should have negative b, got {}", lab.b);
    }

    // -- Delta E tests --

    #[test]
    fn delta_e_of_identical_colors_is_zero() {
        let c = Rgb::from_hex("#3B82F6").unwrap();
        assert!(delta_e(c, c).abs() < 1e-12);
    }

    #[test]
    fn delta_e_black_to_white_is_100() {
        // L spans 0..100 and a/b stay neutral, so the distance is exactly
        // the lightness span.
        let d = delta_e(Rgb::BLACK, Rgb::WHITE);
        assert!((d - 100.0).abs() < 0.01, "got {d}");
    }

    #[test]
    fn delta_e_is_symmetric() {
        let a = Rgb::from_hex("#FF0000").unwrap();
        let b = Rgb::from_hex("#00FF00").unwrap();
        assert!((delta_e(a, b) - delta_e(b, a)).abs() < 1e-12);
    }

    #[test]
    fn near_colors_are_closer_than_far_colors() {
        let base = Rgb::from_hex("#3B82F6").unwrap();
        let near = Rgb::from_hex("#3C83F7").unwrap();
        let far = Rgb::from_hex("#FF0000").unwrap();
        assert!(delta_e(base, near) < delta_e(base, far));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn delta_e_is_non_negative_and_symmetric(
                r1: u8, g1: u8, b1: u8,
                r2: u8, g2: u8, b2: u8,
            ) {
                let a = Rgb { r: r1, g: g1, b: b1 };
                let b = Rgb { r: r2, g: g2, b: b2 };
                let d = delta_e(a, b);
                prop_assert!(d >= 0.0);
                prop_assert!((d - delta_e(b, a)).abs() < 1e-9);
            }

            #[test]
            fn lab_lightness_stays_in_range(r: u8, g: u8, b: u8) {
                let lab = rgb_to_lab(Rgb { r, g, b });
                prop_assert!(
                    (-0.01..=100.01).contains(&lab.l),
                    "L {} out of range", lab.l
                );
            }
        }
    }
}
