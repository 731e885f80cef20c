//! Lightness series and channel interpolation: shades, tints,
//! monochromatic ramps, blends, and gradients.
//!
//! Shades and tints step strictly between the base lightness and the
//! extreme without ever reaching either endpoint; monochromatic ramps
//! span the full [0, 100] range inclusive. Degenerate counts collapse to
//! the base color instead of dividing by zero.

use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgb};

/// `count` darker versions of `base`, lightness strictly between the
/// base lightness and 0.
///
/// Step `i` (0-based) has lightness `l - (i+1) * l / (count+1)`. A
/// black base yields black at every step.
pub fn shades(base: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = rgb_to_hsl(base);
    let l = f64::from(hsl.l);
    (0..count)
        .map(|i| {
            let lightness = (l - (i as f64 + 1.0) * (l / (count as f64 + 1.0))).max(0.0);
            hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), lightness)
        })
        .collect()
}

/// `count` lighter versions of `base`, lightness strictly between the
/// base lightness and 100.
pub fn tints(base: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = rgb_to_hsl(base);
    let l = f64::from(hsl.l);
    (0..count)
        .map(|i| {
            let lightness = (l + (i as f64 + 1.0) * ((100.0 - l) / (count as f64 + 1.0))).min(100.0);
            hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), lightness)
        })
        .collect()
}

/// `count` colors sharing the base hue and saturation with lightness
/// spaced evenly across [0, 100] inclusive.
///
/// `count <= 1` returns just the base color; the spacing formula divides
/// by `count - 1`.
pub fn monochromatic(base: Rgb, count: usize) -> Vec<Rgb> {
    if count <= 1 {
        return vec![base];
    }
    let hsl = rgb_to_hsl(base);
    (0..count)
        .map(|i| {
            let lightness = i as f64 / (count as f64 - 1.0) * 100.0;
            hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), lightness)
        })
        .collect()
}

/// Linear per-channel interpolation between two colors.
///
/// `ratio` 0 returns `a`, 1 returns `b`; out-of-range ratios are
/// clamped.
pub fn blend(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    // NaN guard: clamp would propagate NaN into every channel.
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let mix = |x: u8, y: u8| {
        (f64::from(x) * (1.0 - ratio) + f64::from(y) * ratio).round() as u8
    };
    Rgb {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
    }
}

/// `steps` colors evenly spanning `from` to `to` inclusive.
///
/// `steps <= 1` returns just `from`; the spacing formula divides by
/// `steps - 1`.
pub fn gradient(from: Rgb, to: Rgb, steps: usize) -> Vec<Rgb> {
    if steps <= 1 {
        return vec![from];
    }
    (0..steps)
        .map(|i| blend(from, to, i as f64 / (steps as f64 - 1.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb_to_hsl;

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    fn hexes(colors: &[Rgb]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex()).collect()
    }

    // -- Shades tests --

    #[test]
    fn shades_of_red_step_down_by_quarters() {
        // Base lightness 50, count 3: steps 37.5, 25, 12.5.
        assert_eq!(
            hexes(&shades(hex("#FF0000"), 3)),
            vec!["#BF0000", "#800000", "#400000"]
        );
    }

    #[test]
    fn shades_have_strictly_decreasing_interior_lightness() {
        let base = hex("#FF0000");
        let base_l = rgb_to_hsl(base).l;
        let series = shades(base, 3);
        assert_eq!(series.len(), 3);
        let mut prev = base_l;
        for c in &series {
            let l = rgb_to_hsl(*c).l;
            assert!(l < prev, "lightness {l} not below {prev}");
            assert!(l > 0, "shade hit pure black");
            prev = l;
        }
    }

    #[test]
    fn shades_of_black_stay_black() {
        for c in shades(Rgb::BLACK, 4) {
            assert_eq!(c, Rgb::BLACK);
        }
    }

    #[test]
    fn shades_count_zero_is_empty() {
        assert!(shades(hex("#FF0000"), 0).is_empty());
    }

    // -- Tints tests --

    #[test]
    fn tints_of_red_step_up_by_quarters() {
        // Base lightness 50, count 3: steps 62.5, 75, 87.5.
        assert_eq!(
            hexes(&tints(hex("#FF0000"), 3)),
            vec!["#FF4040", "#FF8080", "#FFBFBF"]
        );
    }

    #[test]
    fn tints_have_strictly_increasing_interior_lightness() {
        let base = hex("#3B82F6");
        let base_l = rgb_to_hsl(base).l;
        let series = tints(base, 4);
        let mut prev = base_l;
        for c in &series {
            let l = rgb_to_hsl(*c).l;
            assert!(l > prev, "lightness {l} not above {prev}");
            assert!(l < 100, "tint hit pure white");
            prev = l;
        }
    }

    // -- Monochromatic tests --

    #[test]
    fn monochromatic_spans_black_to_white() {
        assert_eq!(
            hexes(&monochromatic(hex("#FF0000"), 5)),
            vec!["#000000", "#800000", "#FF0000", "#FF8080", "#FFFFFF"]
        );
    }

    #[test]
    fn monochromatic_preserves_hue_in_the_interior() {
        let series = monochromatic(hex("#3B82F6"), 7);
        for c in &series[1..6] {
            let h = rgb_to_hsl(*c).h;
            assert!(
                (i32::from(h) - 217).abs() <= 1,
                "hue {h} drifted from 217"
            );
        }
    }

    #[test]
    fn monochromatic_degenerate_counts_return_base() {
        let base = hex("#3B82F6");
        assert_eq!(monochromatic(base, 1), vec![base]);
        assert_eq!(monochromatic(base, 0), vec![base]);
    }

    // -- Blend tests --

    #[test]
    fn blend_midpoint_of_red_and_blue_is_purple() {
        assert_eq!(
            blend(hex("#FF0000"), hex("#0000FF"), 0.5).to_hex(),
            "#800080"
        );
    }

    #[test]
    fn blend_endpoints_return_inputs() {
        let a = hex("#FF0000");
        let b = hex("#0000FF");
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn blend_clamps_out_of_range_ratio() {
        let a = hex("#FF0000");
        let b = hex("#0000FF");
        assert_eq!(blend(a, b, -1.0), a);
        assert_eq!(blend(a, b, 2.0), b);
    }

    // -- Gradient tests --

    #[test]
    fn gradient_black_to_white_is_even_grays() {
        assert_eq!(
            hexes(&gradient(Rgb::BLACK, Rgb::WHITE, 5)),
            vec!["#000000", "#404040", "#808080", "#BFBFBF", "#FFFFFF"]
        );
    }

    #[test]
    fn gradient_includes_both_endpoints() {
        let from = hex("#FF0000");
        let to = hex("#0000FF");
        let g = gradient(from, to, 3);
        assert_eq!(g.first(), Some(&from));
        assert_eq!(g.last(), Some(&to));
    }

    #[test]
    fn gradient_degenerate_steps_return_start() {
        let from = hex("#FF0000");
        let to = hex("#0000FF");
        assert_eq!(gradient(from, to, 1), vec![from]);
        assert_eq!(gradient(from, to, 0), vec![from]);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn series_lengths_match_request(
                r: u8, g: u8, b: u8,
                count in 2_usize..16,
            ) {
                let base = Rgb { r, g, b };
                prop_assert_eq!(shades(base, count).len(), count);
                prop_assert_eq!(tints(base, count).len(), count);
                prop_assert_eq!(monochromatic(base, count).len(), count);
                prop_assert_eq!(gradient(base, base.invert(), count).len(), count);
            }

            #[test]
            fn blend_of_equal_colors_is_identity(
                r: u8, g: u8, b: u8,
                ratio in 0.0_f64..=1.0,
            ) {
                let c = Rgb { r, g, b };
                prop_assert_eq!(blend(c, c, ratio), c);
            }

            #[test]
            fn gradient_is_reversible_within_rounding(
                r1: u8, g1: u8, b1: u8,
                r2: u8, g2: u8, b2: u8,
                steps in 2_usize..10,
            ) {
                let a = Rgb { r: r1, g: g1, b: b1 };
                let b = Rgb { r: r2, g: g2, b: b2 };
                let forward = gradient(a, b, steps);
                let mut backward = gradient(b, a, steps);
                backward.reverse();
                // Interpolation ratios differ by an ulp between the two
                // directions, so channels may round one step apart.
                for (f, k) in forward.iter().zip(backward.iter()) {
                    prop_assert!((i16::from(f.r) - i16::from(k.r)).abs() <= 1);
                    prop_assert!((i16::from(f.g) - i16::from(k.g)).abs() <= 1);
                    prop_assert!((i16::from(f.b) - i16::from(k.b)).abs() <= 1);
                }
            }
        }
    }
}
