//! Rendering palettes and colors into export artifacts.
//!
//! Everything here is pure string templating. The CSS custom-property
//! lines, SCSS variable lines, and the SVG swatch structure are the
//! contractual shapes; the Tailwind/ASE/HTML bodies are display
//! conveniences.

use crate::data;
use colorscope_core::adjust::{darken, lighten};
use colorscope_core::contrast::best_text_color;
use colorscope_core::series;
use colorscope_core::{ColorData, ColorError, Rgb};
use serde::Serialize;

/// All recognized export format names, in registry order.
const FORMAT_NAMES: &[&str] = &["json", "css", "scss", "tailwind", "ase", "plain"];

/// Output format for [`render_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty JSON array of hex strings.
    Json,
    /// CSS custom-property lines: `--color-N: #HEX;`.
    Css,
    /// SCSS variable lines: `$color-N: #HEX;`.
    Scss,
    /// Tailwind-style `colors` block.
    Tailwind,
    /// Simplified Adobe Swatch Exchange JSON with unit-range channels.
    Ase,
    /// Hex strings, one per line.
    Plain,
}

impl ExportFormat {
    /// Constructs a format by name.
    ///
    /// Returns `ColorError::UnknownFormat` if the name is not
    /// recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            "scss" => Ok(ExportFormat::Scss),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "ase" => Ok(ExportFormat::Ase),
            "plain" => Ok(ExportFormat::Plain),
            _ => Err(ColorError::UnknownFormat(name.to_string())),
        }
    }

    /// Returns a slice of all recognized format names.
    pub fn list_names() -> &'static [&'static str] {
        FORMAT_NAMES
    }

    /// The registry name of this format.
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Ase => "ase",
            ExportFormat::Plain => "plain",
        }
    }
}

/// One entry of the simplified ASE body.
#[derive(Serialize)]
struct AseColor {
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    /// RGB channels normalized to [0, 1].
    values: [f64; 3],
}

#[derive(Serialize)]
struct AseDocument {
    version: &'static str,
    colors: Vec<AseColor>,
}

/// Renders a palette in the requested format.
pub fn render_palette(colors: &[Rgb], format: ExportFormat) -> Result<String, ColorError> {
    match format {
        ExportFormat::Json => {
            let hexes: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
            Ok(serde_json::to_string_pretty(&hexes)?)
        }
        ExportFormat::Css => Ok(numbered_lines(colors, |i, hex| {
            format!("--color-{i}: {hex};")
        })),
        ExportFormat::Scss => Ok(numbered_lines(colors, |i, hex| {
            format!("$color-{i}: {hex};")
        })),
        ExportFormat::Tailwind => Ok(tailwind_colors_block(colors)),
        ExportFormat::Ase => {
            let doc = AseDocument {
                version: "1.0",
                colors: colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| AseColor {
                        name: format!("Color {}", i + 1),
                        kind: "RGB",
                        values: [
                            f64::from(c.r) / 255.0,
                            f64::from(c.g) / 255.0,
                            f64::from(c.b) / 255.0,
                        ],
                    })
                    .collect(),
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        ExportFormat::Plain => Ok(numbered_lines(colors, |_, hex| hex.to_string())),
    }
}

fn numbered_lines(colors: &[Rgb], line: impl Fn(usize, &str) -> String) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| line(i + 1, &c.to_hex()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tailwind_colors_block(colors: &[Rgb]) -> String {
    if colors.is_empty() {
        return "{\n  \"colors\": {}\n}".to_string();
    }
    let entries: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("    \"custom-{}\": \"{}\"", i + 1, c.to_hex()))
        .collect();
    format!("{{\n  \"colors\": {{\n{}\n  }}\n}}", entries.join(",\n"))
}

/// A square SVG swatch with the hex and nearest color name centered on
/// the fill, in whichever of black/white reads best.
pub fn svg_swatch(color: Rgb, size: u32) -> String {
    let hex = color.to_hex();
    let text = best_text_color(color).to_hex();
    let name = colorscope_core::named::nearest_named(color);
    format!(
        r##"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
    <rect width="100%" height="100%" fill="{hex}"/>
    <text x="50%" y="50%" text-anchor="middle" dominant-baseline="middle" fill="{text}" font-family="Arial, sans-serif" font-size="16" font-weight="bold">{hex}</text>
    <text x="50%" y="70%" text-anchor="middle" dominant-baseline="middle" fill="{text}" font-family="Arial, sans-serif" font-size="12" opacity="0.8">{name}</text>
</svg>"##
    )
}

/// A Tailwind config module with a full 50-950 scale built from tints
/// and shades of `base`.
pub fn tailwind_theme(base: Rgb, name: &str) -> String {
    let shades = series::shades(base, 4);
    let tints = series::tints(base, 4);
    // 400/600 sit halfway into the first tint/shade gap so the scale
    // stays strictly ordered whatever the base lightness.
    let l = f64::from(colorscope_core::color::rgb_to_hsl(base).l);
    let scale = [
        ("50", tints[3]),
        ("100", tints[2]),
        ("200", tints[1]),
        ("300", tints[0]),
        ("400", lighten(base, (100.0 - l) / 10.0)),
        ("500", base),
        ("600", darken(base, l / 10.0)),
        ("700", shades[0]),
        ("800", shades[1]),
        ("900", shades[2]),
        ("950", shades[3]),
    ];
    let rows: Vec<String> = scale
        .iter()
        .map(|(step, c)| format!("          \"{step}\": \"{}\"", c.to_hex()))
        .collect();
    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        \"{name}\": {{\n{}\n        }}\n      }}\n    }}\n  }}\n}}",
        rows.join(",\n")
    )
}

/// A Tailwind config module naming each palette entry `name-N`.
pub fn tailwind_theme_from_palette(colors: &[Rgb], name: &str) -> String {
    let rows: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("        \"{name}-{}\": \"{}\"", i + 1, c.to_hex()))
        .collect();
    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{}\n      }}\n    }}\n  }}\n}}",
        rows.join(",\n")
    )
}

/// A self-contained HTML reference sheet for one color.
///
/// Display-only: the exact bytes are not contractual.
pub fn color_documentation(data: &ColorData) -> String {
    let hex = &data.hex;
    let text = best_text_color(data.rgb).to_hex();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Color Documentation - {hex}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            background: #f8fafc;
        }}
        .color-header {{
            background: {hex};
            color: {text};
            padding: 3rem 2rem;
            border-radius: 1rem;
            text-align: center;
            margin-bottom: 2rem;
        }}
        .section {{
            background: white;
            padding: 2rem;
            border-radius: 1rem;
            margin-bottom: 2rem;
        }}
        .section h2 {{
            color: #1e293b;
            border-bottom: 2px solid {hex};
            padding-bottom: 0.5rem;
        }}
        .format-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1rem;
        }}
        .format-item {{
            background: #f8fafc;
            padding: 1rem;
            border-radius: 0.5rem;
            border-left: 4px solid {hex};
        }}
        .format-label {{
            font-weight: 600;
            color: #64748b;
            font-size: 0.875rem;
            text-transform: uppercase;
        }}
        .format-value {{
            font-family: 'Monaco', 'Consolas', monospace;
            font-size: 1.125rem;
            color: #1e293b;
        }}
    </style>
</head>
<body>
    <div class="color-header">
        <h1>{hex}</h1>
        <p>{name}</p>
    </div>
    <div class="section">
        <h2>Color Formats</h2>
        <div class="format-grid">
            <div class="format-item">
                <div class="format-label">HEX</div>
                <div class="format-value">{hex}</div>
            </div>
            <div class="format-item">
                <div class="format-label">RGB</div>
                <div class="format-value">rgb({rgb})</div>
            </div>
            <div class="format-item">
                <div class="format-label">HSL</div>
                <div class="format-value">hsl({h}, {s}%, {l}%)</div>
            </div>
            <div class="format-item">
                <div class="format-label">HSV</div>
                <div class="format-value">hsv({hv}, {sv}%, {vv}%)</div>
            </div>
            <div class="format-item">
                <div class="format-label">CMYK</div>
                <div class="format-value">cmyk({c}%, {m}%, {y}%, {k}%)</div>
            </div>
        </div>
    </div>
</body>
</html>"#,
        name = data.nearest_name,
        rgb = data.rgb_decimal,
        h = data.hsl.h,
        s = data.hsl.s,
        l = data.hsl.l,
        hv = data.hsv.h,
        sv = data.hsv.s,
        vv = data.hsv.v,
        c = data.cmyk.c,
        m = data.cmyk.m,
        y = data.cmyk.y,
        k = data.cmyk.k,
    )
}

/// Renders a trending palette by name, if it exists.
pub fn render_trending(name: &str, format: ExportFormat) -> Result<String, ColorError> {
    let hexes = data::trending_palette(name)
        .ok_or_else(|| ColorError::UnknownPalette(name.to_string()))?;
    let colors: Result<Vec<Rgb>, ColorError> = hexes.iter().map(|h| Rgb::from_hex(h)).collect();
    render_palette(&colors?, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<Rgb> {
        vec![
            Rgb::from_hex("#FF0000").unwrap(),
            Rgb::from_hex("#00FF00").unwrap(),
            Rgb::from_hex("#0000FF").unwrap(),
        ]
    }

    // -- Format registry tests --

    #[test]
    fn from_name_round_trips_every_format() {
        for name in ExportFormat::list_names() {
            let format = ExportFormat::from_name(name).unwrap();
            assert_eq!(format.name(), *name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = ExportFormat::from_name("yaml");
        assert!(matches!(result, Err(ColorError::UnknownFormat(_))));
    }

    // -- Palette rendering tests --

    #[test]
    fn css_lines_are_byte_exact() {
        let out = render_palette(&palette(), ExportFormat::Css).unwrap();
        assert_eq!(
            out,
            "--color-1: #FF0000;\n--color-2: #00FF00;\n--color-3: #0000FF;"
        );
    }

    #[test]
    fn scss_lines_are_byte_exact() {
        let out = render_palette(&palette(), ExportFormat::Scss).unwrap();
        assert_eq!(
            out,
            "$color-1: #FF0000;\n$color-2: #00FF00;\n$color-3: #0000FF;"
        );
    }

    #[test]
    fn plain_is_one_hex_per_line() {
        let out = render_palette(&palette(), ExportFormat::Plain).unwrap();
        assert_eq!(out, "#FF0000\n#00FF00\n#0000FF");
    }

    #[test]
    fn json_parses_back_to_the_same_hexes() {
        let out = render_palette(&palette(), ExportFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["#FF0000", "#00FF00", "#0000FF"]);
    }

    #[test]
    fn tailwind_block_is_valid_json_with_numbered_keys() {
        let out = render_palette(&palette(), ExportFormat::Tailwind).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["colors"]["custom-1"], "#FF0000");
        assert_eq!(v["colors"]["custom-3"], "#0000FF");
    }

    #[test]
    fn ase_body_has_unit_range_channels() {
        let out = render_palette(&palette(), ExportFormat::Ase).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["version"], "1.0");
        assert_eq!(v["colors"][0]["name"], "Color 1");
        assert_eq!(v["colors"][0]["type"], "RGB");
        assert_eq!(v["colors"][0]["values"][0], 1.0);
        assert_eq!(v["colors"][0]["values"][1], 0.0);
        assert_eq!(v["colors"][2]["values"][2], 1.0);
    }

    #[test]
    fn empty_palette_renders_empty_bodies() {
        assert_eq!(render_palette(&[], ExportFormat::Css).unwrap(), "");
        let tailwind = render_palette(&[], ExportFormat::Tailwind).unwrap();
        let v: serde_json::Value = serde_json::from_str(&tailwind).unwrap();
        assert!(v["colors"].as_object().unwrap().is_empty());
    }

    // -- SVG swatch tests --

    #[test]
    fn svg_swatch_structure() {
        let svg = svg_swatch(Rgb::from_hex("#3B82F6").unwrap(), 200);
        assert!(svg.starts_with("<svg width=\"200\" height=\"200\""));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#3B82F6\"/>"));
        assert!(svg.contains(">#3B82F6</text>"));
        assert!(svg.contains(">royalblue</text>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn svg_swatch_picks_readable_text_color() {
        let dark = svg_swatch(Rgb::BLACK, 100);
        assert!(dark.contains("fill=\"#FFFFFF\""));
        let light = svg_swatch(Rgb::WHITE, 100);
        assert!(light.contains("fill=\"#000000\""));
    }

    // -- Tailwind theme tests --

    #[test]
    fn tailwind_theme_has_full_scale() {
        let out = tailwind_theme(Rgb::from_hex("#3B82F6").unwrap(), "brand");
        assert!(out.starts_with("module.exports = {"));
        assert!(out.contains("\"brand\""));
        for step in ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"] {
            assert!(out.contains(&format!("\"{step}\": \"#")), "missing step {step}");
        }
        assert!(out.contains("\"500\": \"#3B82F6\""));
    }

    #[test]
    fn tailwind_theme_scale_darkens_from_50_to_950() {
        use colorscope_core::color::rgb_to_hsl;
        let base = Rgb::from_hex("#3B82F6").unwrap();
        let shades = series::shades(base, 4);
        let tints = series::tints(base, 4);
        let l = f64::from(rgb_to_hsl(base).l);
        let ordered = [
            tints[3], tints[2], tints[1], tints[0],
            lighten(base, (100.0 - l) / 10.0), base, darken(base, l / 10.0),
            shades[0], shades[1], shades[2], shades[3],
        ];
        let mut prev = 101_i16;
        for c in ordered {
            let step_l = i16::from(rgb_to_hsl(c).l);
            assert!(step_l < prev, "scale not strictly darkening: {step_l} after {prev}");
            prev = step_l;
        }
    }

    #[test]
    fn tailwind_theme_from_palette_numbers_entries() {
        let out = tailwind_theme_from_palette(&palette(), "brand");
        assert!(out.contains("\"brand-1\": \"#FF0000\""));
        assert!(out.contains("\"brand-3\": \"#0000FF\""));
    }

    // -- Documentation tests --

    #[test]
    fn documentation_contains_every_format() {
        let data = ColorData::from_hex("#3B82F6").unwrap();
        let html = color_documentation(&data);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("#3B82F6"));
        assert!(html.contains("royalblue"));
        assert!(html.contains("rgb(59, 130, 246)"));
        assert!(html.contains("hsl(217, 91%, 60%)"));
        assert!(html.contains("hsv(217, 76%, 96%)"));
        assert!(html.contains("cmyk(76%, 47%, 0%, 4%)"));
    }

    // -- Trending rendering tests --

    #[test]
    fn render_trending_known_palette() {
        let out = render_trending("Retro Neon", ExportFormat::Plain).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.starts_with("#FF1493"));
    }

    #[test]
    fn render_trending_unknown_palette_errors() {
        let result = render_trending("Nope", ExportFormat::Css);
        assert!(matches!(result, Err(ColorError::UnknownPalette(_))));
    }
}
