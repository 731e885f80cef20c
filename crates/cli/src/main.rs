#![deny(unsafe_code)]
//! CLI binary for the colorscope color inspection tool.
//!
//! Subcommands:
//! - `inspect <color>` — every derived format and metric
//! - `palette <color>` — generate shades/tints/harmonies
//! - `adjust <color>` — lightness/saturation/hue operators
//! - `contrast <bg> <text>` — ratio, rating, Delta E, WCAG verdict
//! - `gradient <from> <to>` — evenly spaced interpolation
//! - `theme <color>` — full UI theme with readable text pairings
//! - `accessible <color>` — variations meeting a contrast target
//! - `export <color>...` — css/scss/json/tailwind/ase/plain/svg/html
//! - `random` — seeded random colors
//! - `trending` / `material` — built-in palette collections
//! - `list` — print the registries
//!
//! Colors are accepted as 3- or 6-digit hex with an optional `#`.

mod error;

use clap::{Parser, Subcommand};
use colorscope_core::adjust::{self, accessible_variations, most_contrasting};
use colorscope_core::color::normalize_hex;
use colorscope_core::contrast::{contrast_ratio, relative_luminance, AccessLevel, ContrastRating};
use colorscope_core::lab::delta_e;
use colorscope_core::{ColorData, Rgb, Xorshift64};
use colorscope_palette::export::{color_documentation, render_palette, svg_swatch, ExportFormat};
use colorscope_palette::theme::{accessible_pairs, Theme, TEXT_CANDIDATES};
use colorscope_palette::{analyze_harmony, data, random_palette, PaletteKind};
use error::CliError;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "colorscope", about = "Color inspection and palette CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every derived format and metric for a color.
    Inspect {
        /// Hex color, e.g. "#3B82F6" or "fff".
        color: String,
    },
    /// Generate a palette from a base color.
    Palette {
        color: String,

        /// Palette kind (see `list`).
        #[arg(short, long, default_value = "shades")]
        kind: String,

        /// Number of colors for series kinds (ignored by harmonies).
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Also classify the generated palette's harmony.
        #[arg(long)]
        analyze: bool,
    },
    /// Apply lightness/saturation/hue adjustments, in that order.
    Adjust {
        color: String,

        /// Lightness to add, in percentage points.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lighten: f64,

        /// Lightness to remove, in percentage points.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        darken: f64,

        /// Saturation to add, in percentage points.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        saturate: f64,

        /// Saturation to remove, in percentage points.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        desaturate: f64,

        /// Degrees to rotate the hue, wrapping at 360.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        hue_shift: f64,
    },
    /// Contrast ratio, rating, and Delta E between two colors.
    Contrast {
        background: String,
        text: String,

        /// WCAG level for the pass/fail verdict (A, AA, AAA).
        #[arg(long, default_value = "AA")]
        level: String,
    },
    /// Evenly spaced colors between two endpoints.
    Gradient {
        from: String,
        to: String,

        #[arg(short, long, default_value_t = 10)]
        steps: usize,
    },
    /// Derive a full UI theme from a base color.
    Theme { color: String },
    /// Find lightness variations meeting a contrast target against the base.
    Accessible {
        color: String,

        /// Target contrast ratio.
        #[arg(short, long, default_value_t = 4.5)]
        target: f64,
    },
    /// Render colors as an export artifact.
    Export {
        /// One or more hex colors.
        #[arg(required = true)]
        colors: Vec<String>,

        /// json, css, scss, tailwind, ase, plain, svg, or html.
        #[arg(short, long, default_value = "css")]
        format: String,

        /// Square swatch size in pixels (svg format only).
        #[arg(long, default_value_t = 200)]
        size: u32,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate random colors, reproducibly.
    Random {
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Show the trending palettes.
    Trending {
        /// Show one palette with its colors and harmony class.
        name: Option<String>,
    },
    /// Show the Material Design ramps.
    Material {
        /// Family name (red, pink, purple, blue, green, orange).
        family: Option<String>,
    },
    /// List palette kinds, export formats, and collections.
    List,
}

/// Accepts 3- or 6-digit hex, with or without `#`, any case.
fn parse_color(s: &str) -> Result<Rgb, CliError> {
    let normalized = normalize_hex(s)?;
    Ok(Rgb::from_hex(&normalized)?)
}

fn parse_colors(inputs: &[String]) -> Result<Vec<Rgb>, CliError> {
    inputs.iter().map(|s| parse_color(s)).collect()
}

/// Writes `content` to `output`, or prints it to stdout.
fn emit(content: &str, output: Option<&PathBuf>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| CliError::Io(e.to_string())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn print_palette(colors: &[Rgb]) {
    for c in colors {
        println!("{}", c.to_hex());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Inspect { color } => {
            let data = ColorData::from_hex(&normalize_hex(&color)?)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}  {}", data.hex, data.nearest_name);
                println!("  short hex:   {}", data.short_hex.as_deref().unwrap_or("N/A"));
                println!("  rgb:         {}", data.rgb_decimal);
                println!("  rgb %:       {}", data.rgb_percent);
                println!("  hsl:         hsl({}, {}%, {}%)", data.hsl.h, data.hsl.s, data.hsl.l);
                println!("  hsv:         hsv({}, {}%, {}%)", data.hsv.h, data.hsv.s, data.hsv.v);
                println!(
                    "  cmyk:        cmyk({}%, {}%, {}%, {}%)",
                    data.cmyk.c, data.cmyk.m, data.cmyk.y, data.cmyk.k
                );
                println!("  luminance:   {}", data.luminance);
                println!("  brightness:  {}%", data.brightness);
                println!("  inverted:    {}", data.inverted);
                println!("  web safe:    {}", data.web_safe);
                println!("  temperature: {}", data.temperature);
                println!(
                    "  vs white:    {} ({})",
                    data.contrast_white_ratio, data.contrast_white
                );
                println!(
                    "  vs black:    {} ({})",
                    data.contrast_black_ratio, data.contrast_black
                );
            }
        }
        Command::Palette {
            color,
            kind,
            count,
            analyze,
        } => {
            let kind = PaletteKind::from_name(&kind).map_err(|e| CliError::Input(e.to_string()))?;
            let base = parse_color(&color)?;
            let colors = kind.generate(base, count);
            let harmony = analyze.then(|| analyze_harmony(&colors));
            if cli.json {
                let info = serde_json::json!({
                    "base": base,
                    "kind": kind.name(),
                    "colors": colors,
                    "harmony": harmony.map(|h| h.to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_palette(&colors);
                if let Some(h) = harmony {
                    println!("harmony: {h}");
                }
            }
        }
        Command::Adjust {
            color,
            lighten,
            darken,
            saturate,
            desaturate,
            hue_shift,
        } => {
            let base = parse_color(&color)?;
            let mut result = base;
            if lighten != 0.0 {
                result = adjust::lighten(result, lighten);
            }
            if darken != 0.0 {
                result = adjust::darken(result, darken);
            }
            if saturate != 0.0 {
                result = adjust::saturate(result, saturate);
            }
            if desaturate != 0.0 {
                result = adjust::desaturate(result, desaturate);
            }
            if hue_shift != 0.0 {
                result = adjust::shift_hue(result, hue_shift);
            }
            if cli.json {
                let info = serde_json::json!({ "from": base, "to": result });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", result.to_hex());
            }
        }
        Command::Contrast {
            background,
            text,
            level,
        } => {
            let bg = parse_color(&background)?;
            let fg = parse_color(&text)?;
            let ratio = contrast_ratio(relative_luminance(bg), relative_luminance(fg));
            let rating = ContrastRating::from_ratio(ratio);
            let difference = delta_e(bg, fg);
            let level = AccessLevel::from_name(&level);
            let passes = ratio >= level.min_ratio();
            if cli.json {
                let info = serde_json::json!({
                    "background": bg,
                    "text": fg,
                    "ratio": round2(ratio),
                    "rating": rating,
                    "delta_e": round2(difference),
                    "level": level.name(),
                    "passes": passes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("ratio:   {}", round2(ratio));
                println!("rating:  {rating}");
                println!("delta e: {}", round2(difference));
                println!(
                    "{} text: {}",
                    level.name(),
                    if passes { "pass" } else { "fail" }
                );
            }
        }
        Command::Gradient { from, to, steps } => {
            let from = parse_color(&from)?;
            let to = parse_color(&to)?;
            let colors = colorscope_core::series::gradient(from, to, steps);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                print_palette(&colors);
            }
        }
        Command::Theme { color } => {
            let base = parse_color(&color)?;
            let theme = Theme::from_base(base);
            let pairs = accessible_pairs(base);
            if cli.json {
                let info = serde_json::json!({
                    "theme": theme,
                    "accessible_pairs": pairs,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("primary:       {}", theme.primary.to_hex());
                println!("primary light: {}", theme.primary_light.to_hex());
                println!("primary dark:  {}", theme.primary_dark.to_hex());
                println!("secondary:     {}", theme.secondary.to_hex());
                println!("accent:        {}", theme.accent.to_hex());
                println!("success:       {}", theme.success.to_hex());
                println!("warning:       {}", theme.warning.to_hex());
                println!("error:         {}", theme.error.to_hex());
                println!("info:          {}", theme.info.to_hex());
                println!("background:    {}", theme.background.to_hex());
                println!("surface:       {}", theme.surface.to_hex());
                println!("on primary:    {}", theme.on_primary.to_hex());
                println!("on secondary:  {}", theme.on_secondary.to_hex());
                println!("on background: {}", theme.on_background.to_hex());
                println!("on surface:    {}", theme.on_surface.to_hex());
                println!("accessible text on primary:");
                for pair in &pairs {
                    println!("  {} ({})", pair.text.to_hex(), pair.contrast);
                }
            }
        }
        Command::Accessible { color, target } => {
            let base = parse_color(&color)?;
            let variations = accessible_variations(base, target);
            let best = most_contrasting(base, &TEXT_CANDIDATES);
            if cli.json {
                let info = serde_json::json!({
                    "base": base,
                    "target": target,
                    "variations": variations,
                    "best_text": best,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                if variations.is_empty() {
                    println!("no variation reaches {target}:1 against {}", base.to_hex());
                }
                for v in &variations {
                    let direction = match v.direction {
                        adjust::VariationDirection::Lighter => "lighter",
                        adjust::VariationDirection::Darker => "darker",
                    };
                    println!("{direction}: {} ({}:1)", v.color.to_hex(), v.contrast);
                }
                if let Some(best) = best {
                    println!("best standard text: {}", best.to_hex());
                }
            }
        }
        Command::Export {
            colors,
            format,
            size,
            output,
        } => {
            let parsed = parse_colors(&colors)?;
            let content = match format.as_str() {
                "svg" => svg_swatch(parsed[0], size),
                "html" => color_documentation(&ColorData::from_rgb(parsed[0])),
                name => {
                    let format =
                        ExportFormat::from_name(name).map_err(|e| CliError::Input(e.to_string()))?;
                    render_palette(&parsed, format)?
                }
            };
            emit(&content, output.as_ref())?;
        }
        Command::Random { count, seed } => {
            let mut rng = Xorshift64::new(seed);
            let colors = random_palette(&mut rng, count);
            if cli.json {
                let info = serde_json::json!({ "seed": seed, "colors": colors });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_palette(&colors);
            }
        }
        Command::Trending { name } => match name {
            Some(name) => {
                let hexes = data::trending_palette(&name)
                    .ok_or_else(|| CliError::Input(format!("unknown trending palette: {name}")))?;
                let colors: Vec<Rgb> = hexes
                    .iter()
                    .map(|h| Rgb::from_hex(h))
                    .collect::<Result<_, _>>()?;
                let harmony = analyze_harmony(&colors);
                if cli.json {
                    let info = serde_json::json!({
                        "name": name,
                        "colors": colors,
                        "harmony": harmony.to_string(),
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    print_palette(&colors);
                    println!("harmony: {harmony}");
                }
            }
            None => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&data::trending_names())?);
                } else {
                    for name in data::trending_names() {
                        println!("{name}");
                    }
                }
            }
        },
        Command::Material { family } => match family {
            Some(family) => {
                let ramp = data::material_ramp(&family)
                    .ok_or_else(|| CliError::Input(format!("unknown material family: {family}")))?;
                if cli.json {
                    let info = serde_json::json!({ "family": family, "colors": ramp });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                } else {
                    for hex in ramp {
                        println!("{hex}");
                    }
                }
            }
            None => {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&data::material_families())?
                    );
                } else {
                    for name in data::material_families() {
                        println!("{name}");
                    }
                }
            }
        },
        Command::List => {
            let kinds = PaletteKind::list_names();
            let mut formats: Vec<&str> = ExportFormat::list_names().to_vec();
            formats.extend(["svg", "html"]);
            if cli.json {
                let info = serde_json::json!({
                    "kinds": kinds,
                    "formats": formats,
                    "trending": data::trending_names(),
                    "material": data::material_families(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palette kinds:");
                println!("  {}", kinds.join(", "));
                println!("Export formats:");
                println!("  {}", formats.join(", "));
                println!("Trending palettes:");
                println!("  {}", data::trending_names().join(", "));
                println!("Material families:");
                println!("  {}", data::material_families().join(", "));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
