//! Static palette collections: the Material Design ramps and a set of
//! curated trending palettes.
//!
//! Constant lookup data only — no lifecycle, no mutation.

/// Material Design color ramps, lightest (50) to darkest (900).
pub const MATERIAL_COLORS: &[(&str, [&str; 10])] = &[
    (
        "red",
        [
            "#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#EF5350", "#F44336", "#E53935",
            "#D32F2F", "#C62828", "#B71C1C",
        ],
    ),
    (
        "pink",
        [
            "#FCE4EC", "#F8BBD9", "#F48FB1", "#F06292", "#EC407A", "#E91E63", "#D81B60",
            "#C2185B", "#AD1457", "#880E4F",
        ],
    ),
    (
        "purple",
        [
            "#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC", "#9C27B0", "#8E24AA",
            "#7B1FA2", "#6A1B9A", "#4A148C",
        ],
    ),
    (
        "blue",
        [
            "#E3F2FD", "#BBDEFB", "#90CAF9", "#64B5F6", "#42A5F5", "#2196F3", "#1E88E5",
            "#1976D2", "#1565C0", "#0D47A1",
        ],
    ),
    (
        "green",
        [
            "#E8F5E8", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#4CAF50", "#43A047",
            "#388E3C", "#2E7D32", "#1B5E20",
        ],
    ),
    (
        "orange",
        [
            "#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726", "#FF9800", "#FB8C00",
            "#F57C00", "#EF6C00", "#E65100",
        ],
    ),
];

/// Curated five-color palettes, by display name.
pub const TRENDING_PALETTES: &[(&str, [&str; 5])] = &[
    (
        "Sunset Vibes",
        ["#FF6B6B", "#FF8E53", "#FF6B9D", "#C44569", "#F8B500"],
    ),
    (
        "Ocean Breeze",
        ["#0F3460", "#16537E", "#1E90FF", "#87CEEB", "#E0F6FF"],
    ),
    (
        "Forest Dreams",
        ["#2D5016", "#3E6B1F", "#4F7942", "#60A85F", "#8FBC8F"],
    ),
    (
        "Cosmic Purple",
        ["#2C003E", "#512B58", "#8E44AD", "#BB8FCE", "#E8DAEF"],
    ),
    (
        "Warm Autumn",
        ["#8B4513", "#CD853F", "#DEB887", "#F4A460", "#FFEFD5"],
    ),
    (
        "Cool Winter",
        ["#1C1C1C", "#2F4F4F", "#4682B4", "#87CEEB", "#F0F8FF"],
    ),
    (
        "Spring Fresh",
        ["#228B22", "#32CD32", "#90EE90", "#98FB98", "#F0FFF0"],
    ),
    (
        "Retro Neon",
        ["#FF1493", "#00FFFF", "#FFFF00", "#FF4500", "#9400D3"],
    ),
];

/// Looks up a Material ramp by family name.
pub fn material_ramp(family: &str) -> Option<&'static [&'static str; 10]> {
    MATERIAL_COLORS
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, ramp)| ramp)
}

/// All Material family names, in table order.
pub fn material_families() -> Vec<&'static str> {
    MATERIAL_COLORS.iter().map(|(name, _)| *name).collect()
}

/// Looks up a trending palette by display name.
pub fn trending_palette(name: &str) -> Option<&'static [&'static str; 5]> {
    TRENDING_PALETTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, colors)| colors)
}

/// All trending palette names, in table order.
pub fn trending_names() -> Vec<&'static str> {
    TRENDING_PALETTES.iter().map(|(name, _)| *name).collect()
}
