//! Colour swatches named in a vibe line such as `☔️🌧️✨ — Blue, Grey, Warm Yellow`.

use serde::Serialize;

/// Hex code used for colour names missing from the table.
pub const UNKNOWN_COLOR: &str = "#CCCCCC";

const COLOR_TABLE: &[(&str, &str)] = &[
    ("red", "#FF0000"),
    ("blue", "#0000FF"),
    ("green", "#008000"),
    ("yellow", "#FFFF00"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("pink", "#FFC0CB"),
    ("brown", "#A52A2A"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("lime", "#00FF00"),
    ("teal", "#008080"),
    ("navy", "#000080"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
    ("silver", "#C0C0C0"),
    ("gold", "#FFD700"),
    ("indigo", "#4B0082"),
    ("violet", "#EE82EE"),
    ("cream", "#FFFDD0"),
    ("beige", "#F5F5DC"),
    ("peach", "#FFE5B4"),
    ("lavender", "#E6E6FA"),
    ("turquoise", "#40E0D0"),
    ("chartreuse", "#7FFF00"),
    ("coral", "#FF7F50"),
    ("khaki", "#F0E68C"),
];

/// A named colour and its hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: String,
    pub hex: &'static str,
}

pub fn hex_for(name: &str) -> &'static str {
    COLOR_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
        .unwrap_or(UNKNOWN_COLOR)
}

/// Reads the comma separated colour names after the last em-dash of `vibe`.
///
/// A vibe without an em-dash names no colours.
///
/// ```
/// use moodbuddy::response::palette::from_vibe;
///
/// let swatches = from_vibe("☔️🌧️✨ — Blue, Grey, Warm Yellow");
/// assert_eq!(swatches[0].hex, "#0000FF");
/// assert_eq!(swatches[2].name, "warm yellow");
/// assert_eq!(swatches[2].hex, "#CCCCCC");
/// ```
pub fn from_vibe(vibe: &str) -> Vec<Swatch> {
    let Some((_, colors)) = vibe.rsplit_once('—') else {
        return Vec::new();
    };

    colors
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .map(|name| Swatch {
            hex: hex_for(&name),
            name,
        })
        .collect()
}
