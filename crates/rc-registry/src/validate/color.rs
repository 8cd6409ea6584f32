//! Color specifications
//!
//! Accepted forms: hex strings, cycle references `C0`..`C9`, grayscale
//! strings in `[0, 1]`, named colors with an optional shade suffix,
//! `tab:`/`xkcd:` palette names, `none` and RGB(A) arrays with channels in
//! `[0, 1]`.

use serde_json::Value as JsonValue;

use super::{as_float, Rejection, Validator};

const SINGLE_LETTERS: &[&str] = &["b", "g", "r", "c", "m", "y", "k", "w"];

const TABLEAU: &[&str] = &[
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "grey", "olive", "cyan",
];

const NAMED: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Color validator
#[derive(Debug, Clone, Copy)]
pub struct Color;

impl Color {
    fn is_hex(s: &str) -> bool {
        s.strip_prefix('#').is_some_and(|digits| {
            matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
    }

    fn is_gray(s: &str) -> bool {
        s.parse::<f64>().is_ok_and(|level| (0.0..=1.0).contains(&level))
    }

    fn normalize(raw: &str) -> Option<String> {
        let s = raw.trim();
        let lower = s.to_lowercase();
        if Self::is_hex(s) || lower == "none" || Self::is_gray(s) {
            return Some(lower);
        }
        if let Some(digit) = lower.strip_prefix('c') {
            if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) {
                return Some(s.to_uppercase());
            }
        }
        if let Some(name) = lower.strip_prefix("tab:") {
            return TABLEAU.contains(&name).then_some(lower);
        }
        if let Some(name) = lower.strip_prefix("xkcd:") {
            return (!name.trim().is_empty()).then_some(lower);
        }
        if SINGLE_LETTERS.contains(&lower.as_str()) || NAMED.contains(&lower.as_str()) {
            return Some(lower);
        }
        Self::is_shade(&lower).then_some(lower)
    }

    /// Named color followed by a one or two digit shade, e.g. `blue7`
    fn is_shade(lower: &str) -> bool {
        let base = lower.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = lower.len() - base.len();
        (1..=2).contains(&digits) && NAMED.contains(&base)
    }

    fn channels(items: &[JsonValue]) -> Result<JsonValue, Rejection> {
        if !matches!(items.len(), 3 | 4) {
            return Err(format!(
                "RGB(A) colors need 3 or 4 channels, got {}",
                items.len()
            ));
        }
        for item in items {
            match as_float(item) {
                Some(channel) if item.is_number() && (0.0..=1.0).contains(&channel) => {}
                _ => return Err(format!("color channel {item} is outside [0, 1]")),
            }
        }
        Ok(JsonValue::Array(items.to_vec()))
    }
}

impl Validator for Color {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::String(s) => Self::normalize(s)
                .map(JsonValue::String)
                .ok_or_else(|| format!("'{s}' is not a valid color")),
            JsonValue::Array(items) => Self::channels(items),
            other => Err(format!("{other} is not a valid color")),
        }
    }

    fn describe(&self) -> String {
        "color".to_string()
    }
}
