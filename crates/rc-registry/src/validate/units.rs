//! Physical length parsing
//!
//! Lengths are either bare numbers, already in the target unit, or strings
//! like `"1.5em"` or `"2mm"` converted through points.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;

use super::{float_value, render, Rejection, Validator};

/// Base font size in points; one em
const FONTSIZE_PT: f64 = 9.0;

/// Pixels per inch for `px` lengths
const DPI: f64 = 100.0;

static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*([a-zA-Z]*)\s*$")
        .expect("length pattern is valid")
});

/// Target unit of a length validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Points, 1/72 inch
    Point,
    /// Em-widths of the base font size
    Em,
    /// Inches
    Inch,
}

impl Unit {
    fn points_per_unit(self) -> f64 {
        match self {
            Self::Point => 1.0,
            Self::Em => FONTSIZE_PT,
            Self::Inch => 72.0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Point => "pt",
            Self::Em => "em",
            Self::Inch => "in",
        }
    }
}

fn suffix_points(suffix: &str) -> Option<f64> {
    let points = match suffix {
        "pt" => 1.0,
        "in" => 72.0,
        "cm" => 72.0 / 2.54,
        "mm" => 72.0 / 25.4,
        "pc" => 12.0,
        "px" => 72.0 / DPI,
        "em" => FONTSIZE_PT,
        "en" => FONTSIZE_PT / 2.0,
        _ => return None,
    };
    Some(points)
}

/// Parse a length in the given unit
///
/// A bare number is taken to already be in `unit`.
///
/// # Errors
/// Returns a reason if the string is not a number with a known suffix
pub fn parse_length(raw: &str, unit: Unit) -> Result<f64, Rejection> {
    let caps = LENGTH
        .captures(raw)
        .ok_or_else(|| format!("invalid length '{raw}'"))?;
    let number: f64 = caps[1]
        .parse()
        .map_err(|_| format!("invalid number in length '{raw}'"))?;
    let suffix = caps[2].to_lowercase();
    if suffix.is_empty() {
        return Ok(number);
    }
    let points = suffix_points(&suffix).ok_or_else(|| {
        format!("unknown unit '{suffix}' in '{raw}'; use one of in, cm, mm, pt, pc, px, em, en")
    })?;
    Ok(number * points / unit.points_per_unit())
}

/// Length validator normalizing to one [`Unit`]
#[derive(Debug, Clone, Copy)]
pub struct Units {
    unit: Unit,
}

impl Units {
    /// Create validator for `unit`
    #[must_use]
    pub const fn new(unit: Unit) -> Self {
        Self { unit }
    }
}

impl Validator for Units {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::Number(n) => n
                .as_f64()
                .ok_or_else(|| format!("invalid length {n}"))
                .and_then(float_value),
            JsonValue::String(s) => parse_length(s, self.unit).and_then(float_value),
            other => Err(format!("invalid length {}", render(other))),
        }
    }

    fn describe(&self) -> String {
        format!("length({})", self.unit.name())
    }
}
