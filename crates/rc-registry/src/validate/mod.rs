//! Setting validators
//!
//! A [`Validator`] turns a raw value into its validated form or explains why
//! it cannot. Validators are shared as [`SharedValidator`] trait objects so a
//! registry can hold heterogeneous rules; constructor functions in this
//! module build the catalog used by the built-in tables.
//!
//! # Example
//!
//! ```rust
//! use rc_registry::validate;
//! use serde_json::json;
//!
//! let tick_dir = validate::belongs([json!("in"), json!("out"), json!("inout")]);
//! assert_eq!(tick_dir.validate(&json!("OUT")).unwrap(), json!("out"));
//! assert!(tick_dir.validate(&json!("up")).is_err());
//! ```

mod color;
mod units;

use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

pub use color::Color;
pub use units::{parse_length, Unit, Units};

/// Reason a validator rejected a value
pub type Rejection = String;

/// Pure value → validated value transformation
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validate a raw value
    ///
    /// # Errors
    /// Returns a human-readable reason if the value is rejected
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection>;

    /// Short name of the rule, e.g. `bool` or `belongs(in, out)`
    fn describe(&self) -> String;
}

/// Shared validator handle
pub type SharedValidator = Arc<dyn Validator>;

/// Render a value for error messages and descriptions
pub(crate) fn render(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract a finite float from a number or numeric string
pub(crate) fn as_float(value: &JsonValue) -> Option<f64> {
    let float = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    float.filter(|f| f.is_finite())
}

/// Wrap a float as a JSON number, rejecting non-finite input
pub(crate) fn float_value(f: f64) -> Result<JsonValue, Rejection> {
    serde_json::Number::from_f64(f)
        .map(JsonValue::Number)
        .ok_or_else(|| format!("{f} is not a finite number"))
}

/// Boolean flags
#[derive(Debug, Clone, Copy)]
pub struct Bool;

impl Validator for Bool {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::Bool(b) => Ok(JsonValue::Bool(*b)),
            JsonValue::Number(n) if n.as_i64() == Some(1) => Ok(JsonValue::Bool(true)),
            JsonValue::Number(n) if n.as_i64() == Some(0) => Ok(JsonValue::Bool(false)),
            JsonValue::String(s) => match s.trim().to_lowercase().as_str() {
                "t" | "y" | "yes" | "on" | "true" | "1" => Ok(JsonValue::Bool(true)),
                "f" | "n" | "no" | "off" | "false" | "0" => Ok(JsonValue::Bool(false)),
                _ => Err(format!("could not convert '{s}' to bool")),
            },
            other => Err(format!("could not convert {other} to bool")),
        }
    }

    fn describe(&self) -> String {
        "bool".to_string()
    }
}

/// Integers, including integral floats and integer strings
#[derive(Debug, Clone, Copy)]
pub struct Int;

impl Validator for Int {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            JsonValue::Number(n) => match n.as_f64() {
                // `i64::MAX as f64` rounds up to 2^63, which is already out of range
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(JsonValue::from(f as i64))
                }
                _ => Err(format!("could not convert {n} to int")),
            },
            JsonValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map(JsonValue::from)
                .map_err(|_| format!("could not convert '{s}' to int")),
            other => Err(format!("could not convert {other} to int")),
        }
    }

    fn describe(&self) -> String {
        "int".to_string()
    }
}

/// Finite floats
#[derive(Debug, Clone, Copy)]
pub struct Float;

impl Validator for Float {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::Bool(_) => Err(format!("could not convert {value} to float")),
            _ => as_float(value)
                .ok_or_else(|| format!("could not convert {} to float", render(value)))
                .and_then(float_value),
        }
    }

    fn describe(&self) -> String {
        "float".to_string()
    }
}

/// Arbitrary strings
#[derive(Debug, Clone, Copy)]
pub struct Str {
    non_empty: bool,
}

impl Validator for Str {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::String(s) if self.non_empty && s.trim().is_empty() => {
                Err("expected a non-empty string".to_string())
            }
            JsonValue::String(_) => Ok(value.clone()),
            other => Err(format!("expected a string, got {other}")),
        }
    }

    fn describe(&self) -> String {
        let name = if self.non_empty { "fontname" } else { "string" };
        name.to_string()
    }
}

/// Case-insensitive choice among fixed names
#[derive(Debug, Clone, Copy)]
pub struct Names {
    name: &'static str,
    names: &'static [&'static str],
}

impl Names {
    fn lookup(&self, raw: &str) -> Option<&'static str> {
        let needle = raw.trim().to_lowercase();
        self.names
            .iter()
            .find(|candidate| candidate.to_lowercase() == needle)
            .copied()
    }
}

impl Validator for Names {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        let raw = value
            .as_str()
            .ok_or_else(|| format!("expected a {} name, got {value}", self.name))?;
        self.lookup(raw)
            .map(|name| JsonValue::String(name.to_string()))
            .ok_or_else(|| {
                format!(
                    "'{raw}' is not a valid {}; options are {}",
                    self.name,
                    self.names.join(", ")
                )
            })
    }

    fn describe(&self) -> String {
        self.name.to_string()
    }
}

const LINESTYLES: &[&str] = &[
    "-", "--", "-.", ":", "solid", "dashed", "dashdot", "dotted", "none", " ", "",
];

const BOXSTYLES: &[&str] = &[
    "square",
    "circle",
    "ellipse",
    "larrow",
    "rarrow",
    "darrow",
    "round",
    "round4",
    "sawtooth",
    "roundtooth",
];

const FONTSIZES: &[&str] = &[
    "xx-small",
    "x-small",
    "small",
    "med-small",
    "medium",
    "med-large",
    "large",
    "x-large",
    "xx-large",
    "larger",
    "smaller",
];

const FONTWEIGHTS: &[&str] = &[
    "ultralight",
    "light",
    "normal",
    "regular",
    "book",
    "medium",
    "roman",
    "semibold",
    "demibold",
    "demi",
    "bold",
    "heavy",
    "extra bold",
    "black",
];

/// Relative font size names or lengths in points
#[derive(Debug, Clone, Copy)]
pub struct FontSize;

impl Validator for FontSize {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        let names = Names {
            name: "font size",
            names: FONTSIZES,
        };
        if let Some(name) = value.as_str().and_then(|s| names.lookup(s)) {
            return Ok(JsonValue::String(name.to_string()));
        }
        Units::new(Unit::Point).validate(value).map_err(|_| {
            format!(
                "invalid font size {}; use a number, a unit string or one of {}",
                render(value),
                FONTSIZES.join(", ")
            )
        })
    }

    fn describe(&self) -> String {
        "fontsize".to_string()
    }
}

/// Font weight names or numeric weights 100–900
#[derive(Debug, Clone, Copy)]
pub struct FontWeight;

impl Validator for FontWeight {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        if let Some(weight) = value.as_i64() {
            return if (100..=900).contains(&weight) {
                Ok(JsonValue::from(weight))
            } else {
                Err(format!("font weight {weight} is outside 100-900"))
            };
        }
        Names {
            name: "font weight",
            names: FONTWEIGHTS,
        }
        .validate(value)
    }

    fn describe(&self) -> String {
        "fontweight".to_string()
    }
}

/// `vertical`, `horizontal` or an angle in degrees
#[derive(Debug, Clone, Copy)]
pub struct Rotation;

impl Validator for Rotation {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        if let Some(s) = value.as_str() {
            let lower = s.trim().to_lowercase();
            if lower == "vertical" || lower == "horizontal" {
                return Ok(JsonValue::String(lower));
            }
        }
        Float.validate(value).map_err(|_| {
            format!(
                "rotation must be 'vertical', 'horizontal' or a float, got {}",
                render(value)
            )
        })
    }

    fn describe(&self) -> String {
        "rotation".to_string()
    }
}

/// Membership in a fixed set of values
#[derive(Debug, Clone)]
pub struct Belongs {
    members: Vec<JsonValue>,
}

impl Belongs {
    fn matches(member: &JsonValue, value: &JsonValue) -> bool {
        match (member, value) {
            (JsonValue::String(a), JsonValue::String(b)) => a.eq_ignore_ascii_case(b.trim()),
            (JsonValue::Number(a), JsonValue::Number(b)) => a.as_f64() == b.as_f64(),
            (a, b) => a == b,
        }
    }
}

impl Validator for Belongs {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        self.members
            .iter()
            .find(|member| Self::matches(member, value))
            .cloned()
            .ok_or_else(|| {
                let options: Vec<String> = self.members.iter().map(render).collect();
                format!(
                    "invalid value {}; options are {}",
                    render(value),
                    options.join(", ")
                )
            })
    }

    fn describe(&self) -> String {
        let options: Vec<String> = self.members.iter().map(render).collect();
        format!("belongs({})", options.join(", "))
    }
}

/// Null, or whatever the inner validator accepts
#[derive(Debug, Clone)]
pub struct OrNone {
    inner: SharedValidator,
}

impl Validator for OrNone {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        if value.is_null() {
            return Ok(JsonValue::Null);
        }
        if let Some(s) = value.as_str() {
            if s.trim().eq_ignore_ascii_case("none") {
                return Ok(JsonValue::Null);
            }
        }
        self.inner.validate(value)
    }

    fn describe(&self) -> String {
        format!("or_none({})", self.inner.describe())
    }
}

/// Location vocabularies accepted by [`Loc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocMode {
    /// Title and a-b-c label positions
    Text,
    /// Colorbar placement, outer or inset
    Colorbar,
    /// Legend placement, outer or inset
    Legend,
}

const TEXT_LOCS: &[(&str, &str)] = &[
    ("left", "left"),
    ("l", "left"),
    ("center", "center"),
    ("centre", "center"),
    ("c", "center"),
    ("right", "right"),
    ("r", "right"),
    ("upper left", "upper left"),
    ("ul", "upper left"),
    ("upper center", "upper center"),
    ("uc", "upper center"),
    ("upper right", "upper right"),
    ("ur", "upper right"),
    ("lower left", "lower left"),
    ("ll", "lower left"),
    ("lower center", "lower center"),
    ("lc", "lower center"),
    ("lower right", "lower right"),
    ("lr", "lower right"),
];

const COLORBAR_LOCS: &[(&str, &str)] = &[
    ("left", "left"),
    ("l", "left"),
    ("right", "right"),
    ("r", "right"),
    ("top", "top"),
    ("t", "top"),
    ("bottom", "bottom"),
    ("b", "bottom"),
    ("fill", "fill"),
    ("best", "best"),
    ("upper left", "upper left"),
    ("ul", "upper left"),
    ("upper right", "upper right"),
    ("ur", "upper right"),
    ("lower left", "lower left"),
    ("ll", "lower left"),
    ("lower right", "lower right"),
    ("lr", "lower right"),
];

const LEGEND_LOCS: &[(&str, &str)] = &[
    ("best", "best"),
    ("fill", "fill"),
    ("inset", "best"),
    ("i", "best"),
    ("left", "left"),
    ("l", "left"),
    ("right", "right"),
    ("r", "right"),
    ("top", "top"),
    ("t", "top"),
    ("bottom", "bottom"),
    ("b", "bottom"),
    ("center", "center"),
    ("c", "center"),
    ("upper left", "upper left"),
    ("ul", "upper left"),
    ("upper center", "upper center"),
    ("uc", "upper center"),
    ("upper right", "upper right"),
    ("ur", "upper right"),
    ("center left", "center left"),
    ("cl", "center left"),
    ("center right", "center right"),
    ("cr", "center right"),
    ("lower left", "lower left"),
    ("ll", "lower left"),
    ("lower center", "lower center"),
    ("lc", "lower center"),
    ("lower right", "lower right"),
    ("lr", "lower right"),
];

/// Named locations with abbreviations, canonicalized
#[derive(Debug, Clone, Copy)]
pub struct Loc {
    mode: LocMode,
}

impl Validator for Loc {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        let table = match self.mode {
            LocMode::Text => TEXT_LOCS,
            LocMode::Colorbar => COLORBAR_LOCS,
            LocMode::Legend => LEGEND_LOCS,
        };
        let raw = value
            .as_str()
            .ok_or_else(|| format!("expected a location string, got {value}"))?;
        let needle = raw.trim().to_lowercase();
        table
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map(|(_, canonical)| JsonValue::String((*canonical).to_string()))
            .ok_or_else(|| {
                let mut names: Vec<&str> = table.iter().map(|(_, canonical)| *canonical).collect();
                names.dedup();
                format!("invalid location '{raw}'; options are {}", names.join(", "))
            })
    }

    fn describe(&self) -> String {
        let name = match self.mode {
            LocMode::Text => "loc(text)",
            LocMode::Colorbar => "loc(colorbar)",
            LocMode::Legend => "loc(legend)",
        };
        name.to_string()
    }
}

/// a-b-c label style: a bool or a template containing `a` or `A`
#[derive(Debug, Clone, Copy)]
pub struct Abc;

impl Abc {
    fn check_template(template: &str) -> Result<(), Rejection> {
        if template.contains('a') || template.contains('A') {
            Ok(())
        } else {
            Err(format!(
                "invalid a-b-c style '{template}'; must contain the character 'a' or 'A'"
            ))
        }
    }
}

impl Validator for Abc {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::Bool(_) => Ok(value.clone()),
            JsonValue::String(s) => Self::check_template(s).map(|()| value.clone()),
            JsonValue::Array(items) => {
                for item in items {
                    let template = item
                        .as_str()
                        .ok_or_else(|| format!("a-b-c labels must be strings, got {item}"))?;
                    Self::check_template(template)?;
                }
                Ok(value.clone())
            }
            other => Err(format!("invalid a-b-c style {other}")),
        }
    }

    fn describe(&self) -> String {
        "abc".to_string()
    }
}

/// Style names, stylesheet paths, or lists of them
#[derive(Debug, Clone, Copy)]
pub struct Style;

impl Validator for Style {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::Null | JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Array(items) if items.iter().all(JsonValue::is_string) => Ok(value.clone()),
            other => Err(format!(
                "invalid style {other}; must be a style name or a list of style names"
            )),
        }
    }

    fn describe(&self) -> String {
        "style".to_string()
    }
}

/// Colormap flavours accepted by [`Cmap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmapKind {
    /// Smooth colormaps, lists need at least two colors
    Continuous,
    /// Color cycles, lists need at least one color
    Discrete,
}

/// Colormap or cycle names, or explicit color lists
#[derive(Debug, Clone, Copy)]
pub struct Cmap {
    kind: CmapKind,
}

impl Validator for Cmap {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        match value {
            JsonValue::String(s) if !s.trim().is_empty() => Ok(value.clone()),
            JsonValue::Array(items) => {
                let min = match self.kind {
                    CmapKind::Continuous => 2,
                    CmapKind::Discrete => 1,
                };
                if items.len() < min {
                    return Err(format!("color lists need at least {min} colors"));
                }
                let colors = items
                    .iter()
                    .map(|item| Color.validate(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(JsonValue::Array(colors))
            }
            other => Err(format!("invalid colormap {other}")),
        }
    }

    fn describe(&self) -> String {
        let name = match self.kind {
            CmapKind::Continuous => "cmap(continuous)",
            CmapKind::Discrete => "cmap(discrete)",
        };
        name.to_string()
    }
}

/// Homogeneous lists, optionally of fixed length
#[derive(Debug, Clone)]
pub struct ListOf {
    inner: SharedValidator,
    len: Option<usize>,
    split_strings: bool,
}

impl Validator for ListOf {
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        let items: Vec<JsonValue> = match value {
            JsonValue::Array(items) => items.clone(),
            JsonValue::String(s) if self.split_strings => s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| JsonValue::String(part.to_string()))
                .collect(),
            other => return Err(format!("expected a list, got {other}")),
        };
        if let Some(len) = self.len {
            if items.len() != len {
                return Err(format!("expected {len} items, got {}", items.len()));
            }
        }
        items
            .iter()
            .map(|item| self.inner.validate(item))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array)
    }

    fn describe(&self) -> String {
        match self.len {
            Some(len) => format!("list[{len}]({})", self.inner.describe()),
            None => format!("list({})", self.inner.describe()),
        }
    }
}

/// Validator backed by a closure
pub struct FnValidator<F> {
    name: String,
    func: F,
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").field("name", &self.name).finish()
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&JsonValue) -> Result<JsonValue, Rejection> + Send + Sync,
{
    fn validate(&self, value: &JsonValue) -> Result<JsonValue, Rejection> {
        (self.func)(value)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Boolean flag
#[must_use]
pub fn boolean() -> SharedValidator {
    Arc::new(Bool)
}

/// Integer
#[must_use]
pub fn integer() -> SharedValidator {
    Arc::new(Int)
}

/// Float
#[must_use]
pub fn float() -> SharedValidator {
    Arc::new(Float)
}

/// Any string
#[must_use]
pub fn string() -> SharedValidator {
    Arc::new(Str { non_empty: false })
}

/// Non-empty font family name
#[must_use]
pub fn fontname() -> SharedValidator {
    Arc::new(Str { non_empty: true })
}

/// Color specification
#[must_use]
pub fn color() -> SharedValidator {
    Arc::new(Color)
}

/// Length converted to points
#[must_use]
pub fn points() -> SharedValidator {
    Arc::new(Units::new(Unit::Point))
}

/// Length converted to em-widths
#[must_use]
pub fn ems() -> SharedValidator {
    Arc::new(Units::new(Unit::Em))
}

/// Length converted to inches
#[must_use]
pub fn inches() -> SharedValidator {
    Arc::new(Units::new(Unit::Inch))
}

/// Font size name or length in points
#[must_use]
pub fn fontsize() -> SharedValidator {
    Arc::new(FontSize)
}

/// Font weight
#[must_use]
pub fn fontweight() -> SharedValidator {
    Arc::new(FontWeight)
}

/// Line style
#[must_use]
pub fn linestyle() -> SharedValidator {
    Arc::new(Names {
        name: "linestyle",
        names: LINESTYLES,
    })
}

/// Bounding box style
#[must_use]
pub fn boxstyle() -> SharedValidator {
    Arc::new(Names {
        name: "boxstyle",
        names: BOXSTYLES,
    })
}

/// Text rotation
#[must_use]
pub fn rotation() -> SharedValidator {
    Arc::new(Rotation)
}

/// One of a fixed set of values
#[must_use]
pub fn belongs(members: impl IntoIterator<Item = JsonValue>) -> SharedValidator {
    Arc::new(Belongs {
        members: members.into_iter().collect(),
    })
}

/// Null or the inner rule
#[must_use]
pub fn or_none(inner: SharedValidator) -> SharedValidator {
    Arc::new(OrNone { inner })
}

/// Location name for the given vocabulary
#[must_use]
pub fn loc(mode: LocMode) -> SharedValidator {
    Arc::new(Loc { mode })
}

/// a-b-c label style
#[must_use]
pub fn abc() -> SharedValidator {
    Arc::new(Abc)
}

/// Style name or list of style names
#[must_use]
pub fn style() -> SharedValidator {
    Arc::new(Style)
}

/// Colormap or cycle specification
#[must_use]
pub fn cmap(kind: CmapKind) -> SharedValidator {
    Arc::new(Cmap { kind })
}

/// List of font family names; comma-separated strings are split
#[must_use]
pub fn font_list() -> SharedValidator {
    Arc::new(ListOf {
        inner: fontname(),
        len: None,
        split_strings: true,
    })
}

/// List of exactly `len` values accepted by `inner`
#[must_use]
pub fn list_of(inner: SharedValidator, len: usize) -> SharedValidator {
    Arc::new(ListOf {
        inner,
        len: Some(len),
        split_strings: false,
    })
}

/// Two integers, e.g. formatter exponent limits
#[must_use]
pub fn int_pair() -> SharedValidator {
    list_of(integer(), 2)
}

/// Custom rule from a closure
pub fn from_fn<F>(name: impl Into<String>, func: F) -> SharedValidator
where
    F: Fn(&JsonValue) -> Result<JsonValue, Rejection> + Send + Sync + 'static,
{
    Arc::new(FnValidator {
        name: name.into(),
        func,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_accepts_strings_and_flags() {
        let v = boolean();
        assert_eq!(v.validate(&json!(true)).unwrap(), json!(true));
        assert_eq!(v.validate(&json!("Yes")).unwrap(), json!(true));
        assert_eq!(v.validate(&json!("off")).unwrap(), json!(false));
        assert_eq!(v.validate(&json!(0)).unwrap(), json!(false));
        assert!(v.validate(&json!("maybe")).is_err());
        assert!(v.validate(&json!(2)).is_err());
    }

    #[test]
    fn int_accepts_integral_values() {
        let v = integer();
        assert_eq!(v.validate(&json!(11)).unwrap(), json!(11));
        assert_eq!(v.validate(&json!(4.0)).unwrap(), json!(4));
        assert_eq!(v.validate(&json!(" 256 ")).unwrap(), json!(256));
        assert!(v.validate(&json!(1.5)).is_err());
        assert!(v.validate(&json!(true)).is_err());
    }

    #[test]
    fn int_rejects_floats_outside_i64() {
        let v = integer();
        assert!(v.validate(&json!(1e20)).is_err());
        assert!(v.validate(&json!(-1e20)).is_err());
        assert!(v.validate(&json!(9_223_372_036_854_775_808.0)).is_err());
        assert_eq!(v.validate(&json!(-9_223_372_036_854_775_808.0)).unwrap(), json!(i64::MIN));
        assert_eq!(v.validate(&json!(3.0)).unwrap(), json!(3));
        assert_eq!(v.validate(&json!(u64::MAX)).unwrap(), json!(u64::MAX));
    }

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        let v = float();
        assert_eq!(v.validate(&json!(1)).unwrap(), json!(1.0));
        assert_eq!(v.validate(&json!("0.25")).unwrap(), json!(0.25));
        assert!(v.validate(&json!(true)).is_err());
        assert!(v.validate(&json!("wide")).is_err());
    }

    #[test]
    fn string_and_fontname() {
        assert_eq!(string().validate(&json!("")).unwrap(), json!(""));
        assert!(string().validate(&json!(3)).is_err());
        assert!(fontname().validate(&json!("  ")).is_err());
        assert_eq!(fontname().validate(&json!("Helvetica")).unwrap(), json!("Helvetica"));
    }

    #[test]
    fn fontsize_names_and_lengths() {
        let v = fontsize();
        assert_eq!(v.validate(&json!("Med-Large")).unwrap(), json!("med-large"));
        assert_eq!(v.validate(&json!(9)).unwrap(), json!(9.0));
        assert_eq!(v.validate(&json!("1in")).unwrap(), json!(72.0));
        assert!(v.validate(&json!("enormous")).is_err());
    }

    #[test]
    fn fontweight_names_and_numbers() {
        let v = fontweight();
        assert_eq!(v.validate(&json!("BOLD")).unwrap(), json!("bold"));
        assert_eq!(v.validate(&json!(600)).unwrap(), json!(600));
        assert!(v.validate(&json!(1000)).is_err());
        assert!(v.validate(&json!("chunky")).is_err());
    }

    #[test]
    fn linestyle_symbols() {
        let v = linestyle();
        assert_eq!(v.validate(&json!("--")).unwrap(), json!("--"));
        assert_eq!(v.validate(&json!("Dotted")).unwrap(), json!("dotted"));
        assert!(v.validate(&json!("~~")).is_err());
    }

    #[test]
    fn rotation_names_and_angles() {
        let v = rotation();
        assert_eq!(v.validate(&json!("Vertical")).unwrap(), json!("vertical"));
        assert_eq!(v.validate(&json!(45)).unwrap(), json!(45.0));
        assert!(v.validate(&json!("diagonal")).is_err());
    }

    #[test]
    fn belongs_is_case_insensitive_and_canonical() {
        let v = belongs([json!(false), json!("line"), json!(true)]);
        assert_eq!(v.validate(&json!("LINE")).unwrap(), json!("line"));
        assert_eq!(v.validate(&json!(true)).unwrap(), json!(true));
        assert!(v.validate(&json!("above")).is_err());
        assert_eq!(v.describe(), "belongs(false, line, true)");
    }

    #[test]
    fn belongs_compares_numbers_numerically() {
        let v = belongs([json!(0), json!(1), json!("all")]);
        assert_eq!(v.validate(&json!(1.0)).unwrap(), json!(1));
        assert!(v.validate(&json!(false)).is_err());
    }

    #[test]
    fn or_none_passes_null_through() {
        let v = or_none(float());
        assert_eq!(v.validate(&json!(null)).unwrap(), json!(null));
        assert_eq!(v.validate(&json!("None")).unwrap(), json!(null));
        assert_eq!(v.validate(&json!(0.5)).unwrap(), json!(0.5));
        assert!(v.validate(&json!("half")).is_err());
        assert_eq!(v.describe(), "or_none(float)");
    }

    #[test]
    fn loc_canonicalizes_abbreviations() {
        let text = loc(LocMode::Text);
        assert_eq!(text.validate(&json!("ul")).unwrap(), json!("upper left"));
        assert_eq!(text.validate(&json!("Centre")).unwrap(), json!("center"));
        assert!(text.validate(&json!("top")).is_err());

        let colorbar = loc(LocMode::Colorbar);
        assert_eq!(colorbar.validate(&json!("b")).unwrap(), json!("bottom"));
        assert!(colorbar.validate(&json!("center")).is_err());

        let legend = loc(LocMode::Legend);
        assert_eq!(legend.validate(&json!("cr")).unwrap(), json!("center right"));
        assert_eq!(legend.validate(&json!("inset")).unwrap(), json!("best"));
    }

    #[test]
    fn abc_templates() {
        let v = abc();
        assert!(v.validate(&json!(true)).is_ok());
        assert!(v.validate(&json!("(A)")).is_ok());
        assert!(v.validate(&json!(["a.", "b."])).is_ok());
        assert!(v.validate(&json!("(1)")).is_err());
        assert!(v.validate(&json!(3)).is_err());
    }

    #[test]
    fn style_accepts_names_and_lists() {
        let v = style();
        assert!(v.validate(&json!(null)).is_ok());
        assert!(v.validate(&json!("ggplot")).is_ok());
        assert!(v.validate(&json!(["ggplot", "seaborn"])).is_ok());
        assert!(v.validate(&json!(["ggplot", 3])).is_err());
    }

    #[test]
    fn cmap_lists_are_color_checked() {
        let continuous = cmap(CmapKind::Continuous);
        assert!(continuous.validate(&json!("Fire")).is_ok());
        assert!(continuous.validate(&json!(["red"])).is_err());
        assert!(continuous.validate(&json!(["red", "#0000ff"])).is_ok());
        assert!(continuous.validate(&json!(["red", "notacolor"])).is_err());

        let discrete = cmap(CmapKind::Discrete);
        assert!(discrete.validate(&json!(["red"])).is_ok());
        assert!(discrete.validate(&json!("")).is_err());
    }

    #[test]
    fn font_list_splits_strings() {
        let v = font_list();
        assert_eq!(
            v.validate(&json!("Helvetica, Arial")).unwrap(),
            json!(["Helvetica", "Arial"])
        );
        assert!(v.validate(&json!(["Helvetica", ""])).is_err());
    }

    #[test]
    fn int_pair_length_is_enforced() {
        let v = int_pair();
        assert_eq!(v.validate(&json!([-5, 6])).unwrap(), json!([-5, 6]));
        assert!(v.validate(&json!([1, 2, 3])).is_err());
        assert!(v.validate(&json!([1, "x"])).is_err());
    }

    #[test]
    fn from_fn_wraps_closures() {
        let positive = from_fn("positive", |value| match value.as_f64() {
            Some(f) if f > 0.0 => Ok(value.clone()),
            _ => Err("must be positive".to_string()),
        });
        assert!(positive.validate(&json!(2)).is_ok());
        assert_eq!(positive.validate(&json!(-1)).unwrap_err(), "must be positive");
        assert_eq!(positive.describe(), "positive");
    }
}
