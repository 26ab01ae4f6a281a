//! Terminal value formatting.

use crate::classify::{NumberCategory, classify_number};
use crate::graph::{RawValue, Rgba};

/// Pixel size of `1rem`.
pub const REM_BASE: f64 = 16.0;

/// Names used to classify a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext<'a> {
    pub collection_name: &'a str,
    pub variable_name: &'a str,
}

impl<'a> FormatContext<'a> {
    pub fn new(collection_name: &'a str, variable_name: &'a str) -> Self {
        Self { collection_name, variable_name }
    }
}

/// Render a terminal value as CSS text.
///
/// Returns `None` for aliases (they must be resolved first) and for values
/// of an unsupported shape.
pub fn format_value(raw: &RawValue, ctx: FormatContext<'_>) -> Option<String> {
    match raw {
        RawValue::Color(color) => Some(format_color(color)),
        RawValue::Number(n) => Some(format_number(*n, ctx)),
        RawValue::Boolean(b) => Some(b.to_string()),
        RawValue::String(s) => Some(s.clone()),
        RawValue::Alias(_) | RawValue::Unsupported(_) => None,
    }
}

/// `#rrggbb` for opaque colors, `rgba(r,g,b,a)` otherwise.
#[allow(clippy::float_cmp)]
pub fn format_color(color: &Rgba) -> String {
    let [r, g, b] = [color.r, color.g, color.b].map(channel);
    if color.a == 1.0 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("rgba({r},{g},{b},{})", plain_number(color.a))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn format_number(value: f64, ctx: FormatContext<'_>) -> String {
    match classify_number(ctx.collection_name, ctx.variable_name) {
        NumberCategory::Unitless => plain_number(value),
        NumberCategory::Dimensional => format!("{}px", plain_number(round_half_up(value, 100.0))),
        NumberCategory::Typographic | NumberCategory::Generic => px_to_rem(value, REM_BASE),
    }
}

/// Convert pixels to `rem`, keeping at most four decimals.
#[allow(clippy::float_cmp)]
pub fn px_to_rem(value: f64, base: f64) -> String {
    let rem = value / base;
    if rem == rem.floor() {
        return format!("{}rem", plain_number(rem));
    }
    let fixed = format!("{rem:.4}");
    format!("{}rem", fixed.trim_end_matches('0').trim_end_matches('.'))
}

// Halves go toward +inf, so -1.125 becomes -1.12.
fn round_half_up(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).floor() / scale
}

// Shortest decimal form, without a trailing ".0" and without "-0".
// Magnitudes outside 1e-6..1e21 use exponent notation (`1e+21`, `1e-7`).
fn plain_number(n: f64) -> String {
    let n = n + 0.0;
    let magnitude = n.abs();
    if n.is_finite() && magnitude > 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    n.to_string()
}
