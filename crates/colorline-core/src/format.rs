// File: crates/colorline-core/src/format.rs
// Summary: Number formatting for SVG attributes and axis tick labels.

use crate::grid::tick_step;

const MINUS: char = '\u{2212}';
/// Decimals used when a tick step cannot be derived (degenerate domain).
const FALLBACK_PRECISION: usize = 6;

/// Shortest round-trip text for a coordinate, as written into attributes.
/// Negative zero prints as `0`.
pub fn num(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        format!("{}", v + 0.0)
    }
}

/// Decimal exponent of `v` in scientific notation (`0.2` -> -1, `250` -> 2).
fn exponent(v: f64) -> Option<i32> {
    if !v.is_finite() || v == 0.0 { return None; }
    let s = format!("{:e}", v.abs());
    s.split_once('e').and_then(|(_, e)| e.parse().ok())
}

/// Fixed-point label formatter with thousands grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat {
    pub precision: usize,
}

impl TickFormat {
    /// Formatter suited to the ticks generated for `[start, stop]` with `count`.
    pub fn for_ticks(start: f64, stop: f64, count: usize) -> Self {
        let step = tick_step(start, stop, count).abs();
        let precision = exponent(step)
            .map(|e| (-e).max(0) as usize)
            .unwrap_or(FALLBACK_PRECISION);
        Self { precision }
    }

    pub fn format(&self, v: f64) -> String {
        if !v.is_finite() { return num(v); }
        let fixed = format!("{:.*}", self.precision, v.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let negative = v < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if negative { out.push(MINUS); }
        out.push_str(&group_thousands(int_part));
        if let Some(f) = frac_part {
            out.push('.');
            out.push_str(f);
        }
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }

    #[test]
    fn exponent_of_steps() {
        assert_eq!(exponent(0.2), Some(-1));
        assert_eq!(exponent(1.0), Some(0));
        assert_eq!(exponent(1000.0), Some(3));
        assert_eq!(exponent(0.0), None);
    }

    #[test]
    fn attribute_numbers() {
        assert_eq!(num(0.0), "0");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1.5), "1.5");
        assert_eq!(num(1080.0), "1080");
    }
}
