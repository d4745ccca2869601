//! Float rounding and thousands-grouped number rendering.

use crate::domain::Numbers;
use tracing::trace;

/// Extra digits rendered past the requested precision before rounding by hand.
const GUARD_DIGITS: usize = 20;

/// Largest precision honoured; higher requests are clamped to it.
pub const MAX_PRECISION: u32 = 100;

/// Round every entry of `numbers` to `precision` decimal digits.
///
/// The container shape is preserved. Non-finite entries become `0`, and the
/// rounded values are plain numbers, so `10.00` at precision 2 is `10`.
pub fn format_floats(numbers: &Numbers, precision: u32) -> Numbers {
    match numbers {
        Numbers::Seq(items) => {
            Numbers::Seq(items.iter().map(|value| round_to(*value, precision)).collect())
        }
        Numbers::Record(map) => Numbers::Record(
            map.iter().map(|(key, value)| (key.clone(), round_to(*value, precision))).collect(),
        ),
    }
}

/// Round a single value to `precision` decimal digits, ties away from zero.
///
/// Rounding works on the exact decimal expansion of `value`, so `3.1415`
/// (stored as `3.14149999…`) rounds to `3.141` at precision 3. Precision is
/// clamped to [`MAX_PRECISION`].
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        trace!(value, "non-finite value normalized to 0");
        return 0.0;
    }
    if precision > MAX_PRECISION {
        trace!(precision, "precision clamped to {MAX_PRECISION}");
    }
    to_fixed(value, precision.min(MAX_PRECISION) as usize).parse().unwrap_or(0.0)
}

fn to_fixed(value: f64, precision: usize) -> String {
    let expanded = format!("{:.*}", precision + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut digits: Vec<char> = int_part.chars().chain(frac_part.chars().take(precision)).collect();
    let round_up = frac_part.chars().nth(precision).is_some_and(|d| d >= '5');
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, '1');
                break;
            }
            idx -= 1;
            if digits[idx] == '9' {
                digits[idx] = '0';
            } else {
                digits[idx] = char::from(digits[idx] as u8 + 1);
                break;
            }
        }
    }

    let int_len = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && digits.iter().any(|d| *d != '0') {
        out.push('-');
    }
    out.extend(&digits[..int_len]);
    if precision > 0 {
        out.push('.');
        out.extend(&digits[int_len..]);
    }
    out
}

/// Render `value` with thousands separators, optionally zero-padded.
///
/// Non-finite input renders as `"0"`. When the plain rendering is shorter
/// than `padding`, positive values get leading zeros up to that width and
/// zero or negative values collapse to `"0"`. The fill zeros are not grouped.
///
/// ```
/// use fmtkit::format::format_number;
///
/// assert_eq!(format_number(1000.0, 0), "1,000");
/// assert_eq!(format_number(1.0, 4), "0001");
/// assert_eq!(format_number(0.0, 2), "0");
/// ```
pub fn format_number(value: f64, padding: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    // -0.0 renders as "0"
    let plain = if value == 0.0 { "0".to_string() } else { value.to_string() };
    let grouped = group_thousands(&plain);

    if padding > 0 && plain.len() < padding {
        if value > 0.0 {
            return format!("{}{}", "0".repeat(padding - plain.len()), grouped);
        }
        return "0".to_string();
    }

    grouped
}

/// Insert a comma before every group of three integer digits, counting from
/// the right (e.g. `"-1048576.5"` → `"-1,048,576.5"`).
pub fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let len = int_part.len();
    let mut result = String::with_capacity(rendered.len() + len / 3);
    result.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if let Some(frac_part) = frac_part {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(entries: &[(&str, f64)]) -> Numbers {
        let map: BTreeMap<String, f64> = entries.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        Numbers::Record(map)
    }

    #[test]
    fn rounds_to_integers_by_default() {
        assert_eq!(format_floats(&record(&[("foo", 3.14)]), 0), record(&[("foo", 3.0)]));
        assert_eq!(format_floats(&Numbers::Seq(vec![3.14]), 0), Numbers::Seq(vec![3.0]));
        assert_eq!(format_floats(&record(&[("bar", 10.00)]), 0), record(&[("bar", 10.0)]));
    }

    #[test]
    fn rounds_to_requested_precision() {
        let input = record(&[("foo", 3.1415), ("bar", 10.00)]);
        assert_eq!(format_floats(&input, 2), record(&[("foo", 3.14), ("bar", 10.0)]));
    }

    #[test]
    fn non_finite_values_become_zero() {
        let input = record(&[("foo", f64::NAN), ("bar", 3.1415)]);
        assert_eq!(format_floats(&input, 3), record(&[("foo", 0.0), ("bar", 3.141)]));

        let seq = Numbers::Seq(vec![f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(format_floats(&seq, 1), Numbers::Seq(vec![0.0, 0.0]));
    }

    #[test]
    fn empty_containers_keep_their_shape() {
        assert_eq!(format_floats(&Numbers::Seq(vec![]), 2), Numbers::Seq(vec![]));
        assert_eq!(format_floats(&record(&[]), 2), record(&[]));
    }

    #[test]
    fn input_is_left_untouched() {
        let input = Numbers::Seq(vec![1.2345]);
        let _ = format_floats(&input, 1);
        assert_eq!(input, Numbers::Seq(vec![1.2345]));
    }

    #[test]
    fn round_to_breaks_ties_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn round_to_carries_into_integer_part() {
        assert_eq!(round_to(9.999, 2), 10.0);
        assert_eq!(round_to(99.5, 0), 100.0);
        assert_eq!(round_to(-0.0004, 2), 0.0);
    }

    #[test]
    fn round_to_clamps_huge_precision() {
        assert_eq!(round_to(1.5, u32::MAX), 1.5);
        assert_eq!(round_to(0.1, MAX_PRECISION + 1), 0.1);
        assert_eq!(
            format_floats(&Numbers::Seq(vec![2.25]), u32::MAX),
            Numbers::Seq(vec![2.25])
        );
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1000.0, 0), "-1,000");
    }

    #[test]
    fn format_number_pads_positive_values() {
        assert_eq!(format_number(1.0, 2), "01");
        assert_eq!(format_number(1.0, 4), "0001");
        assert_eq!(format_number(1000.0, 6), "001,000");
        assert_eq!(format_number(12345.0, 2), "12,345");
    }

    #[test]
    fn format_number_padding_collapses_zero_and_negatives() {
        assert_eq!(format_number(0.0, 2), "0");
        assert_eq!(format_number(-1.0, 4), "0");
        assert_eq!(format_number(-12.0, 3), "-12");
        assert_eq!(format_number(0.0, 0), "0");
    }

    #[test]
    fn format_number_handles_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), "0");
        assert_eq!(format_number(f64::INFINITY, 0), "0");
    }

    #[test]
    fn group_thousands_leaves_fraction_alone() {
        assert_eq!(group_thousands("1048576.1234"), "1,048,576.1234");
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("12"), "12");
    }
}
