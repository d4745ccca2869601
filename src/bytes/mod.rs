//! Byte-unit conversion and best-fit unit selection.

use crate::domain::{BytesDisplay, TableOptions, Unit, ValueTable};
use crate::format::round_to;
use tracing::debug;

static DECIMAL_MULTIPLES: [f64; 7] = [1.0, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18];
static BINARY_MULTIPLES: [f64; 7] = [
    1.0,
    1024.0,
    1_048_576.0,
    1_073_741_824.0,
    1_099_511_627_776.0,
    1_125_899_906_842_624.0,
    1_152_921_504_606_846_976.0,
];

/// Multiplier table indexed by [`Unit::power`].
pub fn multiples(decimal: bool) -> &'static [f64; 7] {
    if decimal {
        &DECIMAL_MULTIPLES
    } else {
        &BINARY_MULTIPLES
    }
}

impl Unit {
    /// Bytes in one of this unit.
    pub fn multiplier(self, decimal: bool) -> f64 {
        multiples(decimal)[self.power() as usize]
    }
}

/// Convert `value` expressed in `unit` to a raw byte count.
///
/// Unknown unit keys are treated as bytes. The result is not rounded, so a
/// fractional value in a large decimal unit can produce a fractional count.
pub fn to_bytes(value: f64, unit: &str, decimal: bool) -> f64 {
    let multiplier = match Unit::lookup(unit) {
        Some(unit) => unit.multiplier(decimal),
        None => {
            debug!(unit, "unknown unit, treating value as bytes");
            1.0
        }
    };
    value * multiplier
}

/// Express `value` in every unit, rounded to `options.precision` digits.
pub fn bytes_to_values(value: f64, options: &TableOptions) -> ValueTable {
    let bytes = if options.base_unit == Unit::B {
        value
    } else {
        to_bytes(value, options.base_unit.key(), options.decimal)
    };

    let table = multiples(options.decimal);
    let mut values = [0.0; 7];
    for (slot, multiplier) in values.iter_mut().zip(table.iter()) {
        *slot = round_to(bytes / multiplier, options.precision);
    }
    ValueTable::new(values)
}

/// Pick the smallest unit whose value falls in `[lower, upper)`.
///
/// Falls back to bytes when no unit qualifies. `None` options use
/// [`TableOptions::display`].
pub fn format_bytes(
    value: f64,
    lower: f64,
    upper: f64,
    options: Option<&TableOptions>,
) -> BytesDisplay {
    let options = options.copied().unwrap_or_else(TableOptions::display);
    let all_values = bytes_to_values(value, &options);

    let key = all_values
        .iter()
        .find(|(_, v)| *v >= lower && *v < upper)
        .map(|(unit, _)| unit)
        .unwrap_or_else(|| {
            debug!(value, lower, upper, "no unit in range, falling back to bytes");
            Unit::B
        });

    BytesDisplay { key, label: key.label(), value: all_values.get(key), all_values }
}
