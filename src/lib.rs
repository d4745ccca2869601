//! fmtkit: number, byte-size and record-diff formatting helpers
//!
//! Every formatter is a pure function. Invalid input degrades to a safe
//! default (`0`, bytes, "missing") instead of returning an error.
//!
//! ```
//! use fmtkit::bytes::{format_bytes, to_bytes};
//!
//! assert_eq!(to_bytes(1.0, "kb", false), 1024.0);
//! assert_eq!(format_bytes(1000.0, 1.0, 1000.0, None).to_string(), "1 KB");
//! ```

pub mod bytes;
pub mod cli;
pub mod config;
pub mod diff;
pub mod domain;
pub mod format;

pub use bytes::{bytes_to_values, format_bytes, multiples, to_bytes};
pub use diff::{diff, diff_symmetric, values_equal, Diff, DiffEntry};
pub use domain::{BytesDisplay, Config, Numbers, TableOptions, Unit, ValueTable};
pub use format::{format_floats, format_number, round_to};
