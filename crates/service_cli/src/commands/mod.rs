//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer and log progress through `tracing`.

pub mod check;
pub mod jump;
pub mod raw;
pub mod sample;
pub mod summary;

/// Formats a variate with `precision` significant digits.
///
/// Integer-valued variates are printed without a fractional part.
pub(crate) fn format_value(value: f64, precision: usize, discrete: bool) -> String {
    if discrete {
        format!("{}", value as i64)
    } else {
        format!("{:.*e}", precision.saturating_sub(1), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.5, 3, false), "1.50e0");
        assert_eq!(format_value(-0.00015, 2, false), "-1.5e-4");
        assert_eq!(format_value(42.0, 17, true), "42");
    }
}
