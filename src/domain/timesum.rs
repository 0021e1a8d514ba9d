use crate::utils::error::{FinderError, Result};
use regex::Regex;
use std::sync::OnceLock;

static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn time_pattern() -> &'static Regex {
    TIME_PATTERN
        .get_or_init(|| Regex::new(r"^(2[0-3]|[01]?[0-9]):([0-5]?[0-9]):([0-5]?[0-9])$").unwrap())
}

/// Sums the numeric components of a wall-clock time string.
///
/// Accepted grammar: `HH:MM:SS` where each component is one or two digits,
/// hours in 0-23, minutes and seconds in 0-59. Leading zeros are optional on
/// every component, so both "01:02:03" and "1:2:3" sum to 6. Anything else
/// (missing separators, non-numeric components, out-of-range values,
/// surrounding whitespace) fails with `InvalidTimeFormat`.
pub fn sum_time_components(time_str: &str) -> Result<u32> {
    let captures =
        time_pattern()
            .captures(time_str)
            .ok_or_else(|| FinderError::InvalidTimeFormat {
                input: time_str.to_string(),
            })?;

    let mut total = 0u32;
    for index in 1..=3 {
        let component: u32 =
            captures[index]
                .parse()
                .map_err(|_| FinderError::InvalidTimeFormat {
                    input: time_str.to_string(),
                })?;
        total += component;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_zero_padded_components() {
        assert_eq!(sum_time_components("01:02:03").unwrap(), 6);
        assert_eq!(sum_time_components("23:59:59").unwrap(), 121);
        assert_eq!(sum_time_components("00:00:00").unwrap(), 0);
        assert_eq!(sum_time_components("12:30:45").unwrap(), 87);
    }

    #[test]
    fn accepts_single_digit_components() {
        assert_eq!(sum_time_components("1:2:3").unwrap(), 6);
        assert_eq!(sum_time_components("0:0:0").unwrap(), 0);
        assert_eq!(sum_time_components("9:59:1").unwrap(), 69);
        assert_eq!(sum_time_components("1:02:3").unwrap(), 6);
    }

    #[test]
    fn rejects_out_of_range_hours() {
        assert!(sum_time_components("24:00:00").is_err());
        assert!(sum_time_components("25:00:00").is_err());
        assert!(sum_time_components("99:00:00").is_err());
    }

    #[test]
    fn rejects_out_of_range_minutes_and_seconds() {
        assert!(sum_time_components("12:60:00").is_err());
        assert!(sum_time_components("12:00:60").is_err());
        assert!(sum_time_components("12:99:99").is_err());
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(sum_time_components("").is_err());
        assert!(sum_time_components("abc").is_err());
        assert!(sum_time_components("12:00").is_err());
        assert!(sum_time_components("12:00:00:00").is_err());
        assert!(sum_time_components("12-00-00").is_err());
        assert!(sum_time_components("1a:00:00").is_err());
        assert!(sum_time_components("12:00:0x").is_err());
        assert!(sum_time_components("::").is_err());
    }

    #[test]
    fn rejects_surrounding_noise() {
        assert!(sum_time_components(" 01:02:03").is_err());
        assert!(sum_time_components("01:02:03 ").is_err());
        assert!(sum_time_components("-1:00:00").is_err());
        assert!(sum_time_components("01:02:03\n").is_err());
        assert!(sum_time_components("001:02:03").is_err());
    }

    #[test]
    fn reports_the_offending_input() {
        let err = sum_time_components("25:00:00").unwrap_err();
        match err {
            FinderError::InvalidTimeFormat { input } => assert_eq!(input, "25:00:00"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
