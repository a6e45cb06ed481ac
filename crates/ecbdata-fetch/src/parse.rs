//! Observation extraction from SDMX-ML response text.
//!
//! The response body is scanned as plain text rather than parsed as an XML
//! tree: every `ObsDimension`/`ObsValue` marker pair is matched in document
//! order, wherever it sits inside the surrounding wrapper markup. That keeps
//! the parser independent of the envelope shape and testable against small
//! synthetic string fixtures.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use ecbdata_types::Series;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur while extracting observations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A matched period is not a valid calendar date.
    #[error("invalid observation period {period:?}")]
    InvalidPeriod {
        /// The period string as it appeared in the response.
        period: String,
    },

    /// A matched observation value does not parse as a number.
    #[error("invalid observation value {value:?} for period {period}")]
    InvalidValue {
        /// The period the value belongs to.
        period: NaiveDate,
        /// The value string as it appeared in the response.
        value: String,
    },
}

fn day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"ObsDimension value="(\d{4}-\d{2}-\d{2})"/>\s*<generic:ObsValue value="([^"]*)"/>"#,
        )
        .expect("day pattern is valid")
    })
}

fn month_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"ObsDimension value="(\d{4}-\d{2})"/>\s*<generic:ObsValue value="([^"]*)"/>"#,
        )
        .expect("month pattern is valid")
    })
}

/// Extracts daily `YYYY-MM-DD` observations in document order.
///
/// # Errors
///
/// Returns an error if a matched period is not a valid date or a matched
/// value (including the empty string) does not parse as `V`.
pub fn parse_day_observations<V: FromStr>(content: &str) -> Result<Series<V>, ParseError> {
    scan(content, day_pattern(), |period| {
        NaiveDate::parse_from_str(period, "%Y-%m-%d").ok()
    })
}

/// Extracts monthly `YYYY-MM` observations in document order, keyed by the
/// first day of each month.
///
/// # Errors
///
/// Returns an error if a matched period is not a valid month or a matched
/// value (including the empty string) does not parse as `V`.
pub fn parse_month_observations<V: FromStr>(content: &str) -> Result<Series<V>, ParseError> {
    scan(content, month_pattern(), |period| {
        NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").ok()
    })
}

fn scan<V, F>(content: &str, pattern: &Regex, parse_period: F) -> Result<Series<V>, ParseError>
where
    V: FromStr,
    F: Fn(&str) -> Option<NaiveDate>,
{
    let mut series = Series::new();
    for captures in pattern.captures_iter(content) {
        let period = &captures[1];
        let date = parse_period(period).ok_or_else(|| ParseError::InvalidPeriod {
            period: period.to_string(),
        })?;
        let raw_value = &captures[2];
        let value = raw_value
            .parse::<V>()
            .map_err(|_| ParseError::InvalidValue {
                period: date,
                value: raw_value.to_string(),
            })?;
        series.insert(date, value);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn obs(period: &str, value: &str) -> String {
        format!(
            "<generic:Obs><generic:ObsDimension value=\"{period}\"/>\
             <generic:ObsValue value=\"{value}\"/></generic:Obs>"
        )
    }

    #[test]
    fn test_day_observations_document_order() {
        let payload = format!(
            "<message:GenericData><generic:Series>{}{}{}</generic:Series></message:GenericData>",
            obs("2024-01-03", "1.0956"),
            obs("2024-01-02", "1.0919"),
            obs("2024-01-04", "1.0953"),
        );

        let series: Series<f64> = parse_day_observations(&payload).unwrap();
        let entries: Vec<_> = series.iter().map(|(d, v)| (d, *v)).collect();
        assert_eq!(
            entries,
            vec![
                (date(2024, 1, 3), 1.0956),
                (date(2024, 1, 2), 1.0919),
                (date(2024, 1, 4), 1.0953),
            ]
        );
    }

    #[test]
    fn test_day_observations_tolerate_wrapper_padding() {
        let payload = format!(
            "<foo attr=\"x\">junk</foo>\n  {}\n<!-- comment -->\n{}\ntrailing garbage",
            obs("2024-02-01", "4.5"),
            obs("2024-02-02", "4.5"),
        );

        let series: Series<f64> = parse_day_observations(&payload).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.get(date(2024, 2, 1)), Some(&4.5));
    }

    #[test]
    fn test_day_observations_whitespace_between_markers() {
        let payload = "<generic:ObsDimension value=\"2024-03-01\"/>\n   \
                       <generic:ObsValue value=\"2.75\"/>";
        let series: Series<f64> = parse_day_observations(payload).unwrap();
        assert_eq!(series.get(date(2024, 3, 1)), Some(&2.75));
    }

    #[test]
    fn test_month_observations_keyed_by_first_of_month() {
        let payload = format!("{}{}", obs("2024-01", "124.01"), obs("2024-02", "124.80"));

        let series: Series<Decimal> = parse_month_observations(&payload).unwrap();
        let dates: Vec<_> = series.dates().collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 2, 1)]);
        assert_eq!(series.get(date(2024, 1, 1)), Some(&dec!(124.01)));
    }

    #[test]
    fn test_month_pattern_ignores_day_periods() {
        // A daily payload must not leak into the monthly extraction: the
        // month pattern requires the closing quote right after YYYY-MM.
        let payload = obs("2024-01-15", "1.0");
        let series: Series<f64> = parse_month_observations(&payload).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_duplicate_period_last_value_first_position() {
        let payload = format!(
            "{}{}{}",
            obs("2024-01-02", "1.0"),
            obs("2024-01-03", "2.0"),
            obs("2024-01-02", "9.0"),
        );

        let series: Series<f64> = parse_day_observations(&payload).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first(), Some((date(2024, 1, 2), &9.0)));
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        let payload = obs("2024-01-02", "n/a");
        let err = parse_day_observations::<f64>(&payload).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidValue {
                period: date(2024, 1, 2),
                value: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_value_is_error() {
        let payload = obs("2024-01-02", "");
        assert!(matches!(
            parse_day_observations::<f64>(&payload),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_out_of_range_period_is_error() {
        let payload = obs("2024-13-02", "1.0");
        let err = parse_day_observations::<f64>(&payload).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidPeriod {
                period: "2024-13-02".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_content() {
        let series: Series<f64> = parse_day_observations("").unwrap();
        assert!(series.is_empty());
    }
}
