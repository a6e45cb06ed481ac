//! Indicator-specific series post-processing.
//!
//! Two transforms live here: adjacent-duplicate collapsing for the policy
//! rate and calendar-aligned growth-factor derivation for the HICP index.

use chrono::{Months, NaiveDate};
use ecbdata_types::{DuplicateHandling, GrowthMode, InflationObservation, Series};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Fractional digits of a growth factor.
const GROWTH_FACTOR_SCALE: u32 = 6;

/// Errors raised when a growth-factor baseline cannot be used.
///
/// The query window is extended so that every baseline month is fetched; a
/// missing baseline therefore indicates an upstream data gap and fails the
/// whole computation rather than producing a partial record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataGapError {
    /// The baseline month is absent from the fetched series.
    #[error("missing baseline observation {baseline} for {month}")]
    MissingBaseline {
        /// The month whose growth factor was being computed.
        month: NaiveDate,
        /// The absent baseline month.
        baseline: NaiveDate,
    },

    /// The baseline index value is zero.
    #[error("zero baseline index {baseline} for {month}")]
    ZeroBaseline {
        /// The month whose growth factor was being computed.
        month: NaiveDate,
        /// The baseline month with the zero index.
        baseline: NaiveDate,
    },
}

/// Applies the requested duplicate handling to a policy-rate series.
///
/// [`DuplicateHandling::Merge`] collapses runs of adjacent equal values to
/// their first entry; [`DuplicateHandling::DontMerge`] leaves the series
/// untouched.
pub fn apply_duplicate_handling(series: &mut Series<f64>, handling: DuplicateHandling) {
    match handling {
        DuplicateHandling::Merge => series.dedup_values(),
        DuplicateHandling::DontMerge => {}
    }
}

/// Derives inflation observations for the months inside `[start, end]`.
///
/// `cpi` is the series fetched over the *extended* window: months before
/// `start` serve only as growth baselines and are excluded from the output,
/// as is anything past `end`. Growth factors are computed in decimal
/// arithmetic and rounded half-up to 6 fractional digits; a factor whose
/// mode is [`GrowthMode::Skip`] stays absent.
///
/// # Errors
///
/// Returns an error if a required baseline month is missing from `cpi` or
/// holds a zero index value.
pub fn inflation_series(
    cpi: &Series<Decimal>,
    start: NaiveDate,
    end: NaiveDate,
    mom_growth: GrowthMode,
    yoy_growth: GrowthMode,
) -> Result<Series<InflationObservation>, DataGapError> {
    let mut results = Series::new();
    for (month, &index) in cpi.iter() {
        if month < start || month > end {
            continue;
        }
        let mom = match mom_growth {
            GrowthMode::Calculate => Some(growth_factor(cpi, month, index, 1)?),
            GrowthMode::Skip => None,
        };
        let yoy = match yoy_growth {
            GrowthMode::Calculate => Some(growth_factor(cpi, month, index, 12)?),
            GrowthMode::Skip => None,
        };
        results.insert(month, InflationObservation::new(index, mom, yoy));
    }
    Ok(results)
}

fn growth_factor(
    cpi: &Series<Decimal>,
    month: NaiveDate,
    index: Decimal,
    months_back: u32,
) -> Result<Decimal, DataGapError> {
    let baseline_month = month - Months::new(months_back);
    let baseline = cpi
        .get(baseline_month)
        .copied()
        .ok_or(DataGapError::MissingBaseline {
            month,
            baseline: baseline_month,
        })?;
    index
        .checked_div(baseline)
        .map(|factor| {
            factor.round_dp_with_strategy(GROWTH_FACTOR_SCALE, RoundingStrategy::MidpointAwayFromZero)
        })
        .ok_or(DataGapError::ZeroBaseline {
            month,
            baseline: baseline_month,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn rate_series(values: &[f64]) -> Series<f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (day(i as u32 + 1), v))
            .collect()
    }

    #[test]
    fn test_merge_collapses_adjacent_duplicates() {
        let mut series = rate_series(&[1.0, 1.0, 2.0, 2.0, 2.0, 1.0]);
        apply_duplicate_handling(&mut series, DuplicateHandling::Merge);

        let values: Vec<_> = series.values().copied().collect();
        assert_eq!(values, vec![1.0, 2.0, 1.0]);
        // First-of-run keys survive.
        let dates: Vec<_> = series.dates().collect();
        assert_eq!(dates, vec![day(1), day(3), day(6)]);
    }

    #[test]
    fn test_dont_merge_leaves_series_untouched() {
        let mut series = rate_series(&[1.0, 1.0, 2.0, 2.0, 2.0, 1.0]);
        apply_duplicate_handling(&mut series, DuplicateHandling::DontMerge);
        assert_eq!(series, rate_series(&[1.0, 1.0, 2.0, 2.0, 2.0, 1.0]));
    }

    #[test]
    fn test_growth_factors() {
        let cpi: Series<Decimal> = [
            (month(2023, 1), dec!(97.5)),
            (month(2023, 2), dec!(98.0)),
            (month(2024, 1), dec!(100.0)),
            (month(2024, 2), dec!(101.0)),
        ]
        .into_iter()
        .collect();

        let results = inflation_series(
            &cpi,
            month(2024, 2),
            month(2024, 2),
            GrowthMode::Calculate,
            GrowthMode::Calculate,
        )
        .unwrap();

        assert_eq!(results.len(), 1);
        let obs = results.get(month(2024, 2)).unwrap();
        assert_eq!(obs.index, dec!(101.0));
        // 101.0 / 100.0
        assert_eq!(obs.mom_growth, Some(dec!(1.010000)));
        // 101.0 / 98.0 = 1.0306122..., half-up at 6 digits
        assert_eq!(obs.yoy_growth, Some(dec!(1.030612)));
    }

    #[test]
    fn test_skip_modes_leave_factors_absent() {
        let cpi: Series<Decimal> = [(month(2024, 1), dec!(100.0))].into_iter().collect();

        let results = inflation_series(
            &cpi,
            month(2024, 1),
            month(2024, 1),
            GrowthMode::Skip,
            GrowthMode::Skip,
        )
        .unwrap();

        let obs = results.get(month(2024, 1)).unwrap();
        assert_eq!(obs.mom_growth, None);
        assert_eq!(obs.yoy_growth, None);
    }

    #[test]
    fn test_lookback_months_excluded_from_output() {
        let cpi: Series<Decimal> = [
            (month(2023, 12), dec!(99.0)),
            (month(2024, 1), dec!(100.0)),
            (month(2024, 2), dec!(101.0)),
        ]
        .into_iter()
        .collect();

        let results = inflation_series(
            &cpi,
            month(2024, 1),
            month(2024, 2),
            GrowthMode::Calculate,
            GrowthMode::Skip,
        )
        .unwrap();

        let months: Vec<_> = results.dates().collect();
        assert_eq!(months, vec![month(2024, 1), month(2024, 2)]);
    }

    #[test]
    fn test_months_past_window_end_excluded() {
        let cpi: Series<Decimal> = [
            (month(2024, 1), dec!(100.0)),
            (month(2024, 2), dec!(101.0)),
        ]
        .into_iter()
        .collect();

        let results = inflation_series(
            &cpi,
            month(2024, 1),
            month(2024, 1),
            GrowthMode::Skip,
            GrowthMode::Skip,
        )
        .unwrap();

        assert_eq!(results.dates().collect::<Vec<_>>(), vec![month(2024, 1)]);
    }

    #[test]
    fn test_missing_baseline_is_fatal() {
        let cpi: Series<Decimal> = [(month(2024, 2), dec!(101.0))].into_iter().collect();

        let err = inflation_series(
            &cpi,
            month(2024, 2),
            month(2024, 2),
            GrowthMode::Calculate,
            GrowthMode::Skip,
        )
        .unwrap_err();

        assert_eq!(
            err,
            DataGapError::MissingBaseline {
                month: month(2024, 2),
                baseline: month(2024, 1),
            }
        );
    }

    #[test]
    fn test_zero_baseline_is_fatal() {
        let cpi: Series<Decimal> = [
            (month(2024, 1), dec!(0)),
            (month(2024, 2), dec!(101.0)),
        ]
        .into_iter()
        .collect();

        let err = inflation_series(
            &cpi,
            month(2024, 2),
            month(2024, 2),
            GrowthMode::Calculate,
            GrowthMode::Skip,
        )
        .unwrap_err();

        assert!(matches!(err, DataGapError::ZeroBaseline { .. }));
    }
}
