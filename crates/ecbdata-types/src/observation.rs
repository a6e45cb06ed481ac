//! Inflation observation record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monthly HICP observation with optional derived growth factors.
///
/// A growth factor is `None` when its [`GrowthMode`](crate::GrowthMode) was
/// [`Skip`](crate::GrowthMode::Skip); it is never defaulted to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationObservation {
    /// The HICP index value.
    pub index: Decimal,
    /// Growth factor against the previous month, 6 fractional digits,
    /// rounded half-up.
    pub mom_growth: Option<Decimal>,
    /// Growth factor against the same month of the previous year, 6
    /// fractional digits, rounded half-up.
    pub yoy_growth: Option<Decimal>,
}

impl InflationObservation {
    /// Creates a new inflation observation.
    #[must_use]
    pub const fn new(
        index: Decimal,
        mom_growth: Option<Decimal>,
        yoy_growth: Option<Decimal>,
    ) -> Self {
        Self {
            index,
            mom_growth,
            yoy_growth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_absent_growth_factors() {
        let obs = InflationObservation::new(dec!(126.73), None, None);
        assert_eq!(obs.index, dec!(126.73));
        assert!(obs.mom_growth.is_none());
        assert!(obs.yoy_growth.is_none());
    }
}
