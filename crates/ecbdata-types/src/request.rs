//! Request value objects, one per indicator.
//!
//! Each request validates its inputs once at construction and is immutable
//! afterwards. An omitted end date defaults to the current date.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// The base currency of every ECB reference rate series.
pub const BASE_CURRENCY: &str = "EUR";

/// How equal subsequent values of a policy-rate series are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateHandling {
    /// Collapse runs of adjacent equal values to their first entry.
    #[default]
    Merge,
    /// Return the series exactly as fetched.
    DontMerge,
}

/// Whether a growth factor is computed for an inflation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMode {
    /// Compute the growth factor against the calendar-aligned baseline.
    #[default]
    Calculate,
    /// Leave the growth factor absent.
    Skip,
}

impl GrowthMode {
    /// Returns true for [`GrowthMode::Calculate`].
    #[must_use]
    pub const fn is_calculate(&self) -> bool {
        matches!(self, Self::Calculate)
    }
}

/// A request for daily EUR-base foreign-exchange reference rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxRequest {
    quote_ccy: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl FxRequest {
    /// Creates a request for `quote_ccy` against EUR over `[start, end]`.
    ///
    /// An absent `end` defaults to the current date.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote currency is empty or equals
    /// [`BASE_CURRENCY`] (compared case-insensitively), or if `start > end`.
    pub fn new(
        quote_ccy: impl Into<String>,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Self, RequestError> {
        let quote_ccy = quote_ccy.into();
        if quote_ccy.is_empty() {
            return Err(RequestError::EmptyQuoteCurrency);
        }
        if quote_ccy.eq_ignore_ascii_case(BASE_CURRENCY) {
            return Err(RequestError::QuoteIsBaseCurrency(quote_ccy));
        }
        let end = end.unwrap_or_else(today);
        if start > end {
            return Err(RequestError::InvalidRange { start, end });
        }
        Ok(Self {
            quote_ccy,
            start,
            end,
        })
    }

    /// The quote currency ISO code.
    #[must_use]
    pub fn quote_ccy(&self) -> &str {
        &self.quote_ccy
    }

    /// Start day, inclusive.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// End day, inclusive.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// A request for the daily euro-area deposit facility rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositFacilityRateRequest {
    start: NaiveDate,
    end: NaiveDate,
    duplicate_handling: DuplicateHandling,
}

impl DepositFacilityRateRequest {
    /// Creates a request over `[start, end]`, with an absent `end` defaulting
    /// to the current date.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end`.
    pub fn new(
        start: NaiveDate,
        end: Option<NaiveDate>,
        duplicate_handling: DuplicateHandling,
    ) -> Result<Self, RequestError> {
        let end = end.unwrap_or_else(today);
        if start > end {
            return Err(RequestError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            duplicate_handling,
        })
    }

    /// Start day, inclusive.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// End day, inclusive.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// How equal subsequent rate values are handled.
    #[must_use]
    pub const fn duplicate_handling(&self) -> DuplicateHandling {
        self.duplicate_handling
    }
}

/// A request for the monthly euro-area all-items HICP index.
///
/// The start day is normalized to the first day of its month and the end day
/// to the last day of its month, so the requested window always covers whole
/// months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HicpInflationRequest {
    start: NaiveDate,
    end: NaiveDate,
    mom_growth: GrowthMode,
    yoy_growth: GrowthMode,
}

impl HicpInflationRequest {
    /// Creates a request over the months covering `[start, end]`, with an
    /// absent `end` defaulting to the current date.
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end` (before normalization).
    pub fn new(
        start: NaiveDate,
        end: Option<NaiveDate>,
        mom_growth: GrowthMode,
        yoy_growth: GrowthMode,
    ) -> Result<Self, RequestError> {
        let end = end.unwrap_or_else(today);
        if start > end {
            return Err(RequestError::InvalidRange { start, end });
        }
        Ok(Self {
            start: first_of_month(start),
            end: last_of_month(end),
            mom_growth,
            yoy_growth,
        })
    }

    /// Start day, normalized to the first of its month.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// End day, normalized to the last day of its month.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Month-over-month growth mode.
    #[must_use]
    pub const fn mom_growth(&self) -> GrowthMode {
        self.mom_growth
    }

    /// Year-over-year growth mode.
    #[must_use]
    pub const fn yoy_growth(&self) -> GrowthMode {
        self.yoy_growth
    }

    /// The start of the window actually queried.
    ///
    /// The requested start is shifted back 12 months when year-over-year
    /// growth is requested, else 1 month when month-over-month growth is
    /// requested, so every baseline month is inside the single fetched
    /// window.
    #[must_use]
    pub fn extended_start(&self) -> NaiveDate {
        if self.yoy_growth.is_calculate() {
            self.start - Months::new(12)
        } else if self.mom_growth.is_calculate() {
            self.start - Months::new(1)
        } else {
            self.start
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1) - Days::new(1)
}
