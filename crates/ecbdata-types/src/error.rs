//! Request validation errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when constructing a request value object.
///
/// Validation happens once, at construction, before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The quote currency is empty.
    #[error("quote currency must not be empty")]
    EmptyQuoteCurrency,

    /// The quote currency equals the base currency.
    #[error("quote currency must not be the base currency {0}")]
    QuoteIsBaseCurrency(String),

    /// Start date is after end date.
    #[error("invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
