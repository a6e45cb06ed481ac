//! Core types for the ecbdata ECB statistics client.
//!
//! This crate provides the fundamental data structures used throughout
//! ecbdata:
//!
//! - [`Series`] - An insertion-ordered, date-keyed observation mapping
//! - [`FxRequest`], [`DepositFacilityRateRequest`], [`HicpInflationRequest`] -
//!   Validated request value objects, one per indicator
//! - [`DuplicateHandling`], [`GrowthMode`] - Post-processing modes
//! - [`InflationObservation`] - HICP index value with optional growth factors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ecbdata/ecbdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod observation;
mod request;
mod series;

pub use error::RequestError;
pub use observation::InflationObservation;
pub use request::{
    BASE_CURRENCY, DepositFacilityRateRequest, DuplicateHandling, FxRequest, GrowthMode,
    HicpInflationRequest,
};
pub use series::Series;
