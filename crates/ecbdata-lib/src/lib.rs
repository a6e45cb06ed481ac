//! Rust client for the ECB statistical data API.
//!
//! This is a facade crate that re-exports functionality from the ecbdata
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use ecbdata_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EcbClient::with_defaults()?;
//!
//!     let request = FxRequest::new(
//!         "USD",
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         None,
//!     )?;
//!
//!     let rates = client.fetch_fx(&request).await?;
//!     for (day, rate) in rates.iter() {
//!         println!("{day}: {rate}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ecbdata/ecbdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use ecbdata_types::*;

// Re-export the fetch pipeline
pub use ecbdata_fetch::{
    ClientConfig, DataGapError, EcbClient, FetchError, HttpTransport, ParseError,
    ReqwestTransport, TransportError, TransportResponse, parse, postprocess, url,
};

/// Prelude module for convenient imports.
///
/// ```
/// use ecbdata_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ecbdata_types::{
        DepositFacilityRateRequest, DuplicateHandling, FxRequest, GrowthMode,
        HicpInflationRequest, InflationObservation, RequestError, Series,
    };

    pub use ecbdata_fetch::{
        ClientConfig, EcbClient, FetchError, HttpTransport, ReqwestTransport,
    };
}
