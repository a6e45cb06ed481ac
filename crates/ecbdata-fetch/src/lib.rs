//! Fetch pipeline for the ecbdata ECB statistics client.
//!
//! This crate provides the data retrieval pipeline:
//!
//! - [`url`] - Constructs ECB data API queries
//! - [`HttpTransport`] / [`ReqwestTransport`] - Swappable transport port
//! - [`parse`] - Observation extraction from SDMX-ML response text
//! - [`postprocess`] - Duplicate collapsing and growth-factor derivation
//! - [`EcbClient`] - Per-indicator fetch operations

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ecbdata/ecbdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod parse;
pub mod postprocess;
mod service;
mod transport;
pub mod url;

pub use parse::ParseError;
pub use postprocess::DataGapError;
pub use service::{EcbClient, FetchError};
pub use transport::{ClientConfig, HttpTransport, ReqwestTransport, TransportError, TransportResponse};
