//! Per-indicator fetch operations.

use ecbdata_types::{
    DepositFacilityRateRequest, FxRequest, HicpInflationRequest, InflationObservation,
    RequestError, Series,
};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::parse::{self, ParseError};
use crate::postprocess::{self, DataGapError};
use crate::transport::{HttpTransport, ReqwestTransport, TransportError};
use crate::url;

/// Errors that can fail a fetch.
///
/// A fetch either returns a complete, correctly ordered series or exactly one
/// of these; there are no partial results.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request validation failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The transport failed or the server answered with a non-success status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body does not contain parseable observations.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A growth-factor baseline is missing from the fetched series.
    #[error(transparent)]
    DataGap(#[from] DataGapError),
}

/// Client for the ECB statistical data API.
///
/// One fetch call issues exactly one outbound request and runs all parsing
/// and post-processing on the calling task before returning. The client
/// holds no mutable state, so it can be shared freely as long as the
/// transport is safe for concurrent use.
#[derive(Debug, Clone)]
pub struct EcbClient<T = ReqwestTransport> {
    transport: T,
}

impl EcbClient<ReqwestTransport> {
    /// Creates a client over a [`ReqwestTransport`] with default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Ok(Self::new(ReqwestTransport::with_defaults()?))
    }
}

impl<T: HttpTransport> EcbClient<T> {
    /// Creates a client over the given transport.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches daily EUR-base reference rates for one quote currency.
    ///
    /// Keys are the calendar days present in the payload, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable payload.
    pub async fn fetch_fx(&self, request: &FxRequest) -> Result<Series<f64>, FetchError> {
        let url = url::fx_url(request.quote_ccy(), request.start(), request.end());
        let body = self.fetch_raw(&url).await?;
        Ok(parse::parse_day_observations(&body)?)
    }

    /// Fetches the daily euro-area deposit facility rate.
    ///
    /// With [`DuplicateHandling::Merge`](ecbdata_types::DuplicateHandling::Merge)
    /// the series keeps only the first day of each run of equal rates.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable payload.
    pub async fn fetch_deposit_facility_rate(
        &self,
        request: &DepositFacilityRateRequest,
    ) -> Result<Series<f64>, FetchError> {
        let url = url::deposit_facility_rate_url(request.start(), request.end());
        let body = self.fetch_raw(&url).await?;
        let mut series = parse::parse_day_observations(&body)?;
        postprocess::apply_duplicate_handling(&mut series, request.duplicate_handling());
        Ok(series)
    }

    /// Fetches the monthly euro-area HICP index with derived growth factors.
    ///
    /// The query window is extended backward to cover the growth baselines;
    /// the returned series covers exactly the requested months.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, an
    /// unparseable payload, or a missing growth baseline.
    pub async fn fetch_hicp_inflation(
        &self,
        request: &HicpInflationRequest,
    ) -> Result<Series<InflationObservation>, FetchError> {
        let url = url::hicp_url(request.extended_start(), request.end());
        let body = self.fetch_raw(&url).await?;
        let cpi = parse::parse_month_observations::<Decimal>(&body)?;
        Ok(postprocess::inflation_series(
            &cpi,
            request.start(),
            request.end(),
            request.mom_growth(),
            request.yoy_growth(),
        )?)
    }

    async fn fetch_raw(&self, url: &str) -> Result<String, TransportError> {
        let response = self.transport.get(url, &[]).await?;
        if (200..=299).contains(&response.status) {
            Ok(response.body)
        } else {
            Err(TransportError::Status {
                status: response.status,
                url: url.to_string(),
            })
        }
    }
}
