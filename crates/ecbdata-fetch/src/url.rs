//! ECB data API query construction.

use chrono::NaiveDate;

/// Base URL of the ECB statistical data API.
pub const BASE_URL: &str = "https://data-api.ecb.europa.eu/service/data";

/// Builds the query for daily EUR-base reference rates of one currency.
///
/// Query format:
/// `{BASE_URL}/EXR/D.{CCY}.EUR.SP00.A?startPeriod={start}&endPeriod={end}&detail=dataonly`
///
/// `detail=dataonly` suppresses descriptive metadata to keep the payload
/// small.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ecbdata_fetch::url::fx_url;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(
///     fx_url("usd", start, end),
///     "https://data-api.ecb.europa.eu/service/data/EXR/D.USD.EUR.SP00.A?startPeriod=2024-01-02&endPeriod=2024-01-31&detail=dataonly"
/// );
/// ```
#[must_use]
pub fn fx_url(quote_ccy: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/EXR/D.{}.EUR.SP00.A?startPeriod={}&endPeriod={}&detail=dataonly",
        BASE_URL,
        quote_ccy.to_uppercase(),
        start,
        end
    )
}

/// Builds the query for the daily euro-area deposit facility rate.
#[must_use]
pub fn deposit_facility_rate_url(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/FM/D.U2.EUR.4F.KR.DFR.LEV?startPeriod={}&endPeriod={}&detail=dataonly",
        BASE_URL, start, end
    )
}

/// Builds the query for the monthly euro-area all-items HICP index.
///
/// `start` is expected to be the *extended* window start (see
/// [`HicpInflationRequest::extended_start`](ecbdata_types::HicpInflationRequest::extended_start)),
/// so the growth baselines land inside the single fetched window.
#[must_use]
pub fn hicp_url(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/ICP/M.U2.N.000000.4.INX?startPeriod={}&endPeriod={}&detail=dataonly",
        BASE_URL, start, end
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fx_url_uppercases_currency() {
        let url = fx_url("czk", date(2023, 6, 1), date(2023, 6, 30));
        assert_eq!(
            url,
            "https://data-api.ecb.europa.eu/service/data/EXR/D.CZK.EUR.SP00.A?startPeriod=2023-06-01&endPeriod=2023-06-30&detail=dataonly"
        );
    }

    #[test]
    fn test_deposit_facility_rate_url() {
        let url = deposit_facility_rate_url(date(2022, 1, 1), date(2022, 12, 31));
        assert_eq!(
            url,
            "https://data-api.ecb.europa.eu/service/data/FM/D.U2.EUR.4F.KR.DFR.LEV?startPeriod=2022-01-01&endPeriod=2022-12-31&detail=dataonly"
        );
    }

    #[test]
    fn test_hicp_url() {
        let url = hicp_url(date(2023, 3, 1), date(2024, 3, 31));
        assert_eq!(
            url,
            "https://data-api.ecb.europa.eu/service/data/ICP/M.U2.N.000000.4.INX?startPeriod=2023-03-01&endPeriod=2024-03-31&detail=dataonly"
        );
    }
}
