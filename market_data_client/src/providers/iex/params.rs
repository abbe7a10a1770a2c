use crate::models::request_params::HistoricalBarsRequest;

/// Builds the chart endpoint path for one request triple.
///
/// The vendor exposes three variants of the same endpoint:
/// - `/stock/{symbol}/chart/date/{date}` when an absolute date is given
///   (the date wins over any range),
/// - `/stock/{symbol}/chart/{range}` when a relative range is given,
/// - `/stock/{symbol}/chart` for the vendor-default window.
pub(crate) fn chart_path(params: &HistoricalBarsRequest) -> String {
    if !params.date.is_empty() {
        format!("/stock/{}/chart/date/{}", params.symbol, params.date)
    } else if !params.range.is_empty() {
        format!("/stock/{}/chart/{}", params.symbol, params.range)
    } else {
        format!("/stock/{}/chart", params.symbol)
    }
}
