/// Client-facing classification of an upstream failure.
///
/// Every [`MarketDataError`](super::MarketDataError) collapses into exactly one
/// of these, which is what the HTTP layer maps onto a response status.
///
/// | Kind | Typical cause | HTTP status |
/// |------|---------------|-------------|
/// | `NotFound` | upstream 404, empty result rows, no dividend row | 404 |
/// | `ServiceUnavailable` | upstream 503, or a 302 used as a busy page | 503 |
/// | `UpstreamFailure` | other status, transport error, undecodable body | 500 |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The upstream does not know the security, or has no data for it.
    NotFound,

    /// The upstream signalled a transient outage.
    ServiceUnavailable,

    /// Anything else: unexpected status, network failure, timeout, or a
    /// response body that could not be understood.
    UpstreamFailure,
}
