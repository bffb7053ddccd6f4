use url::Url;
use url::form_urlencoded::byte_serialize;

use yardstick_core::{ChartRequest, ChartWindow, RelayConfig, YardstickError};

/// Default upstream chart endpoint; the symbol is appended as a path segment.
pub const DEFAULT_UPSTREAM: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Build the upstream chart URL for `req` under `base`.
///
/// # Errors
/// Returns `InvalidArg` if `base` is not an absolute URL that can take path segments.
pub fn upstream_url(base: &str, req: &ChartRequest) -> Result<String, YardstickError> {
    let mut url = Url::parse(base)
        .map_err(|e| YardstickError::InvalidArg(format!("bad upstream base '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| YardstickError::InvalidArg(format!("upstream base '{base}' cannot be a base")))?
        .pop_if_empty()
        .push(req.symbol());
    {
        let mut q = url.query_pairs_mut();
        match req.window() {
            ChartWindow::Range(r) => {
                q.append_pair("range", r.as_query());
            }
            ChartWindow::Period { start, end } => {
                q.append_pair("period1", &start.to_string());
                q.append_pair("period2", &end.to_string());
            }
        }
        q.append_pair("interval", req.interval().as_query());
    }
    Ok(url.into())
}

/// Address `upstream` through `relay` by appending it percent-encoded.
#[must_use]
pub fn relay_url(relay: &RelayConfig, upstream: &str) -> String {
    let encoded: String = byte_serialize(upstream.as_bytes()).collect();
    format!("{}{}", relay.endpoint, encoded)
}
