//! Decoding of the upstream chart document, optionally wrapped in a relay envelope.

use serde::Deserialize;

use yardstick_core::{PricePoint, PriceSeries, YardstickError};

#[derive(Debug, Deserialize)]
struct Envelope {
    contents: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartDocument {
    chart: Option<ChartBody>,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
    #[serde(default)]
    adjclose: Option<Vec<AdjCloseBlock>>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    adjclose: Option<Vec<Option<f64>>>,
}

/// Strip the relay envelope when present and decode the chart document.
///
/// # Errors
/// Returns `Data` when the body is not JSON, the envelope lacks `contents`, or
/// the document has no `chart.result[0]`. The fetcher treats every such error
/// as a failure of the relay that produced the body.
pub fn decode(body: &str, envelope: bool) -> Result<PriceSeries, YardstickError> {
    if envelope {
        let wrapper: Envelope = serde_json::from_str(body)
            .map_err(|e| YardstickError::Data(format!("envelope is not json: {e}")))?;
        let inner = wrapper
            .contents
            .ok_or_else(|| YardstickError::Data("envelope has no contents".into()))?;
        decode_chart(&inner)
    } else {
        decode_chart(body)
    }
}

fn decode_chart(body: &str) -> Result<PriceSeries, YardstickError> {
    let doc: ChartDocument = serde_json::from_str(body)
        .map_err(|e| YardstickError::Data(format!("chart is not json: {e}")))?;
    let chart = doc
        .chart
        .ok_or_else(|| YardstickError::Data("missing chart object".into()))?;
    let Some(result) = chart.result.and_then(|r| r.into_iter().next()) else {
        let why = chart
            .error
            .map(|e| {
                format!(
                    "{}: {}",
                    e.code.unwrap_or_default(),
                    e.description.unwrap_or_default()
                )
            })
            .unwrap_or_else(|| "empty".into());
        return Err(YardstickError::Data(format!("missing chart result ({why})")));
    };

    let timestamps = result.timestamp.unwrap_or_default();
    if timestamps.is_empty() {
        return Ok(PriceSeries::empty());
    }

    let indicators = result
        .indicators
        .ok_or_else(|| YardstickError::Data("missing indicators".into()))?;
    let adjusted = indicators
        .adjclose
        .and_then(|v| v.into_iter().next())
        .and_then(|b| b.adjclose)
        .filter(|c| c.len() == timestamps.len());
    let closes = match adjusted {
        Some(c) => c,
        None => indicators
            .quote
            .into_iter()
            .next()
            .and_then(|q| q.close)
            .ok_or_else(|| YardstickError::Data("missing close prices".into()))?,
    };
    if timestamps.len() != closes.len() {
        return Err(YardstickError::Data(format!(
            "{} timestamps but {} closes",
            timestamps.len(),
            closes.len()
        )));
    }
    PriceSeries::try_new(collapse_repeated(&timestamps, &closes))
}

/// Pair timestamps with closes, keeping only the last bar of each run of equal
/// timestamps. Upstream repeats the live bar at the close; the later copy wins.
fn collapse_repeated(timestamps: &[i64], closes: &[Option<f64>]) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = Vec::with_capacity(timestamps.len());
    for (&ts, &close) in timestamps.iter().zip(closes) {
        match points.last_mut() {
            Some(prev) if prev.ts == ts => *prev = PricePoint::new(ts, close),
            _ => points.push(PricePoint::new(ts, close)),
        }
    }
    points
}
