mod common;
use tracing_subscriber::fmt::format::FmtSpan;
use yardstick::{ComparisonRequest, RowOutcome, Yardstick, format_return};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with --features tracing; suggested: RUST_LOG=info,yardstick=debug,yardstick_relay=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();

    let (provider, clock) = common::get_provider()?;
    let ys = Yardstick::builder()
        .with_provider(provider)
        .clock(clock)
        .build()?;

    let report = ys
        .compare(&ComparisonRequest::new(["AAPL", "MSFT"])?)
        .await?;

    for row in &report.rows {
        let cells: Vec<String> = match &row.outcome {
            RowOutcome::Loaded(rec) => rec.iter().map(|(_, v)| format_return(v)).collect(),
            RowOutcome::Failed(e) => vec![format!("error: {e}")],
        };
        println!("{:<6} {:<24} {}", row.ticker.symbol(), row.ticker.name(), cells.join("  "));
    }
    println!("loaded {}/{}", report.succeeded(), report.total());

    Ok(())
}
