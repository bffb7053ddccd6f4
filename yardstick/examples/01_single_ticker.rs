mod common;
use yardstick::{TickerRequest, Yardstick, format_return};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create provider (mock in CI when YARDSTICK_USE_MOCK is set).
    let (provider, clock) = common::get_provider()?;

    // 2. Build the orchestrator.
    let ys = Yardstick::builder()
        .with_provider(provider)
        .clock(clock)
        .build()?;

    // 3. Compute every period for one ticker.
    let ticker = TickerRequest::user("AAPL")?;
    println!("Fetching performance for {}...", ticker.symbol());
    let record = ys.performance(&ticker).await?;

    // 4. Print the result.
    for (period, value) in record.iter() {
        println!("{:>8}: {}", period.label(), format_return(value));
    }

    Ok(())
}
