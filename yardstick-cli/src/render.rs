use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use yardstick::{ComparisonReport, ComparisonRow, Period, RowOutcome, format_return};

/// Column headers shared by the terminal table and the CSV export.
pub fn headers() -> Vec<String> {
    ["Ticker", "Name"]
        .into_iter()
        .map(str::to_string)
        .chain(Period::ALL.iter().map(|p| p.label().to_string()))
        .collect()
}

/// Period cells of one row: formatted returns, or `Error` everywhere for a failed ticker.
pub fn period_cells(row: &ComparisonRow) -> Vec<String> {
    match &row.outcome {
        RowOutcome::Loaded(rec) => rec.iter().map(|(_, v)| format_return(v)).collect(),
        RowOutcome::Failed(_) => vec!["Error".to_string(); Period::ALL.len()],
    }
}

/// Plain cells for every row, in report order.
pub fn rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    report
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.ticker.symbol().to_string(),
                row.ticker.name().to_string(),
            ];
            cells.extend(period_cells(row));
            cells
        })
        .collect()
}

/// Terminal table; user-entered tickers are marked with `*`.
pub fn table(report: &ComparisonReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers());
    for (row, mut cells) in report.rows.iter().zip(rows(report)) {
        if row.ticker.is_user() {
            cells[0] = format!("{} *", cells[0]);
        }
        builder.push_record(cells);
    }
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(2..), Alignment::right());
    table.to_string()
}

/// Final status line.
pub fn summary(report: &ComparisonReport) -> String {
    if report.all_succeeded() {
        "All data loaded!".to_string()
    } else {
        format!("Loaded {}/{}.", report.succeeded(), report.total())
    }
}
