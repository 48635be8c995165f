use crate::cli::parser::{Cli, Commands};
use crate::errors::{AppError, AppResult};
use crate::export::write_summary_csv;
use crate::models::TripLogs;
use crate::render::trip::DayFailure;
use crate::render::{SheetSummary, sheet::PreparedLog};
use crate::ui::messages::{error, header, success, warning};
use crate::utils::fixed2;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use std::fs::File;

/// Print the per-day summary fields without drawing anything.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Summary { input, csv } = &cli.command {
        let logs = TripLogs::load(&expand_tilde(input))?;

        if logs.is_empty() {
            warning("No daily logs in input.");
            return Ok(());
        }

        // Same validation as rendering, so a day listed here would render
        let mut summaries: Vec<SheetSummary> = Vec::new();
        let mut failed = 0;
        for (i, entry) in logs.iter().enumerate() {
            let day_number = i + 1;
            match entry.as_log().and_then(PreparedLog::prepare) {
                Ok(prepared) => summaries.push(prepared.summary(day_number)),
                Err(e) => {
                    error(DayFailure {
                        day_number,
                        date: entry.date(),
                        error: e,
                    });
                    failed += 1;
                }
            }
        }

        header("Trip summary");
        print!("{}", summary_table(&summaries).render());

        if let Some(path) = csv {
            let path = expand_tilde(path);
            write_summary_csv(File::create(&path)?, &summaries)?;
            success(format!("CSV summary written: {}", path.display()));
        }

        if failed > 0 {
            return Err(AppError::DaysFailed {
                failed,
                total: logs.len(),
            });
        }
    }
    Ok(())
}

pub fn summary_table(summaries: &[SheetSummary]) -> Table {
    let mut table = Table::new(
        ["Day", "Date", "Driving", "On duty", "Off duty", "Miles"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for s in summaries {
        table.add_row(vec![
            s.day_number.to_string(),
            s.date.format("%Y-%m-%d").to_string(),
            fixed2(s.driving_hours),
            fixed2(s.on_duty_hours),
            fixed2(s.off_duty_hours),
            fixed2(s.total_miles),
        ]);
    }

    table
}
