use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::{long_date, number, week_label};
use crate::models::{CategoryTotal, Summary, WeekBucket};
use crate::reports::build_report;
use crate::settings::load_settings;
use crate::statement::parse_statement;

pub fn run(file: &str, no_chart: bool) -> Result<()> {
    let settings = load_settings();
    let statement = parse_statement(Path::new(file), settings.header_row)?;
    let report = build_report(&statement);

    if !settings.report_title.is_empty() {
        println!("{}", settings.report_title.bold());
    }
    if let Some((from, to)) = report.period {
        println!("Period: {} \u{2013} {}", long_date(from), long_date(to));
    }

    println!();
    println!("{}", "Summary".bold());
    println!("{}", format_summary(&report.summary));
    println!();
    println!("{}", "Cash In Recap".bold());
    println!("{}", format_categories(&report.cash_in, "Credit"));
    println!();
    println!("{}", "Cash Out Recap".bold());
    println!("{}", format_categories(&report.cash_out, "Debit"));

    if !no_chart {
        println!();
        println!("{}", "Cash In per Week (x100k)".bold());
        print!("{}", format_week_chart(&report.weekly));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure formatting (report data -> String)
// ---------------------------------------------------------------------------

pub fn format_summary(summary: &Summary) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount"]);
    for (label, value) in summary.rows() {
        table.add_row(vec![Cell::new(label), Cell::new(number(value))]);
    }
    table.to_string()
}

pub fn format_categories(rows: &[CategoryTotal], amount_header: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", amount_header]);
    for cat in rows {
        table.add_row(vec![Cell::new(cat.label), Cell::new(number(cat.total))]);
    }
    table.to_string()
}

/// Static terminal bar chart of the weekly cash-in series. Bars scale to
/// the widest bucket; each is annotated with the unscaled rupiah total.
pub fn format_week_chart(weeks: &[WeekBucket]) -> String {
    const BAR_WIDTH: f64 = 40.0;

    if weeks.is_empty() {
        return "(no dated cash-in rows to chart)\n".to_string();
    }

    let labels: Vec<String> = weeks
        .iter()
        .map(|w| week_label(w.ordinal, w.start, w.end).replace('\n', "  "))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = weeks.iter().map(|w| w.scaled).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (w, label) in weeks.iter().zip(&labels) {
        let len = if max > 0.0 {
            (((w.scaled / max) * BAR_WIDTH).round() as usize).max(1)
        } else {
            1
        };
        let bar = "\u{2588}".repeat(len);
        out.push_str(&format!(
            "{label:<label_width$}  {}  Rp {}\n",
            bar.cyan(),
            number(w.total),
        ));
    }
    out
}
