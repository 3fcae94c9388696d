use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::Result;
use crate::reports::build_report;
use crate::settings::load_settings;
use crate::statement::parse_statement;
use crate::workbook::write_workbook;

pub fn run(file: &str, output: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let input = Path::new(file);
    let statement = parse_statement(input, settings.header_row)?;
    let report = build_report(&statement);

    let out_path = match output {
        Some(path) => PathBuf::from(path),
        None => input.with_file_name("rekap_cash_flow.xlsx"),
    };
    write_workbook(&out_path, &statement.transactions, &report)?;

    println!(
        "{} {} ({} transactions, {} weeks)",
        "Wrote".green(),
        out_path.display(),
        statement.transactions.len(),
        report.weekly.len(),
    );
    Ok(())
}
