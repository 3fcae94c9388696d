pub mod config;
pub mod export;
pub mod report;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rekap", about = "Cash-flow recap for pooled-account bank statements.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a statement and print the recap tables and weekly chart.
    Report {
        /// Path to the statement export (.xlsx or .csv)
        file: String,
        /// Skip the weekly cash-in chart
        #[arg(long)]
        no_chart: bool,
    },
    /// Classify a statement and write the recap workbook (.xlsx).
    Export {
        /// Path to the statement export (.xlsx or .csv)
        file: String,
        /// Output path (default: rekap_cash_flow.xlsx next to the input)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show or update settings.
    Config {
        /// Report title printed above the tables
        #[arg(long)]
        title: Option<String>,
        /// 0-based row index of the statement header row
        #[arg(long)]
        header_row: Option<usize>,
    },
}
