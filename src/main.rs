mod aggregate;
mod classifier;
mod cli;
mod error;
mod fmt;
mod models;
mod reports;
mod settings;
mod statement;
mod workbook;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { file, no_chart } => cli::report::run(&file, no_chart),
        Commands::Export { file, output } => cli::export::run(&file, output.as_deref()),
        Commands::Config { title, header_row } => cli::config::run(title, header_row),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
