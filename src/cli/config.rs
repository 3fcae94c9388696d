use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(title: Option<String>, header_row: Option<usize>) -> Result<()> {
    let mut settings = load_settings();

    if title.is_none() && header_row.is_none() {
        let shown_title = if settings.report_title.is_empty() {
            "(unset)".to_string()
        } else {
            settings.report_title.clone()
        };
        println!("report_title: {shown_title}");
        println!("header_row: {}", settings.header_row);
        return Ok(());
    }

    if let Some(t) = title {
        settings.report_title = t;
    }
    if let Some(h) = header_row {
        settings.header_row = h;
    }
    save_settings(&settings)?;
    println!("{}", "Settings saved.".green());
    Ok(())
}
