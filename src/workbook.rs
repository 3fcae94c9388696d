use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::Result;
use crate::fmt::number;
use crate::models::{CategoryTotal, Summary, Transaction};
use crate::reports::Report;

/// Write the recap workbook: the full transaction detail plus the three
/// summary tables, one sheet each. Detail amounts keep full numeric
/// precision; the summary sheets carry the display-formatted strings.
pub fn write_workbook(path: &Path, transactions: &[Transaction], report: &Report) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Transaction Detail")?;
    write_detail(sheet, transactions)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Cash In Summary")?;
    write_categories(sheet, "Credit", &report.cash_in)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Cash Out Summary")?;
    write_categories(sheet, "Debit", &report.cash_out)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Final Summary")?;
    write_summary(sheet, &report.summary)?;

    workbook.save(path)?;
    Ok(())
}

fn header_format() -> Format {
    Format::new().set_bold()
}

fn write_detail(sheet: &mut Worksheet, transactions: &[Transaction]) -> Result<()> {
    let bold = header_format();
    let headers = [
        "Date", "Time", "Remark", "Credit", "Debit", "Balance",
        "Cash In Category", "Cash Out Category",
    ];
    for (col, name) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    for (i, txn) in transactions.iter().enumerate() {
        let row = (i + 1) as u32;
        if let Some(date) = txn.date {
            sheet.write_string(row, 0, date.format("%d/%m/%y").to_string())?;
        }
        if let Some(time) = txn.time {
            sheet.write_string(row, 1, time.format("%H:%M:%S").to_string())?;
        }
        sheet.write_string(row, 2, txn.remark.as_str())?;
        sheet.write_number(row, 3, txn.credit)?;
        sheet.write_number(row, 4, txn.debit)?;
        sheet.write_number(row, 5, txn.balance)?;
        if let Some(cat) = txn.cash_in {
            sheet.write_string(row, 6, cat.label())?;
        }
        if let Some(cat) = txn.cash_out {
            sheet.write_string(row, 7, cat.label())?;
        }
    }
    Ok(())
}

fn write_categories(sheet: &mut Worksheet, amount_header: &str, rows: &[CategoryTotal]) -> Result<()> {
    let bold = header_format();
    sheet.write_string_with_format(0, 0, "Category", &bold)?;
    sheet.write_string_with_format(0, 1, amount_header, &bold)?;
    for (i, cat) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, cat.label)?;
        sheet.write_string(row, 1, number(cat.total))?;
    }
    Ok(())
}

fn write_summary(sheet: &mut Worksheet, summary: &Summary) -> Result<()> {
    let bold = header_format();
    sheet.write_string_with_format(0, 0, "Category", &bold)?;
    sheet.write_string_with_format(0, 1, "Amount", &bold)?;
    for (i, (label, value)) in summary.rows().iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_string(row, 1, number(*value))?;
    }
    Ok(())
}
