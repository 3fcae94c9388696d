use std::path::Path;

use calamine::{Data, Reader};
use chrono::{Duration, NaiveDate, NaiveTime};

use crate::classifier::{classify_cash_in, classify_cash_out};
use crate::error::{RekapError, Result};
use crate::models::{Statement, Transaction};

// ---------------------------------------------------------------------------
// Raw grid
// ---------------------------------------------------------------------------

/// One spreadsheet cell before any column meaning is assigned. Numeric xlsx
/// cells stay numeric so they never round-trip through locale strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

pub fn read_grid(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" => read_xlsx_grid(path),
        "csv" => read_csv_grid(path),
        other => Err(RekapError::UnsupportedFormat(other.to_string())),
    }
}

fn read_xlsx_grid(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| RekapError::Other(format!("Failed to open workbook: {e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RekapError::Other("Workbook has no worksheets".to_string()))?
        .map_err(|e| RekapError::Other(format!("Failed to read worksheet: {e}")))?;

    let grid = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    Ok(grid)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

fn read_csv_grid(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut grid = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        grid.push(row);
    }
    Ok(grid)
}

// ---------------------------------------------------------------------------
// Cell normalization
// ---------------------------------------------------------------------------

/// Parse a locale-formatted amount string: `.` groups thousands, `,` marks
/// the decimal point. "1.234,50" -> 1234.50
pub fn normalize_amount_text(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let cleaned = cleaned.replace('.', "").replace(',', ".");
    cleaned.parse().ok()
}

/// Amount cells never fail: anything unparseable is 0.0 so sums stay
/// well-defined across a report.
pub fn parse_amount(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => normalize_amount_text(s).unwrap_or(0.0),
        Cell::Empty => 0.0,
    }
}

// Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if serial <= 0.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30).map(|base| base + Duration::days(serial as i64))
}

fn excel_fraction_to_time(value: f64) -> Option<NaiveTime> {
    let frac = value.fract();
    if frac < 0.0 {
        return None;
    }
    let secs = (frac * 86_400.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}

fn parse_date_dmy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let d: u32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    // two-digit years pivot into 2000
    let y = if y < 100 { y + 2000 } else { y };
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn parse_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Number(n) => excel_serial_to_date(*n),
        Cell::Text(s) => parse_date_dmy(s),
        Cell::Empty => None,
    }
}

pub fn parse_time(cell: &Cell) -> Option<NaiveTime> {
    match cell {
        Cell::Number(n) => excel_fraction_to_time(*n),
        Cell::Text(s) => NaiveTime::parse_from_str(s.trim(), "%H:%M:%S").ok(),
        Cell::Empty => None,
    }
}

// ---------------------------------------------------------------------------
// Balance markers
// ---------------------------------------------------------------------------

/// A marker-row cell counts as numeric only if it is a native spreadsheet
/// number or plain-float text. Locale-grouped text and dates never qualify.
fn plain_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => s.trim().parse().ok(),
        Cell::Empty => None,
    }
}

/// Scan the raw grid for the first row mentioning `marker` (case-insensitive,
/// any cell) and take the last numeric-parseable cell in that row. The
/// marker text and its value have no fixed column in these exports.
pub fn find_marker_balance(grid: &[Vec<Cell>], marker: &str) -> f64 {
    for row in grid {
        let matched = row
            .iter()
            .any(|c| matches!(c, Cell::Text(s) if s.to_lowercase().contains(marker)));
        if matched {
            return row.iter().filter_map(plain_number).last().unwrap_or(0.0);
        }
    }
    0.0
}

// ---------------------------------------------------------------------------
// Column mapping + statement assembly
// ---------------------------------------------------------------------------

struct ColumnMap {
    date: usize,
    time: usize,
    remark: usize,
    credit: usize,
    debit: usize,
    balance: usize,
}

fn find_column(header: &[Cell], names: &[&str]) -> Option<usize> {
    header.iter().position(
        |c| matches!(c, Cell::Text(s) if names.contains(&s.trim().to_lowercase().as_str())),
    )
}

impl ColumnMap {
    fn from_header(header: &[Cell]) -> Result<Self> {
        let required = |names: &[&str]| -> Result<usize> {
            find_column(header, names)
                .ok_or_else(|| RekapError::MissingColumn(names[0].to_string()))
        };
        Ok(Self {
            date: required(&["date"])?,
            time: required(&["time"])?,
            remark: required(&["remark"])?,
            credit: required(&["credit"])?,
            // "debet" and "ledger" are the raw export's spellings
            debit: required(&["debit", "debet"])?,
            balance: required(&["balance", "ledger"])?,
        })
    }

    fn transaction(&self, row: &[Cell]) -> Transaction {
        let cell = |i: usize| row.get(i).unwrap_or(&Cell::Empty);

        let remark = match cell(self.remark) {
            Cell::Text(s) => s.trim().to_lowercase(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        };
        let date = parse_date(cell(self.date));
        let time = parse_time(cell(self.time));
        let credit = parse_amount(cell(self.credit));
        let debit = parse_amount(cell(self.debit));
        let balance = parse_amount(cell(self.balance));

        let cash_in = classify_cash_in(&remark, time, credit);
        let cash_out = classify_cash_out(&remark, time, debit);

        Transaction {
            date,
            time,
            remark,
            credit,
            debit,
            balance,
            cash_in,
            cash_out,
        }
    }
}

/// Parse a statement export into classified transactions. `header_row` is
/// the 0-based index of the column-header row; everything above it is the
/// unheadered preamble, everything below is the data region. Marker rows
/// are searched across the whole grid since templates place them freely.
pub fn parse_statement(path: &Path, header_row: usize) -> Result<Statement> {
    let grid = read_grid(path)?;

    let opening_balance = find_marker_balance(&grid, "opening balance");
    let closing_balance = find_marker_balance(&grid, "closing balance");

    let header = grid.get(header_row).ok_or(RekapError::EmptyStatement)?;
    let columns = ColumnMap::from_header(header)?;

    let transactions: Vec<Transaction> = grid
        .iter()
        .skip(header_row + 1)
        .filter(|row| !row.iter().all(|c| matches!(c, Cell::Empty)))
        .map(|row| columns.transaction(row))
        .collect();

    if transactions.is_empty() {
        return Err(RekapError::EmptyStatement);
    }

    Ok(Statement {
        transactions,
        opening_balance,
        closing_balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{CashIn, CashOut};

    fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const FIXTURE: &str = "\
opening balance,,,,,1500000
Date,Time,Remark,Credit,Debet,Ledger
01/01/24,23:59:59,setoran dari pool,\"1.000,00\",0,\"1.501.000,00\"
03/01/24,12:00:00,tax payment ppn,0,\"500,00\",\"1.500.500,00\"
bad-date,25:00:00,interest on account,\"250,00\",0,\"1.500.750,00\"
closing balance,,,,,1500750
";

    #[test]
    fn test_normalize_amount_text() {
        assert_eq!(normalize_amount_text("1.234,50"), Some(1234.50));
        assert_eq!(normalize_amount_text("0,00"), Some(0.0));
        assert_eq!(normalize_amount_text("2500"), Some(2500.0));
        assert_eq!(normalize_amount_text("Rp 1.000.000"), Some(1_000_000.0));
        assert_eq!(normalize_amount_text(""), None);
        assert_eq!(normalize_amount_text("n/a"), None);
    }

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount(&Cell::Empty), 0.0);
        assert_eq!(parse_amount(&Cell::Text("garbage".into())), 0.0);
        assert_eq!(parse_amount(&Cell::Number(42.5)), 42.5);
    }

    #[test]
    fn test_parse_date_dmy_two_digit_year() {
        assert_eq!(
            parse_date(&Cell::Text("05/02/24".into())),
            NaiveDate::from_ymd_opt(2024, 2, 5),
        );
        assert_eq!(parse_date(&Cell::Text("31/02/24".into())), None);
        assert_eq!(parse_date(&Cell::Text("2024-02-05".into())), None);
    }

    #[test]
    fn test_parse_date_excel_serial() {
        assert_eq!(
            parse_date(&Cell::Number(45667.0)),
            NaiveDate::from_ymd_opt(2025, 1, 10),
        );
    }

    #[test]
    fn test_parse_time_text_and_fraction() {
        assert_eq!(
            parse_time(&Cell::Text("23:59:59".into())),
            NaiveTime::from_hms_opt(23, 59, 59),
        );
        assert_eq!(parse_time(&Cell::Text("25:00:00".into())), None);
        let frac = 86_399.0 / 86_400.0;
        assert_eq!(
            parse_time(&Cell::Number(frac)),
            NaiveTime::from_hms_opt(23, 59, 59),
        );
    }

    #[test]
    fn test_marker_takes_last_numeric_cell() {
        let grid = vec![vec![
            Cell::Text("Opening Balance".into()),
            Cell::Text("31/12/23".into()),
            Cell::Number(7.0),
            Cell::Text("1500000".into()),
        ]];
        // the date cell is not plain-numeric; the last hit is the text float
        assert_eq!(find_marker_balance(&grid, "opening balance"), 1_500_000.0);
    }

    #[test]
    fn test_marker_missing_defaults_to_zero() {
        let grid = vec![vec![Cell::Text("just a row".into())]];
        assert_eq!(find_marker_balance(&grid, "opening balance"), 0.0);
    }

    #[test]
    fn test_parse_statement_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "stmt.csv", FIXTURE);
        let stmt = parse_statement(&path, 1).unwrap();

        assert_eq!(stmt.opening_balance, 1_500_000.0);
        assert_eq!(stmt.closing_balance, 1_500_750.0);
        // 3 data rows + the trailing closing-balance row (kept, all-zero amounts)
        assert_eq!(stmt.transactions.len(), 4);

        let sweep = &stmt.transactions[0];
        assert_eq!(sweep.credit, 1000.0);
        assert_eq!(sweep.cash_in, Some(CashIn::PoolingRevenue));
        assert_eq!(sweep.cash_out, None);

        let tax = &stmt.transactions[1];
        assert_eq!(tax.debit, 500.0);
        assert_eq!(tax.cash_out, Some(CashOut::Tax));

        // malformed date/time: fields are None, amounts still counted
        let interest = &stmt.transactions[2];
        assert_eq!(interest.date, None);
        assert_eq!(interest.time, None);
        assert_eq!(interest.credit, 250.0);
        assert_eq!(interest.cash_in, Some(CashIn::AccountInterest));
    }

    #[test]
    fn test_parse_statement_missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "stmt.csv",
            "preamble,,,\nDate,Time,Credit,Debet\n01/01/24,10:00:00,100,0\n",
        );
        let err = parse_statement(&path, 1).unwrap_err();
        assert!(err.to_string().contains("remark"));
    }

    #[test]
    fn test_parse_statement_xlsx_roundtrip() {
        use rust_xlsxwriter::Workbook;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stmt.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "opening balance").unwrap();
        sheet.write_number(0, 5, 1_500_000.0).unwrap();
        for (col, name) in ["Date", "Time", "Remark", "Credit", "Debet", "Ledger"]
            .iter()
            .enumerate()
        {
            sheet.write_string(1, col as u16, *name).unwrap();
        }
        sheet.write_string(2, 0, "01/01/24").unwrap();
        sheet.write_string(2, 1, "23:59:59").unwrap();
        sheet.write_string(2, 2, "setoran dari pool").unwrap();
        // native numeric cells, as Excel stores them
        sheet.write_number(2, 3, 1000.0).unwrap();
        sheet.write_number(2, 4, 0.0).unwrap();
        sheet.write_number(2, 5, 1_501_000.0).unwrap();
        workbook.save(&path).unwrap();

        let stmt = parse_statement(&path, 1).unwrap();
        assert_eq!(stmt.opening_balance, 1_500_000.0);
        assert_eq!(stmt.transactions.len(), 1);
        assert_eq!(stmt.transactions[0].cash_in, Some(CashIn::PoolingRevenue));
        assert_eq!(stmt.transactions[0].date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = read_grid(Path::new("statement.pdf")).unwrap_err();
        assert!(matches!(err, RekapError::UnsupportedFormat(_)));
    }
}
