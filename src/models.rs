use chrono::{NaiveDate, NaiveTime};

use crate::classifier::{CashIn, CashOut};

/// One ledger row from the data region of the statement, amounts already
/// normalized and categories assigned.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Lowercased at parse time; rule matching and display both use this form.
    pub remark: String,
    pub credit: f64,
    pub debit: f64,
    pub balance: f64,
    pub cash_in: Option<CashIn>,
    pub cash_out: Option<CashOut>,
}

/// The parsed statement file: classified transactions plus the balances
/// lifted from the marker rows of the unheadered preamble.
#[derive(Debug)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub opening_balance: f64,
    pub closing_balance: f64,
}

/// Total for one observed category. Categories never seen in the data are
/// absent, not zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: &'static str,
    pub total: f64,
}

/// A Monday-to-Sunday cash-in bucket. Ordinals are chronological over the
/// distinct week starts, independent of input row order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub ordinal: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: f64,
    /// `total / 100_000`, the chart axis convention.
    pub scaled: f64,
}

/// The four fixed summary rows.
#[derive(Debug, Clone)]
pub struct Summary {
    pub opening_balance: f64,
    pub total_cash_in: f64,
    pub total_cash_out: f64,
    pub ending_balance: f64,
}

impl Summary {
    pub fn rows(&self) -> [(&'static str, f64); 4] {
        [
            ("Opening Balance", self.opening_balance),
            ("Total Cash In", self.total_cash_in),
            ("Total Cash Out", self.total_cash_out),
            ("Ending Balance", self.ending_balance),
        ]
    }
}
