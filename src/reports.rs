use chrono::NaiveDate;

use crate::aggregate;
use crate::models::{CategoryTotal, Statement, Summary, WeekBucket};

/// Everything the renderers need: the four-row summary, both category
/// recaps, the weekly cash-in series, and the covered period.
#[derive(Debug)]
pub struct Report {
    pub summary: Summary,
    pub cash_in: Vec<CategoryTotal>,
    pub cash_out: Vec<CategoryTotal>,
    pub weekly: Vec<WeekBucket>,
    /// Min/max of the parsed transaction dates; None when no row had a
    /// valid date.
    pub period: Option<(NaiveDate, NaiveDate)>,
}

pub fn build_report(statement: &Statement) -> Report {
    let total_cash_in: f64 = statement.transactions.iter().map(|t| t.credit).sum();
    let total_cash_out: f64 = statement.transactions.iter().map(|t| t.debit).sum();

    let dates: Vec<NaiveDate> = statement.transactions.iter().filter_map(|t| t.date).collect();
    let period = match (dates.iter().min(), dates.iter().max()) {
        (Some(&from), Some(&to)) => Some((from, to)),
        _ => None,
    };

    Report {
        summary: Summary {
            opening_balance: statement.opening_balance,
            total_cash_in,
            total_cash_out,
            ending_balance: statement.closing_balance,
        },
        cash_in: aggregate::cash_in_totals(&statement.transactions),
        cash_out: aggregate::cash_out_totals(&statement.transactions),
        weekly: aggregate::weekly_cash_in(&statement.transactions),
        period,
    }
}
