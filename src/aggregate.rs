use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{CategoryTotal, Transaction, WeekBucket};

/// Chart axis convention: weekly totals are displayed in units of 100k.
pub const WEEK_SCALE: f64 = 100_000.0;

/// Sum credit per observed cash-in category. Unobserved categories are
/// absent; output order is alphabetical by label for stable rendering.
pub fn cash_in_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&'static str, f64> = BTreeMap::new();
    for txn in transactions {
        if let Some(cat) = txn.cash_in {
            *totals.entry(cat.label()).or_default() += txn.credit;
        }
    }
    totals
        .into_iter()
        .map(|(label, total)| CategoryTotal { label, total })
        .collect()
}

/// Sum debit per observed cash-out category.
pub fn cash_out_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&'static str, f64> = BTreeMap::new();
    for txn in transactions {
        if let Some(cat) = txn.cash_out {
            *totals.entry(cat.label()).or_default() += txn.debit;
        }
    }
    totals
        .into_iter()
        .map(|(label, total)| CategoryTotal { label, total })
        .collect()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Bucket cash-in by calendar week. Only rows with a positive credit and a
/// parsed date participate. Buckets are keyed by week start, so ordinals
/// come out chronological no matter how the input rows were ordered.
pub fn weekly_cash_in(transactions: &[Transaction]) -> Vec<WeekBucket> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for txn in transactions {
        if txn.credit > 0.0 {
            if let Some(date) = txn.date {
                *totals.entry(week_start(date)).or_default() += txn.credit;
            }
        }
    }

    totals
        .into_iter()
        .enumerate()
        .map(|(i, (start, total))| WeekBucket {
            ordinal: i + 1,
            start,
            end: start + Duration::days(6),
            total,
            scaled: total / WEEK_SCALE,
        })
        .collect()
}
