use chrono::NaiveTime;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashIn {
    PoolingRevenue,
    DepositInterest,
    AccountInterest,
    TransferReceipt,
    Other,
}

impl CashIn {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PoolingRevenue => "Pooling Revenue",
            Self::DepositInterest => "Deposit Interest Revenue",
            Self::AccountInterest => "Account Interest Revenue",
            Self::TransferReceipt => "Transfer Receipt",
            Self::Other => "Other Revenue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashOut {
    SettlementTransfer,
    PayrollTransfer,
    OtherBankTransfer,
    Tax,
    AdminFee,
    Other,
}

impl CashOut {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SettlementTransfer => "Transfer to Settlement Account",
            Self::PayrollTransfer => "Transfer to Payroll Processor",
            Self::OtherBankTransfer => "Transfer to Other Bank",
            Self::Tax => "Tax",
            Self::AdminFee => "Admin Fee",
            Self::Other => "Other Cash Out",
        }
    }
}

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

// Remarks are Indonesian bank-ledger text, so the match tokens stay in the
// source language. "non" is as broad as it looks; the rule contract keeps
// it verbatim, over-matching included.
const POOLING_KEYWORDS: &[&str] = &[
    "penyeberangan",
    "pelabuhan",
    "cmspool",
    "kantin",
    "pdptn",
    "ticketing",
    "non terpadu",
    "non",
    "trpdu",
    "mrk",
    "fee asuransi",
    "mrk pinbuk",
];

const SETTLEMENT_BANK_KEYWORDS: &[&str] = &["mandiri", "pinbuk ke mandiri", "mand"];

const PAYROLL_KEYWORDS: &[&str] = &["gaji", "gaji direksi", "gaji karyawan"];

const OTHER_BANK_KEYWORDS: &[&str] = &["pinbuk ke", "pinbuk cicilan"];

fn contains_any(remark: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| remark.contains(k))
}

/// Pooled-revenue sweeps post at one second before midnight.
fn is_sweep_time(time: Option<NaiveTime>) -> bool {
    time == NaiveTime::from_hms_opt(23, 59, 59)
}

/// Deposit interest posts at one second past midnight.
fn is_interest_time(time: Option<NaiveTime>) -> bool {
    time == NaiveTime::from_hms_opt(0, 0, 1)
}

// ---------------------------------------------------------------------------
// Rule chains: strict first-match-wins order
// ---------------------------------------------------------------------------

/// Classify the cash-in side of a row. Pure function of the lowercased
/// remark, the posting time, and whether any credit was booked; rows with
/// no credit get no category before the remark is even looked at.
///
/// Rule order is a contract: earlier rules win on overlapping keywords.
pub fn classify_cash_in(remark: &str, time: Option<NaiveTime>, credit: f64) -> Option<CashIn> {
    if credit == 0.0 {
        return None;
    }
    if contains_any(remark, POOLING_KEYWORDS) {
        return Some(CashIn::PoolingRevenue);
    }
    if remark.contains("dari") && is_sweep_time(time) {
        return Some(CashIn::PoolingRevenue);
    }
    if remark.contains("dari") && is_interest_time(time) {
        return Some(CashIn::DepositInterest);
    }
    if remark.contains("interest on account") {
        return Some(CashIn::AccountInterest);
    }
    if remark.contains("pinbuk ke") {
        return Some(CashIn::TransferReceipt);
    }
    Some(CashIn::Other)
}

/// Classify the cash-out side of a row. Same contract as
/// [`classify_cash_in`]: pure, total, ordered.
pub fn classify_cash_out(remark: &str, time: Option<NaiveTime>, debit: f64) -> Option<CashOut> {
    if debit == 0.0 {
        return None;
    }
    if contains_any(remark, SETTLEMENT_BANK_KEYWORDS) {
        return Some(CashOut::SettlementTransfer);
    }
    if remark.contains("prop") || contains_any(remark, PAYROLL_KEYWORDS) {
        return Some(CashOut::PayrollTransfer);
    }
    if remark.contains("paypro") {
        return Some(CashOut::SettlementTransfer);
    }
    if contains_any(remark, OTHER_BANK_KEYWORDS) {
        return Some(CashOut::OtherBankTransfer);
    }
    if remark.contains("tax") {
        return Some(CashOut::Tax);
    }
    if (remark.contains("dari") && is_sweep_time(time)) || remark.contains("fee") {
        return Some(CashOut::AdminFee);
    }
    Some(CashOut::Other)
}
