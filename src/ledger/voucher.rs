use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::LedgerError;

const DATE_SEGMENT_FORMAT: &str = "%Y%m%d";
const SEQUENCE_WIDTH: usize = 4;

/// Payment mode of a ledger entry; determines the voucher prefix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    Check,
}

impl PaymentMode {
    pub fn prefix(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "CSH",
            PaymentMode::Check => "CHK",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "CSH" => Some(PaymentMode::Cash),
            "CHK" => Some(PaymentMode::Check),
            _ => None,
        }
    }
}

/// A date- and mode-scoped voucher identifier, rendered as
/// `{PREFIX}-{YYYYMMDD}-{NNNN}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoucherNumber {
    pub mode: PaymentMode,
    pub date: NaiveDate,
    pub sequence: u32,
}

impl VoucherNumber {
    pub fn new(mode: PaymentMode, date: NaiveDate, sequence: u32) -> Self {
        Self {
            mode,
            date,
            sequence,
        }
    }
}

impl fmt::Display for VoucherNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Width grows past 9999 rather than wrapping into a collision.
        write!(
            f,
            "{}-{}-{:0width$}",
            self.mode.prefix(),
            self.date.format(DATE_SEGMENT_FORMAT),
            self.sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

impl FromStr for VoucherNumber {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidVoucher(raw.to_string());
        let mut segments = raw.splitn(3, '-');
        let mode = segments
            .next()
            .and_then(PaymentMode::from_prefix)
            .ok_or_else(invalid)?;
        let date = segments
            .next()
            .filter(|part| part.len() == 8)
            .and_then(|part| NaiveDate::parse_from_str(part, DATE_SEGMENT_FORMAT).ok())
            .ok_or_else(invalid)?;
        let sequence = segments
            .next()
            .filter(|part| part.len() == SEQUENCE_WIDTH && part.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|part| part.parse().ok())
            .ok_or_else(invalid)?;
        Ok(Self {
            mode,
            date,
            sequence,
        })
    }
}

impl Serialize for VoucherNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VoucherNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<VoucherNumber, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Derives the next voucher number for `mode` on `today` from the account's
/// existing voucher strings.
///
/// Only vouchers matching the same mode and date advance the sequence; gaps
/// in history are respected (max observed + 1, not count + 1). Malformed
/// strings are skipped. The result is a best-effort client-side suggestion,
/// not an allocation — concurrent callers can derive the same number.
pub fn next_voucher_number<'a, I>(mode: PaymentMode, existing: I, today: NaiveDate) -> VoucherNumber
where
    I: IntoIterator<Item = &'a str>,
{
    let max_seq = existing
        .into_iter()
        .filter_map(|raw| raw.parse::<VoucherNumber>().ok())
        .filter(|voucher| voucher.mode == mode && voucher.date == today)
        .map(|voucher| voucher.sequence)
        .max()
        .unwrap_or(0);
    VoucherNumber::new(mode, today, max_seq + 1)
}
