use crate::clock::Clock;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};

#[derive(serde::Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        };
        write!(f, "{}", kind)
    }
}

/// An immutable entry in an account's [`History`].
#[derive(serde::Serialize, Debug, PartialEq, Clone, Copy)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self { kind, amount, timestamp }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// The append-only log of all transactions registered on an account, oldest first.
///
/// Records are never validated, deduplicated or removed: whoever calls [`add`](History::add) is
/// responsible for only doing so after the account's balance was successfully changed.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) {
        self.records.push(TransactionRecord::new(kind, amount, timestamp));
    }

    /// Returns the full report in chronological order.
    pub fn all_records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Returns the records whose UTC calendar date is `date`.
    pub fn records_on(&self, date: NaiveDate) -> Vec<&TransactionRecord> {
        self.records
            .iter()
            .filter(|record| record.timestamp.date_naive() == date)
            .collect()
    }

    /// Returns the records registered on the current day of `clock`.
    pub fn records_today(&self, clock: &impl Clock) -> Vec<&TransactionRecord> {
        self.records_on(clock.today())
    }

    /// Returns the number of withdrawals ever recorded.
    pub fn withdrawal_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.kind == TransactionKind::Withdrawal)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
