use crate::account::Account;
use crate::history::TransactionKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum TransactionError {
    /// Indicates that the amount of a deposit or withdrawal is zero or negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Indicates an attempt to withdraw more than the account's balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Decimal, available: Decimal },

    /// Indicates that a single withdrawal exceeds the ceiling of the account's withdrawal policy.
    #[error("withdrawal of {requested} exceeds the limit of {limit}")]
    WithdrawalLimitExceeded { requested: Decimal, limit: Decimal },

    /// Indicates that the account already reached the maximum number of withdrawals.
    #[error("maximum number of withdrawals ({max}) reached")]
    WithdrawalCountExceeded { max: u32 },

    /// Indicates that the account already registered the maximum number of transactions for the
    /// current day. The refused transaction was never attempted.
    #[error("daily transaction limit ({limit}) exceeded")]
    DailyTransactionLimitExceeded { limit: usize },

    /// Indicates that the resulting balance cannot be represented.
    #[error("balance {balance} cannot absorb {amount}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

pub type TransactionResult<T> = Result<T, TransactionError>;

/// A requested change of an account's balance.
///
/// Applying a transaction is split in two steps: the account attempts the mutation and, only if
/// that succeeds, the transaction appends a record to the account's history. This leaves room for
/// the [`Client`](crate::client::Client) to refuse a transaction before anything happens.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Transaction {
    /// Funds are added to an account, increasing its balance.
    Deposit(Decimal),

    /// Funds are removed from an account, reducing its balance.
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) => *amount,
            Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit(_) => TransactionKind::Deposit,
            Transaction::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Applies the transaction to `account` and, on success, records it at `timestamp`.
    pub fn register(&self, account: &mut Account, timestamp: DateTime<Utc>) -> TransactionResult<()> {
        match self {
            Transaction::Deposit(amount) => account.deposit(*amount)?,
            Transaction::Withdrawal(amount) => account.withdraw(*amount)?,
        }
        account.history_mut().add(self.kind(), self.amount(), timestamp);
        Ok(())
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Transaction::Deposit(_) => "deposit",
            Transaction::Withdrawal(_) => "withdrawal",
        };
        write!(f, "{}", kind)
    }
}
