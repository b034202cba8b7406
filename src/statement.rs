use crate::account::Account;
use crate::history::TransactionRecord;
use crate::AccountNumber;
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// The chronological list of an account's transactions together with its current balance.
#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    account: AccountNumber,
    records: Vec<TransactionRecord>,
    balance: Decimal,
}

impl Statement {
    pub fn of(account: &Account) -> Self {
        Self {
            account: account.number(),
            records: account.history().all_records().to_vec(),
            balance: account.balance(),
        }
    }

    pub fn account(&self) -> AccountNumber {
        self.account
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== STATEMENT ===")?;
        if self.records.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for record in &self.records {
            writeln!(
                f,
                "{} - {}: R$ {:.2}",
                record.timestamp().format(TIMESTAMP_FORMAT),
                record.kind(),
                record.amount(),
            )?;
        }
        write!(f, "Balance: R$ {:.2}", self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_utils::ManualClock;
    use crate::clock::Clock;
    use crate::history::{History, TransactionKind};
    use crate::TaxId;
    use rust_decimal_macros::dec;

    #[test]
    fn statement_lists_records_and_balance() {
        let clock = ManualClock::default();
        let mut history = History::new();
        history.add(TransactionKind::Deposit, dec!(1000), clock.now());
        history.add(TransactionKind::Withdrawal, dec!(500), clock.now());
        let account = Account::with_values(AccountNumber(1), TaxId::default(), dec!(500), history, None);

        let expected = [
            "=== STATEMENT ===",
            "14-03-2024 10:30:00 - Deposit: R$ 1000.00",
            "14-03-2024 10:30:00 - Withdrawal: R$ 500.00",
            "Balance: R$ 500.00",
        ].join("\n");
        assert_eq!(Statement::of(&account).to_string(), expected);
    }

    #[test]
    fn empty_statement() {
        let account = Account::default();

        let expected = [
            "=== STATEMENT ===",
            "No transactions recorded.",
            "Balance: R$ 0.00",
        ].join("\n");
        assert_eq!(Statement::of(&account).to_string(), expected);
    }
}
