use crate::account::Account;
use crate::clock::Clock;
use crate::transaction::TransactionError::DailyTransactionLimitExceeded;
use crate::transaction::{Transaction, TransactionResult};
use crate::{AccountNumber, TaxId};

/// The number of transactions an account may register per calendar day.
pub const DAILY_TRANSACTION_LIMIT: usize = 2;

#[derive(Debug, PartialEq, Clone)]
pub struct Client {
    name: String,

    tax_id: TaxId,

    address: String,

    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(name: impl Into<String>, tax_id: TaxId, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the numbers of the client's accounts in the order they were opened.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Returns the client's first account, which deposits, withdrawals and statements act on.
    pub fn primary_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Registers `transaction` on `account`, unless the account already reached `daily_limit`
    /// transactions on the current day of `clock`. A refused transaction is never attempted.
    pub fn perform_transaction<C: Clock>(
        &self,
        account: &mut Account,
        transaction: Transaction,
        clock: &C,
        daily_limit: usize,
    ) -> TransactionResult<()> {
        if account.history().records_today(clock).len() >= daily_limit {
            return Err(DailyTransactionLimitExceeded { limit: daily_limit });
        }
        transaction.register(account, clock.now())
    }
}
