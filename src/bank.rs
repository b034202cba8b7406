use crate::account::Account;
use crate::audit::audited;
use crate::client::Client;
use crate::clock::{Clock, SystemClock};
use crate::statement::Statement;
use crate::transaction::{Transaction, TransactionError};
use crate::{AccountNumber, TaxId, AGENCY};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::info;

pub use crate::config::BankConfig;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum BankError {
    /// Indicates that no client is registered under the given tax id.
    #[error("client not found: {0}")]
    ClientNotFound(TaxId),

    /// Indicates an attempt to register a second client under an existing tax id.
    #[error("client already exists: {0}")]
    DuplicateClient(TaxId),

    /// Indicates that the client has not opened an account yet.
    #[error("client has no account: {0}")]
    NoAccount(TaxId),

    /// Indicates that no further account numbers are available.
    #[error("account numbers exhausted")]
    AccountNumbersExhausted,

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

pub type BankResult<T> = Result<T, BankError>;

/// The registry of all clients and accounts, and the state of a banking session.
#[derive(Debug)]
pub struct Bank<C: Clock = SystemClock> {
    clients: Vec<Client>,
    client_index: HashMap<TaxId, usize>,
    accounts: Vec<Account>,
    config: BankConfig,
    clock: C,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}

impl<C: Clock> Bank<C> {
    pub fn with_clock(config: BankConfig, clock: C) -> Self {
        Self {
            clients: Vec::new(),
            client_index: HashMap::new(),
            accounts: Vec::new(),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn create_client(&mut self, name: &str, tax_id: TaxId, address: &str) -> BankResult<&Client> {
        if self.client_index.contains_key(&tax_id) {
            return Err(BankError::DuplicateClient(tax_id));
        }
        info!(client.tax_id = %tax_id, client.name = name, "client created");
        let index = self.clients.len();
        self.client_index.insert(tax_id.clone(), index);
        self.clients.push(Client::new(name, tax_id, address));
        Ok(&self.clients[index])
    }

    /// Opens a new checking account for the client registered under `tax_id`.
    pub fn create_account(&mut self, tax_id: &TaxId) -> BankResult<&Account> {
        let client_index = self.client_position(tax_id)?;
        let index = self.accounts.len();
        let number = next_account_number(index)?;

        self.clients[client_index].add_account(number);
        self.accounts.push(Account::checking(number, tax_id.clone(), self.config.withdrawal_policy()));
        info!(client.tax_id = %tax_id, account.number = %number, "account created");
        Ok(&self.accounts[index])
    }

    pub fn find_client(&self, tax_id: &TaxId) -> Option<&Client> {
        self.client_index.get(tax_id).and_then(|index| self.clients.get(*index))
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        account_index(number).and_then(|index| self.accounts.get(index))
    }

    /// Returns the accounts of the client registered under `tax_id`, in the order they were opened.
    pub fn client_accounts(&self, tax_id: &TaxId) -> BankResult<Vec<&Account>> {
        let client = self.find_client(tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()))?;
        Ok(client.accounts().iter().filter_map(|number| self.account(*number)).collect())
    }

    /// Returns a summary of every account in the order the accounts were opened.
    ///
    /// The summaries are produced lazily; call this again (or clone the iterator) to start over.
    pub fn list_accounts(&self) -> AccountSummaries<'_> {
        AccountSummaries {
            accounts: self.accounts.iter(),
            clients: &self.clients,
            client_index: &self.client_index,
        }
    }

    pub fn deposit(&mut self, tax_id: &TaxId, amount: Decimal) -> BankResult<()> {
        audited("deposit", || self.transact(tax_id, Transaction::Deposit(amount)))
    }

    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Decimal) -> BankResult<()> {
        audited("withdraw", || self.transact(tax_id, Transaction::Withdrawal(amount)))
    }

    /// Returns the statement of the primary account of the client registered under `tax_id`.
    pub fn statement(&self, tax_id: &TaxId) -> BankResult<Statement> {
        audited("statement", || {
            let (_, number) = self.primary_account_of(tax_id)?;
            self.account(number)
                .map(Statement::of)
                .ok_or_else(|| BankError::NoAccount(tax_id.clone()))
        })
    }

    fn client_position(&self, tax_id: &TaxId) -> BankResult<usize> {
        self.client_index
            .get(tax_id)
            .copied()
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()))
    }

    fn primary_account_of(&self, tax_id: &TaxId) -> BankResult<(usize, AccountNumber)> {
        let client_index = self.client_position(tax_id)?;
        let number = self.clients[client_index]
            .primary_account()
            .ok_or_else(|| BankError::NoAccount(tax_id.clone()))?;
        Ok((client_index, number))
    }

    fn transact(&mut self, tax_id: &TaxId, transaction: Transaction) -> BankResult<()> {
        let (client_index, number) = self.primary_account_of(tax_id)?;
        let account = account_index(number)
            .and_then(|index| self.accounts.get_mut(index))
            .ok_or_else(|| BankError::NoAccount(tax_id.clone()))?;
        self.clients[client_index].perform_transaction(
            account,
            transaction,
            &self.clock,
            self.config.daily_transaction_limit(),
        )?;
        Ok(())
    }
}

fn account_index(number: AccountNumber) -> Option<usize> {
    (number.0 as usize).checked_sub(1)
}

/// Returns the number of the account opened after `existing` accounts.
fn next_account_number(existing: usize) -> BankResult<AccountNumber> {
    existing
        .checked_add(1)
        .and_then(|next| u32::try_from(next).ok())
        .map(AccountNumber)
        .ok_or(BankError::AccountNumbersExhausted)
}

/// A one-line overview of an account.
#[derive(serde::Serialize, Debug, PartialEq, Clone)]
pub struct AccountSummary {
    pub agency: &'static str,
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
}

impl Display for AccountSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Agency: {}, Number: {}, Holder: {}, Balance: R$ {:.2}",
            self.agency, self.number, self.holder, self.balance,
        )
    }
}

/// Iterator over the [`AccountSummary`] of every account of a [`Bank`].
#[derive(Debug, Clone)]
pub struct AccountSummaries<'b> {
    accounts: std::slice::Iter<'b, Account>,
    clients: &'b [Client],
    client_index: &'b HashMap<TaxId, usize>,
}

impl<'b> Iterator for AccountSummaries<'b> {
    type Item = AccountSummary;

    fn next(&mut self) -> Option<Self::Item> {
        let account = self.accounts.next()?;
        let holder = self.client_index
            .get(account.owner())
            .and_then(|index| self.clients.get(*index))
            .map(|client| client.name().to_owned())
            .unwrap_or_default();
        Some(AccountSummary {
            agency: AGENCY,
            number: account.number(),
            holder,
            balance: account.balance(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.accounts.size_hint()
    }
}
