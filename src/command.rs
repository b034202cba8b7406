use crate::bank::{AccountSummary, Bank, BankError, BankResult};
use crate::clock::Clock;
use crate::statement::Statement;
use crate::TaxId;
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};

/// The personal details a client is registered with.
#[derive(serde::Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ClientDetails {
    pub tax_id: TaxId,

    pub name: String,

    pub address: String,
}

/// A reference to a registered client.
#[derive(serde::Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ClientRef {
    pub tax_id: TaxId,
}

/// A deposit or withdrawal request for the primary account of a client.
#[derive(serde::Deserialize, Debug, PartialEq, Clone)]
pub struct TransactionRequest {
    pub tax_id: TaxId,

    pub amount: Decimal,
}

/// An operation requested from the [`Bank`].
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    /// Registers a new client.
    CreateClient(ClientDetails),

    /// Opens a new checking account for an existing client.
    CreateAccount(ClientRef),

    /// Adds funds to the client's primary account.
    Deposit(TransactionRequest),

    /// Removes funds from the client's primary account.
    Withdraw(TransactionRequest),

    /// Produces the statement of the client's primary account.
    Statement(ClientRef),

    /// Produces an overview of all accounts of the bank.
    ListAccounts,
}

impl Command {
    pub fn create_client(tax_id: &str, name: &str, address: &str) -> Self {
        Self::CreateClient(ClientDetails {
            tax_id: TaxId::from(tax_id),
            name: name.to_owned(),
            address: address.to_owned(),
        })
    }

    pub fn create_account(tax_id: &str) -> Self {
        Self::CreateAccount(ClientRef { tax_id: TaxId::from(tax_id) })
    }

    pub fn deposit(tax_id: &str, amount: Decimal) -> Self {
        Self::Deposit(TransactionRequest { tax_id: TaxId::from(tax_id), amount })
    }

    pub fn withdraw(tax_id: &str, amount: Decimal) -> Self {
        Self::Withdraw(TransactionRequest { tax_id: TaxId::from(tax_id), amount })
    }

    pub fn statement(tax_id: &str) -> Self {
        Self::Statement(ClientRef { tax_id: TaxId::from(tax_id) })
    }

    /// Returns the tax id of the client the command refers to, if any.
    pub fn tax_id(&self) -> Option<&TaxId> {
        match self {
            Command::CreateClient(details) => Some(&details.tax_id),
            Command::CreateAccount(client) => Some(&client.tax_id),
            Command::Deposit(request) => Some(&request.tax_id),
            Command::Withdraw(request) => Some(&request.tax_id),
            Command::Statement(client) => Some(&client.tax_id),
            Command::ListAccounts => None,
        }
    }

    /// Runs the command against `bank`. Commands that query the bank return a [`Report`].
    pub fn execute<C: Clock>(&self, bank: &mut Bank<C>) -> BankResult<Option<Report>> {
        match self {
            Command::CreateClient(details) => {
                bank.create_client(&details.name, details.tax_id.clone(), &details.address)?;
                Ok(None)
            }
            Command::CreateAccount(client) => {
                bank.create_account(&client.tax_id)?;
                Ok(None)
            }
            Command::Deposit(request) => {
                bank.deposit(&request.tax_id, request.amount)?;
                Ok(None)
            }
            Command::Withdraw(request) => {
                bank.withdraw(&request.tax_id, request.amount)?;
                Ok(None)
            }
            Command::Statement(client) => {
                bank.statement(&client.tax_id).map(|statement| Some(Report::Statement(statement)))
            }
            Command::ListAccounts => {
                Ok(Some(Report::Accounts(bank.list_accounts().collect())))
            }
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Command::CreateClient(_) => "create_client",
            Command::CreateAccount(_) => "create_account",
            Command::Deposit(_) => "deposit",
            Command::Withdraw(_) => "withdraw",
            Command::Statement(_) => "statement",
            Command::ListAccounts => "list_accounts",
        };
        write!(f, "{}", kind)
    }
}

/// The textual output of a query command, or the reason a command was refused.
#[derive(Debug, PartialEq, Clone)]
pub enum Report {
    Statement(Statement),
    Accounts(Vec<AccountSummary>),
    Refused { command: Command, error: BankError },
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Statement(statement) => write!(f, "{}", statement),
            Report::Accounts(summaries) => {
                let lines = summaries.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            }
            Report::Refused { command, error } => match command.tax_id() {
                Some(tax_id) => write!(f, "{} refused for {}: {}", command, tax_id, error),
                None => write!(f, "{} refused: {}", command, error),
            },
        }
    }
}
