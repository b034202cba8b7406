// #![deny(clippy::missing_errors_doc)]
#![deny(clippy::cargo_common_metadata)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::missing_assert_message)]

use std::fmt::{Display, Formatter};

pub mod account;
pub mod audit;
pub mod bank;
pub mod client;
pub mod clock;
pub mod command;
pub mod config;
pub mod history;
pub mod processor;
pub mod processors;
pub mod statement;
pub mod transaction;

/// The agency every account of the bank is attached to.
pub const AGENCY: &str = "0001";

/// A tax identification number. Unique per client within a [`Bank`](bank::Bank).
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq, Clone, Hash, Default)]
pub struct TaxId(pub String);

impl Display for TaxId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaxId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A bank-wide unique account number. Numbers are handed out sequentially, starting at 1.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct AccountNumber(pub u32);

impl Display for AccountNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
