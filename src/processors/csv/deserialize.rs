//! A custom [`Deserialize`](serde::de::Deserialize) implementation that allows CSV records of
//! varying lengths to be deserialized into an enum of structs, addressing the limitation that the
//! [`csv`](csv) crate does currently not support this.
//!
//! For more details, see [this issue](https://github.com/BurntSushi/rust-csv/issues/211).
//!
use crate::command::{ClientDetails, ClientRef, Command, TransactionRequest};
use serde::de::{Error, MapAccess};
use serde::{de, Deserialize};

const COMMANDS: &[&str] = &[
    "create_client", "create_account", "deposit", "withdraw", "statement", "list_accounts",
];

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> de::Visitor<'de> for RecordVisitor {
    type Value = Command;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a bank command")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let _key = map.next_key::<&'de str>()?;
        let kind = map.next_value::<&'de str>()?;

        let variant = de::value::MapAccessDeserializer::new(map);
        match kind {
            "create_client" => ClientDetails::deserialize(variant).map(Command::CreateClient),
            "create_account" => ClientRef::deserialize(variant).map(Command::CreateAccount),
            "deposit" => TransactionRequest::deserialize(variant).map(Command::Deposit),
            "withdraw" => TransactionRequest::deserialize(variant).map(Command::Withdraw),
            "statement" => ClientRef::deserialize(variant).map(Command::Statement),
            "list_accounts" => Ok(Command::ListAccounts),
            kind => Err(A::Error::unknown_variant(kind, COMMANDS)),
        }
    }
}
