use crate::account::WithdrawalPolicy;
use crate::client::DAILY_TRANSACTION_LIMIT;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ConfigError {
    #[error("withdrawal limit must be positive, got {0}")]
    NonPositiveWithdrawalLimit(Decimal),

    #[error("maximum number of withdrawals must be at least 1")]
    ZeroMaxWithdrawals,

    #[error("daily transaction limit must be at least 1")]
    ZeroDailyTransactionLimit,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings applied to all clients and accounts of a [`Bank`](crate::bank::Bank).
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BankConfig {
    withdrawal_policy: WithdrawalPolicy,
    daily_transaction_limit: usize,
}

impl BankConfig {
    pub fn new(withdrawal_policy: WithdrawalPolicy, daily_transaction_limit: usize) -> ConfigResult<Self> {
        if daily_transaction_limit == 0 {
            return Err(ConfigError::ZeroDailyTransactionLimit);
        }
        Ok(Self { withdrawal_policy, daily_transaction_limit })
    }

    /// The policy every newly opened checking account is created with.
    pub fn withdrawal_policy(&self) -> WithdrawalPolicy {
        self.withdrawal_policy
    }

    /// The number of transactions an account may register per calendar day.
    pub fn daily_transaction_limit(&self) -> usize {
        self.daily_transaction_limit
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            withdrawal_policy: WithdrawalPolicy::default(),
            daily_transaction_limit: DAILY_TRANSACTION_LIMIT,
        }
    }
}
