use crate::config::{ConfigError, ConfigResult};
use crate::history::History;
use crate::transaction::TransactionError::{
    BalanceOverflow, InsufficientFunds, InvalidAmount, WithdrawalCountExceeded,
    WithdrawalLimitExceeded,
};
use crate::transaction::TransactionResult;
use crate::{AccountNumber, TaxId, AGENCY};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Restrictions applied to the withdrawals of a checking account.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct WithdrawalPolicy {
    limit: Decimal,
    max_withdrawals: u32,
}

impl WithdrawalPolicy {
    pub fn new(limit: Decimal, max_withdrawals: u32) -> ConfigResult<Self> {
        if limit <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveWithdrawalLimit(limit));
        }
        if max_withdrawals == 0 {
            return Err(ConfigError::ZeroMaxWithdrawals);
        }
        Ok(Self { limit, max_withdrawals })
    }

    /// The maximum amount of a single withdrawal.
    pub fn limit(&self) -> Decimal {
        self.limit
    }

    /// The maximum number of withdrawals over the whole lifetime of the account.
    ///
    /// The count is never reset, unlike the daily transaction limit enforced by the
    /// [`Client`](crate::client::Client).
    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self { limit: dec!(500), max_withdrawals: 3 }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    number: AccountNumber,

    owner: TaxId,

    balance: Decimal,

    history: History,

    policy: Option<WithdrawalPolicy>,
}

impl Account {
    /// Creates an account without any withdrawal restrictions.
    pub fn new(number: AccountNumber, owner: TaxId) -> Self {
        Self {
            number,
            owner,
            balance: Decimal::ZERO,
            history: History::new(),
            policy: None,
        }
    }

    /// Creates a checking account, whose withdrawals are restricted by `policy`.
    pub fn checking(number: AccountNumber, owner: TaxId, policy: WithdrawalPolicy) -> Self {
        Self { policy: Some(policy), ..Self::new(number, owner) }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn agency(&self) -> &'static str {
        AGENCY
    }

    /// Returns the tax id of the client owning this account.
    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn policy(&self) -> Option<&WithdrawalPolicy> {
        self.policy.as_ref()
    }

    pub fn deposit(&mut self, amount: Decimal) -> TransactionResult<()> {
        if amount <= Decimal::ZERO {
            return Err(InvalidAmount(amount));
        }
        self.balance = self.balance
            .checked_add(amount)
            .ok_or(BalanceOverflow { balance: self.balance, amount })?;
        debug!(account.number = %self.number, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraws `amount`, subject to the account's [`WithdrawalPolicy`] if there is one.
    ///
    /// The checks are performed in this order, the first failing one determines the error:
    /// withdrawal count, withdrawal limit, amount validity, available funds.
    pub fn withdraw(&mut self, amount: Decimal) -> TransactionResult<()> {
        if let Some(policy) = self.policy {
            let withdrawals = self.history.withdrawal_count();
            if withdrawals >= policy.max_withdrawals as usize {
                return Err(WithdrawalCountExceeded { max: policy.max_withdrawals });
            }
            if amount > policy.limit {
                return Err(WithdrawalLimitExceeded { requested: amount, limit: policy.limit });
            }
        }

        if amount <= Decimal::ZERO {
            Err(InvalidAmount(amount))
        } else if amount > self.balance {
            Err(InsufficientFunds { requested: amount, available: self.balance })
        } else {
            self.balance = self.balance
                .checked_sub(amount)
                .ok_or(BalanceOverflow { balance: self.balance, amount })?;
            debug!(account.number = %self.number, %amount, balance = %self.balance, "withdrawal applied");
            Ok(())
        }
    }
}



#[cfg(test)]
mod test_checking_account {
    use super::*;
    use crate::clock::test_utils::ManualClock;
    use crate::clock::Clock;
    use crate::history::{History, TransactionKind};
    use crate::transaction::TransactionError;

    fn checking_account_with(balance: Decimal, withdrawals: usize) -> Account {
        let clock = ManualClock::default();
        let mut history = History::new();
        for _ in 0..withdrawals {
            history.add(TransactionKind::Withdrawal, dec!(1), clock.now());
        }
        Account::with_values(
            AccountNumber(1),
            TaxId::default(),
            balance,
            history,
            Some(WithdrawalPolicy::default()),
        )
    }

    #[test]
    fn withdrawal_above_limit_fails_on_first_withdrawal() {
        let mut account = checking_account_with(dec!(1000), 0);

        let result = account.withdraw(dec!(500.01));
        assert_eq!(result, Err(TransactionError::WithdrawalLimitExceeded {
            requested: dec!(500.01),
            limit: dec!(500),
        }));
        assert_eq!(account.balance(), dec!(1000));
    }

    #[test]
    fn withdrawal_at_limit_succeeds() {
        let mut account = checking_account_with(dec!(1000), 0);

        let result = account.withdraw(dec!(500));
        assert!(result.is_ok(), "Expected withdrawal at the limit to succeed: {:?}", result);
        assert_eq!(account.balance(), dec!(500));
    }

    #[test]
    fn fourth_withdrawal_fails() {
        let mut account = checking_account_with(dec!(1000), 3);

        let result = account.withdraw(dec!(1));
        assert_eq!(result, Err(TransactionError::WithdrawalCountExceeded { max: 3 }));
        assert_eq!(account.balance(), dec!(1000));
    }

    #[test]
    fn count_check_precedes_limit_check() {
        let mut account = checking_account_with(dec!(0), 3);

        let result = account.withdraw(dec!(10_000));
        assert_eq!(result, Err(TransactionError::WithdrawalCountExceeded { max: 3 }));
    }

    #[test]
    fn limit_check_precedes_funds_check() {
        let mut account = checking_account_with(dec!(0), 0);

        let result = account.withdraw(dec!(600));
        assert!(matches!(result, Err(TransactionError::WithdrawalLimitExceeded { .. })),
                "Expected the withdrawal limit to be reported first: {:?}", result);
    }

    #[test]
    fn checking_account_still_requires_funds() {
        let mut account = checking_account_with(dec!(100), 0);

        let result = account.withdraw(dec!(200));
        assert_eq!(result, Err(TransactionError::InsufficientFunds {
            requested: dec!(200),
            available: dec!(100),
        }));
    }

    #[test]
    fn policy_rejects_non_positive_limit() {
        for limit in [dec!(0), dec!(-5)] {
            let result = WithdrawalPolicy::new(limit, 3);
            assert_eq!(result, Err(ConfigError::NonPositiveWithdrawalLimit(limit)),
                       "Expected limit {} to be rejected", limit);
        }
    }

    #[test]
    fn policy_rejects_zero_withdrawals() {
        assert_eq!(WithdrawalPolicy::new(dec!(500), 0), Err(ConfigError::ZeroMaxWithdrawals));
    }

    #[test]
    fn policy_accepts_positive_values() {
        let policy = WithdrawalPolicy::new(dec!(0.01), 1).expect("Expected policy to be valid");
        assert_eq!(policy.limit(), dec!(0.01));
        assert_eq!(policy.max_withdrawals(), 1);
    }

    #[test]
    fn unrestricted_account_ignores_withdrawal_count() {
        let mut account = Account::with_values(
            AccountNumber(1),
            TaxId::default(),
            dec!(1000),
            History::new(),
            None,
        );
        for _ in 0..5 {
            account.withdraw(dec!(600)).ok();
        }
        assert_eq!(account.balance(), dec!(400));
    }
}
