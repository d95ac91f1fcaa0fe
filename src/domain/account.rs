use std::sync::Weak;

use crate::domain::{Command, Error, Money, Notifier, Outcome, Rejection};

/// A single holder's account.
///
/// The balance is signed and may start (and stay) negative. It only moves
/// through accepted [`Account::deposit`] and [`Account::withdraw`] calls.
pub struct Account {
    holder: String,
    balance: Money,
    notifier: Option<Weak<dyn Notifier>>,
}

impl Account {
    pub fn new(holder: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            holder: holder.into(),
            balance: initial_balance,
            notifier: None,
        }
    }

    /// Attaches an observer for successful deposits. The account does not
    /// keep it alive.
    pub fn with_notifier(mut self, notifier: Weak<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Outcome, Error> {
        if !amount.is_positive() {
            return Ok(Rejection::NonPositiveDeposit.into());
        }

        self.balance = self.balance.checked_add(amount).ok_or(Error::Overflow)?;

        let outcome = Outcome::Deposited {
            amount,
            balance: self.balance,
        };
        self.notify(&outcome);

        Ok(outcome)
    }

    pub fn withdraw(&mut self, amount: Money) -> Outcome {
        if !amount.is_positive() {
            return Rejection::NonPositiveWithdrawal.into();
        }

        if amount > self.balance {
            return Rejection::InsufficientFunds.into();
        }

        // 0 < amount <= balance, cannot overflow
        self.balance = self.balance - amount;

        Outcome::Withdrew {
            amount,
            balance: self.balance,
        }
    }

    pub fn get_balance(&self) -> String {
        Outcome::Balance(self.balance).to_string()
    }

    pub fn apply(&mut self, command: &Command) -> Result<Outcome, Error> {
        match *command {
            Command::Deposit { amount } => self.deposit(amount),
            Command::Withdraw { amount } => Ok(self.withdraw(amount)),
            Command::Balance => Ok(Outcome::Balance(self.balance)),
        }
    }

    fn notify(&self, outcome: &Outcome) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        let Some(notifier) = notifier.upgrade() else {
            tracing::debug!(holder = %self.holder, "notifier dropped, skipping notification");
            return;
        };

        let message = format!("{}: {}", self.holder, outcome);
        if let Err(e) = notifier.notify(&message) {
            tracing::warn!(holder = %self.holder, error = %e, "notification failed");
        }
    }
}

impl core::fmt::Debug for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Account")
            .field("holder", &self.holder)
            .field("balance", &self.balance)
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex, Weak};

    use rust_decimal::Decimal;

    use super::Account;
    use crate::domain::{Command, Error, Money, Notifier, Outcome, Rejection};

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) -> Result<(), Error> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _message: &str) -> Result<(), Error> {
            Err(Error::Notification("transport down".to_string()))
        }
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn observed(holder: &str, balance: i64) -> (Account, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let weak = Arc::downgrade(&notifier) as Weak<dyn Notifier>;
        let account = Account::new(holder, Money::from(balance)).with_notifier(weak);
        (account, notifier)
    }

    #[test]
    fn sample_session() {
        let mut a = Account::new("Alice", Money::from(100));

        assert_eq!(a.get_balance(), "Current balance: $100.00");
        assert_eq!(
            a.deposit(Money::from(50)).unwrap().to_string(),
            "Deposited: $50.00. New balance: $150.00"
        );
        assert_eq!(
            a.withdraw(Money::from(30)).to_string(),
            "Withdrew: $30.00. New balance: $120.00"
        );
        assert_eq!(a.withdraw(Money::from(1000)).to_string(), "Insufficient funds.");
        assert_eq!(a.get_balance(), "Current balance: $120.00");
    }

    #[test]
    fn deposit_adds_exact_amount() {
        let mut a = Account::new("Bob", money("10.25"));
        let outcome = a.deposit(money("0.75")).unwrap();

        assert_eq!(
            outcome,
            Outcome::Deposited {
                amount: money("0.75"),
                balance: Money::from(11)
            }
        );
        assert_eq!(a.balance(), Money::from(11));
    }

    #[test]
    fn non_positive_deposit_is_rejected() {
        let mut a = Account::new("Carol", Money::from(20));

        for amount in [Money::ZERO, Money::from(-10)] {
            let outcome = a.deposit(amount).unwrap();
            assert_eq!(outcome, Outcome::Rejected(Rejection::NonPositiveDeposit));
            assert_eq!(outcome.to_string(), "Deposit amount must be positive.");
        }
        assert_eq!(a.get_balance(), "Current balance: $20.00");
    }

    #[test]
    fn withdraw_within_balance() {
        let mut a = Account::new("Dave", Money::from(100));

        assert_eq!(
            a.withdraw(Money::from(30)).to_string(),
            "Withdrew: $30.00. New balance: $70.00"
        );
        assert_eq!(
            a.withdraw(Money::from(70)).to_string(),
            "Withdrew: $70.00. New balance: $0.00"
        );
        assert_eq!(a.balance(), Money::ZERO);
    }

    #[test]
    fn insufficient_funds_leaves_balance() {
        let mut a = Account::new("Eve", Money::from(50));

        assert_eq!(
            a.withdraw(Money::from(100)),
            Outcome::Rejected(Rejection::InsufficientFunds)
        );
        assert_eq!(a.get_balance(), "Current balance: $50.00");
    }

    #[test]
    fn non_positive_withdraw_is_rejected() {
        let mut a = Account::new("Frank", Money::from(40));

        for amount in [Money::ZERO, Money::from(-5)] {
            assert_eq!(
                a.withdraw(amount).to_string(),
                "Withdrawal amount must be positive."
            );
        }
        assert_eq!(a.get_balance(), "Current balance: $40.00");
    }

    #[test]
    fn fractional_deposits_format_cleanly() {
        let mut a = Account::new("Gin", Money::ZERO);

        a.deposit(money("0.1")).unwrap();
        a.deposit(money("0.2")).unwrap();
        assert_eq!(a.get_balance(), "Current balance: $0.30");

        a.withdraw(money("0.15"));
        assert_eq!(a.get_balance(), "Current balance: $0.15");
    }

    #[test]
    fn large_amounts_keep_cents() {
        let mut a = Account::new("Ivy", Money::ZERO);
        let large = Money::from(1_000_000_000_000);

        assert!(a.deposit(large).unwrap().to_string().starts_with("Deposited"));
        assert_eq!(a.get_balance(), "Current balance: $1000000000000.00");
    }

    #[test]
    fn negative_initial_balance_blocks_withdrawals() {
        let mut a = Account::new("Jill", Money::from(-50));

        assert_eq!(a.get_balance(), "Current balance: $-50.00");
        assert_eq!(a.withdraw(Money::from(1)).to_string(), "Insufficient funds.");
        assert_eq!(a.balance(), Money::from(-50));

        assert_eq!(
            a.deposit(Money::from(20)).unwrap().to_string(),
            "Deposited: $20.00. New balance: $-30.00"
        );
    }

    #[test]
    fn midpoint_amounts_round_to_even() {
        let mut a = Account::new("Pat", Money::ZERO);
        assert_eq!(
            a.deposit(money("0.125")).unwrap().to_string(),
            "Deposited: $0.12. New balance: $0.12"
        );

        let b = Account::new("Pat", money("100.625"));
        assert_eq!(b.get_balance(), "Current balance: $100.62");
    }

    #[test]
    fn get_balance_has_no_side_effects() {
        let a = Account::new("Kim", money("12.345"));

        assert_eq!(a.get_balance(), "Current balance: $12.35");
        assert_eq!(a.get_balance(), a.get_balance());
        assert_eq!(a.balance(), money("12.345"));
    }

    #[test]
    fn overflowing_deposit_fails_without_change() {
        let notifier = Arc::new(RecordingNotifier::default());
        let weak = Arc::downgrade(&notifier) as Weak<dyn Notifier>;
        let mut a = Account::new("Max", Money::from(Decimal::MAX)).with_notifier(weak);

        assert!(matches!(a.deposit(Money::from(1)), Err(Error::Overflow)));
        assert_eq!(a.balance(), Money::from(Decimal::MAX));
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn deposit_notifies_once_with_holder_prefix() {
        let (mut a, notifier) = observed("Alice", 100);

        let outcome = a.deposit(Money::from(50)).unwrap();

        assert_eq!(outcome.to_string(), "Deposited: $50.00. New balance: $150.00");
        assert_eq!(
            notifier.messages(),
            vec!["Alice: Deposited: $50.00. New balance: $150.00".to_string()]
        );
    }

    #[test]
    fn every_deposit_notifies_in_order() {
        let (mut a, notifier) = observed("Carol", 100);

        a.deposit(Money::from(50)).unwrap();
        a.deposit(Money::from(25)).unwrap();
        a.deposit(Money::from(10)).unwrap();

        assert_eq!(
            notifier.messages(),
            vec![
                "Carol: Deposited: $50.00. New balance: $150.00".to_string(),
                "Carol: Deposited: $25.00. New balance: $175.00".to_string(),
                "Carol: Deposited: $10.00. New balance: $185.00".to_string(),
            ]
        );
    }

    #[test]
    fn rejected_deposits_and_withdrawals_do_not_notify() {
        let (mut a, notifier) = observed("Dave", 100);

        a.deposit(Money::ZERO).unwrap();
        a.deposit(Money::from(-50)).unwrap();
        a.withdraw(Money::from(30));
        a.withdraw(Money::from(1000));
        a.apply(&Command::Balance).unwrap();

        assert!(notifier.messages().is_empty());
        assert_eq!(a.balance(), Money::from(70));
    }

    #[test]
    fn notifier_failure_does_not_change_outcome() {
        let notifier: Arc<dyn Notifier> = Arc::new(FailingNotifier);
        let mut a = Account::new("Eve", Money::from(10)).with_notifier(Arc::downgrade(&notifier));

        let outcome = a.deposit(Money::from(5)).unwrap();

        assert_eq!(outcome.to_string(), "Deposited: $5.00. New balance: $15.00");
        assert_eq!(a.balance(), Money::from(15));
    }

    #[test]
    fn dropped_notifier_is_skipped() {
        let (mut a, notifier) = observed("Frank", 0);
        drop(notifier);

        assert_eq!(
            a.deposit(Money::from(1)).unwrap().to_string(),
            "Deposited: $1.00. New balance: $1.00"
        );
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut a = Account::new("Gus", Money::from(10));

        assert_eq!(
            a.apply(&Command::Deposit {
                amount: Money::from(5)
            })
            .unwrap(),
            Outcome::Deposited {
                amount: Money::from(5),
                balance: Money::from(15)
            }
        );
        assert_eq!(
            a.apply(&Command::Withdraw {
                amount: Money::from(20)
            })
            .unwrap(),
            Outcome::Rejected(Rejection::InsufficientFunds)
        );
        assert_eq!(
            a.apply(&Command::Balance).unwrap(),
            Outcome::Balance(Money::from(15))
        );
    }
}
