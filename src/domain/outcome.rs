//! Results of account operations and their display form.
//!
//! The `Display` impls below are the user-facing contract: callers match on
//! the exact strings, so every change here is a breaking change.

use crate::domain::Money;

/// Why an operation left the balance untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NonPositiveDeposit,
    NonPositiveWithdrawal,
    InsufficientFunds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Deposited { amount: Money, balance: Money },
    Withdrew { amount: Money, balance: Money },
    Balance(Money),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Outcome::Rejected(rejection)
    }
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Rejection::NonPositiveDeposit => "Deposit amount must be positive.",
            Rejection::NonPositiveWithdrawal => "Withdrawal amount must be positive.",
            Rejection::InsufficientFunds => "Insufficient funds.",
        };
        f.write_str(text)
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Deposited { amount, balance } => {
                write!(f, "Deposited: {}. New balance: {}", amount, balance)
            }
            Outcome::Withdrew { amount, balance } => {
                write!(f, "Withdrew: {}. New balance: {}", amount, balance)
            }
            Outcome::Balance(balance) => write!(f, "Current balance: {}", balance),
            Outcome::Rejected(rejection) => core::fmt::Display::fmt(rejection, f),
        }
    }
}
