use crate::domain::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit { amount: Money },
    Withdraw { amount: Money },
    Balance,
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Deposit { amount } => write!(f, "deposit,amount={}", amount),
            Command::Withdraw { amount } => write!(f, "withdraw,amount={}", amount),
            Command::Balance => f.write_str("balance"),
        }
    }
}
