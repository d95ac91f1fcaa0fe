pub mod account;
pub mod command;
pub mod error;
pub mod money;
pub mod outcome;
pub mod traits;

pub use account::Account;
pub use command::Command;
pub use error::Error;
pub use money::Money;
pub use outcome::{Outcome, Rejection};
pub use traits::{CommandStream, DeadLetterQueue, Notifier, OutputRepository};
