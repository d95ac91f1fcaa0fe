use futures::Stream;

use crate::domain::{Command, Error};

/// External observer told about successful deposits.
///
/// Calls are fire-and-forget from the account's side: an `Err` is logged and
/// never changes the outcome of the deposit that triggered it.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), Error>;
}

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn record(&mut self, line: String);
    fn flush(&mut self);
}
