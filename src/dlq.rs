use std::cell::Cell;

use crate::domain::{DeadLetterQueue, Error};

/// Reports failed commands on stderr and keeps a running count.
#[derive(Default, Debug)]
pub struct StdErrDLQ {
    reported: Cell<usize>,
}

impl StdErrDLQ {
    pub fn reported(&self) -> usize {
        self.reported.get()
    }
}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        self.reported.set(self.reported.get() + 1);
        tracing::warn!(error = %error, "command failed");
        eprintln!("DLQ Report - Error: {}", error);
    }
}
