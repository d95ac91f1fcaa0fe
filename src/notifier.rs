use crate::domain::{Error, Notifier};

/// Delivers deposit notifications as `info` log events.
#[derive(Default, Debug)]
pub struct LogNotifier {}

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) -> Result<(), Error> {
        tracing::info!(target: "bank_account::notification", "{}", message);
        Ok(())
    }
}
