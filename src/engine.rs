use crate::domain::{
    Account, Command, Error,
    traits::{CommandStream, DeadLetterQueue, OutputRepository},
};

use futures::StreamExt;

/// Replays a command stream against one account.
///
/// Every outcome, rejections included, goes to the output repository.
/// Commands that fail outright (bad input, overflow) go to the dead letter queue
/// and leave the account untouched.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: CommandStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    account: Account,
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: CommandStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(account: Account, ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            account,
            ingestion,
            output_repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(cmd) = res.next().await {
            match cmd {
                Ok(cmd) => match self.apply_command(cmd) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_command(&mut self, cmd: Command) -> Result<(), Error> {
        let outcome = self.account.apply(&cmd)?;

        tracing::debug!(
            holder = self.account.holder(),
            command = %cmd,
            rejected = outcome.is_rejected(),
            "applied command"
        );

        self.output_repository.record(outcome.to_string());
        Ok(())
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn dlq(&self) -> &D {
        &self.dlq
    }

    pub fn flush(&mut self) {
        self.output_repository.flush();
    }
}
