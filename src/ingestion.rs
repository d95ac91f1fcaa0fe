use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::CommandStream;
use crate::domain::{Command, Error, Money};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
///
/// `amount` stays textual so a non-numeric value surfaces as
/// [`Error::InvalidAmount`] instead of a generic CSV error.
#[derive(Debug, Deserialize)]
struct CsvRow {
    op: String,
    #[serde(default)]
    amount: Option<String>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let op = row.op.trim().to_ascii_lowercase();

        match (op.as_str(), row.amount) {
            ("deposit", Some(amount)) => Ok(Command::Deposit {
                amount: amount.parse::<Money>()?,
            }),
            ("withdraw" | "withdrawal", Some(amount)) => Ok(Command::Withdraw {
                amount: amount.parse::<Money>()?,
            }),
            ("balance", _) => Ok(Command::Balance),
            ("deposit" | "withdraw" | "withdrawal", None) => Err(Error::Ingestion(format!(
                "Missing amount for operation: {}",
                op
            ))),
            (other, _) => Err(Error::Ingestion(format!(
                "Invalid operation type: {}",
                other
            ))),
        }
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::CmdStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
