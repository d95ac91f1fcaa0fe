mod config;
mod dlq;
mod domain;
mod engine;
mod ingestion;
mod notifier;
mod output_repository;

use std::{env, fs::File, io::Read, sync::Arc, sync::Weak};

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::domain::{Account, Error, Notifier};
use crate::dlq::StdErrDLQ;
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::notifier::LogNotifier;
use crate::output_repository::StdOutOutput;

/// Replayed when no script path is given.
const SAMPLE_SESSION: &str = "op,amount
balance,
deposit,50
withdraw,30
withdraw,150
balance,
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env(env::args())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_level))?,
        )
        .init();

    tracing::info!(
        holder = %config.holder,
        initial_balance = %config.initial_balance,
        notify = config.notify,
        "opening account"
    );

    // Owned here; the account only holds a weak handle.
    let notifier: Option<Arc<dyn Notifier>> = if config.notify {
        Some(Arc::new(LogNotifier::default()))
    } else {
        None
    };

    let mut account = Account::new(config.holder.clone(), config.initial_balance);
    if let Some(notifier) = &notifier {
        let weak: Weak<dyn Notifier> = Arc::downgrade(notifier);
        account = account.with_notifier(weak);
    }

    let source: Box<dyn Read + Send> = match &config.script {
        Some(path) => Box::new(File::open(path).map_err(Error::from)?),
        None => Box::new(SAMPLE_SESSION.as_bytes()),
    };
    let ingestion = CsvReader::new(source)?;

    let mut engine = Engine::new(account, ingestion, StdOutOutput::new(), StdErrDLQ::default());
    engine.process().await?;
    engine.flush();

    tracing::debug!(
        holder = engine.account().holder(),
        balance = %engine.account().balance(),
        failed = engine.dlq().reported(),
        "session finished"
    );

    Ok(())
}
