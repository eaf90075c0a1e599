use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use paynet_payment::application::engine::GatewayEventProcessor;
use paynet_payment::domain::ports::PaymentStoreBox;
use paynet_payment::infrastructure::in_memory::InMemoryPaymentStore;
use paynet_payment::interfaces::csv::event_reader::GatewayEventReader;
use paynet_payment::interfaces::csv::payment_writer::{PaymentWriter, write_summaries_json};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gateway event log (CSV)
    input: PathBuf,

    /// Format of the payment summary written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let processor = GatewayEventProcessor::new(store);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = GatewayEventReader::new(file);
    for (line, event_result) in reader.events().enumerate() {
        match event_result {
            Ok(event) => {
                if let Err(e) = processor.process_event(event).await {
                    tracing::warn!(record = line + 1, error = %e, "Error processing gateway event");
                }
            }
            Err(e) => {
                tracing::warn!(record = line + 1, error = %e, "Error reading gateway event");
            }
        }
    }

    let summaries = processor.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => PaymentWriter::new(stdout.lock())
            .write_summaries(&summaries)
            .into_diagnostic()?,
        OutputFormat::Json => write_summaries_json(stdout.lock(), &summaries).into_diagnostic()?,
    }

    Ok(())
}
