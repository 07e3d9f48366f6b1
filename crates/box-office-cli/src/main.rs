//! Box office purchase harness entry point.

use std::error::Error;
use std::io;
use std::sync::Arc;

use box_office_cli::config::{HarnessConfig, LogFormat};
use box_office_cli::gateways::{LoggingPaymentGateway, LoggingSeatReservationGateway};
use box_office_cli::session::Session;
use box_office_core::clock::SystemClock;
use box_office_purchase::application::ticket_service::TicketService;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let config = HarnessConfig::from_env()?;

    // Logs go to stderr so the prompts on stdout stay readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    tracing::info!(?config, "Starting box office purchase harness");

    let service = TicketService::new(
        Arc::new(LoggingPaymentGateway),
        Arc::new(LoggingSeatReservationGateway),
        Arc::new(SystemClock),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config.output).run(&service)?;

    Ok(())
}
