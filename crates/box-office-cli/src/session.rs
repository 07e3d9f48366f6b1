//! The interactive purchase session.

use std::io::{BufRead, Write};

use box_office_core::account::AccountId;
use box_office_core::error::PurchaseError;
use box_office_purchase::application::ticket_service::TicketService;
use box_office_purchase::domain::receipt::PurchaseReceipt;
use box_office_purchase::domain::ticket_request::RawTicketLine;
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::AppError;

/// Typed at the ticket type prompt to finish entering lines.
pub const DONE: &str = "DONE";

const ACCOUNT_PROMPT: &str = "Enter account ID (must be a positive integer): ";
const TYPE_PROMPT: &str = "Enter ticket type (ADULT, CHILD, INFANT) or type 'DONE' to finish: ";

/// What a session ended with. Either way the outcome has already been
/// printed.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The purchase went through.
    Purchased(PurchaseReceipt),
    /// The account ID or the purchase was rejected.
    Rejected(PurchaseError),
}

/// One prompt-driven purchase over a reader and a writer.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session.
    pub const fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// Runs the prompts, makes one purchase, and prints the outcome.
    ///
    /// The account ID is checked as soon as it is entered. Ticket lines are
    /// collected verbatim until `DONE` or end of input and only validated by
    /// the purchase itself.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if reading or writing fails. Rejected purchases are
    /// not errors; they come back as [`SessionOutcome::Rejected`].
    pub fn run(mut self, service: &TicketService) -> Result<SessionOutcome, AppError> {
        let raw_account = self.ask(ACCOUNT_PROMPT)?.unwrap_or_default();
        let account_id = match AccountId::parse(&raw_account) {
            Ok(id) => id,
            Err(err) => return self.reject(err),
        };

        let lines = self.collect_lines()?;
        debug!(%account_id, lines = lines.len(), "ticket lines collected");

        match service.purchase_tickets(account_id.get(), &lines) {
            Ok(receipt) => {
                self.print_receipt(&receipt)?;
                Ok(SessionOutcome::Purchased(receipt))
            }
            Err(err) => self.reject(err),
        }
    }

    fn collect_lines(&mut self) -> Result<Vec<RawTicketLine>, AppError> {
        let mut lines = Vec::new();
        loop {
            let Some(ticket_type) = self.ask(TYPE_PROMPT)? else {
                break;
            };
            if ticket_type == DONE {
                break;
            }
            let Some(quantity) = self.ask(&format!("Enter number of {ticket_type} tickets: "))?
            else {
                break;
            };
            lines.push(RawTicketLine::new(ticket_type, quantity));
        }
        Ok(lines)
    }

    /// Prints `prompt` and reads one line. Returns `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn print_receipt(&mut self, receipt: &PurchaseReceipt) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Text => writeln!(self.output, "{receipt}")?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.output, receipt)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()?;
        info!(purchase_id = %receipt.purchase_id, "receipt printed");
        Ok(())
    }

    fn reject(mut self, err: PurchaseError) -> Result<SessionOutcome, AppError> {
        writeln!(self.output, "Error: {err}")?;
        self.output.flush()?;
        Ok(SessionOutcome::Rejected(err))
    }
}
