//! Operator console.
//!
//! Holds the one [`TicketLedger`] for the lifetime of the process and maps
//! each input line to a single ledger call. Arguments are split on
//! whitespace; double quotes group words (`sell "Juan dela Cruz" 30 "San
//! Juan" 100`). A rejected command prints `error: ...` and the console
//! keeps reading.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use bt_config::TicketingConfig;
use bt_ledger::{
    format_receipt, Clock, ReceiptStyle, SaleError, SaleRequest, SystemClock, TicketId,
    TicketLedger, TicketUpdate, TICKET_TABLE_COLUMNS,
};
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "console", no_binary_name = true)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
struct ConsoleLine {
    #[command(subcommand)]
    cmd: ConsoleCmd,
}

#[derive(Subcommand)]
enum ConsoleCmd {
    /// List destinations and fares
    Fares,

    /// Show the fare for one destination
    Quote { destination: String },

    /// Sell a ticket and print its receipt
    Sell {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        age: String,
        #[arg(allow_hyphen_values = true)]
        destination: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Print issued tickets, newest first
    List,

    /// Change name, age and destination of a ticket
    Update {
        id: u64,
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        age: String,
        #[arg(allow_hyphen_values = true)]
        destination: String,
    },

    /// Delete a ticket
    Delete { id: u64 },

    /// Ticket count and totals
    Summary,

    /// Show this list of commands
    Help,

    /// Leave the console
    Quit,
}

/// Whether the read loop should keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    ledger: TicketLedger,
    style: ReceiptStyle,
    clock: Box<dyn Clock>,
}

impl Console {
    pub fn new(cfg: TicketingConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: TicketLedger::new(cfg.fares),
            style: cfg.receipt,
            clock,
        }
    }

    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    /// Run one input line.
    ///
    /// Only write failures on `out` are errors; rejected commands are
    /// reported on `out` as `error: ...`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let tokens = match split_args(line) {
            Ok(t) => t,
            Err(msg) => {
                writeln!(out, "error: {msg}")?;
                return Ok(Flow::Continue);
            }
        };
        if tokens.is_empty() || tokens[0].starts_with('#') {
            return Ok(Flow::Continue);
        }

        let parsed = match ConsoleLine::try_parse_from(&tokens) {
            Ok(p) => p,
            Err(e) => {
                let rendered = e.to_string();
                let first = rendered.lines().next().unwrap_or("error: invalid command");
                writeln!(out, "{first}")?;
                return Ok(Flow::Continue);
            }
        };

        let outcome = self.dispatch(parsed.cmd, out)?;
        match outcome {
            Ok(flow) => Ok(flow),
            Err(e) => {
                debug!(error = %e, "command rejected");
                writeln!(out, "error: {}", e.prompt())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch<W: Write>(
        &mut self,
        cmd: ConsoleCmd,
        out: &mut W,
    ) -> Result<std::result::Result<Flow, SaleError>> {
        let cur = self.style.currency_symbol.clone();
        match cmd {
            ConsoleCmd::Fares => {
                for label in self.ledger.fares().menu_labels(&cur) {
                    writeln!(out, "{label}")?;
                }
            }
            ConsoleCmd::Quote { destination } => {
                if let Err(e) = self.ledger.quote_fare(&destination) {
                    return Ok(Err(e));
                }
                if let Some(d) = self.ledger.fares().get(&destination) {
                    writeln!(out, "{}", d.selection_summary(&cur))?;
                }
            }
            ConsoleCmd::Sell {
                name,
                age,
                destination,
                amount,
            } => {
                let req = SaleRequest::new(name, age, destination, amount);
                let sale = match self.ledger.sell(&req, self.clock.as_ref()) {
                    Ok(s) => s,
                    Err(e) => return Ok(Err(e)),
                };
                let receipt =
                    format_receipt(&sale.ticket, sale.change, self.clock.now(), &self.style);
                write!(out, "{receipt}")?;
                writeln!(out, "issued ticket {}", sale.ticket.id)?;
            }
            ConsoleCmd::List => {
                writeln!(out, "{}", TICKET_TABLE_COLUMNS.join("\t"))?;
                for row in self.ledger.rows() {
                    writeln!(out, "{}", row.cells().join("\t"))?;
                }
            }
            ConsoleCmd::Update {
                id,
                name,
                age,
                destination,
            } => {
                let id = TicketId::new(id);
                let update = TicketUpdate::new(name, age, destination);
                if let Err(e) = self.ledger.update_ticket(id, &update) {
                    return Ok(Err(e));
                }
                writeln!(out, "updated ticket {id}")?;
            }
            ConsoleCmd::Delete { id } => {
                let id = TicketId::new(id);
                if let Err(e) = self.ledger.delete_ticket(id) {
                    return Ok(Err(e));
                }
                writeln!(out, "deleted ticket {id}")?;
            }
            ConsoleCmd::Summary => {
                let s = self.ledger.summary();
                writeln!(out, "tickets: {}", s.ticket_count)?;
                writeln!(out, "total fares: {cur}{}", s.total_fares)?;
                writeln!(out, "total paid: {cur}{}", s.total_paid)?;
                writeln!(out, "next id: {}", s.next_id)?;
            }
            ConsoleCmd::Help => {
                let help = ConsoleLine::command().render_help().to_string();
                write!(out, "{help}")?;
            }
            ConsoleCmd::Quit => return Ok(Ok(Flow::Quit)),
        }
        Ok(Ok(Flow::Continue))
    }
}

/// Feed `input` line by line into `console` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(console: &mut Console, input: R, mut out: W) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read console input")?;
        let flow = console.execute(&line, &mut out)?;
        out.flush().context("failed to flush console output")?;
        if flow == Flow::Quit {
            break;
        }
    }
    info!(tickets = console.ledger().len(), "console closed");
    Ok(())
}

/// Console on stdin/stdout with the system clock.
pub fn run_stdio(cfg: TicketingConfig) -> Result<()> {
    let mut console = Console::new(cfg, Box::new(SystemClock));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut console, stdin.lock(), stdout.lock())
}

/// Split on whitespace, keeping double-quoted runs together.
fn split_args(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    out.push(std::mem::take(&mut cur));
                    has_token = false;
                }
            }
            c => {
                cur.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_token {
        out.push(cur);
    }
    Ok(out)
}
