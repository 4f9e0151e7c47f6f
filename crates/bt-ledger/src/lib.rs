//! bt-ledger
//!
//! Bus ticket sales core:
//! - Fixed destination fare table
//! - Purchase validation (name, age, destination, payment)
//! - Sequential ticket issuance with change calculation
//! - Receipt text rendering
//! - List / update / delete of issued tickets
//! - Pure in-memory logic (no IO, no persistence, no threads)

mod clock;
mod error;
mod types;

pub mod fares;
pub mod ledger;
pub mod money;
pub mod receipt;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AgeProblem, PaymentProblem, SaleError};
pub use fares::{Destination, FareTable, FareTableError, BUILTIN_FARES};
pub use ledger::TicketLedger;
pub use money::{Money, MoneyParseError, CENTAVOS_PER_PESO};
pub use receipt::{format_receipt, ReceiptStyle, BANNER_WIDTH};
pub use types::{
    LedgerSummary, Sale, SaleRequest, Ticket, TicketId, TicketRow, TicketUpdate, ValidatedSale,
    TICKET_TABLE_COLUMNS, TIMESTAMP_FORMAT,
};
pub use validation::{validate_sale, MAX_AGE, MIN_AGE};
