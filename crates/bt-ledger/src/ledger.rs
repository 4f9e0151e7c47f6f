//! In-memory ticket ledger.
//!
//! # Purpose
//! [`TicketLedger`] owns the fare table, the issued tickets and the id
//! counter. It is the only place tickets are created, edited or removed.
//!
//! - Sales are validated first ([`validation`](crate::validation)); a
//!   [`ValidatedSale`] is then recorded without any failure path.
//! - Ids start at 1 and the counter never moves backwards, deletions
//!   included.
//! - Reads return owned snapshots, newest ticket first.
//!
//! # Usage
//! ```ignore
//! let mut ledger = TicketLedger::new(FareTable::builtin());
//! let sale = ledger.sell(&SaleRequest::new("Ana", "30", "Balagtas", "50"), &SystemClock)?;
//! println!("{}", format_receipt(&sale.ticket, sale.change, SystemClock.now(), &ReceiptStyle::default()));
//! ```

use chrono::NaiveDateTime;
use tracing::debug;

use crate::{
    clock::Clock,
    error::SaleError,
    fares::FareTable,
    money::Money,
    types::{
        LedgerSummary, Sale, SaleRequest, Ticket, TicketId, TicketRow, TicketUpdate,
        ValidatedSale,
    },
    validation::{self, check_age, check_name},
};

/// Ticket store plus fare table and id counter.
#[derive(Clone, Debug)]
pub struct TicketLedger {
    fares: FareTable,
    /// Insertion (= issuance) order.
    tickets: Vec<Ticket>,
    next_id: u64,
}

impl TicketLedger {
    pub fn new(fares: FareTable) -> Self {
        Self {
            fares,
            tickets: Vec::new(),
            next_id: 1,
        }
    }

    // -----------------------------------------------------------------------
    // Sales
    // -----------------------------------------------------------------------

    /// Fare currently listed for `destination`.
    ///
    /// # Errors
    /// [`SaleError::UnknownDestination`] when the destination is not listed.
    pub fn quote_fare(&self, destination: &str) -> Result<Money, SaleError> {
        self.fares
            .fare(destination)
            .ok_or_else(|| SaleError::UnknownDestination {
                destination: destination.to_string(),
            })
    }

    /// Apply every purchase rule without touching the ledger.
    ///
    /// # Errors
    /// The first failing rule.
    pub fn validate_sale(&self, req: &SaleRequest) -> Result<ValidatedSale, SaleError> {
        validation::validate_sale(&self.fares, req)
    }

    /// Issue a ticket for an already validated sale.
    pub fn record_sale(&mut self, sale: ValidatedSale, now: NaiveDateTime) -> Sale {
        let change = sale.change();
        let id = TicketId::new(self.next_id);
        self.next_id += 1;

        let ticket = Ticket {
            id,
            passenger_name: sale.name,
            passenger_age: sale.age,
            destination: sale.destination,
            fare: sale.fare,
            amount_paid: sale.amount_paid,
            issued_at: now,
        };
        debug!(
            ticket_id = id.get(),
            destination = %ticket.destination,
            fare = %ticket.fare,
            change = %change,
            "sale recorded"
        );
        self.tickets.push(ticket.clone());
        Sale { ticket, change }
    }

    /// Validate then record in one step, stamping the ticket from `clock`.
    ///
    /// # Errors
    /// Any validation failure; the ledger is unchanged in that case.
    pub fn sell(&mut self, req: &SaleRequest, clock: &dyn Clock) -> Result<Sale, SaleError> {
        let validated = self.validate_sale(req)?;
        Ok(self.record_sale(validated, clock.now()))
    }

    // -----------------------------------------------------------------------
    // Management
    // -----------------------------------------------------------------------

    /// Edit passenger name, age and destination of an issued ticket.
    ///
    /// The new destination is stored as given: it is not checked against
    /// the fare table and the fare is not recomputed.
    ///
    /// # Errors
    /// [`SaleError::TicketNotFound`], then name and age rule failures. The
    /// ticket is unchanged on error.
    pub fn update_ticket(&mut self, id: TicketId, update: &TicketUpdate) -> Result<(), SaleError> {
        let idx = self.index_of(id)?;
        let name = check_name(&update.name)?;
        let age = check_age(&update.age)?;

        let ticket = &mut self.tickets[idx];
        ticket.passenger_name = name;
        ticket.passenger_age = age;
        ticket.destination = update.destination.clone();
        debug!(
            ticket_id = id.get(),
            destination = %ticket.destination,
            "ticket updated"
        );
        Ok(())
    }

    /// Remove an issued ticket and hand it back.
    ///
    /// # Errors
    /// [`SaleError::TicketNotFound`] if no ticket has `id` (including one
    /// already deleted).
    pub fn delete_ticket(&mut self, id: TicketId) -> Result<Ticket, SaleError> {
        let idx = self.index_of(id)?;
        let removed = self.tickets.remove(idx);
        debug!(ticket_id = id.get(), "ticket deleted");
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// Snapshot of all tickets, most recently issued first.
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.tickets.iter().rev().cloned().collect()
    }

    /// Manager-table rows, most recently issued first.
    pub fn rows(&self) -> Vec<TicketRow> {
        self.tickets.iter().rev().map(Ticket::row).collect()
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Id the next recorded sale will receive.
    pub fn next_id(&self) -> TicketId {
        TicketId::new(self.next_id)
    }

    pub fn fares(&self) -> &FareTable {
        &self.fares
    }

    /// Counts and totals over the tickets currently held.
    pub fn summary(&self) -> LedgerSummary {
        let (total_fares, total_paid) = self
            .tickets
            .iter()
            .fold((Money::ZERO, Money::ZERO), |(f, p), t| {
                (f.saturating_add(t.fare), p.saturating_add(t.amount_paid))
            });
        LedgerSummary {
            ticket_count: self.tickets.len(),
            total_fares,
            total_paid,
            next_id: self.next_id(),
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn index_of(&self, id: TicketId) -> Result<usize, SaleError> {
        self.tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(SaleError::TicketNotFound { id })
    }
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new(FareTable::builtin())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
