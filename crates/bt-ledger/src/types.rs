use chrono::NaiveDateTime;

use crate::money::Money;

/// Wall-clock format used for issue times on receipts and table rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column headings of the ticket manager table, in row order.
pub const TICKET_TABLE_COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Age",
    "Destination",
    "Price",
    "Payment",
    "Date/Time",
];

/// Sequential ticket identifier. Starts at 1; never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketId(u64);

impl TicketId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One completed sale.
///
/// `fare` is copied from the fare table at the moment of sale and never
/// recomputed. `amount_paid >= fare` holds for every ticket the ledger
/// issues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub passenger_name: String,
    pub passenger_age: u8,
    pub destination: String,
    pub fare: Money,
    pub amount_paid: Money,
    pub issued_at: NaiveDateTime,
}

impl Ticket {
    /// Change handed back to the passenger.
    pub fn change(&self) -> Money {
        self.amount_paid - self.fare
    }

    /// The seven-field row shown in the ticket manager.
    pub fn row(&self) -> TicketRow {
        TicketRow {
            id: self.id.get(),
            name: self.passenger_name.clone(),
            age: self.passenger_age,
            destination: self.destination.clone(),
            fare: self.fare,
            amount_paid: self.amount_paid,
            issued_at: self.issued_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Flat row for table rendering: (id, name, age, destination, fare,
/// amount paid, issued at), in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketRow {
    pub id: u64,
    pub name: String,
    pub age: u8,
    pub destination: String,
    pub fare: Money,
    pub amount_paid: Money,
    pub issued_at: String,
}

impl TicketRow {
    /// Cell texts in column order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.destination.clone(),
            self.fare.to_string(),
            self.amount_paid.to_string(),
            self.issued_at.clone(),
        ]
    }
}

/// Raw purchase form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaleRequest {
    pub name: String,
    pub age: String,
    pub destination: String,
    pub amount_paid: String,
}

impl SaleRequest {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        destination: impl Into<String>,
        amount_paid: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            destination: destination.into(),
            amount_paid: amount_paid.into(),
        }
    }
}

/// Raw edit form input for an existing ticket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub name: String,
    pub age: String,
    pub destination: String,
}

impl TicketUpdate {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            destination: destination.into(),
        }
    }
}

/// A purchase that passed every rule. Only validation can build one, so
/// recording it cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedSale {
    pub(crate) name: String,
    pub(crate) age: u8,
    pub(crate) destination: String,
    pub(crate) fare: Money,
    pub(crate) amount_paid: Money,
}

impl ValidatedSale {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn fare(&self) -> Money {
        self.fare
    }

    pub fn amount_paid(&self) -> Money {
        self.amount_paid
    }

    /// Change due; never negative.
    pub fn change(&self) -> Money {
        self.amount_paid - self.fare
    }
}

/// Result of a recorded sale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sale {
    pub ticket: Ticket,
    pub change: Money,
}

/// Aggregate view of the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub ticket_count: usize,
    pub total_fares: Money,
    pub total_paid: Money,
    /// Id the next sale will receive.
    pub next_id: TicketId,
}
