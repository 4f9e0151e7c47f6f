//! Sale and ticket-management errors.
//!
//! Every variant is a local input problem. None is fatal and none leaves the
//! ledger half-mutated: validation always runs before any write.

use crate::money::Money;
use crate::types::TicketId;

/// What was wrong with a typed age.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgeProblem {
    /// Blank field.
    Missing,
    /// Not an integer.
    NotANumber,
    /// Integer outside 1..=120.
    OutOfRange,
}

/// What was wrong with a typed payment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaymentProblem {
    /// Blank or not a decimal amount.
    NotANumber,
    /// A number, but finer than one centavo (`50.125`).
    SubCentavo,
    /// Zero or negative.
    NotPositive,
}

/// All failures surfaced by [`TicketLedger`](crate::TicketLedger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleError {
    MissingName,
    InvalidAge { reason: AgeProblem },
    NoDestinationSelected,
    InvalidPayment { reason: PaymentProblem },
    InsufficientPayment { fare: Money, paid: Money },
    UnknownDestination { destination: String },
    TicketNotFound { id: TicketId },
}

impl SaleError {
    /// Short message for the person at the counter.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::MissingName => "Please enter your name",
            Self::InvalidAge {
                reason: AgeProblem::Missing,
            } => "Please enter your age",
            Self::InvalidAge {
                reason: AgeProblem::NotANumber,
            } => "Age must be a number",
            Self::InvalidAge {
                reason: AgeProblem::OutOfRange,
            } => "Please enter a valid age",
            Self::NoDestinationSelected => "Please select a destination",
            Self::InvalidPayment {
                reason: PaymentProblem::NotANumber,
            } => "Payment must be a number",
            Self::InvalidPayment {
                reason: PaymentProblem::SubCentavo,
            } => "Payment cannot go below one centavo",
            Self::InvalidPayment {
                reason: PaymentProblem::NotPositive,
            } => "Please enter a valid payment amount",
            Self::InsufficientPayment { .. } => "Insufficient payment",
            Self::UnknownDestination { .. } => "Unknown destination",
            Self::TicketNotFound { .. } => "Ticket not found",
        }
    }
}

impl std::fmt::Display for SaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "passenger name is missing"),
            Self::InvalidAge { reason } => match reason {
                AgeProblem::Missing => write!(f, "passenger age is missing"),
                AgeProblem::NotANumber => write!(f, "passenger age is not an integer"),
                AgeProblem::OutOfRange => write!(f, "passenger age must be between 1 and 120"),
            },
            Self::NoDestinationSelected => write!(f, "no listed destination selected"),
            Self::InvalidPayment { reason } => match reason {
                PaymentProblem::NotANumber => write!(f, "payment is not a valid amount"),
                PaymentProblem::SubCentavo => write!(f, "payment is finer than one centavo"),
                PaymentProblem::NotPositive => write!(f, "payment must be greater than zero"),
            },
            Self::InsufficientPayment { fare, paid } => {
                write!(f, "insufficient payment: paid {paid}, fare is {fare}")
            }
            Self::UnknownDestination { destination } => {
                write!(f, "unknown destination '{destination}'")
            }
            Self::TicketNotFound { id } => write!(f, "ticket {id} not found"),
        }
    }
}

impl std::error::Error for SaleError {}
