//! Text receipt rendering.
//!
//! The layout is fixed: banner, title, banner, generation time, passenger
//! block, ticket block, payment block, banner, footer, banner. Amounts are
//! always printed with two decimals. The generation time is passed in so
//! the output is a pure function of its arguments.

use chrono::NaiveDateTime;

use crate::money::Money;
use crate::types::{Ticket, TIMESTAMP_FORMAT};

/// Width of the `=` banner lines.
pub const BANNER_WIDTH: usize = 40;

const TITLE_INDENT: &str = "         ";

/// Wording and currency symbol of the receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptStyle {
    pub currency_symbol: String,
    pub title: String,
    pub footer: String,
}

impl Default for ReceiptStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            title: "BUS TICKET RECEIPT".to_string(),
            footer: "Thank you for choosing our service!".to_string(),
        }
    }
}

/// Render the receipt for `ticket`.
pub fn format_receipt(
    ticket: &Ticket,
    change: Money,
    generated_at: NaiveDateTime,
    style: &ReceiptStyle,
) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let cur = style.currency_symbol.as_str();
    format!(
        "
{banner}
{TITLE_INDENT}{title}
{banner}

Date: {date}

Passenger Information:
Name: {name}
Age: {age}

Ticket Details:
Destination: {destination}
Price: {cur}{fare}

Payment Information:
Amount Paid: {cur}{paid}
Change: {cur}{change}

{banner}
{footer}
{banner}
",
        title = style.title,
        date = generated_at.format(TIMESTAMP_FORMAT),
        name = ticket.passenger_name,
        age = ticket.passenger_age,
        destination = ticket.destination,
        fare = ticket.fare,
        paid = ticket.amount_paid,
        footer = style.footer,
    )
}
