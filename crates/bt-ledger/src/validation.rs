//! Purchase and edit validation rules.
//!
//! Rules run in a fixed order and the first failure wins:
//! name, age, destination, payment amount, payment vs fare.

use crate::error::{AgeProblem, PaymentProblem, SaleError};
use crate::fares::FareTable;
use crate::money::{Money, MoneyParseError};
use crate::types::{SaleRequest, ValidatedSale};

/// Youngest accepted passenger age.
pub const MIN_AGE: i64 = 1;
/// Oldest accepted passenger age.
pub const MAX_AGE: i64 = 120;

/// Check a sale request against `fares`.
///
/// # Errors
/// The first failing rule, as a [`SaleError`].
pub fn validate_sale(fares: &FareTable, req: &SaleRequest) -> Result<ValidatedSale, SaleError> {
    let name = check_name(&req.name)?;
    let age = check_age(&req.age)?;
    let fare = fares
        .fare(&req.destination)
        .ok_or(SaleError::NoDestinationSelected)?;
    let amount_paid = check_payment(&req.amount_paid)?;
    if amount_paid < fare {
        return Err(SaleError::InsufficientPayment {
            fare,
            paid: amount_paid,
        });
    }

    Ok(ValidatedSale {
        name,
        age,
        destination: req.destination.clone(),
        fare,
        amount_paid,
    })
}

/// Trimmed, non-empty passenger name.
pub(crate) fn check_name(raw: &str) -> Result<String, SaleError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SaleError::MissingName);
    }
    Ok(name.to_string())
}

pub(crate) fn check_age(raw: &str) -> Result<u8, SaleError> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(SaleError::InvalidAge {
            reason: AgeProblem::Missing,
        });
    }
    let age: i64 = t.parse().map_err(|_| SaleError::InvalidAge {
        reason: AgeProblem::NotANumber,
    })?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(SaleError::InvalidAge {
            reason: AgeProblem::OutOfRange,
        });
    }
    // MAX_AGE fits in u8
    u8::try_from(age).map_err(|_| SaleError::InvalidAge {
        reason: AgeProblem::OutOfRange,
    })
}

pub(crate) fn check_payment(raw: &str) -> Result<Money, SaleError> {
    let amount = Money::parse(raw).map_err(|e| SaleError::InvalidPayment {
        reason: match e {
            MoneyParseError::TooPrecise { .. } => PaymentProblem::SubCentavo,
            _ => PaymentProblem::NotANumber,
        },
    })?;
    if !amount.is_positive() {
        return Err(SaleError::InvalidPayment {
            reason: PaymentProblem::NotPositive,
        });
    }
    Ok(amount)
}
