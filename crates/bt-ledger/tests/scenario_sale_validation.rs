//! Scenario: purchase validation rules and change calculation
//!
//! # Invariants under test
//!
//! 1. Ages outside 1..=120 and non-integer ages fail with InvalidAge.
//! 2. Any payment below the fare fails with InsufficientPayment.
//! 3. Paying exactly the fare succeeds with zero change.
//! 4. An unlisted destination fails before the payment is looked at.
//! 5. Change = amount paid - fare, to the centavo.
//! 6. Payments may use exponents and `_` separators; sub-centavo amounts fail.

use bt_ledger::{
    AgeProblem, FixedClock, Money, PaymentProblem, SaleError, SaleRequest, TicketLedger,
};
use chrono::NaiveDate;

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap(),
    )
}

fn attempt(age: &str, dest: &str, paid: &str) -> Result<bt_ledger::Sale, SaleError> {
    let mut ledger = TicketLedger::default();
    ledger.sell(&SaleRequest::new("Maria", age, dest, paid), &clock())
}

// ---------------------------------------------------------------------------
// 1. Age
// ---------------------------------------------------------------------------

#[test]
fn ages_outside_range_are_invalid() {
    for age in ["0", "121", "-1", "255", "1000"] {
        assert_eq!(
            attempt(age, "Ibaan", "100").map(|_| ()),
            Err(SaleError::InvalidAge {
                reason: AgeProblem::OutOfRange
            }),
            "age {age}"
        );
    }
}

#[test]
fn non_integer_ages_are_invalid() {
    for age in ["twelve", "12.0", "1e2", "0x10"] {
        assert!(
            matches!(attempt(age, "Ibaan", "100"), Err(SaleError::InvalidAge { .. })),
            "age {age}"
        );
    }
}

#[test]
fn boundary_ages_are_accepted() {
    assert!(attempt("1", "Ibaan", "55").is_ok());
    assert!(attempt("120", "Ibaan", "55").is_ok());
}

// ---------------------------------------------------------------------------
// 2-3. Payment vs fare
// ---------------------------------------------------------------------------

#[test]
fn underpayment_is_insufficient() {
    for paid in ["0.01", "39", "39.99"] {
        assert_eq!(
            attempt("30", "Balagtas", paid).map(|_| ()),
            Err(SaleError::InsufficientPayment {
                fare: Money::from_pesos(40),
                paid: Money::parse(paid).unwrap(),
            }),
            "paid {paid}"
        );
    }
}

#[test]
fn exact_payment_gives_zero_change() {
    let sale = attempt("30", "Candelaria", "100").unwrap();
    assert_eq!(sale.change, Money::ZERO);
    assert_eq!(sale.change.to_string(), "0.00");
    assert_eq!(sale.ticket.fare, Money::from_pesos(100));
}

#[test]
fn non_positive_payment_is_invalid_not_insufficient() {
    assert_eq!(
        attempt("30", "Balagtas", "0").map(|_| ()),
        Err(SaleError::InvalidPayment {
            reason: PaymentProblem::NotPositive
        })
    );
    assert_eq!(
        attempt("30", "Balagtas", "fifty").map(|_| ()),
        Err(SaleError::InvalidPayment {
            reason: PaymentProblem::NotANumber
        })
    );
}

#[test]
fn exponent_and_grouped_payments_are_accepted() {
    let sale = attempt("30", "Candelaria", "1e3").unwrap();
    assert_eq!(sale.change, Money::from_pesos(900));

    let sale = attempt("30", "Candelaria", "1_000").unwrap();
    assert_eq!(sale.ticket.amount_paid, Money::from_pesos(1_000));
}

#[test]
fn sub_centavo_payment_is_rejected_with_its_own_reason() {
    assert_eq!(
        attempt("30", "Balagtas", "50.125").map(|_| ()),
        Err(SaleError::InvalidPayment {
            reason: PaymentProblem::SubCentavo
        })
    );
    let sale = attempt("30", "Balagtas", "50.100").unwrap();
    assert_eq!(sale.change, Money::from_centavos(1_010));
}

// ---------------------------------------------------------------------------
// 4. Destination checked before payment
// ---------------------------------------------------------------------------

#[test]
fn unknown_destination_fails_before_payment() {
    assert_eq!(
        attempt("30", "Atlantis", "not money").map(|_| ()),
        Err(SaleError::NoDestinationSelected)
    );
    assert_eq!(
        attempt("30", "", "1").map(|_| ()),
        Err(SaleError::NoDestinationSelected)
    );
}

// ---------------------------------------------------------------------------
// 5. Change arithmetic
// ---------------------------------------------------------------------------

#[test]
fn balagtas_fifty_gives_ten_change() {
    let sale = attempt("30", "Balagtas", "50.00").unwrap();
    assert_eq!(sale.ticket.fare, Money::from_pesos(40));
    assert_eq!(sale.ticket.amount_paid, Money::from_pesos(50));
    assert_eq!(sale.change, Money::from_pesos(10));
    assert_eq!(sale.ticket.change(), sale.change);
}

#[test]
fn change_is_exact_to_the_centavo() {
    let sale = attempt("30", "San Juan", "100.10").unwrap();
    assert_eq!(sale.change, Money::from_centavos(1_510));
}
