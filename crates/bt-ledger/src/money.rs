//! Fixed-point money type.
//!
//! # Motivation
//!
//! Fares, payments and change are all peso amounts. Holding them as `f64`
//! makes `amount_paid - fare` drift (`50.0 - 40.1`), and holding them as a
//! bare `i64` lets them mix with ages and ticket ids. `Money` wraps the raw
//! centavo count so the type system keeps the two apart.
//!
//! # Scale
//!
//! 1 peso = 100 centavos = `Money::from_centavos(100)`. Receipts always
//! render two decimals, so centavos are the finest unit the system needs.
//!
//! # Parsing
//!
//! [`Money::parse`] accepts what a cashier types into a payment field:
//! `"50"`, `"50.5"`, `"50.00"`, `".75"`, with surrounding whitespace and an
//! optional sign. Exponents, `inf`/`nan`, grouping separators and more than
//! two fractional digits are rejected rather than rounded.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Centavos per peso.
pub const CENTAVOS_PER_PESO: i64 = 100;

// ---------------------------------------------------------------------------
// Money newtype
// ---------------------------------------------------------------------------

/// A fixed-point currency amount in centavos.
///
/// There is intentionally no `From<i64>`; use [`Money::from_centavos`] or
/// [`Money::from_pesos`] so the scale is explicit at every call site.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Construct from a raw centavo count.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Construct from whole pesos.
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * CENTAVOS_PER_PESO)
    }

    /// Raw centavo count.
    #[inline]
    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// `true` if strictly greater than zero.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `true` if strictly below zero.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `true` if the amount has no centavo part.
    #[inline]
    pub fn is_whole_pesos(self) -> bool {
        self.0 % CENTAVOS_PER_PESO == 0
    }

    /// Subtraction returning `None` on overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Saturating addition, used for running totals.
    #[inline]
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    /// Render without decimals when the amount is whole (`100`), with two
    /// decimals otherwise (`85.50`). Used for menu labels, where the fare
    /// list reads as plain peso prices.
    pub fn to_compact_string(self) -> String {
        if self.is_whole_pesos() {
            format!("{}", self.0 / CENTAVOS_PER_PESO)
        } else {
            self.to_string()
        }
    }

    /// Parse a typed amount.
    ///
    /// Accepts the plain decimal forms a counter operator types: an optional
    /// sign, digits with single `_` separators between them, an optional
    /// fraction and an optional `e`/`E` exponent (`1e3`, `1_000`, `2.5E1`).
    /// The value must land on a whole centavo; trailing zeros past the
    /// second decimal are fine (`50.100`), other digits are not (`50.125`).
    ///
    /// # Errors
    /// Returns [`MoneyParseError`] for empty input, anything that is not a
    /// finite decimal number, a value finer than one centavo, or a value
    /// that does not fit in `i64` centavos.
    pub fn parse(text: &str) -> Result<Money, MoneyParseError> {
        let t = text.trim();
        if t.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let malformed = || MoneyParseError::Malformed {
            input: t.to_string(),
        };
        let overflow = || MoneyParseError::Overflow {
            input: t.to_string(),
        };

        let (negative, body) = if let Some(rest) = t.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = t.strip_prefix('+') {
            (false, rest)
        } else {
            (false, t)
        };

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(i) => {
                let exponent = parse_exponent(&body[i + 1..]).ok_or_else(malformed)?;
                (&body[..i], exponent)
            }
            None => (body, 0),
        };
        let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(malformed());
        }
        let whole = strip_digit_separators(whole).ok_or_else(malformed)?;
        let frac = strip_digit_separators(frac).ok_or_else(malformed)?;

        // value = digits * 10^(exponent - frac.len()); centavos shift two more
        let joined = format!("{whole}{frac}");
        let mut digits = joined.trim_start_matches('0');
        let frac_len = i64::try_from(frac.len()).map_err(|_| malformed())?;
        let shift = i64::from(exponent) + 2 - frac_len;

        if shift < 0 {
            let drop = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
            let cut = digits.len().saturating_sub(drop);
            if !digits[cut..].bytes().all(|b| b == b'0') {
                return Err(MoneyParseError::TooPrecise {
                    input: t.to_string(),
                });
            }
            digits = &digits[..cut];
        }

        let mut total: i64 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| overflow())?
        };
        if shift > 0 && total != 0 {
            let scale = u32::try_from(shift)
                .ok()
                .and_then(|s| 10_i64.checked_pow(s))
                .ok_or_else(overflow)?;
            total = total.checked_mul(scale).ok_or_else(overflow)?;
        }
        Ok(Money(if negative { -total } else { total }))
    }
}

/// Digits with optional single `_` separators between them; `""` stays `""`.
fn strip_digit_separators(s: &str) -> Option<String> {
    if s.is_empty() {
        return Some(String::new());
    }
    if s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return None;
    }
    if !s.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }
    Some(s.replace('_', ""))
}

/// Signed exponent digits. Out-of-range exponents saturate so that huge
/// values still report as overflow or excess precision, not as malformed.
fn parse_exponent(s: &str) -> Option<i32> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if body.is_empty() {
        return None;
    }
    let digits = strip_digit_separators(body)?;
    let value = match digits.parse::<i32>() {
        Ok(v) => v,
        Err(_) => i32::MAX,
    };
    Some(if negative { -value } else { value })
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Why a typed amount could not be read as [`Money`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Nothing but whitespace.
    Empty,
    /// Not a finite decimal number.
    Malformed { input: String },
    /// Finer than one centavo.
    TooPrecise { input: String },
    /// Does not fit in `i64` centavos.
    Overflow { input: String },
}

impl std::fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "amount is empty"),
            Self::Malformed { input } => write!(f, "amount '{input}' is not a number"),
            Self::TooPrecise { input } => {
                write!(f, "amount '{input}' is finer than one centavo")
            }
            Self::Overflow { input } => write!(f, "amount '{input}' is out of range"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

// ---------------------------------------------------------------------------
// Arithmetic operators (closed over Money)
// ---------------------------------------------------------------------------

impl Add for Money {
    type Output = Money;
    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    #[inline]
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = CENTAVOS_PER_PESO.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pesos_scales_by_hundred() {
        assert_eq!(Money::from_pesos(40).centavos(), 4_000);
    }

    #[test]
    fn zero_is_additive_identity() {
        let a = Money::from_pesos(85);
        assert_eq!(a + Money::ZERO, a);
        assert_eq!(a - Money::ZERO, a);
    }

    #[test]
    fn display_always_two_decimals() {
        assert_eq!(Money::from_pesos(40).to_string(), "40.00");
        assert_eq!(Money::from_centavos(1_005).to_string(), "10.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn display_negative_below_one_peso_keeps_sign() {
        assert_eq!(Money::from_centavos(-50).to_string(), "-0.50");
    }

    #[test]
    fn display_min_does_not_overflow() {
        let s = Money::from_centavos(i64::MIN).to_string();
        assert!(s.starts_with('-'));
    }

    #[test]
    fn compact_string_drops_zero_centavos() {
        assert_eq!(Money::from_pesos(100).to_compact_string(), "100");
        assert_eq!(Money::from_centavos(8_550).to_compact_string(), "85.50");
    }

    #[test]
    fn parse_plain_integer() {
        assert_eq!(Money::parse("50"), Ok(Money::from_pesos(50)));
    }

    #[test]
    fn parse_two_decimals() {
        assert_eq!(Money::parse("50.00"), Ok(Money::from_pesos(50)));
        assert_eq!(Money::parse("12.34"), Ok(Money::from_centavos(1_234)));
    }

    #[test]
    fn parse_one_decimal_is_tenths() {
        assert_eq!(Money::parse("50.5"), Ok(Money::from_centavos(5_050)));
    }

    #[test]
    fn parse_leading_dot_and_trailing_dot() {
        assert_eq!(Money::parse(".75"), Ok(Money::from_centavos(75)));
        assert_eq!(Money::parse("50."), Ok(Money::from_pesos(50)));
    }

    #[test]
    fn parse_trims_whitespace_and_accepts_sign() {
        assert_eq!(Money::parse("  +20 "), Ok(Money::from_pesos(20)));
        assert_eq!(Money::parse("-5"), Ok(Money::from_pesos(-5)));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        for bad in [
            "abc", "inf", "NaN", "1,000", ".", "-", "--5", "5.5.5", "₱50", "e3", "1e", "1e+",
            "1__000", "_1", "1_", "1_.5", "1.5_", "1e3.5",
        ] {
            assert!(
                matches!(Money::parse(bad), Err(MoneyParseError::Malformed { .. })),
                "expected Malformed for {bad:?}"
            );
        }
    }

    #[test]
    fn parse_exponent_forms() {
        assert_eq!(Money::parse("1e3"), Ok(Money::from_pesos(1_000)));
        assert_eq!(Money::parse("2.5E1"), Ok(Money::from_pesos(25)));
        assert_eq!(Money::parse("1.5e-1"), Ok(Money::from_centavos(15)));
        assert_eq!(Money::parse("5e+1"), Ok(Money::from_pesos(50)));
        assert_eq!(Money::parse("0e99999999999"), Ok(Money::ZERO));
    }

    #[test]
    fn parse_digit_separators() {
        assert_eq!(Money::parse("1_000"), Ok(Money::from_pesos(1_000)));
        assert_eq!(Money::parse("1_000.2_5"), Ok(Money::from_centavos(100_025)));
    }

    #[test]
    fn parse_trailing_zeros_past_centavos() {
        assert_eq!(Money::parse("50.100"), Ok(Money::from_centavos(5_010)));
        assert_eq!(Money::parse("0.000"), Ok(Money::ZERO));
    }

    #[test]
    fn parse_rejects_sub_centavo_values() {
        for bad in ["1.005", "50.125", "1e-3", "1e-99999999999"] {
            assert_eq!(
                Money::parse(bad),
                Err(MoneyParseError::TooPrecise {
                    input: bad.to_string()
                }),
                "{bad}"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::Overflow { .. })
        ));
        assert!(matches!(
            Money::parse("92233720368547759"),
            Err(MoneyParseError::Overflow { .. })
        ));
        assert!(matches!(
            Money::parse("1e17"),
            Err(MoneyParseError::Overflow { .. })
        ));
        assert!(matches!(
            Money::parse("1e99999999999"),
            Err(MoneyParseError::Overflow { .. })
        ));
    }

    #[test]
    fn checked_sub_detects_overflow() {
        assert_eq!(
            Money::from_centavos(i64::MIN).checked_sub(Money::from_centavos(1)),
            None
        );
        assert_eq!(
            Money::from_pesos(50).checked_sub(Money::from_pesos(40)),
            Some(Money::from_pesos(10))
        );
    }

    #[test]
    fn saturating_add_clamps() {
        let max = Money::from_centavos(i64::MAX);
        assert_eq!(max.saturating_add(Money::from_centavos(1)), max);
    }

    #[test]
    fn sign_predicates() {
        assert!(Money::from_centavos(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::from_centavos(-1).is_negative());
    }

    #[test]
    fn add_and_sub_assign() {
        let mut acc = Money::from_pesos(10);
        acc += Money::from_pesos(5);
        acc -= Money::from_centavos(50);
        assert_eq!(acc, Money::from_centavos(1_450));
    }
}
