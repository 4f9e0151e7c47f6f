//! Destination fare table.
//!
//! A `FareTable` is built once at startup and never mutated. Lookups are by
//! exact destination name. Iteration follows insertion order, which is the
//! order destinations are offered to the passenger.

use crate::money::Money;

/// Fixed fares offered when no configuration overrides them (whole pesos).
pub const BUILTIN_FARES: &[(&str, i64)] = &[
    ("Candelaria", 100),
    ("San Juan", 85),
    ("Rosario", 70),
    ("Ibaan", 55),
    ("Balagtas", 40),
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a set of entries cannot form a fare table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FareTableError {
    /// No destinations at all.
    Empty,
    /// A destination name is empty or whitespace.
    EmptyName,
    /// The same destination name appears twice.
    DuplicateName { name: String },
    /// A fare is below zero.
    NegativeFare { name: String, fare: Money },
}

impl std::fmt::Display for FareTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "fare table must list at least one destination"),
            Self::EmptyName => write!(f, "fare table: destination name must not be empty"),
            Self::DuplicateName { name } => {
                write!(f, "fare table: destination '{name}' is listed twice")
            }
            Self::NegativeFare { name, fare } => {
                write!(f, "fare table: fare for '{name}' must be >= 0, got {fare}")
            }
        }
    }
}

impl std::error::Error for FareTableError {}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// One row of the fare table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    name: String,
    fare: Money,
}

impl Destination {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fare(&self) -> Money {
        self.fare
    }

    /// Button-style label, e.g. `Candelaria - ₱100`.
    pub fn menu_label(&self, currency_symbol: &str) -> String {
        format!(
            "{} - {}{}",
            self.name,
            currency_symbol,
            self.fare.to_compact_string()
        )
    }

    /// Two-line summary shown once a destination has been picked.
    pub fn selection_summary(&self, currency_symbol: &str) -> String {
        format!(
            "Selected: {}\nTicket Price: {}{}",
            self.name,
            currency_symbol,
            self.fare.to_compact_string()
        )
    }
}

// ---------------------------------------------------------------------------
// FareTable
// ---------------------------------------------------------------------------

/// Immutable destination → fare mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FareTable {
    entries: Vec<Destination>,
}

impl FareTable {
    /// Build a table from `(name, fare)` pairs in offer order.
    ///
    /// # Errors
    /// Returns [`FareTableError`] when the list is empty, a name is blank or
    /// repeated, or a fare is negative.
    pub fn new<I, S>(entries: I) -> Result<Self, FareTableError>
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let mut out: Vec<Destination> = Vec::new();
        for (name, fare) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(FareTableError::EmptyName);
            }
            if out.iter().any(|d| d.name == name) {
                return Err(FareTableError::DuplicateName { name });
            }
            if fare.is_negative() {
                return Err(FareTableError::NegativeFare { name, fare });
            }
            out.push(Destination { name, fare });
        }
        if out.is_empty() {
            return Err(FareTableError::Empty);
        }
        Ok(Self { entries: out })
    }

    /// The fixed table from [`BUILTIN_FARES`].
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FARES
                .iter()
                .map(|(name, pesos)| Destination {
                    name: (*name).to_string(),
                    fare: Money::from_pesos(*pesos),
                })
                .collect(),
        }
    }

    /// Fare for `destination`, if listed.
    pub fn fare(&self, destination: &str) -> Option<Money> {
        self.get(destination).map(Destination::fare)
    }

    pub fn get(&self, destination: &str) -> Option<&Destination> {
        self.entries.iter().find(|d| d.name == destination)
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.get(destination).is_some()
    }

    /// Destinations in offer order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Menu labels for every destination, in offer order.
    pub fn menu_labels(&self, currency_symbol: &str) -> Vec<String> {
        self.entries
            .iter()
            .map(|d| d.menu_label(currency_symbol))
            .collect()
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
