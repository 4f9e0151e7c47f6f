//! Typed ticketing settings read from the merged config document.
//!
//! ```yaml
//! currency:
//!   symbol: "₱"
//! fares:
//!   - destination: Candelaria
//!     fare: 100
//! receipt:
//!   title: "BUS TICKET RECEIPT"
//!   footer: "Thank you for choosing our service!"
//! ```
//!
//! Every section is optional. A `fares` list replaces the built-in table as
//! a whole.

use anyhow::{Context, Result};
use bt_ledger::{FareTable, Money, ReceiptStyle};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    currency: RawCurrency,
    #[serde(default)]
    fares: Option<Vec<RawFare>>,
    #[serde(default)]
    receipt: RawReceipt,
}

#[derive(Debug, Default, Deserialize)]
struct RawCurrency {
    symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawReceipt {
    title: Option<String>,
    footer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFare {
    destination: String,
    fare: FareValue,
}

/// Fares may be written as YAML numbers or quoted strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FareValue {
    Number(serde_json::Number),
    Text(String),
}

impl FareValue {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Fare table plus receipt wording for one counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketingConfig {
    pub fares: FareTable,
    pub receipt: ReceiptStyle,
}

impl Default for TicketingConfig {
    fn default() -> Self {
        Self {
            fares: FareTable::builtin(),
            receipt: ReceiptStyle::default(),
        }
    }
}

impl TicketingConfig {
    /// Build from canonical config JSON (produced by the layered loader).
    ///
    /// Missing sections fall back to the built-in defaults.
    pub fn from_config_json(cfg: &Value) -> Result<Self> {
        let raw: RawConfig = if cfg.is_null() {
            RawConfig::default()
        } else {
            serde_json::from_value(cfg.clone()).context("config has an unexpected shape")?
        };

        let fares = match raw.fares {
            None => FareTable::builtin(),
            Some(list) => {
                let mut entries: Vec<(String, Money)> = Vec::with_capacity(list.len());
                for (i, f) in list.iter().enumerate() {
                    let text = f.fare.as_text();
                    let fare = Money::parse(&text).with_context(|| {
                        format!("fares[{i}] ({}): invalid fare '{text}'", f.destination)
                    })?;
                    entries.push((f.destination.clone(), fare));
                }
                FareTable::new(entries).context("invalid fares table")?
            }
        };

        let defaults = ReceiptStyle::default();
        let receipt = ReceiptStyle {
            currency_symbol: raw.currency.symbol.unwrap_or(defaults.currency_symbol),
            title: raw.receipt.title.unwrap_or(defaults.title),
            footer: raw.receipt.footer.unwrap_or(defaults.footer),
        };

        Ok(Self { fares, receipt })
    }
}
