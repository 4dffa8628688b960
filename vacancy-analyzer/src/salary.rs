use serde::{Deserialize, Serialize};

use crate::types::{Error, Result};

/// Currency markers recognised inside a salary string.
/// Order matters: "руб." has to be stripped before "руб".
pub const CURRENCY_MARKERS: [&str; 16] = [
    "₽", "руб.", "руб", "RUR", "RUB", "USD", "EUR", "KZT", "BYR", "BYN", "UZS", "KGS", "AZN",
    "GEL", "$", "€",
];

/// Salary bounds parsed from the free-text salary of a vacancy.
/// All fields are `None` when the vacancy does not state a salary.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(min: u64, max: u64, currency: Option<String>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            currency,
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// Parses strings like `"100000-150000 RUR"`, `"₽ 90000"` or `"2000-3000USD"`.
    ///
    /// Currency markers are stripped from both ends of every part first, then every remaining
    /// part has to be a plain number. One number yields `min == max`, two numbers
    /// are taken positionally without checking their order.
    pub fn parse(raw: &str) -> Result<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Ok(Self::unknown());
        }
        let parts = compact.split('-').collect::<Vec<_>>();
        if parts.len() > 2 {
            return Err(Error::UnparseableSalary(raw.to_owned()));
        }

        let mut currency = None;
        let mut amounts = Vec::with_capacity(parts.len());
        for part in parts {
            let (amount, marker) = strip_currency(part);
            if currency.is_none() {
                currency = marker.map(str::to_owned);
            }
            let amount =
                parse_amount(amount).ok_or_else(|| Error::UnparseableSalary(raw.to_owned()))?;
            amounts.push(amount);
        }

        match amounts.as_slice() {
            [value] => Ok(Self::new(*value, *value, currency)),
            [min, max] => Ok(Self::new(*min, *max, currency)),
            _ => Err(Error::UnparseableSalary(raw.to_owned())),
        }
    }

    /// Closed-interval overlap. Unknown bounds never match.
    pub fn overlaps(&self, other: &SalaryRange) -> bool {
        match (self.min, self.max, other.min, other.max) {
            (Some(min), Some(max), Some(other_min), Some(other_max)) => {
                min <= other_max && other_min <= max
            }
            _ => false,
        }
    }
}

/// Strips markers leading or trailing the amount, never from its middle
fn strip_currency(part: &str) -> (&str, Option<&'static str>) {
    let mut amount = part;
    let mut found = None;
    loop {
        let stripped = CURRENCY_MARKERS.iter().find_map(|marker| {
            amount
                .strip_prefix(marker)
                .or_else(|| amount.strip_suffix(marker))
                .map(|rest| (rest, *marker))
        });
        match stripped {
            Some((rest, marker)) => {
                amount = rest;
                found.get_or_insert(marker);
            }
            None => return (amount, found),
        }
    }
}

fn parse_amount(amount: &str) -> Option<u64> {
    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    amount.parse().ok()
}
