use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, iter::Sum, str::FromStr};

/// Effort/size of a card. Always finite and non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Estimate(f64);

impl Estimate {
    pub const ZERO: Estimate = Estimate(0.0);

    /// Creates an estimate, rejecting negative, NaN and infinite values
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            // Normalize -0.0 so it prints and compares like 0
            Ok(Self(value.abs()))
        } else {
            Err(BoardError::InvalidEstimate(value.to_string()))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Adds two estimates, returning `None` if the total is not finite
    pub fn checked_add(self, other: Estimate) -> Option<Estimate> {
        let total = self.0 + other.0;
        total.is_finite().then_some(Self(total))
    }
}

impl TryFrom<f64> for Estimate {
    type Error = BoardError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Estimate> for f64 {
    fn from(estimate: Estimate) -> Self {
        estimate.0
    }
}

impl FromStr for Estimate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| BoardError::InvalidEstimate(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Totals saturate at `f64::MAX`
impl Sum for Estimate {
    fn sum<I: Iterator<Item = Estimate>>(iter: I) -> Self {
        Self(iter.fold(0.0, |total, e| total + e.0).min(f64::MAX))
    }
}

impl<'a> Sum<&'a Estimate> for Estimate {
    fn sum<I: Iterator<Item = &'a Estimate>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A named unit of work. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    name: String,
    estimate: Estimate,
}

#[derive(Deserialize)]
struct RawCard {
    name: String,
    estimate: Estimate,
}

impl TryFrom<RawCard> for Card {
    type Error = BoardError;

    fn try_from(raw: RawCard) -> Result<Self> {
        Card::new(raw.name, raw.estimate)
    }
}

impl Card {
    /// Creates a card. The name must contain something besides whitespace.
    pub fn new(name: impl Into<String>, estimate: Estimate) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BoardError::InvalidCardName);
        }
        Ok(Self { name, estimate })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn estimate(&self) -> Estimate {
        self.estimate
    }
}
