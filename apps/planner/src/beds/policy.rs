//! Planning policy — which count formula and which selection heuristic a run uses.
//!
//! Both axes have two incompatible variants in use. Callers (or the deployment
//! config) must name one of each; there is no default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// How many blocks a candidate yields and how much is left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountFormula {
    /// Closed-form sum-of-squares count of an L-shaped packing; remainder is its fractional part.
    SumOfSquares,
    /// `floor(length / block_length)`; remainder is `length mod block_length` in inches.
    FloorDivision,
}

/// Primary scan filter plus refinement swap, paired as they are deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionHeuristic {
    /// Greatest even count, then a closeness-gated swap when the winner wastes too much.
    #[serde(rename = "closeness-swap")]
    GreatestEvenWithClosenessSwap,
    /// Greatest count, then an unconditional swap to the first lower-waste discard.
    #[serde(rename = "minimal-waste-swap")]
    GreatestWithMinimalWasteSwap,
}

impl SelectionHeuristic {
    /// Whether the primary scan looks at a candidate with this count at all.
    pub fn admits(&self, block_count: u64) -> bool {
        match self {
            SelectionHeuristic::GreatestEvenWithClosenessSwap => block_count % 2 == 0,
            SelectionHeuristic::GreatestWithMinimalWasteSwap => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningPolicy {
    pub count_formula: CountFormula,
    pub heuristic: SelectionHeuristic,
    /// Smallest block length tried, in inches.
    pub min_block_length: u32,
}

impl PlanningPolicy {
    pub fn new(
        count_formula: CountFormula,
        heuristic: SelectionHeuristic,
        min_block_length: u32,
    ) -> Result<Self, PlanError> {
        let policy = Self {
            count_formula,
            heuristic,
            min_block_length,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Block lengths must stay positive.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.min_block_length == 0 {
            return Err(PlanError::InvalidPolicy(
                "min_block_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for CountFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountFormula::SumOfSquares => f.write_str("sum-of-squares"),
            CountFormula::FloorDivision => f.write_str("floor-division"),
        }
    }
}

impl FromStr for CountFormula {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum-of-squares" => Ok(CountFormula::SumOfSquares),
            "floor-division" => Ok(CountFormula::FloorDivision),
            other => Err(PlanError::InvalidPolicy(format!(
                "unknown count formula '{other}' (expected sum-of-squares or floor-division)"
            ))),
        }
    }
}

impl fmt::Display for SelectionHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionHeuristic::GreatestEvenWithClosenessSwap => f.write_str("closeness-swap"),
            SelectionHeuristic::GreatestWithMinimalWasteSwap => f.write_str("minimal-waste-swap"),
        }
    }
}

impl FromStr for SelectionHeuristic {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "closeness-swap" => Ok(SelectionHeuristic::GreatestEvenWithClosenessSwap),
            "minimal-waste-swap" => Ok(SelectionHeuristic::GreatestWithMinimalWasteSwap),
            other => Err(PlanError::InvalidPolicy(format!(
                "unknown selection heuristic '{other}' (expected closeness-swap or minimal-waste-swap)"
            ))),
        }
    }
}
