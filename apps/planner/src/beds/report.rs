use serde::Serialize;

use crate::beds::candidates::BlockCandidate;
use crate::beds::geometry::BedDimensions;
use crate::beds::policy::PlanningPolicy;
use crate::beds::selector::{OptimizationResult, WASTE_THRESHOLD};
use crate::errors::PlanError;

/// Discards with this many blocks or fewer are not worth showing.
pub const DISPLAY_MIN_BLOCK_COUNT: u64 = 5;

/// Read-only view of one bed's optimization, handed to whatever displays it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub bed_name: String,
    pub dimensions: BedDimensions,
    pub policy: PlanningPolicy,
    #[serde(flatten)]
    pub result: OptimizationResult,
}

impl OptimizationReport {
    pub fn new(
        bed_name: impl Into<String>,
        dimensions: BedDimensions,
        policy: PlanningPolicy,
        result: OptimizationResult,
    ) -> Self {
        Self {
            bed_name: bed_name.into(),
            dimensions,
            policy,
            result,
        }
    }

    /// The chosen block, or `NoCandidates` when the selector found none.
    pub fn chosen_block(&self) -> Result<&BlockCandidate, PlanError> {
        self.result
            .chosen_block
            .as_ref()
            .ok_or_else(|| PlanError::NoCandidates {
                bed: self.bed_name.clone(),
            })
    }

    pub fn alternate_block(&self) -> Option<&BlockCandidate> {
        self.result.alternate_block.as_ref()
    }

    /// Discards worth mentioning: more than 5 blocks and at most 0.20 waste, in discard order.
    pub fn displayable_discards(&self) -> impl Iterator<Item = &BlockCandidate> + '_ {
        self.result.discarded_blocks.iter().filter(|d| {
            d.block_count > DISPLAY_MIN_BLOCK_COUNT && d.partial_remainder <= WASTE_THRESHOLD
        })
    }
}
