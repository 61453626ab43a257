//! Candidate Generator — one tiling candidate per integer block length.
//!
//! Block lengths run from the policy's `min_block_length` up to, but not
//! including, `ceil(bed length)`. Blocks are laid out in two rows, so every
//! candidate shares `block_width = floor(width / 2)`.
//!
//! The output order (ascending block length) is load-bearing: the selector
//! breaks ties and orders discards by it.

use serde::{Deserialize, Serialize};

use crate::beds::geometry::BedDimensions;
use crate::beds::policy::{CountFormula, PlanningPolicy};

pub const ROW_COUNT: u32 = 2;

/// One way of tiling a bed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockCandidate {
    pub block_length: u32,
    pub block_width: u32,
    pub block_count: u64,
    /// Waste metric. Fractional block count for `SumOfSquares`, inches for `FloorDivision`.
    pub partial_remainder: f64,
}

#[cfg(test)]
impl BlockCandidate {
    /// Candidate on a 34-inch bed (block width 17) for selector and report tests.
    pub(crate) fn sample(block_length: u32, block_count: u64, partial_remainder: f64) -> Self {
        Self {
            block_length,
            block_width: 17,
            block_count,
            partial_remainder,
        }
    }
}

/// Generates the ascending candidate sequence for a bed.
///
/// An empty range (`ceil(length) <= min_block_length`) or a bed narrower than
/// two inches (block width 0) yields an empty sequence.
pub fn generate_candidates(
    dimensions: &BedDimensions,
    policy: &PlanningPolicy,
) -> Vec<BlockCandidate> {
    let upper = dimensions.length().ceil() as u32;
    let block_width = (dimensions.width() / ROW_COUNT as f64).floor() as u32;

    if block_width == 0 {
        return Vec::new();
    }

    (policy.min_block_length..upper)
        .map(|block_length| {
            let (block_count, partial_remainder) =
                count_blocks(policy.count_formula, dimensions, block_length, block_width);
            BlockCandidate {
                block_length,
                block_width,
                block_count,
                partial_remainder,
            }
        })
        .collect()
}

/// Returns `(block_count, partial_remainder)` for one block size.
pub fn count_blocks(
    formula: CountFormula,
    dimensions: &BedDimensions,
    block_length: u32,
    block_width: u32,
) -> (u64, f64) {
    match formula {
        CountFormula::SumOfSquares => {
            sum_of_squares(dimensions, block_length as f64, block_width as f64)
        }
        CountFormula::FloorDivision => {
            let length = dimensions.length();
            let block_length = block_length as f64;
            ((length / block_length).floor() as u64, length % block_length)
        }
    }
}

/// Squares of every size in an `m x n` grid: `m(m+1)(2m+1)/6 + (n-m)m(m+1)/2`
/// with `m <= n`, where `m` and `n` are the bed measured in blocks.
fn sum_of_squares(dimensions: &BedDimensions, block_length: f64, block_width: f64) -> (u64, f64) {
    let mut m = dimensions.length() / block_length;
    let mut n = dimensions.width() / block_width;
    if n < m {
        std::mem::swap(&mut m, &mut n);
    }

    let squares = m * (m + 1.0) * (2.0 * m + 1.0) / 6.0 + (n - m) * m * (m + 1.0) / 2.0;

    (squares.trunc() as u64, squares % 1.0)
}
