//! Block Selector — picks one candidate out of the generated sequence.
//!
//! Algorithm:
//! 1. Primary scan in generation order. A strictly greater `block_count`
//!    replaces the running winner, so the first of equal counts wins. The
//!    closeness heuristic only looks at even counts; odd candidates are skipped
//!    and never show up as discards.
//! 2. At most one refinement swap against the discards, in discard order:
//!    - closeness swap: only when the winner wastes more than 0.20; takes the
//!      first discard within 17.5 % of the winner's count that wastes less than 0.20
//!    - minimal-waste swap: takes the first discard that wastes strictly less
//! 3. After a swap the primary winner becomes the alternate and goes back into
//!    the discards at its generation position.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::beds::candidates::BlockCandidate;
use crate::beds::policy::SelectionHeuristic;

/// Above this remainder a winner counts as wasteful.
pub const WASTE_THRESHOLD: f64 = 0.20;
/// Relative count distance, in percent, a closeness swap may accept.
pub const CLOSENESS_PERCENT: f64 = 17.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub chosen_block: Option<BlockCandidate>,
    /// Primary winner, present only when refinement swapped it out.
    pub alternate_block: Option<BlockCandidate>,
    pub discarded_blocks: Vec<BlockCandidate>,
}

/// Indices into the candidate slice produced by the primary scan.
struct PrimarySelection {
    winner: Option<usize>,
    considered: Vec<usize>,
}

pub fn select_block(
    candidates: &[BlockCandidate],
    heuristic: SelectionHeuristic,
) -> OptimizationResult {
    let primary = primary_selection(candidates, heuristic);

    let Some(winner) = primary.winner else {
        return OptimizationResult {
            chosen_block: None,
            alternate_block: None,
            discarded_blocks: Vec::new(),
        };
    };

    let discarded: Vec<usize> = primary
        .considered
        .iter()
        .copied()
        .filter(|&i| i != winner)
        .collect();

    let swap = refine(&candidates[winner], &discarded, candidates, heuristic);

    let (chosen, alternate) = match swap {
        Some(replacement) => {
            debug!(
                from = candidates[winner].block_length,
                to = candidates[replacement].block_length,
                %heuristic,
                "Refinement swapped the primary winner"
            );
            (replacement, Some(winner))
        }
        None => (winner, None),
    };

    OptimizationResult {
        chosen_block: Some(candidates[chosen]),
        alternate_block: alternate.map(|i| candidates[i]),
        discarded_blocks: primary
            .considered
            .iter()
            .filter(|&&i| i != chosen)
            .map(|&i| candidates[i])
            .collect(),
    }
}

fn primary_selection(
    candidates: &[BlockCandidate],
    heuristic: SelectionHeuristic,
) -> PrimarySelection {
    let mut winner: Option<usize> = None;
    let mut considered = Vec::with_capacity(candidates.len());

    for (i, candidate) in candidates.iter().enumerate() {
        if !heuristic.admits(candidate.block_count) {
            continue;
        }
        considered.push(i);

        match winner {
            Some(w) if candidate.block_count <= candidates[w].block_count => {}
            _ => winner = Some(i),
        }
    }

    PrimarySelection { winner, considered }
}

/// Returns the candidate index that should replace the winner, if any.
fn refine(
    winner: &BlockCandidate,
    discarded: &[usize],
    candidates: &[BlockCandidate],
    heuristic: SelectionHeuristic,
) -> Option<usize> {
    match heuristic {
        SelectionHeuristic::GreatestEvenWithClosenessSwap => {
            if winner.partial_remainder <= WASTE_THRESHOLD || winner.block_count == 0 {
                return None;
            }
            discarded.iter().copied().find(|&i| {
                let d = &candidates[i];
                relative_difference_percent(d.block_count, winner.block_count) < CLOSENESS_PERCENT
                    && d.partial_remainder < WASTE_THRESHOLD
            })
        }
        SelectionHeuristic::GreatestWithMinimalWasteSwap => discarded
            .iter()
            .copied()
            .find(|&i| candidates[i].partial_remainder < winner.partial_remainder),
    }
}

/// `|count - reference| / reference * 100`. `reference` must be non-zero.
fn relative_difference_percent(count: u64, reference: u64) -> f64 {
    count.abs_diff(reference) as f64 / reference as f64 * 100.0
}
