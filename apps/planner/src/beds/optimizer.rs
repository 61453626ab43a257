//! Optimizer — glues generation, selection and reporting for one bed at a time.
//!
//! Pure and synchronous. Each call builds its own candidate and discard lists,
//! so repeated runs never see state from an earlier one.

use tracing::{debug, info};

use crate::beds::candidates::generate_candidates;
use crate::beds::geometry::GardenBed;
use crate::beds::policy::PlanningPolicy;
use crate::beds::report::OptimizationReport;
use crate::beds::selector::select_block;

pub fn run_optimization(bed: &GardenBed, policy: &PlanningPolicy) -> OptimizationReport {
    info!(
        bed = %bed.name,
        length_in = bed.dimensions.length(),
        width_in = bed.dimensions.width(),
        "Optimizing garden bed"
    );

    let candidates = generate_candidates(&bed.dimensions, policy);
    debug!(
        bed = %bed.name,
        candidates = candidates.len(),
        formula = %policy.count_formula,
        "Generated block candidates"
    );

    let result = select_block(&candidates, policy.heuristic);
    let report = OptimizationReport::new(bed.name.clone(), bed.dimensions, *policy, result);

    log_report(&report);
    report
}

/// Optimizes every bed independently, in input order.
pub fn optimize_plan(beds: &[GardenBed], policy: &PlanningPolicy) -> Vec<OptimizationReport> {
    beds.iter().map(|bed| run_optimization(bed, policy)).collect()
}

fn log_report(report: &OptimizationReport) {
    let Ok(block) = report.chosen_block() else {
        info!(bed = %report.bed_name, "No block size fits this bed");
        return;
    };

    info!(
        bed = %report.bed_name,
        blocks = block.block_count,
        "Optimized for {} x {} inch blocks with partial {}",
        block.block_length,
        block.block_width,
        block.partial_remainder
    );

    if let Some(alt) = report.alternate_block() {
        info!(
            bed = %report.bed_name,
            blocks = alt.block_count,
            "Alternate (original) block size {} x {} inches with partial {}",
            alt.block_length,
            alt.block_width,
            alt.partial_remainder
        );
    }

    for discarded in report.displayable_discards() {
        info!(
            bed = %report.bed_name,
            blocks = discarded.block_count,
            "Discarded {} x {} inches with {} of a square on the end",
            discarded.block_length,
            discarded.block_width,
            discarded.partial_remainder
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beds::geometry::construct_bed;
    use crate::beds::policy::{CountFormula, SelectionHeuristic};

    fn closeness_policy() -> PlanningPolicy {
        PlanningPolicy::new(
            CountFormula::SumOfSquares,
            SelectionHeuristic::GreatestEvenWithClosenessSwap,
            8,
        )
        .unwrap()
    }

    fn minimal_waste_policy() -> PlanningPolicy {
        PlanningPolicy::new(
            CountFormula::FloorDivision,
            SelectionHeuristic::GreatestWithMinimalWasteSwap,
            10,
        )
        .unwrap()
    }

    #[test]
    fn test_alpha_bed_closeness_swap() {
        let bed = construct_bed("alpha", 108.0, 34.0).unwrap();
        let report = run_optimization(&bed, &closeness_policy());

        let chosen = report.chosen_block().unwrap();
        assert_eq!((chosen.block_length, chosen.block_count), (12, 26));
        assert_eq!(chosen.partial_remainder, 0.0);

        let alt = report.alternate_block().unwrap();
        assert_eq!((alt.block_length, alt.block_count), (11, 28));
        assert_eq!(report.result.discarded_blocks.len(), 57);
    }

    #[test]
    fn test_bravo_bed_closeness_finds_no_swap() {
        let bed = construct_bed("bravo", 89.5, 36.0).unwrap();
        let report = run_optimization(&bed, &closeness_policy());

        let chosen = report.chosen_block().unwrap();
        assert_eq!((chosen.block_length, chosen.block_count), (8, 32));
        assert_eq!(chosen.partial_remainder, 0.5625);
        assert!(report.alternate_block().is_none());
    }

    #[test]
    fn test_alpha_bed_minimal_waste_swap() {
        let bed = construct_bed("alpha", 108.0, 34.0).unwrap();
        let report = run_optimization(&bed, &minimal_waste_policy());

        let chosen = report.chosen_block().unwrap();
        assert_eq!((chosen.block_length, chosen.block_count), (12, 9));
        let alt = report.alternate_block().unwrap();
        assert_eq!((alt.block_length, alt.block_count), (10, 10));
        assert_eq!(alt.partial_remainder, 8.0);
        // Every candidate except the chosen one.
        assert_eq!(report.result.discarded_blocks.len(), 97);
    }

    #[test]
    fn test_primary_winner_has_greatest_count() {
        let bed = construct_bed("charlie", 92.5, 40.0).unwrap();
        let policy = minimal_waste_policy();
        let candidates = generate_candidates(&bed.dimensions, &policy);
        let report = run_optimization(&bed, &policy);

        let winner = report
            .alternate_block()
            .or(report.result.chosen_block.as_ref())
            .unwrap();
        assert!(candidates.iter().all(|c| winner.block_count >= c.block_count));
    }

    #[test]
    fn test_discards_are_generation_order_minus_chosen() {
        for policy in [closeness_policy(), minimal_waste_policy()] {
            let bed = construct_bed("charlie", 92.5, 40.0).unwrap();
            let report = run_optimization(&bed, &policy);
            let chosen = *report.chosen_block().unwrap();

            let expected: Vec<_> = generate_candidates(&bed.dimensions, &policy)
                .into_iter()
                .filter(|c| policy.heuristic.admits(c.block_count))
                .filter(|c| *c != chosen)
                .collect();
            assert_eq!(report.result.discarded_blocks, expected);
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let bed = construct_bed("bravo", 89.5, 36.0).unwrap();
        let policy = closeness_policy();
        assert_eq!(
            run_optimization(&bed, &policy),
            run_optimization(&bed, &policy)
        );
    }

    #[test]
    fn test_short_bed_has_no_choice_and_no_discards() {
        let bed = construct_bed("stub", 10.0, 34.0).unwrap();
        let report = run_optimization(&bed, &minimal_waste_policy());
        assert!(report.chosen_block().is_err());
        assert!(report.result.discarded_blocks.is_empty());
    }

    #[test]
    fn test_plan_keeps_bed_order() {
        let beds = vec![
            construct_bed("alpha", 108.0, 34.0).unwrap(),
            construct_bed("bravo", 89.5, 36.0).unwrap(),
            construct_bed("charlie", 92.5, 40.0).unwrap(),
        ];
        let reports = optimize_plan(&beds, &closeness_policy());
        let names: Vec<&str> = reports.iter().map(|r| r.bed_name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);

        let charlie = reports[2].chosen_block().unwrap();
        assert_eq!((charlie.block_length, charlie.block_count), (12, 22));
        assert_eq!(charlie.partial_remainder, 0.125);
    }
}
