// Garden bed block planning
// Implements: bed geometry, candidate generation, block selection, reporting.
// Everything below handlers is synchronous and free of shared state.

pub mod candidates;
pub mod geometry;
pub mod handlers;
pub mod optimizer;
pub mod policy;
pub mod report;
pub mod selector;
