//! Merit-order dispatch core.
//!
//! Pure, synchronous, and stateless: every call ranks the plants by marginal
//! cost, runs one greedy allocation pass, and completes the result so each
//! input plant appears exactly once. Concurrent callers need no coordination.

pub mod allocator;
pub mod assembler;
pub mod cost;
pub mod merit_order;
pub mod types;

pub use allocator::allocate;
pub use assembler::assemble;
pub use cost::marginal_cost;
pub use merit_order::merit_order;
pub use types::{Allocation, FuelCosts, PlantType, PowerPlant};

/// A completed production plan with its feasibility summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchPlan {
    /// One entry per input plant, merit order first, unreached plants last.
    pub allocations: Vec<Allocation>,
    /// Sum of all allocated power (MW).
    pub total_p: f64,
    /// Requested load left uncovered (MW), zero when the plan meets or
    /// exceeds the load. The algorithm never signals infeasibility itself;
    /// this is how callers find out.
    pub shortfall: f64,
}

/// Runs the full dispatch pipeline: cost ranking, greedy allocation, and
/// plan completion.
///
/// Inputs are expected pre-validated by the boundary (`load >= 0`, plant
/// invariants); the core itself does not check them.
pub fn build_plan(load: f64, fuels: &FuelCosts, plants: &[PowerPlant]) -> DispatchPlan {
    let ordered = merit_order(plants, fuels);
    let allocations = assemble(allocate(load, fuels, &ordered), plants);
    let total_p: f64 = allocations.iter().map(|a| a.p).sum();
    DispatchPlan {
        allocations,
        total_p,
        shortfall: (load - total_p).max(0.0),
    }
}

/// Rounds to one decimal place, the plan-wide output precision.
pub(crate) fn round_to_tenth(p: f64) -> f64 {
    (p * 10.0).round() / 10.0
}
