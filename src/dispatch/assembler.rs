//! Plan completion: one entry per input plant, single rounding policy.

use crate::dispatch::round_to_tenth;
use crate::dispatch::types::{Allocation, PowerPlant};

/// Completes the allocation pass output into a full production plan.
///
/// Guarantees exactly one entry per input plant name: entries from the pass
/// keep their merit order, and any plant the pass never reached is appended
/// with `p = 0`. Matching is exact on the name string. Every emitted value is
/// rounded to one decimal place here, the plan's single exit point.
pub fn assemble(mut allocations: Vec<Allocation>, plants: &[PowerPlant]) -> Vec<Allocation> {
    for plant in plants {
        if !allocations.iter().any(|a| a.name == plant.name) {
            allocations.push(Allocation::new(plant.name.clone(), 0.0));
        }
    }
    for entry in &mut allocations {
        entry.p = round_to_tenth(entry.p);
    }
    allocations
}
