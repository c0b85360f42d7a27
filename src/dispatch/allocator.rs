//! Greedy single-pass allocation along the merit order.
//!
//! One forward pass over the cost-ranked plants, drawing from the remaining
//! load. The only non-local interaction is the minimum-stable-generation
//! repair: when a thermal plant must be started above the remaining need, the
//! previously committed entry is corrected downward to compensate. The pass
//! holds that previous entry in a dedicated slot, so the repair is a local
//! two-slot operation rather than an indexed mutation of the output.

use crate::dispatch::round_to_tenth;
use crate::dispatch::types::{Allocation, FuelCosts, PlantType, PowerPlant};

/// Allocation pass state.
///
/// `Satisfied` is terminal: once entered, every later plant is zero-filled
/// and no further capacity is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Load not yet met; `remaining` MW still to cover.
    Drawing { remaining: f64 },
    /// Load met (or force-closed by a pmin repair).
    Satisfied,
}

/// Outcome of visiting one plant.
struct Step {
    /// Power assigned to the visited plant.
    p: f64,
    /// Correction for the previously committed entry, if the visited plant
    /// was forced to its minimum stable output.
    repair_prev_to: Option<f64>,
    /// Pass state after this plant.
    next: Phase,
}

/// Dispatches the merit-ordered plants against `load`.
///
/// Returns one entry per visited plant, in merit order. Plants reached after
/// the load is satisfied are recorded with `p = 0`, so the output covers the
/// whole input sequence.
pub fn allocate(load: f64, fuels: &FuelCosts, merit: &[&PowerPlant]) -> Vec<Allocation> {
    let mut committed: Vec<Allocation> = Vec::with_capacity(merit.len());
    let mut last: Option<Allocation> = None;
    let mut phase = Phase::Drawing { remaining: load };

    for &plant in merit {
        let step = visit(plant, fuels, load, phase);
        if let (Some(prev), Some(corrected)) = (last.as_mut(), step.repair_prev_to) {
            prev.p = corrected;
        }
        if let Some(prev) = last.take() {
            committed.push(prev);
        }
        last = Some(Allocation::new(plant.name.clone(), step.p));
        phase = step.next;
    }
    if let Some(prev) = last {
        committed.push(prev);
    }

    committed
}

/// Decides one plant's allocation given the current pass state.
///
/// Exhaustive on [`PlantType`]: wind is must-run up to its availability with
/// no minimum constraint, thermal kinds commit their `pmin` floor before
/// taking more, and `Other` is never dispatched (its remainder stays
/// stranded).
fn visit(plant: &PowerPlant, fuels: &FuelCosts, load: f64, phase: Phase) -> Step {
    let remaining = match phase {
        Phase::Satisfied => {
            return Step {
                p: 0.0,
                repair_prev_to: None,
                next: Phase::Satisfied,
            };
        }
        Phase::Drawing { remaining } if remaining <= 0.0 => {
            return Step {
                p: 0.0,
                repair_prev_to: None,
                next: Phase::Satisfied,
            };
        }
        Phase::Drawing { remaining } => remaining,
    };

    match plant.kind {
        PlantType::WindTurbine => {
            let available = plant.pmax * (fuels.wind_pct / 100.0);
            let drawn = available.min(remaining);
            // Emit the rounded figure but draw down by the exact amount.
            Step {
                p: round_to_tenth(drawn),
                repair_prev_to: None,
                next: Phase::Drawing {
                    remaining: remaining - drawn,
                },
            }
        }
        PlantType::GasFired | PlantType::Turbojet => {
            if remaining < plant.pmin {
                // The plant cannot run below pmin, so it over-produces; the
                // previous entry absorbs the excess. With no previous entry
                // the total overshoots the load, an accepted approximation.
                Step {
                    p: plant.pmin,
                    repair_prev_to: Some((load - plant.pmin).max(0.0)),
                    next: Phase::Satisfied,
                }
            } else {
                let p = plant.pmin + (plant.pmax - plant.pmin).min(remaining - plant.pmin);
                Step {
                    p,
                    repair_prev_to: None,
                    next: Phase::Drawing {
                        remaining: remaining - p,
                    },
                }
            }
        }
        PlantType::Other => Step {
            p: 0.0,
            repair_prev_to: None,
            next: Phase::Drawing { remaining },
        },
    }
}
