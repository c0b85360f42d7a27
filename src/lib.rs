//! Merit-order production-plan service for a power plant fleet.

/// HTTP boundary: routing, payload validation, and handlers.
pub mod api;
pub mod config;
/// Pure dispatch core: cost model, merit order, allocation, assembly.
pub mod dispatch;
