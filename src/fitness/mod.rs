//! Pluggable hand fitness.
//!
//! [`HandFitness`] is the seam between the evolution engine and the card
//! game being optimized. [`BridgeFitness`] scores contract-bridge hands.

mod bridge;
mod types;

pub use bridge::{is_broken, BridgeBreakdown, BridgeFitness, BRIDGE_MAX_SCORE};
pub use types::HandFitness;
