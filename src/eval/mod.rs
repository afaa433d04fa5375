//! Position evaluation for the Quoridor AI
//!
//! Contains the tunable scoring weights and the heuristic evaluation
//! function used at search leaves.

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::EvalWeights;
