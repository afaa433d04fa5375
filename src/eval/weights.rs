//! Scoring weights for position evaluation
//!
//! These constants define the relative worth of the evaluation terms.
//! The path differential dominates by an order of magnitude: Quoridor is
//! a race, and everything else only tilts close calls.

/// Evaluation weights
pub struct EvalWeights;

impl EvalWeights {
    /// Score of a decided game, well above any heuristic sum
    pub const WIN: i32 = 100_000;

    /// Finite stand-in for an unreachable goal row, in path-length units.
    /// Keeps the arithmetic well-defined where an infinity would not be.
    /// Larger than any real path on the supported board sizes.
    pub const NO_PATH_SENTINEL: i32 = 100;

    /// Per step of shortest-path differential (the dominant term)
    pub const PATH_WEIGHT: i32 = 10;

    /// Per wall of remaining-wall differential
    pub const WALL_WEIGHT: i32 = 4;

    /// Per legal pawn move of mobility differential
    pub const MOBILITY_WEIGHT: i32 = 1;

    /// Per column of centrality differential
    pub const CENTER_WEIGHT: i32 = 1;

    // The evaluation must stay symmetric for the negamax search:
    // evaluate(state, p) == -evaluate(state, p.opponent()). Every term is a
    // mine-minus-theirs differential with a single shared weight.
}
