use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Payoff matrix must have at least one row and one column (got {rows}x{cols}).")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Row {row} has {found} payoffs, expected {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Payoff at row {row}, column {col} is not a finite number.")]
    NonFinitePayoff { row: usize, col: usize },

    #[error("No pivot row with a positive entry in column {column}.")]
    UnboundedPivot { column: usize },

    #[error("Simplex did not reach an optimal tableau after {pivots} pivots.")]
    NonConvergence { pivots: usize },

    #[error("Terminal objective value is zero, strategies are undefined.")]
    DegenerateSolution,
}
