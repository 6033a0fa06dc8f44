use thiserror::Error;

use crate::GameError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Please enter {expected} valid numbers on each line (row {row} has {found}).")]
    MissingEntries {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Please enter valid numbers: '{token}' at row {row}, column {column} is not a number.")]
    MalformedInput {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("Expected {expected} rows in the payoff matrix, found {found}.")]
    MissingRows { expected: usize, found: usize },

    #[error("Cannot read file: {1}")]
    InvalidPath(#[source] std::io::Error, String),

    #[error("Cannot read payoff matrix.")]
    ReadError(#[from] std::io::Error),

    #[error("Cannot parse CSV payoff matrix.")]
    CsvError(#[from] csv::Error),

    #[error("Cannot parse solver configuration.")]
    ParseConfigJsonError(#[source] serde_json::Error),

    #[error("Cannot serialize solution.")]
    WriteJsonError(#[source] serde_json::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}
