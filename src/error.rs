use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "Usage: topsis <InputDataFile> <Weights> <Impacts> <ResultFileName>";

#[derive(Debug, Error)]
pub enum TopsisError {
    #[error("Expected exactly 4 arguments.\n{}", USAGE)]
    WrongArgumentCount,

    #[error("The file '{}' was not found.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read '{}': {reason}", .path.display())]
    InputUnreadable { path: PathBuf, reason: String },

    #[error("The input file must have at least 3 columns, found {found}.")]
    TooFewColumns { found: usize },

    #[error("The input file has no rows to rank.")]
    NoAlternatives,

    #[error(
        "Columns from the 2nd to the last must contain numeric values only: \
         column '{column}' has {value:?} in row {row}."
    )]
    NonNumericCriterion {
        column: String,
        row: usize,
        value: String,
    },

    #[error(
        "The number of weights ({weights}), impacts ({impacts}) and criterion columns \
         ({criteria}) must be the same."
    )]
    CountMismatch {
        weights: usize,
        impacts: usize,
        criteria: usize,
    },

    #[error("Weights must be positive numbers separated by commas: weight {position} is {token:?}.")]
    InvalidWeight { position: usize, token: String },

    #[error("Impacts must be either '+' or '-' separated by commas: impact {position} is {token:?}.")]
    InvalidImpact { position: usize, token: String },

    #[error("Failed to save result file '{}': {source}", .path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TopsisError>;
