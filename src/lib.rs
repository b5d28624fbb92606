pub mod criteria;
pub mod error;
pub mod num;
pub mod rank;
pub mod score;
pub mod table;
pub mod validate;
#[cfg(test)]
mod test;

pub use crate::criteria::Criterion;
pub use crate::error::{Result, TopsisError, USAGE};
pub use crate::num::{Impact, Weight};
pub use crate::score::Evaluation;
pub use crate::table::{ResultTable, Table};
pub use crate::validate::{validate, validate_table, Problem};

#[derive(Clone, Copy, Debug, Default)]
pub struct ResultOptions {
    /// Write the weighted normalized matrix in place of the input's criterion cells.
    pub weighted_matrix: bool,
}

/// Score a validated problem and attach the evaluations to its table.
pub fn rank_alternatives(problem: Problem, options: ResultOptions) -> ResultTable {
    let scores = score::evaluate(&problem);
    let table = if options.weighted_matrix {
        problem.table.with_criteria(&scores.weighted)
    } else {
        problem.table
    };
    ResultTable {
        table,
        evaluations: scores.evaluations,
    }
}
