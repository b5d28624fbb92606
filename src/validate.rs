use std::path::Path;

use tracing::{debug, info};

use crate::{
    criteria::Criterion,
    error::{Result, TopsisError},
    num::{parse_finite, Impact, Weight},
    table::Table,
};

/// A validated ranking problem: the verbatim input table, its criterion columns parsed into
/// column-major values, and one criterion per column.
#[derive(Clone, Debug)]
pub struct Problem {
    pub table: Table,
    pub columns: Vec<Vec<f64>>,
    pub criteria: Vec<Criterion>,
}

impl Problem {
    pub fn alternatives(&self) -> usize {
        self.table.records.len()
    }
}

/// Read the table at `input` and check it against the weight and impact lists. Checks run in a
/// fixed order and the first failure is returned.
pub fn validate(input: &Path, weights: &str, impacts: &str) -> Result<Problem> {
    let table = Table::read(input)?;
    debug!(path = %input.display(), columns = table.width(), rows = table.records.len(), "read input");
    validate_table(table, weights, impacts)
}

pub fn validate_table(table: Table, weights: &str, impacts: &str) -> Result<Problem> {
    if table.width() < 3 {
        return Err(TopsisError::TooFewColumns {
            found: table.width(),
        });
    }
    if table.records.is_empty() {
        return Err(TopsisError::NoAlternatives);
    }
    let columns = criterion_columns(&table)?;
    let criteria = parse_criteria(weights, impacts, columns.len())?;
    info!(
        alternatives = table.records.len(),
        criteria = criteria.len(),
        "inputs are valid"
    );
    Ok(Problem {
        table,
        columns,
        criteria,
    })
}

fn criterion_columns(table: &Table) -> Result<Vec<Vec<f64>>> {
    (1..table.width())
        .map(|column| {
            table
                .records
                .iter()
                .enumerate()
                .map(|(row, record)| {
                    let cell = &record[column];
                    parse_finite(cell).ok_or_else(|| TopsisError::NonNumericCriterion {
                        column: table.header[column].clone(),
                        row: row + 1,
                        value: cell.clone(),
                    })
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

/// Split both lists on commas, check their lengths against `count`, then parse every weight
/// followed by every impact.
pub fn parse_criteria(weights: &str, impacts: &str, count: usize) -> Result<Vec<Criterion>> {
    let weights: Vec<&str> = weights.split(',').collect();
    let impacts: Vec<&str> = impacts.split(',').collect();
    if weights.len() != count || impacts.len() != count {
        return Err(TopsisError::CountMismatch {
            weights: weights.len(),
            impacts: impacts.len(),
            criteria: count,
        });
    }
    let weights = weights
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<Weight>()
                .map_err(|()| TopsisError::InvalidWeight {
                    position: i + 1,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<Weight>>>()?;
    let impacts = impacts
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<Impact>()
                .map_err(|()| TopsisError::InvalidImpact {
                    position: i + 1,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<Impact>>>()?;
    Ok(weights
        .into_iter()
        .zip(impacts)
        .map(|(weight, impact)| Criterion { weight, impact })
        .collect())
}
