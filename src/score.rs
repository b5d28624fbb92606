use tracing::{debug, warn};

use crate::{
    criteria::IdealPoint,
    rank::competition_ranks,
    validate::Problem,
};

/// Scoring outcome for one alternative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub distance_best: f64,
    pub distance_worst: f64,
    /// Relative closeness in [0, 1], or NaN when the alternative coincides with both ideal points
    /// or a criterion column has a zero norm.
    pub score: f64,
    /// 1 is best. Alternatives with a NaN score are not ranked.
    pub rank: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Scores {
    /// Weighted normalized decision matrix, column-major.
    pub weighted: Vec<Vec<f64>>,
    pub ideal: Vec<IdealPoint>,
    pub evaluations: Vec<Evaluation>,
}

/// Euclidean norm of a criterion column. Folding with `hypot` avoids overflow and underflow of
/// the squared terms, so only an all-zero column has a zero norm.
pub fn column_norm(column: &[f64]) -> f64 {
    column.iter().fold(0.0_f64, |norm, x| norm.hypot(*x))
}

/// Vector normalization. A column with a zero norm yields NaN values.
pub fn normalize(column: &[f64]) -> Vec<f64> {
    let norm = column_norm(column);
    column.iter().map(|x| x / norm).collect()
}

/// Euclidean distance between one row of the column-major `columns` and a reference vector.
pub fn distance(columns: &[Vec<f64>], row: usize, reference: impl Iterator<Item = f64>) -> f64 {
    columns
        .iter()
        .zip(reference)
        .map(|(column, r)| (column[row] - r).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// `worst / (best + worst)`. Both distances being zero gives NaN, which is kept as is.
pub fn closeness(distance_best: f64, distance_worst: f64) -> f64 {
    distance_worst / (distance_best + distance_worst)
}

/// Score every alternative of a validated problem using vector normalization TOPSIS.
pub fn evaluate(problem: &Problem) -> Scores {
    let weighted: Vec<Vec<f64>> = problem
        .columns
        .iter()
        .zip(&problem.criteria)
        .enumerate()
        .map(|(j, (column, criterion))| {
            let norm = column_norm(column);
            debug!(criterion = %problem.table.header[j + 1], norm, "column norm");
            if norm == 0.0 {
                warn!(
                    criterion = %problem.table.header[j + 1],
                    "criterion column has a zero norm, its scores are undefined"
                );
            }
            let weight = criterion.weight.as_f64();
            normalize(column).into_iter().map(|x| x * weight).collect()
        })
        .collect();

    let ideal: Vec<IdealPoint> = weighted
        .iter()
        .zip(&problem.criteria)
        .map(|(column, criterion)| criterion.ideal_point(column))
        .collect();
    debug!(?ideal, "ideal points");

    let distances: Vec<(f64, f64)> = (0..problem.alternatives())
        .map(|row| {
            (
                distance(&weighted, row, ideal.iter().map(|p| p.best)),
                distance(&weighted, row, ideal.iter().map(|p| p.worst)),
            )
        })
        .collect();
    let scores: Vec<f64> = distances
        .iter()
        .map(|&(best, worst)| closeness(best, worst))
        .collect();
    let undefined = scores.iter().filter(|s| s.is_nan()).count();
    if undefined > 0 {
        warn!(undefined, "some alternatives have an undefined score and are left unranked");
    }
    let ranks = competition_ranks(&scores);

    let evaluations = distances
        .into_iter()
        .zip(scores)
        .zip(ranks)
        .map(|(((distance_best, distance_worst), score), rank)| Evaluation {
            distance_best,
            distance_worst,
            score,
            rank,
        })
        .collect();
    Scores {
        weighted,
        ideal,
        evaluations,
    }
}
