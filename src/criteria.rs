use crate::num::{Impact, Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Criterion {
    pub weight: Weight,
    pub impact: Impact,
}

/// Reference values for one criterion, taken from the weighted normalized column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealPoint {
    pub best: f64,
    pub worst: f64,
}

impl Criterion {
    /// Benefit criteria prefer the column maximum, cost criteria the minimum. A NaN anywhere in
    /// the column makes both reference values NaN.
    pub fn ideal_point(&self, column: &[f64]) -> IdealPoint {
        if column.iter().any(|x| x.is_nan()) {
            return IdealPoint {
                best: f64::NAN,
                worst: f64::NAN,
            };
        }
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        match self.impact {
            Impact::Benefit => IdealPoint {
                best: max,
                worst: min,
            },
            Impact::Cost => IdealPoint {
                best: min,
                worst: max,
            },
        }
    }
}
