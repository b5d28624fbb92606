use ordered_float::NotNan;

/// A positive, finite f64 value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Weight(NotNan<f64>);

impl Weight {
    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if !value.is_finite() || *value <= 0.0 {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::str::FromStr for Weight {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().ok().and_then(Self::new).ok_or(())
    }
}

impl std::fmt::Debug for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of desirability for a criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    /// Higher values are better (`+`).
    Benefit,
    /// Lower values are better (`-`).
    Cost,
}

/// Only the exact tokens `+` and `-` are accepted.
impl std::str::FromStr for Impact {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Benefit),
            "-" => Ok(Self::Cost),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benefit => f.write_str("+"),
            Self::Cost => f.write_str("-"),
        }
    }
}

/// Parse a criterion cell. Empty and non-finite cells are rejected.
pub fn parse_finite(cell: &str) -> Option<f64> {
    let value: f64 = cell.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}
