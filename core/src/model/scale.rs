use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Marking scale a gradebook is kept in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeScale {
    /// 0 to 20, the French scale.
    Twenty,
    /// 1 to 6, the Swiss scale.
    Six,
}

impl GradeScale {
    pub fn min(&self) -> f64 {
        match self {
            GradeScale::Twenty => 0.0,
            GradeScale::Six => 1.0,
        }
    }

    pub fn max(&self) -> f64 {
        match self {
            GradeScale::Twenty => 20.0,
            GradeScale::Six => 6.0,
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        score.is_finite() && score >= self.min() && score <= self.max()
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            GradeScale::Twenty => "/20",
            GradeScale::Six => "/6",
        }
    }

    pub fn tier(&self, score: f64) -> GradeTier {
        let (very_good, good) = match self {
            GradeScale::Twenty => (16.0, 14.0),
            GradeScale::Six => (5.0, 4.0),
        };

        if score >= very_good {
            GradeTier::VeryGood
        } else if score >= good {
            GradeTier::Good
        } else {
            GradeTier::NeedsWork
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeScale::Twenty => f.write_str("twenty"),
            GradeScale::Six => f.write_str("six"),
        }
    }
}

impl FromStr for GradeScale {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twenty" | "20" | "fr" => Ok(GradeScale::Twenty),
            "six" | "6" | "ch" => Ok(GradeScale::Six),
            _ => Err(InputError::UnknownScale(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    VeryGood,
    Good,
    NeedsWork,
}
