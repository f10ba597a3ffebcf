use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::period::{Period, Semester};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grade {
    pub id: Uuid,
    pub title: String,
    pub score: f64,
    pub year: i32,
    pub semester: Semester,
}

impl Grade {
    pub fn new(title: String, score: f64, period: Period) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            score,
            year: period.year,
            semester: period.semester,
        }
    }

    pub fn period(&self) -> Period {
        Period::new(self.year, self.semester)
    }

    pub fn is_in(&self, period: Period) -> bool {
        self.year == period.year && self.semester == period.semester
    }
}

/// Grade fields as entered by the user, before an id is assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewGrade {
    pub title: String,
    pub score: f64,
    pub period: Period,
}

impl NewGrade {
    pub fn new(title: impl Into<String>, score: f64, period: Period) -> Self {
        Self {
            title: title.into(),
            score,
            period,
        }
    }

    /// Empty titles and NaN/infinite scores are dropped by the store.
    pub fn is_acceptable(&self) -> bool {
        !self.title.is_empty() && self.score.is_finite()
    }

    pub fn into_grade(self) -> Grade {
        Grade::new(self.title, self.score, self.period)
    }
}
