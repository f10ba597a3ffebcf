use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::model::period::{Period, Semester};
use crate::model::scale::GradeScale;

const SWISS_YEARS: [i32; 5] = [2025, 2024, 2023, 2022, 2021];
const FRENCH_YEARS: [i32; 4] = [2024, 2023, 2022, 2021];

/// Session settings: which scale scores are entered in and which periods
/// can be selected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradebookConfig {
    pub scale: GradeScale,
    /// Most recent first.
    pub years: Vec<i32>,
    pub semesters: Vec<Semester>,
    /// Start from the example subjects instead of an empty store.
    pub seed: bool,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self::swiss()
    }
}

impl GradebookConfig {
    /// 1–6 scale, three terms including summer.
    pub fn swiss() -> Self {
        Self {
            scale: GradeScale::Six,
            years: SWISS_YEARS.to_vec(),
            semesters: vec![Semester::First, Semester::Second, Semester::Summer],
            seed: true,
        }
    }

    /// 0–20 scale, two semesters.
    pub fn french() -> Self {
        Self {
            scale: GradeScale::Twenty,
            years: FRENCH_YEARS.to_vec(),
            semesters: vec![Semester::First, Semester::Second],
            seed: true,
        }
    }

    pub fn for_scale(scale: GradeScale) -> Self {
        match scale {
            GradeScale::Six => Self::swiss(),
            GradeScale::Twenty => Self::french(),
        }
    }

    pub fn with_terms(mut self, terms: u8) -> Result<Self, InputError> {
        self.semesters = match terms {
            2 => vec![Semester::First, Semester::Second],
            3 => vec![Semester::First, Semester::Second, Semester::Summer],
            _ => return Err(InputError::InvalidSemester(format!("{} terms", terms))),
        };
        Ok(self)
    }

    pub fn without_seed(mut self) -> Self {
        self.seed = false;
        self
    }

    pub fn default_period(&self) -> Period {
        self.default_period_for(Period::current_year())
    }

    /// `year` when it is selectable, otherwise the most recent listed year.
    pub fn default_period_for(&self, year: i32) -> Period {
        let year = if self.years.contains(&year) {
            year
        } else {
            self.years.first().copied().unwrap_or(year)
        };
        let semester = self.semesters.first().copied().unwrap_or_default();
        Period::new(year, semester)
    }

    pub fn is_selectable(&self, period: Period) -> bool {
        self.years.contains(&period.year) && self.semesters.contains(&period.semester)
    }

    pub fn check_selectable(&self, period: Period) -> Result<Period, InputError> {
        if self.is_selectable(period) {
            Ok(period)
        } else {
            Err(InputError::PeriodNotSelectable(period.to_string()))
        }
    }

    /// Next year in the list, wrapping; used by year pickers.
    pub fn next_year(&self, year: i32) -> i32 {
        cycle(&self.years, &year)
    }

    pub fn next_semester(&self, semester: Semester) -> Semester {
        cycle(&self.semesters, &semester)
    }
}

fn cycle<T: PartialEq + Copy>(items: &[T], current: &T) -> T {
    match items.iter().position(|i| i == current) {
        Some(pos) => items[(pos + 1) % items.len()],
        None => items.first().copied().unwrap_or(*current),
    }
}
