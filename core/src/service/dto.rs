use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::grade::Grade;
use crate::model::period::{Period, Semester};
use crate::model::scale::{GradeScale, GradeTier};
use crate::model::subject::{Subject, SubjectIcon};
use crate::service::aggregator::{average, round_for_display};
use crate::service::period_filter::{filtered_grades, subjects_in_period, visible_subjects_in_period};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradeDto {
    pub id: Uuid,
    pub title: String,
    pub score: f64,
    pub year: i32,
    pub semester: Semester,
    pub tier: GradeTier,
}

impl GradeDto {
    pub fn from_entity(grade: &Grade, scale: GradeScale) -> Self {
        Self {
            id: grade.id,
            title: grade.title.clone(),
            score: grade.score,
            year: grade.year,
            semester: grade.semester,
            tier: scale.tier(grade.score),
        }
    }
}

/// Sidebar entry: a subject with grades in the period, hidden or not.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubjectSummary {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<SubjectIcon>,
    pub visible: bool,
}

/// Main-area card: a visible subject's grades for the period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubjectCard {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<SubjectIcon>,
    pub grades: Vec<GradeDto>,
    pub average: f64,
    pub rounded_average: f64,
}

impl SubjectCard {
    pub fn from_entity(subject: &Subject, period: Period, scale: GradeScale) -> Self {
        let grades = filtered_grades(&subject.grades, period);
        let avg = average(grades.iter().copied());
        Self {
            id: subject.id,
            name: subject.name.clone(),
            icon: subject.icon,
            grades: grades.into_iter().map(|g| GradeDto::from_entity(g, scale)).collect(),
            average: avg,
            rounded_average: round_for_display(avg),
        }
    }
}

/// Everything derived from a store snapshot for one selected period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeriodView {
    pub period: Period,
    pub scale: GradeScale,
    pub sidebar: Vec<SubjectSummary>,
    pub cards: Vec<SubjectCard>,
}

impl PeriodView {
    pub fn build(subjects: &[Subject], period: Period, scale: GradeScale) -> Self {
        let sidebar = subjects_in_period(subjects, period)
            .into_iter()
            .map(|s| SubjectSummary {
                id: s.id,
                name: s.name.clone(),
                icon: s.icon,
                visible: s.visible,
            })
            .collect();

        let cards = visible_subjects_in_period(subjects, period)
            .into_iter()
            .map(|s| SubjectCard::from_entity(s, period, scale))
            .collect();

        Self {
            period,
            scale,
            sidebar,
            cards,
        }
    }
}
