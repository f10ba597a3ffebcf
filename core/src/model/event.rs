use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::grade::NewGrade;
use crate::model::period::Period;
use crate::model::subject::SubjectIcon;

/// Everything the presentation layer can ask a session to do.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Event {
    CreateSubject {
        name: String,
        icon: Option<SubjectIcon>,
        seed: Option<NewGrade>,
    },
    CreateGrade {
        subject_id: Uuid,
        grade: NewGrade,
    },
    UpdateSubjectName {
        subject_id: Uuid,
        name: String,
    },
    UpdateGrade {
        grade_id: Uuid,
        title: String,
        score: f64,
    },
    DeleteGrade {
        subject_id: Uuid,
        grade_id: Uuid,
    },
    ToggleVisibility {
        subject_id: Uuid,
    },
    SelectPeriod(Period),
}
