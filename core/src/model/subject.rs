use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InputError;
use crate::model::grade::Grade;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectIcon {
    Calculator,
    Brain,
    Flask,
    Palette,
    Book,
}

impl SubjectIcon {
    pub const ALL: [SubjectIcon; 5] = [
        SubjectIcon::Calculator,
        SubjectIcon::Brain,
        SubjectIcon::Flask,
        SubjectIcon::Palette,
        SubjectIcon::Book,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SubjectIcon::Calculator => "Calculator",
            SubjectIcon::Brain => "Brain",
            SubjectIcon::Flask => "Flask",
            SubjectIcon::Palette => "Palette",
            SubjectIcon::Book => "Book",
        }
    }
}

impl fmt::Display for SubjectIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubjectIcon {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubjectIcon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownIcon(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<SubjectIcon>,
    // Insertion order; only deletion removes entries.
    pub grades: Vec<Grade>,
    pub visible: bool,
}

impl Subject {
    pub fn new(name: String, icon: Option<SubjectIcon>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            icon,
            grades: Vec::new(),
            visible: true,
        }
    }

    pub fn with_grades(mut self, grades: Vec<Grade>) -> Self {
        self.grades = grades;
        self
    }

    pub fn push_grade(&mut self, grade: Grade) -> &Grade {
        self.grades.push(grade);
        // just pushed
        &self.grades[self.grades.len() - 1]
    }

    pub fn grade(&self, id: &Uuid) -> Option<&Grade> {
        self.grades.iter().find(|g| g.id == *id)
    }

    pub fn grade_mut(&mut self, id: &Uuid) -> Option<&mut Grade> {
        self.grades.iter_mut().find(|g| g.id == *id)
    }

    /// Returns `false` when no grade carried `id`.
    pub fn remove_grade(&mut self, id: &Uuid) -> bool {
        let initial_len = self.grades.len();
        self.grades.retain(|g| g.id != *id);
        self.grades.len() != initial_len
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }
}
