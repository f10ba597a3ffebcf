use tracing::{debug, info};
use uuid::Uuid;

use crate::model::grade::{Grade, NewGrade};
use crate::model::subject::{Subject, SubjectIcon};
use crate::repository::SubjectRepository;

/// The record store's mutators and lookups.
///
/// Every operation is total: an empty name, an unusable grade or an unknown
/// id leaves the store untouched and is only reported through the return
/// value and a debug log line.
pub struct GradebookService<R: SubjectRepository> {
    repo: R,
}

impl<R: SubjectRepository> GradebookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn subjects(&self) -> &[Subject] {
        self.repo.list()
    }

    pub fn subject(&self, id: &Uuid) -> Option<&Subject> {
        self.repo.get(id)
    }

    /// Owned copy of the current store for the presentation layer.
    pub fn snapshot(&self) -> Vec<Subject> {
        self.repo.list().to_vec()
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.repo.list())
    }

    pub fn add_subject(&mut self, name: &str, icon: Option<SubjectIcon>) -> Option<&Subject> {
        if name.is_empty() {
            debug!("add_subject ignored: empty name");
            return None;
        }
        let created = self.repo.create(Subject::new(name.to_string(), icon));
        info!(subject = %created.id, name = %created.name, "subject added");
        Some(created)
    }

    /// Creates a subject holding one initial grade. An unusable seed is
    /// dropped; the subject is still created.
    pub fn add_subject_with_grade(
        &mut self,
        name: &str,
        icon: Option<SubjectIcon>,
        seed: NewGrade,
    ) -> Option<&Subject> {
        if name.is_empty() {
            debug!("add_subject ignored: empty name");
            return None;
        }
        let mut subject = Subject::new(name.to_string(), icon);
        if seed.is_acceptable() {
            subject.push_grade(seed.into_grade());
        } else {
            debug!(name, "initial grade dropped");
        }
        let created = self.repo.create(subject);
        info!(subject = %created.id, name = %created.name, grades = created.grades.len(), "subject added");
        Some(created)
    }

    pub fn add_grade(&mut self, subject_id: &Uuid, grade: NewGrade) -> Option<&Grade> {
        if !grade.is_acceptable() {
            debug!(subject = %subject_id, "add_grade ignored: empty title or unusable score");
            return None;
        }
        let Some(subject) = self.repo.get_mut(subject_id) else {
            debug!(subject = %subject_id, "add_grade ignored: unknown subject");
            return None;
        };
        let added = subject.push_grade(grade.into_grade());
        info!(subject = %subject_id, grade = %added.id, period = %added.period(), "grade added");
        Some(added)
    }

    /// Renames a subject. Empty names are ignored, as on creation.
    pub fn update_subject(&mut self, subject_id: &Uuid, new_name: &str) -> bool {
        if new_name.is_empty() {
            debug!(subject = %subject_id, "update_subject ignored: empty name");
            return false;
        }
        match self.repo.get_mut(subject_id) {
            Some(subject) => {
                subject.name = new_name.to_string();
                info!(subject = %subject_id, name = new_name, "subject renamed");
                true
            }
            None => {
                debug!(subject = %subject_id, "update_subject ignored: unknown subject");
                false
            }
        }
    }

    /// Replaces title and score of the grade with `grade_id`, wherever it is.
    pub fn update_grade(&mut self, grade_id: &Uuid, new_title: &str, new_score: f64) -> bool {
        if new_title.is_empty() || !new_score.is_finite() {
            debug!(grade = %grade_id, "update_grade ignored: empty title or unusable score");
            return false;
        }
        let found = self
            .repo
            .list_mut()
            .iter_mut()
            .find_map(|s| s.grade_mut(grade_id));

        match found {
            Some(grade) => {
                grade.title = new_title.to_string();
                grade.score = new_score;
                info!(grade = %grade_id, "grade updated");
                true
            }
            None => {
                debug!(grade = %grade_id, "update_grade ignored: unknown grade");
                false
            }
        }
    }

    pub fn delete_grade(&mut self, subject_id: &Uuid, grade_id: &Uuid) -> bool {
        let removed = self
            .repo
            .get_mut(subject_id)
            .map(|s| s.remove_grade(grade_id))
            .unwrap_or(false);

        if removed {
            info!(subject = %subject_id, grade = %grade_id, "grade deleted");
        } else {
            debug!(subject = %subject_id, grade = %grade_id, "delete_grade ignored: not found");
        }
        removed
    }

    pub fn toggle_visibility(&mut self, subject_id: &Uuid) -> bool {
        match self.repo.get_mut(subject_id) {
            Some(subject) => {
                subject.toggle_visibility();
                info!(subject = %subject_id, visible = subject.visible, "visibility toggled");
                true
            }
            None => {
                debug!(subject = %subject_id, "toggle_visibility ignored: unknown subject");
                false
            }
        }
    }

    /// Finds a subject by full id, name (case-insensitive) or id prefix.
    /// Ambiguous references resolve to nothing.
    pub fn resolve_subject(&self, reference: &str) -> Option<Uuid> {
        resolve(self.repo.list().iter().map(|s| (s.id, s.name.as_str())), reference)
    }

    /// Finds a grade in any subject by full id, title or id prefix.
    pub fn resolve_grade(&self, reference: &str) -> Option<Uuid> {
        resolve(
            self.repo
                .list()
                .iter()
                .flat_map(|s| s.grades.iter())
                .map(|g| (g.id, g.title.as_str())),
            reference,
        )
    }

    /// Like [`resolve_grade`](Self::resolve_grade), restricted to one subject.
    pub fn resolve_grade_in(&self, subject_id: &Uuid, reference: &str) -> Option<Uuid> {
        let subject = self.repo.get(subject_id)?;
        resolve(subject.grades.iter().map(|g| (g.id, g.title.as_str())), reference)
    }
}

fn resolve<'a, I>(candidates: I, reference: &str) -> Option<Uuid>
where
    I: Iterator<Item = (Uuid, &'a str)> + Clone,
{
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    if let Ok(id) = Uuid::parse_str(reference) {
        return candidates.clone().find(|(c, _)| *c == id).map(|(c, _)| c);
    }

    let by_label: Vec<Uuid> = candidates
        .clone()
        .filter(|(_, label)| label.to_lowercase() == reference.to_lowercase())
        .map(|(id, _)| id)
        .collect();
    if !by_label.is_empty() {
        return unique(by_label);
    }

    let prefix = reference.to_lowercase();
    let by_prefix: Vec<Uuid> = candidates
        .filter(|(id, _)| id.to_string().starts_with(&prefix))
        .map(|(id, _)| id)
        .collect();
    unique(by_prefix)
}

fn unique(matches: Vec<Uuid>) -> Option<Uuid> {
    match matches.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}
