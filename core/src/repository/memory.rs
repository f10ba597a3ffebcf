use crate::model::scale::GradeScale;
use crate::model::subject::Subject;
use crate::repository::seed::seed_subjects;
use crate::repository::traits::SubjectRepository;

/// Session-lifetime store; dropped with the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySubjectRepository {
    subjects: Vec<Subject>,
}

impl MemorySubjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subjects(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// Store preloaded with the example subjects for `scale`.
    pub fn seeded(scale: GradeScale) -> Self {
        Self::with_subjects(seed_subjects(scale))
    }
}

impl SubjectRepository for MemorySubjectRepository {
    fn create(&mut self, subject: Subject) -> &Subject {
        self.subjects.push(subject);
        &self.subjects[self.subjects.len() - 1]
    }

    fn list(&self) -> &[Subject] {
        &self.subjects
    }

    fn list_mut(&mut self) -> &mut [Subject] {
        &mut self.subjects
    }
}
