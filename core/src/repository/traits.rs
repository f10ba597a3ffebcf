use uuid::Uuid;

use crate::model::subject::Subject;

/// Storage for the session's subjects.
///
/// Subjects keep insertion order. Lookups on an absent id return `None`;
/// nothing here fails.
pub trait SubjectRepository {
    fn create(&mut self, subject: Subject) -> &Subject;
    fn list(&self) -> &[Subject];
    fn list_mut(&mut self) -> &mut [Subject];

    fn get(&self, id: &Uuid) -> Option<&Subject> {
        self.list().iter().find(|s| s.id == *id)
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut Subject> {
        self.list_mut().iter_mut().find(|s| s.id == *id)
    }
}
