use crate::model::grade::Grade;
use crate::model::period::Period;
use crate::model::subject::Subject;

/// Grades recorded in exactly `period`, in their original order.
pub fn filtered_grades<'a, I>(grades: I, period: Period) -> Vec<&'a Grade>
where
    I: IntoIterator<Item = &'a Grade>,
{
    grades.into_iter().filter(|g| g.is_in(period)).collect()
}

pub fn has_grades_in_period(subject: &Subject, period: Period) -> bool {
    subject.grades.iter().any(|g| g.is_in(period))
}

/// Subjects listed for a period, hidden ones included.
pub fn subjects_in_period(subjects: &[Subject], period: Period) -> Vec<&Subject> {
    subjects
        .iter()
        .filter(|s| has_grades_in_period(s, period))
        .collect()
}

/// Subjects whose grades are shown for a period.
pub fn visible_subjects_in_period(subjects: &[Subject], period: Period) -> Vec<&Subject> {
    subjects
        .iter()
        .filter(|s| s.visible && has_grades_in_period(s, period))
        .collect()
}
