use crate::model::grade::{Grade, NewGrade};
use crate::model::period::{Period, Semester};
use crate::model::scale::GradeScale;
use crate::model::subject::{Subject, SubjectIcon};

/// Example subjects a fresh session starts with.
pub fn seed_subjects(scale: GradeScale) -> Vec<Subject> {
    match scale {
        GradeScale::Six => vec![
            subject(
                "Mathématiques",
                None,
                &[("Algèbre", 5.5, 2025, Semester::First), ("Géométrie", 3.5, 2024, Semester::First)],
            ),
            subject("Physique", None, &[("Mécanique", 4.0, 2024, Semester::First)]),
        ],
        GradeScale::Twenty => vec![
            subject(
                "Mathématiques",
                Some(SubjectIcon::Calculator),
                &[("Algèbre", 16.0, 2024, Semester::First), ("Géométrie", 15.0, 2024, Semester::First)],
            ),
            subject(
                "Physique",
                Some(SubjectIcon::Flask),
                &[("Mécanique", 14.0, 2024, Semester::First)],
            ),
        ],
    }
}

fn subject(name: &str, icon: Option<SubjectIcon>, grades: &[(&str, f64, i32, Semester)]) -> Subject {
    let grades: Vec<Grade> = grades
        .iter()
        .map(|(title, score, year, semester)| {
            NewGrade::new(*title, *score, Period::new(*year, *semester)).into_grade()
        })
        .collect();
    Subject::new(name.to_string(), icon).with_grades(grades)
}
