#[cfg(test)]
mod tests {
    use crate::model::grade::NewGrade;
    use crate::model::period::{Period, Semester};
    use crate::model::scale::GradeScale;
    use crate::model::subject::SubjectIcon;
    use crate::repository::MemorySubjectRepository;
    use crate::service::aggregator::average;
    use crate::service::gradebook_service::GradebookService;
    use crate::service::period_filter::{filtered_grades, has_grades_in_period};
    use uuid::Uuid;

    fn empty_service() -> GradebookService<MemorySubjectRepository> {
        GradebookService::new(MemorySubjectRepository::new())
    }

    fn seeded_service() -> GradebookService<MemorySubjectRepository> {
        GradebookService::new(MemorySubjectRepository::seeded(GradeScale::Six))
    }

    const S1_2024: Period = Period { year: 2024, semester: Semester::First };
    const S1_2025: Period = Period { year: 2025, semester: Semester::First };

    #[test]
    fn test_add_subject_empty_name_is_noop() {
        let mut service = seeded_service();
        let before = service.subjects().len();

        assert!(service.add_subject("", None).is_none());
        assert_eq!(service.subjects().len(), before);
    }

    #[test]
    fn test_add_subject_ids_never_reused() {
        let mut service = empty_service();
        let a = service.add_subject("Chimie", None).unwrap().id;
        let b = service.add_subject("Chimie", None).unwrap().id;

        assert_ne!(a, b);
        assert_eq!(service.subjects().len(), 2);
        assert!(service.subjects().iter().all(|s| s.visible && s.grades.is_empty()));
    }

    #[test]
    fn test_add_subject_with_grade() {
        let mut service = empty_service();
        let subject = service
            .add_subject_with_grade("Biologie", Some(SubjectIcon::Brain), NewGrade::new("Cellule", 5.0, S1_2024))
            .unwrap();
        assert_eq!(subject.icon, Some(SubjectIcon::Brain));
        assert_eq!(subject.grades.len(), 1);

        // Unusable seed: the subject is still created, without grades.
        let subject = service
            .add_subject_with_grade("Latin", None, NewGrade::new("", 5.0, S1_2024))
            .unwrap();
        assert!(subject.grades.is_empty());
    }

    #[test]
    fn test_add_grade_appears_once_in_period() {
        let mut service = seeded_service();
        let math = service.resolve_subject("Mathématiques").unwrap();

        let grade_id = service
            .add_grade(&math, NewGrade::new("Limits", 5.5, S1_2024))
            .unwrap()
            .id;

        let subject = service.subject(&math).unwrap();
        assert!(has_grades_in_period(subject, S1_2024));
        let in_period = filtered_grades(&subject.grades, S1_2024);
        assert_eq!(in_period.iter().filter(|g| g.id == grade_id).count(), 1);
        assert_eq!(average(in_period.iter().copied()), 4.5);
        // Appended last.
        assert_eq!(subject.grades.last().map(|g| g.id), Some(grade_id));
    }

    #[test]
    fn test_add_grade_rejections() {
        let mut service = seeded_service();
        let math = service.resolve_subject("Mathématiques").unwrap();
        let before = service.snapshot();

        assert!(service.add_grade(&math, NewGrade::new("", 4.0, S1_2024)).is_none());
        assert!(service.add_grade(&math, NewGrade::new("NaN", f64::NAN, S1_2024)).is_none());
        assert!(service.add_grade(&Uuid::new_v4(), NewGrade::new("Orphan", 4.0, S1_2024)).is_none());

        assert_eq!(service.snapshot(), before);
    }

    #[test]
    fn test_scenario_period_averages() {
        let service = seeded_service();
        let math = service.resolve_subject("mathématiques").unwrap();
        let subject = service.subject(&math).unwrap();

        let current = filtered_grades(&subject.grades, S1_2025);
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title, "Algèbre");
        assert_eq!(current[0].score, 5.5);
        assert_eq!(average(current.iter().copied()), 5.5);

        let previous = filtered_grades(&subject.grades, S1_2024);
        assert_eq!(average(previous.iter().copied()), 3.5);
    }

    #[test]
    fn test_update_subject() {
        let mut service = seeded_service();
        let physics = service.resolve_subject("Physique").unwrap();

        assert!(service.update_subject(&physics, "Physique-Chimie"));
        assert_eq!(service.subject(&physics).unwrap().name, "Physique-Chimie");

        assert!(!service.update_subject(&physics, ""));
        assert!(!service.update_subject(&Uuid::new_v4(), "Ghost"));
        assert_eq!(service.subject(&physics).unwrap().name, "Physique-Chimie");
    }

    #[test]
    fn test_update_grade_across_subjects() {
        let mut service = seeded_service();
        let grade_id = service.resolve_grade("Mécanique").unwrap();

        assert!(service.update_grade(&grade_id, "Optique", 5.0));
        let physics = service.resolve_subject("Physique").unwrap();
        let grade = service.subject(&physics).unwrap().grade(&grade_id).unwrap();
        assert_eq!(grade.title, "Optique");
        assert_eq!(grade.score, 5.0);
        // Period untouched.
        assert_eq!(grade.period(), S1_2024);

        let before = service.snapshot();
        assert!(!service.update_grade(&Uuid::new_v4(), "Ghost", 1.0));
        assert!(!service.update_grade(&grade_id, "", 1.0));
        assert_eq!(service.snapshot(), before);
    }

    #[test]
    fn test_delete_grade_is_idempotent() {
        let mut service = seeded_service();
        let math = service.resolve_subject("Mathématiques").unwrap();
        let grade_id = service.resolve_grade_in(&math, "Géométrie").unwrap();

        assert!(service.delete_grade(&math, &grade_id));
        let after_first = service.snapshot();

        assert!(!service.delete_grade(&math, &grade_id));
        assert_eq!(service.snapshot(), after_first);

        // Grade id that belongs to another subject.
        let physics = service.resolve_subject("Physique").unwrap();
        let algebra = service.resolve_grade("Algèbre").unwrap();
        assert!(!service.delete_grade(&physics, &algebra));
        assert_eq!(service.snapshot(), after_first);
    }

    #[test]
    fn test_toggle_visibility_twice_restores() {
        let mut service = seeded_service();
        let math = service.resolve_subject("Mathématiques").unwrap();

        assert!(service.toggle_visibility(&math));
        assert!(!service.subject(&math).unwrap().visible);
        assert!(service.toggle_visibility(&math));
        assert!(service.subject(&math).unwrap().visible);

        assert!(!service.toggle_visibility(&Uuid::new_v4()));
    }

    #[test]
    fn test_resolve_references() {
        let mut service = empty_service();
        let first = service.add_subject("Anglais", None).unwrap().id;
        service.add_subject("anglais", None);

        // Same name twice: ambiguous.
        assert_eq!(service.resolve_subject("Anglais"), None);

        let full = first.to_string();
        assert_eq!(service.resolve_subject(&full), Some(first));
        assert_eq!(service.resolve_subject(&full[..13]), Some(first));
        assert_eq!(service.resolve_subject(""), None);
        assert_eq!(service.resolve_subject("Allemand"), None);
    }

    #[test]
    fn test_snapshot_json_lists_subjects() {
        let service = seeded_service();
        let json = service.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let subjects = value.as_array().unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0]["name"], "Mathématiques");
        assert_eq!(subjects[0]["grades"].as_array().unwrap().len(), 2);
    }
}
