pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::GradebookConfig;
pub use error::InputError;
pub use input::{expand_key, parse_args, parse_line, parse_score, ParsedInput};
pub use model::event::Event;
pub use model::grade::{Grade, NewGrade};
pub use model::period::{Period, Semester};
pub use model::scale::{GradeScale, GradeTier};
pub use model::subject::{Subject, SubjectIcon};
pub use repository::{MemorySubjectRepository, SubjectRepository};
pub use service::aggregator::{average, round_for_display};
pub use service::dto::{GradeDto, PeriodView, SubjectCard, SubjectSummary};
pub use service::gradebook_service::GradebookService;
pub use service::period_filter::{
    filtered_grades, has_grades_in_period, subjects_in_period, visible_subjects_in_period,
};
pub use usecase::session::Session;
