use tracing::debug;
use uuid::Uuid;

use crate::config::GradebookConfig;
use crate::error::InputError;
use crate::input::{expand_key, parse_line, parse_score, ParsedInput};
use crate::model::event::Event;
use crate::model::grade::NewGrade;
use crate::model::period::{parse_year, Period, Semester};
use crate::repository::{MemorySubjectRepository, SubjectRepository};
use crate::service::dto::PeriodView;
use crate::service::gradebook_service::GradebookService;

const COMMANDS: [&str; 7] = ["subject", "grade", "rename", "edit", "delete", "toggle", "period"];

const SUBJECT_KEYS: [&str; 3] = ["icon", "grade", "score"];
const GRADE_KEYS: [&str; 3] = ["score", "year", "semester"];
const EDIT_KEYS: [&str; 1] = ["score"];
const PERIOD_KEYS: [&str; 2] = ["year", "semester"];
const NO_KEYS: [&str; 0] = [];

/// One user's gradebook for the lifetime of the process: the store plus the
/// period currently being looked at.
pub struct Session<R: SubjectRepository> {
    service: GradebookService<R>,
    config: GradebookConfig,
    period: Period,
}

impl Session<MemorySubjectRepository> {
    /// In-memory session, seeded when `config.seed` is set.
    pub fn from_config(config: GradebookConfig) -> Self {
        let repo = if config.seed {
            MemorySubjectRepository::seeded(config.scale)
        } else {
            MemorySubjectRepository::new()
        };
        Session::new(GradebookService::new(repo), config)
    }
}

impl<R: SubjectRepository> Session<R> {
    pub fn new(service: GradebookService<R>, config: GradebookConfig) -> Self {
        let period = config.default_period();
        Self {
            service,
            config,
            period,
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn service(&self) -> &GradebookService<R> {
        &self.service
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn view(&self) -> PeriodView {
        PeriodView::build(self.service.subjects(), self.period, self.config.scale)
    }

    /// Applies one event. Returns whether anything changed.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::CreateSubject { name, icon, seed } => match seed {
                Some(seed) => self.service.add_subject_with_grade(&name, icon, seed).is_some(),
                None => self.service.add_subject(&name, icon).is_some(),
            },
            Event::CreateGrade { subject_id, grade } => self.service.add_grade(&subject_id, grade).is_some(),
            Event::UpdateSubjectName { subject_id, name } => self.service.update_subject(&subject_id, &name),
            Event::UpdateGrade { grade_id, title, score } => self.service.update_grade(&grade_id, &title, score),
            Event::DeleteGrade { subject_id, grade_id } => self.service.delete_grade(&subject_id, &grade_id),
            Event::ToggleVisibility { subject_id } => self.service.toggle_visibility(&subject_id),
            Event::SelectPeriod(period) => {
                let changed = self.period != period;
                self.period = period;
                changed
            }
        }
    }

    /// Parses, resolves and applies one command line.
    ///
    /// `Ok(None)` means the line named a subject or grade that does not
    /// exist; nothing was changed.
    pub fn execute(&mut self, line: &str) -> Result<Option<Event>, InputError> {
        let event = self.parse(line)?;
        if let Some(event) = &event {
            self.apply(event.clone());
        }
        Ok(event)
    }

    /// Turns a command line into an event against the current store without
    /// applying it.
    pub fn parse(&self, line: &str) -> Result<Option<Event>, InputError> {
        let parsed = parse_line(line);
        let command = parsed.words.first().ok_or(InputError::EmptyCommand)?;
        let command = expand_key(&command.to_lowercase(), &COMMANDS)
            .map_err(|_| InputError::UnknownCommand(command.clone()))?;

        match command.as_str() {
            "subject" => self.parse_subject(parsed.normalize_keys(&SUBJECT_KEYS)?).map(Some),
            "grade" => self.parse_grade(parsed.normalize_keys(&GRADE_KEYS)?),
            "rename" => self.parse_rename(parsed.normalize_keys(&NO_KEYS)?),
            "edit" => self.parse_edit(parsed.normalize_keys(&EDIT_KEYS)?),
            "delete" => self.parse_delete(parsed.normalize_keys(&NO_KEYS)?),
            "toggle" => self.parse_toggle(parsed.normalize_keys(&NO_KEYS)?),
            "period" => self.parse_period(parsed.normalize_keys(&PERIOD_KEYS)?).map(Some),
            _ => Err(InputError::UnknownCommand(command)),
        }
    }

    fn parse_subject(&self, parsed: ParsedInput) -> Result<Event, InputError> {
        let name = required_text(&parsed, 1, "subject name")?;
        let icon = parsed.metadata.get("icon").map(|i| i.parse()).transpose()?;

        let seed = match parsed.metadata.get("grade") {
            Some(title) => {
                let raw = parsed.metadata.get("score").ok_or(InputError::Missing("score"))?;
                let score = parse_score(raw, self.config.scale)?;
                Some(NewGrade::new(title.as_str(), score, self.period))
            }
            None => None,
        };

        Ok(Event::CreateSubject { name, icon, seed })
    }

    fn parse_grade(&self, parsed: ParsedInput) -> Result<Option<Event>, InputError> {
        parsed.words.get(1).ok_or(InputError::Missing("subject"))?;
        required_text(&parsed, 2, "title")?;
        let score = self.required_score(&parsed)?;

        let year = match parsed.metadata.get("year") {
            Some(y) => parse_year(y)?,
            None => self.period.year,
        };
        let semester = match parsed.metadata.get("semester") {
            Some(s) => s.parse()?,
            None => self.period.semester,
        };
        let period = self.config.check_selectable(Period::new(year, semester))?;

        Ok(self.leading_subject(&parsed.words, 1).map(|(subject_id, end)| Event::CreateGrade {
            subject_id,
            grade: NewGrade::new(parsed.text_from(end), score, period),
        }))
    }

    fn parse_rename(&self, parsed: ParsedInput) -> Result<Option<Event>, InputError> {
        parsed.words.get(1).ok_or(InputError::Missing("subject"))?;
        required_text(&parsed, 2, "subject name")?;

        Ok(self.leading_subject(&parsed.words, 1).map(|(subject_id, end)| {
            Event::UpdateSubjectName { subject_id, name: parsed.text_from(end) }
        }))
    }

    fn parse_edit(&self, parsed: ParsedInput) -> Result<Option<Event>, InputError> {
        parsed.words.get(1).ok_or(InputError::Missing("grade"))?;
        required_text(&parsed, 2, "title")?;
        let score = self.required_score(&parsed)?;

        let found = leading_reference(&parsed.words, 1, 1, |r| self.service.resolve_grade(r));
        if found.is_none() {
            debug!(reference = %parsed.words[1], "no grade matches");
        }
        Ok(found.map(|(grade_id, end)| Event::UpdateGrade {
            grade_id,
            title: parsed.text_from(end),
            score,
        }))
    }

    /// `delete <subject…> <grade…>`; the grade is a title or id prefix.
    fn parse_delete(&self, parsed: ParsedInput) -> Result<Option<Event>, InputError> {
        parsed.words.get(1).ok_or(InputError::Missing("subject"))?;
        required_text(&parsed, 2, "grade")?;

        let Some((subject_id, end)) = self.leading_subject(&parsed.words, 1) else {
            return Ok(None);
        };
        let grade_ref = parsed.text_from(end);
        let grade_id = self.service.resolve_grade_in(&subject_id, &grade_ref);
        if grade_id.is_none() {
            debug!(reference = %grade_ref, "no grade matches");
        }
        Ok(grade_id.map(|grade_id| Event::DeleteGrade { subject_id, grade_id }))
    }

    fn parse_toggle(&self, parsed: ParsedInput) -> Result<Option<Event>, InputError> {
        parsed.words.get(1).ok_or(InputError::Missing("subject"))?;
        let found = leading_reference(&parsed.words, 1, 0, |r| self.service.resolve_subject(r));
        if found.is_none() {
            debug!(reference = %parsed.text_from(1), "no subject matches");
        }
        Ok(found.map(|(subject_id, _)| Event::ToggleVisibility { subject_id }))
    }

    /// `period 2024 2`, `period 2024/S2` or `period year:2024 sem:2`; a
    /// missing half keeps the current selection.
    fn parse_period(&self, parsed: ParsedInput) -> Result<Event, InputError> {
        let period = match (parsed.words.get(1), parsed.words.get(2)) {
            (Some(year), Some(semester)) => Period::new(parse_year(year)?, semester.parse()?),
            (Some(single), None) => match single.parse::<Period>() {
                Ok(period) => period,
                Err(_) => Period::new(parse_year(single)?, self.semester_option(&parsed)?),
            },
            _ => {
                let year = match parsed.metadata.get("year") {
                    Some(y) => parse_year(y)?,
                    None => self.period.year,
                };
                Period::new(year, self.semester_option(&parsed)?)
            }
        };

        Ok(Event::SelectPeriod(self.config.check_selectable(period)?))
    }

    fn semester_option(&self, parsed: &ParsedInput) -> Result<Semester, InputError> {
        match parsed.metadata.get("semester") {
            Some(s) => s.parse(),
            None => Ok(self.period.semester),
        }
    }

    fn required_score(&self, parsed: &ParsedInput) -> Result<f64, InputError> {
        let raw = parsed.metadata.get("score").ok_or(InputError::Missing("score"))?;
        parse_score(raw, self.config.scale)
    }

    /// Subject named by the leading words from `start`, keeping at least one
    /// word after it for the title, new name or grade.
    fn leading_subject(&self, words: &[String], start: usize) -> Option<(Uuid, usize)> {
        let found = leading_reference(words, start, 1, |r| self.service.resolve_subject(r));
        if found.is_none() {
            debug!(reference = %words[start], "no subject matches");
        }
        found
    }
}

/// Resolves the longest run of words from `start` that names something,
/// leaving `keep` words after it. Returns the id and the index of the first
/// word after the reference.
fn leading_reference<F>(words: &[String], start: usize, keep: usize, resolve: F) -> Option<(Uuid, usize)>
where
    F: Fn(&str) -> Option<Uuid>,
{
    let last = words.len().checked_sub(keep)?;
    (start + 1..=last)
        .rev()
        .find_map(|end| resolve(&words[start..end].join(" ")).map(|id| (id, end)))
}

fn required_text(parsed: &ParsedInput, start: usize, what: &'static str) -> Result<String, InputError> {
    let text = parsed.text_from(start);
    if text.is_empty() {
        Err(InputError::Missing(what))
    } else {
        Ok(text)
    }
}
