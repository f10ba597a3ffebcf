use gradebook_core::{MemorySubjectRepository, Period, PeriodView, Session};
use ratatui::widgets::ListState;

pub enum InputMode {
    Normal,
    Command,
}

pub struct App {
    pub session: Session<MemorySubjectRepository>,
    pub view: PeriodView,
    pub state: ListState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new(session: Session<MemorySubjectRepository>) -> App {
        let view = session.view();
        let mut state = ListState::default();
        if !view.sidebar.is_empty() {
            state.select(Some(0));
        }
        App {
            session,
            view,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
        }
    }

    pub fn next(&mut self) {
        if self.view.sidebar.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < self.view.sidebar.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.view.sidebar.is_empty() { return; }

        let i = match self.state.selected() {
            Some(0) | None => self.view.sidebar.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_visibility(&mut self) {
        if let Some(id) = self.selected_reference() {
            self.run(&format!("toggle {}", id));
        }
    }

    pub fn next_year(&mut self) {
        let period = self.session.period();
        let year = self.session.config().next_year(period.year);
        self.select_period(Period::new(year, period.semester));
    }

    pub fn next_semester(&mut self) {
        let period = self.session.period();
        let semester = self.session.config().next_semester(period.semester);
        self.select_period(Period::new(period.year, semester));
    }

    fn select_period(&mut self, period: Period) {
        self.run(&format!("period {}/{}", period.year, period.semester.number()));
        self.state.select(if self.view.sidebar.is_empty() { None } else { Some(0) });
    }

    fn reload_view(&mut self) {
        self.view = self.session.view();

        // Keep the selection inside the list after it shrinks.
        match self.state.selected() {
            _ if self.view.sidebar.is_empty() => self.state.select(None),
            Some(i) if i >= self.view.sidebar.len() => self.state.select(Some(self.view.sidebar.len() - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Id prefix of the highlighted sidebar subject.
    fn selected_reference(&self) -> Option<String> {
        let i = self.state.selected()?;
        let entry = self.view.sidebar.get(i)?;
        Some(entry.id.to_string()[..8].to_string())
    }

    pub fn enter_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Opens the command line prefilled with `command <selected subject> `.
    pub fn enter_command_for_selected(&mut self, command: &str) {
        match self.selected_reference() {
            Some(reference) => {
                self.input_mode = InputMode::Command;
                self.input = format!("{} {} ", command, reference);
                self.cursor_position = self.input.chars().count();
            }
            None => self.enter_command_mode(),
        }
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        let line = std::mem::take(&mut self.input);
        self.run(&line);

        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn run(&mut self, line: &str) {
        self.status = match self.session.execute(line) {
            Ok(Some(_)) => None,
            Ok(None) => Some("Nothing matched".to_string()),
            Err(err) => Some(format!("Error: {}", err)),
        };
        self.reload_view();
    }
}
