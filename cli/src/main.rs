mod report;
mod tui;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gradebook_core::{GradeScale, GradebookConfig, MemorySubjectRepository, Period, Semester, Session};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Subjects, grades and period averages for one session", long_about = None)]
struct Cli {
    /// Marking scale: six (1-6) or twenty (0-20)
    #[arg(long, global = true, env = "GRADEBOOK_SCALE", default_value = "six")]
    scale: GradeScale,

    /// Terms per year: 2, or 3 with a summer term
    #[arg(long, global = true, env = "GRADEBOOK_TERMS")]
    terms: Option<u8>,

    /// Start without the example subjects
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print subjects and averages for one period
    Show {
        #[arg(long)]
        year: Option<i32>,
        /// 1, 2 or summer
        #[arg(long)]
        semester: Option<Semester>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
        /// Print every subject and grade as JSON instead of the view
        #[arg(long, conflicts_with = "json")]
        snapshot: bool,
    },
    /// Run gradebook commands from FILE (or stdin), then print the result
    /// (usage: grade Mathématiques Algèbre score:5.5)
    Batch {
        file: Option<PathBuf>,
        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
        /// Print every subject and grade as JSON instead of the view
        #[arg(long, conflicts_with = "json")]
        snapshot: bool,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook=warn,gradebook_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<GradebookConfig> {
    let mut config = GradebookConfig::for_scale(cli.scale);
    if let Some(terms) = cli.terms {
        config = config.with_terms(terms)?;
    }
    if cli.empty {
        config = config.without_seed();
    }
    Ok(config)
}

fn render_output(session: &Session<MemorySubjectRepository>, json: bool, snapshot: bool) -> Result<String> {
    if snapshot {
        return Ok(format!("{}\n", session.service().snapshot_json()?));
    }
    let view = session.view();
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
    } else {
        Ok(report::render_view(&view))
    }
}

/// Runs each command line through the session. Malformed lines are reported
/// to `warnings` and skipped.
fn run_batch(
    session: &mut Session<MemorySubjectRepository>,
    reader: impl BufRead,
    warnings: &mut impl Write,
) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match session.execute(trimmed) {
            Ok(Some(event)) => debug!(line = index + 1, ?event, "applied"),
            Ok(None) => debug!(line = index + 1, "nothing matched"),
            Err(e) => {
                writeln!(warnings, "Warning: line {}: {}", index + 1, e)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let mut session = Session::from_config(config);

    match cli.command {
        Some(Commands::Show { year, semester, json, snapshot }) => {
            let current = session.period();
            let period = Period::new(
                year.unwrap_or(current.year),
                semester.unwrap_or(current.semester),
            );
            let period = session.config().check_selectable(period)?;
            session = session.with_period(period);
            print!("{}", render_output(&session, json, snapshot)?);
        },
        Some(Commands::Batch { file, json, snapshot }) => {
            let mut warnings = io::stderr();
            match file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Could not open {}", path.display()))?;
                    run_batch(&mut session, BufReader::new(file), &mut warnings)?;
                }
                None => run_batch(&mut session, io::stdin().lock(), &mut warnings)?,
            }
            print!("{}", render_output(&session, json, snapshot)?);
        },
        Some(Commands::Tui) | None => {
            tui::run(session)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_run_batch_skips_bad_lines() {
        let mut session = Session::from_config(GradebookConfig::swiss().without_seed())
            .with_period(Period::new(2024, Semester::First));
        let script = "\
# comment
subject Chimie icon:flask
grade Chimie Titrage score:5
grade Chimie Broken score:9
grade Chimie Réaction score:4
toggle Nowhere
";
        let mut warnings = Vec::new();
        run_batch(&mut session, Cursor::new(script), &mut warnings).unwrap();

        let warnings = String::from_utf8(warnings).unwrap();
        assert_eq!(warnings.lines().count(), 1);
        assert!(warnings.starts_with("Warning: line 4:"));

        let view = session.view();
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].grades.len(), 2);
        assert_eq!(view.cards[0].average, 4.5);
    }

    #[test]
    fn test_batch_json_output_stays_parseable() {
        let mut session = Session::from_config(GradebookConfig::swiss().without_seed())
            .with_period(Period::new(2024, Semester::First));
        let script = "subject Chimie\ngrade Chimie Titrage score:abc\ngrade Chimie Réaction score:4\n";
        let mut warnings = Vec::new();
        run_batch(&mut session, Cursor::new(script), &mut warnings).unwrap();
        assert!(!warnings.is_empty());

        let output = render_output(&session, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["cards"][0]["name"], "Chimie");
        assert_eq!(value["cards"][0]["grades"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_output_lists_every_subject() {
        let mut session = Session::from_config(GradebookConfig::swiss())
            .with_period(Period::new(2025, Semester::First));
        session.execute("toggle Physique").unwrap();

        let output = render_output(&session, false, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let subjects = value.as_array().unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[1]["name"], "Physique");
        assert_eq!(subjects[1]["visible"], false);
        assert_eq!(subjects[0]["grades"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_snapshot_flag_conflicts_with_json() {
        assert!(Cli::try_parse_from(["gradebook", "show", "--json", "--snapshot"]).is_err());
        assert!(Cli::try_parse_from(["gradebook", "batch", "--snapshot"]).is_ok());
    }

    #[test]
    fn test_build_config_from_flags() {
        let cli = Cli::parse_from(["gradebook", "--scale", "twenty", "--terms", "3", "--empty", "tui"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.scale, GradeScale::Twenty);
        assert_eq!(config.semesters.len(), 3);
        assert!(!config.seed);
    }
}
