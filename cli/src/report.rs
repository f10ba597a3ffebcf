use gradebook_core::{GradeTier, PeriodView};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use uuid::Uuid;

#[derive(Tabled)]
struct GradeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Tier")]
    tier: &'static str,
}

#[derive(Tabled)]
struct SubjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Subject")]
    name: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Shown")]
    shown: &'static str,
}

fn tier_label(tier: GradeTier) -> &'static str {
    match tier {
        GradeTier::VeryGood => "very good",
        GradeTier::Good => "good",
        GradeTier::NeedsWork => "needs work",
    }
}

fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

pub fn render_view(view: &PeriodView) -> String {
    let mut out = String::new();
    out.push_str(&format!("\x1b[1;36m{}\x1b[0m\n", view.period));

    if view.sidebar.is_empty() {
        out.push_str("No grades for this period.\n");
        return out;
    }

    let subjects: Vec<SubjectRow> = view.sidebar.iter().map(|s| SubjectRow {
        id: short_id(&s.id),
        name: s.name.clone(),
        icon: s.icon.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string()),
        shown: if s.visible { "yes" } else { "no" },
    }).collect();
    out.push_str(&styled(Table::new(subjects)));
    out.push('\n');

    let suffix = view.scale.suffix();
    for card in &view.cards {
        out.push_str(&format!(
            "\n\x1b[1m{}\x1b[0m (Average: {:.2}{})\n",
            card.name, card.rounded_average, suffix
        ));

        let rows: Vec<GradeRow> = card.grades.iter().map(|g| GradeRow {
            id: short_id(&g.id),
            title: g.title.clone(),
            score: format!("{}{}", g.score, suffix),
            tier: tier_label(g.tier),
        }).collect();
        out.push_str(&styled(Table::new(rows)));
        out.push('\n');
    }
    out
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::{GradebookConfig, Period, Semester, Session};

    #[test]
    fn test_render_view_lists_cards_and_hidden_subjects() {
        let mut session = Session::from_config(GradebookConfig::swiss())
            .with_period(Period::new(2024, Semester::First));
        session.execute("toggle Physique").unwrap();

        let out = render_view(&session.view());
        assert!(out.contains("2024 S1"));
        assert!(out.contains("Mathématiques"));
        assert!(out.contains("Average: 3.50/6"));
        assert!(out.contains("Géométrie"));
        // Hidden subjects stay in the subject table but get no card.
        assert!(out.contains("Physique"));
        assert!(!out.contains("Mécanique"));
    }

    #[test]
    fn test_render_empty_period() {
        let session = Session::from_config(GradebookConfig::swiss())
            .with_period(Period::new(2021, Semester::Summer));
        assert!(render_view(&session.view()).contains("No grades for this period."));
    }
}
