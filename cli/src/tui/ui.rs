use gradebook_core::{GradeTier, SubjectCard};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer / command line
        ])
        .split(size);

    let header = Paragraph::new("GRADEBOOK")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    draw_sidebar(f, app, content_chunks[0]);
    draw_cards(f, app, content_chunks[1]);
    draw_footer(f, app, main_chunks[2]);
}

fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let period = app.view.period;
    let period_text = vec![
        Line::from(vec![
            Span::styled("Year: ", Style::default().fg(Color::Blue)),
            Span::raw(period.year.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Term: ", Style::default().fg(Color::Blue)),
            Span::raw(period.semester.label()),
        ]),
    ];
    let period_block = Paragraph::new(period_text)
        .block(Block::default().title(" Period ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(period_block, chunks[0]);

    let items: Vec<ListItem> = app.view.sidebar.iter().map(|entry| {
        let (marker, style) = if entry.visible {
            ("●", Style::default())
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        let icon = entry.icon.map(|i| format!(" [{}]", i)).unwrap_or_default();
        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(entry.name.clone(), style.add_modifier(Modifier::BOLD)),
            Span::styled(icon, Style::default().fg(Color::DarkGray)),
        ]))
    }).collect();

    let list = List::new(items)
        .block(Block::default().title(" Subjects ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, chunks[1], &mut app.state);
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let suffix = app.view.scale.suffix();
    let mut lines: Vec<Line> = Vec::new();

    for card in &app.view.cards {
        lines.extend(card_lines(card, suffix));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No grades for this period",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(" {} ", app.view.period);
    let cards = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded))
        .wrap(Wrap { trim: true });
    f.render_widget(cards, area);
}

fn card_lines<'a>(card: &'a SubjectCard, suffix: &'a str) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(card.name.as_str(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            format!("Average: {:.2}{}", card.rounded_average, suffix),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    for grade in &card.grades {
        let tier_color = match grade.tier {
            GradeTier::VeryGood => Color::Green,
            GradeTier::Good => Color::Yellow,
            GradeTier::NeedsWork => Color::Red,
        };
        let short_id = grade.id.to_string()[..8].to_string();
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(tier_color)),
            Span::raw(grade.title.as_str()),
            Span::raw("  "),
            Span::styled(format!("{}{}", grade.score, suffix), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", short_id), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Command => {
            let prompt = ":";
            let line = Paragraph::new(format!("{}{}", prompt, app.input));
            f.render_widget(line, area);

            let before_cursor: String = app.input.chars().take(app.cursor_position).collect();
            let x = area.x + (prompt.width() + before_cursor.width()) as u16;
            f.set_cursor_position((x.min(area.x + area.width.saturating_sub(1)), area.y));
        }
        InputMode::Normal => {
            let (text, style) = match &app.status {
                Some(status) => (status.clone(), Style::default().fg(Color::Red)),
                None => (
                    "j/k: Navigate | space: Show/Hide | y/s: Year/Term | a: Command | g/r/d: Grade/Rename/Delete | q: Quit".to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            let footer = Paragraph::new(text).style(style).alignment(Alignment::Center);
            f.render_widget(footer, area);
        }
    }
}
