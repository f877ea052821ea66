//! Home page: hero, projects, about and contact sections.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::{Profile, Project};
use crate::ui::components::{heading, tag_chip, TagTone};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LINK, MUTED_TEXT};

pub fn home_lines(profile: &Profile) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Hi, I'm {}", profile.name),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(format!(
            "I am a {}. Welcome to my portfolio!",
            profile.profession
        ))
        .centered(),
    ];

    section(&mut lines, "Projects");
    if profile.projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "No projects yet.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for (idx, project) in profile.projects.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(project_lines(project));
    }

    section(&mut lines, "About Me");
    lines.push(Line::from(profile.bio.clone()));

    section(&mut lines, "Contact");
    lines.push(Line::from(vec![
        Span::raw("Reach me at "),
        Span::styled(
            profile.email.clone(),
            Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(HEADER_SEPARATOR),
    )));
    lines.push(Line::from(heading(title.to_string())));
    lines.push(Line::from(""));
}

fn project_lines(project: &Project) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(heading(project.title.clone())),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    if !project.tags.is_empty() {
        let chips: Vec<Span<'static>> = project
            .tags
            .iter()
            .enumerate()
            .flat_map(|(idx, tag)| tag_chip(tag, TagTone::nth(idx)))
            .collect();
        lines.push(Line::from(chips));
    }

    let mut links = Vec::new();
    if let Some(url) = &project.project_url {
        links.push(Span::styled(
            format!("View Project → {}", url),
            Style::default().fg(LINK),
        ));
    }
    if let Some(url) = &project.source_url {
        if !links.is_empty() {
            links.push(Span::raw("    "));
        }
        links.push(Span::styled(
            format!("GitHub → {}", url),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    if !links.is_empty() {
        lines.push(Line::from(links));
    }

    lines
}

pub fn render_home(frame: &mut Frame, area: Rect, profile: &Profile, scroll: u16) {
    let widget = Paragraph::new(home_lines(profile))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}
