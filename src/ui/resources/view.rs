//! Rendering for the coding resources view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::resources::{CodingResource, Selection};
use crate::ui::components::{heading, tag_row, truncate, TagTone};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BUTTON_BG, BUTTON_DISABLED_BG, BUTTON_TEXT, CARD_BORDER, ERROR_BG,
    FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, LINK, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{ResourcesFocus, ResourcesState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows taken by one card: border, description, three tag rows, link, border.
pub const CARD_HEIGHT: u16 = 7;

const CONTROL_HEIGHT: u16 = 3;

/// Cards per grid row for a body `width` cells wide.
pub fn grid_columns(width: u16) -> usize {
    if width >= 120 {
        3
    } else if width >= 80 {
        2
    } else {
        1
    }
}

pub fn load_button_label(state: &ResourcesState, limit: usize) -> String {
    if state.loading {
        "Loading...".to_string()
    } else {
        format!("Load Top {} Coding Resources", limit)
    }
}

fn selection_label(selection: &Selection, all_label: &str) -> String {
    match selection {
        Selection::All => all_label.to_string(),
        Selection::Tag(tag) => tag.clone(),
    }
}

pub fn render_resources(frame: &mut Frame, area: Rect, state: &ResourcesState, limit: usize) {
    let mut constraints = vec![Constraint::Length(CONTROL_HEIGHT)];
    if state.error.is_some() {
        constraints.push(Constraint::Length(CONTROL_HEIGHT));
    }
    if state.has_resources() {
        constraints.push(Constraint::Length(CONTROL_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = chunks.iter().copied();

    if let Some(button_area) = next.next() {
        render_load_button(frame, button_area, state, limit);
    }

    if let Some(error) = &state.error {
        if let Some(error_area) = next.next() {
            render_error(frame, error_area, error);
        }
    }

    if !state.has_resources() {
        return;
    }

    let view = state.filter_view();
    if let Some(filters_area) = next.next() {
        render_filters(frame, filters_area, state, view.topic_options.len(), view.level_options.len());
    }
    if let Some(grid_area) = next.next() {
        render_grid(frame, grid_area, state, &view.filtered);
    }
}

fn render_load_button(frame: &mut Frame, area: Rect, state: &ResourcesState, limit: usize) {
    let focused = state.focus == ResourcesFocus::LoadButton;
    let label = load_button_label(state, limit);

    let mut spans = Vec::new();
    if state.loading {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        spans.push(Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)));
    }
    spans.push(Span::raw(label));

    let style = if state.is_trigger_enabled() {
        let base = Style::default().fg(BUTTON_TEXT).bg(BUTTON_BG);
        if focused {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        }
    } else {
        Style::default()
            .fg(BUTTON_TEXT)
            .bg(BUTTON_DISABLED_BG)
            .add_modifier(Modifier::DIM)
    };

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style(focused)));
    frame.render_widget(widget, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let widget = Paragraph::new(Line::from(format!(" {}", error)))
        .style(Style::default().fg(STATUS_ERROR).bg(ERROR_BG))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(widget, area);
}

fn render_filters(
    frame: &mut Frame,
    area: Rect,
    state: &ResourcesState,
    topic_count: usize,
    level_count: usize,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_select(
        frame,
        halves[0],
        " Filter by topic ",
        &selection_label(&state.selected_topic, "All Topics"),
        topic_count,
        state.focus == ResourcesFocus::TopicFilter,
    );
    render_select(
        frame,
        halves[1],
        " Filter by level ",
        &selection_label(&state.selected_level, "All Levels"),
        level_count,
        state.focus == ResourcesFocus::LevelFilter,
    );
}

fn render_select(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    option_count: usize,
    focused: bool,
) {
    let value_style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let line = Line::from(vec![
        Span::styled(" ◀ ", Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶ ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!(" {} option{}", option_count + 1, if option_count == 0 { "" } else { "s" }),
            Style::default().fg(MUTED_TEXT),
        ),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );
    frame.render_widget(widget, area);
}

fn render_grid(frame: &mut Frame, area: Rect, state: &ResourcesState, filtered: &[&CodingResource]) {
    if area.height == 0 {
        return;
    }
    if filtered.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No resources match the selected filters.",
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let columns = grid_columns(area.width);
    let total_rows = filtered.len().div_ceil(columns);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let selected = state.selected_card.min(filtered.len() - 1);
    let selected_row = selected / columns;
    // Scroll just far enough to keep the selected row on screen.
    let first_row = (selected_row + 1).saturating_sub(visible_rows);
    let cards_focused = state.focus == ResourcesFocus::Cards;

    for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let y = area.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.y + area.height - y);
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            let Some(resource) = filtered.get(index) else {
                break;
            };
            render_card(frame, *cell, resource, cards_focused && index == selected);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, resource: &CodingResource, highlighted: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(heading(truncate(&resource.description, inner_width))),
        Line::from(tag_row(&resource.types, TagTone::Blue)),
        Line::from(tag_row(&resource.topics, TagTone::Green)),
        Line::from(tag_row(&resource.levels, TagTone::Purple)),
        Line::from(vec![
            Span::styled("Visit Resource → ", Style::default().fg(LINK).add_modifier(Modifier::BOLD)),
            Span::styled(resource.url.clone(), Style::default().fg(MUTED_TEXT)),
        ]),
    ];

    let border = if highlighted {
        Style::default().fg(FOCUS_BORDER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CARD_BORDER)
    };
    let mut widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border));
    if highlighted {
        widget = widget.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    frame.render_widget(widget, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}
