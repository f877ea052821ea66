use crate::ui::app::View;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page title bar with the view tabs.
pub struct Header {
    title: String,
    description: String,
}

impl Header {
    pub fn new(title: String, description: String) -> Self {
        Self { title, description }
    }

    pub fn widget(&self, active: View) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.clone(), text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.description.clone(), Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, view) in View::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" ", text_style));
            }
            let style = if *view == active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} {} ", idx + 1, view.label()), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
