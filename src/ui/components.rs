//! Small rendering helpers shared by the home and resources views.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::ui::theme::{
    TAG_BLUE_BG, TAG_BLUE_FG, TAG_GREEN_BG, TAG_GREEN_FG, TAG_PURPLE_BG, TAG_PURPLE_FG,
};

/// Colour family of a tag chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTone {
    Blue,
    Green,
    Purple,
}

impl TagTone {
    const CYCLE: [TagTone; 3] = [TagTone::Blue, TagTone::Green, TagTone::Purple];

    /// Tone for the n-th chip when a row mixes colours.
    pub fn nth(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn style(self) -> Style {
        let (fg, bg) = match self {
            TagTone::Blue => (TAG_BLUE_FG, TAG_BLUE_BG),
            TagTone::Green => (TAG_GREEN_FG, TAG_GREEN_BG),
            TagTone::Purple => (TAG_PURPLE_FG, TAG_PURPLE_BG),
        };
        Style::default().fg(fg).bg(bg)
    }
}

/// One padded chip followed by a gap.
pub fn tag_chip(tag: &str, tone: TagTone) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", tag), tone.style()),
        Span::raw(" "),
    ]
}

/// A row of chips sharing one tone.
pub fn tag_row(tags: &[String], tone: TagTone) -> Vec<Span<'static>> {
    tags.iter().flat_map(|tag| tag_chip(tag, tone)).collect()
}

pub fn heading(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::BOLD))
}

/// Cut `text` to `max` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
