use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_OK, TEXT, TEXT_DIM};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, api_base: &str, loading: bool, total_results: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(TEXT_DIM);

        let status = if loading {
            Span::styled("syncing…".to_string(), Style::default().fg(ACCENT))
        } else {
            Span::styled(format!("{total_results} products"), Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  prodcat", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(api_base.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
