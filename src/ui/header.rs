use crate::store::FetchStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, QUOTE_ACCENT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: &FetchStatus, quote_count: usize) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (label, color) = status_label(status);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Random Quote Machine", Style::default().fg(QUOTE_ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(label, Style::default().fg(color)),
        ];
        if quote_count > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("{quote_count} quotes"), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(status: &FetchStatus) -> (&'static str, Color) {
    match status {
        FetchStatus::Idle => ("Idle", HEADER_SEPARATOR),
        FetchStatus::Waiting => ("Fetching", STATUS_PENDING),
        FetchStatus::Received => ("Loaded", STATUS_PENDING),
        FetchStatus::NewQuoteSelected => ("Ready", STATUS_OK),
        FetchStatus::Failed { .. } => ("Error", STATUS_ERROR),
    }
}
