use crate::store::FetchStatus;
use crate::ui::app::{App, Notice};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    HEADER_SEPARATOR, HEADER_TEXT, LINK_TEXT, QUOTE_ACCENT, QUOTE_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const QUOTE_BOX_WIDTH: u16 = 72;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(&state.status, state.quotes.len()), header);
    frame.render_widget(Clear, body);
    match &state.status {
        FetchStatus::Idle => {}
        FetchStatus::Waiting | FetchStatus::Received => {
            draw_loading(frame, body, app.spinner_tick())
        }
        FetchStatus::NewQuoteSelected => draw_quote(frame, body, app),
        FetchStatus::Failed { message } => draw_error(frame, body, message),
    }
    frame.render_widget(Footer::new().widget(footer, &state.status), footer);
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect, tick: u8) {
    let spinner = SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(QUOTE_ACCENT)),
        Span::styled(" Loading quotes...", Style::default().fg(HEADER_TEXT)),
    ]);
    let area = centered_rect_by_size(body, line.width() as u16, 1);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_quote(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let Some(quote) = app.state().current() else {
        return;
    };

    let width = QUOTE_BOX_WIDTH.min(body.width);
    let inner_width = width.saturating_sub(4).max(1) as usize;

    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);
    let key_style = Style::default().fg(QUOTE_ACCENT).add_modifier(Modifier::BOLD);

    let quoted = format!("\u{201c}{}\u{201d}", quote.text);

    let mut lines = vec![
        Line::from(Span::styled(quoted, text_style.add_modifier(Modifier::ITALIC))),
        Line::from(""),
        Line::from(Span::styled(
            format!("- {}", quote.author),
            Style::default().fg(QUOTE_ACCENT),
        ))
        .alignment(Alignment::Right),
        Line::from(""),
        Line::from(vec![
            Span::styled("[N]", key_style),
            Span::styled(" Get New Quote    ", text_style),
            Span::styled("[T]", key_style),
            Span::styled(" Tweet Quote", text_style),
        ]),
    ];

    match app.share_link() {
        Some(Ok(link)) => lines.push(Line::from(Span::styled(
            clip(&link.url, inner_width),
            Style::default().fg(LINK_TEXT).add_modifier(Modifier::UNDERLINED),
        ))),
        Some(Err(err)) => lines.push(Line::from(Span::styled(
            err.user_message(),
            Style::default().fg(STATUS_ERROR),
        ))),
        None => {}
    }

    match app.notice() {
        Some(Notice::Info(message)) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_OK),
        ))),
        Some(Notice::Error(message)) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))),
        None => lines.push(Line::from(Span::styled("", dim_style))),
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    let height = boxed_height(&paragraph, inner_width, body.height);
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(QUOTE_BORDER))
        .padding(Padding::horizontal(1));
    frame.render_widget(paragraph.block(block), area);
}

fn draw_error(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Could not load quotes",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to retry or Q to quit",
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];
    let width = QUOTE_BOX_WIDTH.min(body.width);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let height = boxed_height(&paragraph, width.saturating_sub(4).max(1) as usize, body.height);
    let area = centered_rect_by_size(body, width, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR))
        .padding(Padding::horizontal(1));
    frame.render_widget(paragraph.block(block), area);
}

/// Outer height of a bordered box holding `paragraph`, wrapped the way
/// ratatui renders it at `inner_width` columns and capped at `max`.
fn boxed_height(paragraph: &Paragraph<'_>, inner_width: usize, max: u16) -> u16 {
    let rows = paragraph.line_count(inner_width.min(u16::MAX as usize) as u16);
    (rows + 2).min(max as usize) as u16
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
