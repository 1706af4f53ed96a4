//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::LetterFeedback;
use crate::grid::{Cell, CellRef, Row, RowStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app.session.dictionary_name());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

/// Shown while the word of the day is being fetched
pub fn loading(f: &mut Frame, source: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(f.area());

    render_header(f, chunks[0], source);

    let body = Paragraph::new(format!("Loading word of the day from {source}…"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);
}

fn render_header(f: &mut Frame, area: Rect, source: &str) {
    let header = Paragraph::new(format!("WORDLE  ({source})"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let focus = app.session.focus();
    let mut lines = vec![Line::raw("")];

    for (index, row) in app.session.grid().rows().iter().enumerate() {
        let offset = usize::from(app.shake_offset(index));
        let mut spans = vec![Span::raw(" ".repeat(offset))];
        spans.extend(row_spans(row, index, focus));
        spans.push(Span::raw(" ".repeat(2 - offset.min(2))));
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn row_spans(row: &Row, index: usize, focus: Option<CellRef>) -> Vec<Span<'static>> {
    row.cells()
        .iter()
        .enumerate()
        .flat_map(|(i, cell)| {
            let feedback = row.feedback().and_then(|fb| fb.letters().get(i).copied());
            let focused = focus == Some(CellRef::new(index, i));
            let style = cell_style(row.status(), feedback, focused);
            [Span::styled(cell_text(cell, row.status()), style), Span::raw(" ")]
        })
        .collect()
}

fn cell_text(cell: &Cell, status: RowStatus) -> String {
    match (cell.value(), status) {
        (Some(letter), _) => format!(" {letter} "),
        (None, RowStatus::Active) => " _ ".to_string(),
        (None, _) => " · ".to_string(),
    }
}

fn cell_style(status: RowStatus, feedback: Option<LetterFeedback>, focused: bool) -> Style {
    match (status, feedback) {
        (RowStatus::Locked, Some(kind)) => Style::default()
            .fg(Color::Black)
            .bg(feedback_color(kind))
            .add_modifier(Modifier::BOLD),
        (RowStatus::Active, _) if focused => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        (RowStatus::Active, _) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    }
}

const fn feedback_color(kind: LetterFeedback) -> Color {
    match kind {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    if let Some(share) = app.session.share_text() {
        items.insert(0, ListItem::new(""));
        for line in share.lines().rev() {
            items.insert(0, ListItem::new(line.to_string()));
        }
    }

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let grid = app.session.grid();
    let progress = match grid.active_index() {
        Some(row) => format!("Guess {}/{}", row + 1, grid.row_count()),
        None => format!("Used {}/{}", grid.locked_count(), grid.row_count()),
    };
    let progress = if app.session.is_busy() {
        format!("{progress} | checking…")
    } else {
        progress
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if app.session.is_over() {
        "Enter/q: Quit"
    } else {
        "Letters: type | Backspace: delete | Enter: submit | Esc: quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
