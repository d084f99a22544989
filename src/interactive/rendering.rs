//! TUI rendering with ratatui
//!
//! Draws the board with the current search path highlighted.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Background of a free tile
const TILE_BACKGROUND: Color = Color::Rgb(165, 205, 255);

/// Background of a tile on the current path
const TILE_IN_USE: Color = Color::Rgb(255, 255, 11);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Replay progress
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Words and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_progress(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 BOGGLER - Search Replay")
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
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(board) = &app.board else {
        let paragraph = Paragraph::new("No board yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let head = app.path.last().copied();
    let mut lines = vec![Line::from("")];

    for row in 0..board.rows() {
        let mut spans = vec![Span::raw("  ")];
        for col in 0..board.cols() {
            let letter = board.letter(row, col).unwrap_or(' ');
            let style = if head == Some((row, col)) {
                Style::default()
                    .fg(Color::Black)
                    .bg(TILE_IN_USE)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if app.path.contains(&(row, col)) {
                Style::default()
                    .fg(Color::Black)
                    .bg(TILE_IN_USE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Black).bg(TILE_BACKGROUND)
            };
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::raw("  Path: "),
        Span::styled(
            app.current_word(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_found_words(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let mut words = app.found.clone();
    words.sort();

    let text = if words.is_empty() {
        "(none yet)".to_string()
    } else {
        words.join(" ")
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .title(format!(" Found Words ({}) ", app.found.len()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let progress_pct = (app.progress() * 100.0).clamp(0.0, 100.0) as u16;
    let label = if app.board.is_some() {
        format!(
            "{}/{} steps | depth {}",
            app.cursor,
            app.trace.len(),
            app.path.len()
        )
    } else {
        "waiting for a board".to_string()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::BoardEntry => (
            format!(
                " Board Letters ({} of {}) | Enter to solve | TAB for random ",
                app.input_buffer.len(),
                app.rows.saturating_mul(app.cols)
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Replay => (
            " Replaying | SPACE pause | +/- speed | Enter skip ".to_string(),
            if app.paused { "paused" } else { "" },
            Color::Cyan,
        ),
        InputMode::Finished => (
            " Done | r replay | n new board | q quit ".to_string(),
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let score = app.solution.as_ref().map_or(0, crate::solver::Solution::score);
    let total = app.solution.as_ref().map_or(0, crate::solver::Solution::len);

    let status = format!(
        "Words: {}/{} | Score: {} | Speed: {}x | Lexicon: {} words",
        app.found.len(),
        total,
        score,
        app.speed,
        app.solver.lexicon().len()
    );

    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
