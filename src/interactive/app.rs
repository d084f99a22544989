//! TUI application state and logic

use crate::core::{Board, Lexicon};
use crate::solver::{Solution, Solver, TraceEvent, TraceRecorder};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Time between replay steps
const TICK_RATE: Duration = Duration::from_millis(50);

/// Fastest replay speed in events per tick
const MAX_SPEED: usize = 4096;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub rows: usize,
    pub cols: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub board: Option<Board>,
    pub solution: Option<Solution>,
    pub trace: Vec<TraceEvent>,
    pub trace_truncated: bool,
    pub cursor: usize,
    pub path: Vec<(usize, usize)>,
    pub found: Vec<String>,
    pub speed: usize,
    pub paused: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    BoardEntry,
    Replay,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, rows: usize, cols: usize) -> Self {
        Self {
            solver: Solver::new(lexicon),
            rows,
            cols,
            input_mode: InputMode::BoardEntry,
            input_buffer: String::new(),
            board: None,
            solution: None,
            trace: Vec::new(),
            trace_truncated: false,
            cursor: 0,
            path: Vec::new(),
            found: Vec::new(),
            speed: 1,
            paused: false,
            messages: vec![Message {
                text: format!(
                    "Type {} letters and press Enter, or TAB for a random board.",
                    rows.saturating_mul(cols)
                ),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Validate `letters`, solve the board and start replaying the search
    pub fn load_board(&mut self, letters: &str) {
        match Board::new(self.rows, self.cols, letters.trim()) {
            Ok(board) => self.start_replay(board),
            Err(e) => self.add_message(&format!("Invalid board: {e}"), MessageStyle::Error),
        }
    }

    pub fn random_board(&mut self) {
        match Board::random(self.rows, self.cols, &mut rand::rng()) {
            Ok(board) => self.start_replay(board),
            Err(e) => self.add_message(&format!("Invalid board: {e}"), MessageStyle::Error),
        }
    }

    fn start_replay(&mut self, board: Board) {
        let mut working = board.clone();
        let mut recorder = TraceRecorder::new();

        match self.solver.solve_with_observer(&mut working, &mut recorder) {
            Ok(solution) => {
                self.add_message(
                    &format!(
                        "Board {}: {} words, {} points. Replaying search...",
                        board.letters(),
                        solution.len(),
                        solution.score()
                    ),
                    MessageStyle::Info,
                );
                if recorder.is_truncated() {
                    self.add_message(
                        "Search trace is too long; replay shows the beginning only.",
                        MessageStyle::Error,
                    );
                }
                self.trace_truncated = recorder.is_truncated();
                self.trace = recorder.into_events();
                self.solution = Some(solution);
                self.board = Some(board);
                self.input_buffer.clear();
                self.restart_replay();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Rewind the replay to the first event
    pub fn restart_replay(&mut self) {
        self.cursor = 0;
        self.path.clear();
        self.found.clear();
        self.paused = false;
        self.input_mode = InputMode::Replay;
        if self.trace.is_empty() {
            self.finish_replay();
        }
    }

    /// Apply up to `count` trace events
    pub fn step(&mut self, count: usize) {
        for _ in 0..count {
            let Some(event) = self.trace.get(self.cursor) else {
                break;
            };
            match event {
                TraceEvent::Occupied { row, col } => self.path.push((*row, *col)),
                TraceEvent::Released { .. } => {
                    self.path.pop();
                }
                TraceEvent::Found(word) => self.found.push(word.clone()),
            }
            self.cursor += 1;
        }

        if self.cursor >= self.trace.len() && self.input_mode == InputMode::Replay {
            self.finish_replay();
        }
    }

    /// Advance the replay by one tick
    pub fn tick(&mut self) {
        if self.input_mode == InputMode::Replay && !self.paused {
            self.step(self.speed);
        }
    }

    pub fn skip_to_end(&mut self) {
        if self.input_mode == InputMode::Replay {
            self.step(self.trace.len() - self.cursor);
        }
    }

    fn finish_replay(&mut self) {
        self.input_mode = InputMode::Finished;
        self.path.clear();
        if let Some(solution) = &self.solution {
            let text = format!(
                "Search complete: {} words, {} points.",
                solution.len(),
                solution.score()
            );
            self.add_message(&text, MessageStyle::Success);
        }
        self.add_message(
            "Press 'r' to replay, 'n' for a new board or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn faster(&mut self) {
        self.speed = (self.speed * 2).min(MAX_SPEED);
    }

    pub fn slower(&mut self) {
        self.speed = (self.speed / 2).max(1);
    }

    pub fn new_board(&mut self) {
        self.input_mode = InputMode::BoardEntry;
        self.input_buffer.clear();
        self.board = None;
        self.solution = None;
        self.trace.clear();
        self.trace_truncated = false;
        self.cursor = 0;
        self.path.clear();
        self.found.clear();
        self.add_message("Enter a new board.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Letters spelled by the cells currently on the path
    #[must_use]
    pub fn current_word(&self) -> String {
        self.board.as_ref().map_or_else(String::new, |board| {
            self.path
                .iter()
                .filter_map(|&(row, col)| board.letter(row, col))
                .collect()
        })
    }

    /// Fraction of the trace replayed so far
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            1.0
        } else {
            self.cursor as f64 / self.trace.len() as f64
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK_RATE)? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::BoardEntry => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.random_board();
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if app.input_buffer.len() < app.rows.saturating_mul(app.cols) {
                            app.input_buffer.push(c.to_ascii_uppercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.load_board(&input);
                    }
                    _ => {}
                },
                InputMode::Replay | InputMode::Finished => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(' ') => {
                        app.toggle_pause();
                    }
                    KeyCode::Char('+' | '=') => {
                        app.faster();
                    }
                    KeyCode::Char('-') => {
                        app.slower();
                    }
                    KeyCode::Enter | KeyCode::Char('e') => {
                        app.skip_to_end();
                    }
                    KeyCode::Char('r') => {
                        app.restart_replay();
                    }
                    KeyCode::Char('n') => {
                        app.new_board();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
