use crate::ai;
use crate::game::{GameStatus, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::error;
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::OpponentFactory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    ModeSelect,
    Playing,
}

pub struct App {
    session: Session,
    new_opponent: OpponentFactory,
    screen: Screen,
    /// 1-indexed
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, new_opponent: OpponentFactory) -> Self {
        let selected_column = middle_column(&session);
        App {
            session,
            new_opponent,
            screen: Screen::ModeSelect,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if let Err(err) = terminal.draw(|f| self.render(f)) {
                return Err(err.into());
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(std::time::Duration::from_millis(100))? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::ModeSelect => self.handle_mode_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.session.configure_human_vs_human();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.session
                    .configure_human_vs_automated((self.new_opponent)());
            }
            _ => return,
        }
        self.session.restart();
        self.screen = Screen::Playing;
        self.selected_column = middle_column(&self.session);
        self.message = Some("Beginning Game!".to_string());
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Left => {
                if self.selected_column > 1 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < self.session.columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let column = c.to_digit(10).unwrap_or(0) as usize;
                if (1..=self.session.columns()).contains(&column) {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.restart();
                self.selected_column = middle_column(&self.session);
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.screen = Screen::ModeSelect;
            }
            _ => {}
        }
    }

    /// Drop the current player's token in the selected column, then let the
    /// computer answer if it is next.
    fn drop_piece(&mut self) {
        if matches!(self.session.status(), GameStatus::Won | GameStatus::Tied) {
            self.message = Some("Game over! Press 'r' to play again.".to_string());
            return;
        }

        if !self.session.take_turn(self.selected_column) {
            self.message = Some("Invalid move! Pick another column.".to_string());
            return;
        }
        if self.finish_turn() {
            return;
        }

        let automated = self
            .session
            .current_player()
            .is_some_and(|player| !player.is_human());
        if !automated {
            return;
        }

        let name = self
            .session
            .current_player()
            .map(|player| player.name().to_string())
            .unwrap_or_default();
        match ai::play_automated_turn(&mut self.session) {
            Ok(column) => {
                self.message = Some(format!("{name} selected column {column}"));
                self.finish_turn();
            }
            Err(err) => {
                error!("automated turn failed: {err}");
                self.message = Some(format!("{name} could not move: {err}"));
            }
        }
    }

    /// Record a win or tie after a move. Returns true if the game ended.
    fn finish_turn(&mut self) -> bool {
        if self.session.check_won() {
            let winner = self
                .session
                .winner()
                .map(|player| player.name().to_string())
                .unwrap_or_default();
            self.message = Some(format!("{winner} wins! Press 'r' to play again."));
            true
        } else if self.session.check_tied() {
            self.message = Some("It's a tie! Press 'r' to play again.".to_string());
            true
        } else {
            false
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::ModeSelect => super::game_view::render_mode_select(frame),
            Screen::Playing => super::game_view::render(
                frame,
                &self.session,
                self.selected_column,
                &self.message,
            ),
        }
    }
}

fn middle_column(session: &Session) -> usize {
    session.columns().div_ceil(2)
}
