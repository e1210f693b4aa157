use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::info;

use super::{Frontend, OpponentFactory};
use crate::ai;
use crate::game::{Session, GAME_NAME};

const SEPARATOR: &str = "-------------------------------------";
const FRONTEND_PROMPT: &str =
    "Welcome to Connect4! Press 1 to play in the console or press 2 to play with a graphical interface.";
const OPPONENT_PROMPT: &str = "Enter 'P' if you want to play against another player; \
                               enter 'C' if you want to play against the computer.";
const PLAY_AGAIN_PROMPT: &str =
    "Would you like to play again? Enter 1 for yes, or any other integer for no.";

/// Text console driver. Reads whitespace separated words from `input`, so
/// several moves may be typed on one line.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    new_opponent: OpponentFactory,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, new_opponent: OpponentFactory) -> Self {
        Console {
            input,
            output,
            pending: VecDeque::new(),
            new_opponent,
        }
    }

    /// Ask which front end to start.
    pub fn prompt_frontend(&mut self) -> io::Result<Frontend> {
        loop {
            match self.read_integer(FRONTEND_PROMPT)? {
                1 => return Ok(Frontend::Console),
                2 => return Ok(Frontend::Tui),
                _ => writeln!(self.output, "Sorry, that's not a valid selection.")?,
            }
        }
    }

    /// Play games until the user declines another one.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        loop {
            self.display_board(session)?;
            writeln!(self.output, "Beginning Game!")?;
            self.prompt_for_opponent(session)?;

            while !session.check_won() && !session.check_tied() {
                let human = session.current_player().is_none_or(|p| p.is_human());
                if human {
                    let mut selection = self.prompt_for_turn(session)?;
                    while !session.take_turn(selection) {
                        writeln!(self.output, "Invalid Column Selection. Please Try Again.")?;
                        selection = self.prompt_for_turn(session)?;
                    }
                } else {
                    let name = session
                        .current_player()
                        .map(|p| p.name().to_string())
                        .unwrap_or_default();
                    let column = ai::play_automated_turn(session).map_err(io::Error::other)?;
                    writeln!(self.output, "{SEPARATOR}")?;
                    writeln!(self.output, "{name} selected column {column}")?;
                }
                self.display_board(session)?;
            }

            match session.winner() {
                Some(winner) => writeln!(
                    self.output,
                    "Congratulations! {} has won the game.",
                    winner.name()
                )?,
                None => writeln!(self.output, "Game over. The game has resulted in a tie.")?,
            }

            if self.read_integer(PLAY_AGAIN_PROMPT)? != 1 {
                break;
            }
            session.restart();
        }

        writeln!(self.output, "Thank you for playing {GAME_NAME}")?;
        self.output.flush()
    }

    fn display_board(&mut self, session: &Session) -> io::Result<()> {
        write!(self.output, "{}", session.board())
    }

    fn prompt_for_opponent(&mut self, session: &mut Session) -> io::Result<()> {
        loop {
            let response = self.read_word(OPPONENT_PROMPT)?;
            if response.eq_ignore_ascii_case("p") {
                session.configure_human_vs_human();
                return Ok(());
            }
            if response.eq_ignore_ascii_case("c") {
                session.configure_human_vs_automated((self.new_opponent)());
                return Ok(());
            }
            info!("unrecognised opponent choice {response:?}");
            writeln!(self.output, "Invalid player choice. Please Try Again.")?;
        }
    }

    /// Column typed by the current human player. Negative numbers map to 0,
    /// which the board rejects like any other bad column.
    fn prompt_for_turn(&mut self, session: &Session) -> io::Result<usize> {
        let prompt = match session.current_player() {
            Some(player) => format!(
                "{} - your turn. Choose a column number from 1 - {}. Your token is {}.",
                player.name(),
                session.columns(),
                player.token()
            ),
            None => format!("Choose a column number from 1 - {}.", session.columns()),
        };
        let selection = self.read_integer(&prompt)?;
        Ok(usize::try_from(selection).unwrap_or(0))
    }

    fn read_integer(&mut self, prompt: &str) -> io::Result<i64> {
        writeln!(self.output, "{prompt}")?;
        loop {
            let word = self.next_word()?;
            match word.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.output, "That's not an integer.")?;
                    writeln!(self.output, "{prompt}")?;
                }
            }
        }
    }

    fn read_word(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.next_word()
    }

    fn next_word(&mut self) -> io::Result<String> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(word);
            }
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game finished",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MoveSource;
    use crate::game::Board;
    use std::io::Cursor;

    struct AlwaysColumn(usize);

    impl MoveSource for AlwaysColumn {
        fn select_column(&mut self, _board: &Board) -> usize {
            self.0
        }

        fn name(&self) -> &str {
            "Always"
        }
    }

    fn play(script: &str) -> (io::Result<()>, String) {
        let mut output = Vec::new();
        let result = {
            let mut console = Console::new(
                Cursor::new(script.as_bytes()),
                &mut output,
                Box::new(|| Box::new(AlwaysColumn(7)) as Box<dyn MoveSource>),
            );
            console.run(&mut Session::default())
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_two_player_game() {
        let (result, output) = play("P\n1 7 1 7 1 7 1\n2\n");
        result.unwrap();
        assert!(output.contains("Beginning Game!"));
        assert!(output.contains("Player 2 - your turn. Choose a column number from 1 - 7. Your token is O."));
        assert!(output.contains("Congratulations! Player 1 has won the game."));
        assert!(output.ends_with("Thank you for playing Connect4\n"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let (result, output) = play("x\np\nabc\n9\n0\n-3\n1 7 1 7 1 7 1\n0\n");
        result.unwrap();
        assert!(output.contains("Invalid player choice. Please Try Again."));
        assert!(output.contains("That's not an integer."));
        assert_eq!(output.matches("Invalid Column Selection. Please Try Again.").count(), 3);
        assert!(output.contains("Congratulations! Player 1 has won the game."));
    }

    #[test]
    fn test_game_against_computer() {
        let (result, output) = play("C\n1 1 1 1\n2\n");
        result.unwrap();
        assert_eq!(output.matches("Computer selected column 7").count(), 3);
        assert!(output.contains("Congratulations! Player 1 has won the game."));
    }

    #[test]
    fn test_computer_win_is_reported() {
        let (result, output) = play("c\n1 2 3 5\n2\n");
        result.unwrap();
        assert!(output.contains("Congratulations! Computer has won the game."));
    }

    #[test]
    fn test_play_again_restarts() {
        let (result, output) = play("P\n1 7 1 7 1 7 1\n1\nP\n7 1 7 1 7 1 7\n5\n");
        result.unwrap();
        assert_eq!(output.matches("Beginning Game!").count(), 2);
        assert_eq!(
            output.matches("Congratulations! Player 1 has won the game.").count(),
            2
        );
    }

    #[test]
    fn test_tie_is_reported() {
        let moves = "1 1 1 1 1 1 2 2 2 2 2 2 3 3 3 3 3 3 5 4 4 4 4 4 4 \
                     5 5 5 5 5 6 6 6 6 6 6 7 7 7 7 7 7";
        let (result, output) = play(&format!("P\n{moves}\n2\n"));
        result.unwrap();
        assert!(output.contains("Game over. The game has resulted in a tie."));
        assert!(!output.contains("Congratulations!"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = play("P\n1 7\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_board_is_printed() {
        let (_, output) = play("P\n3\n");
        assert!(output.contains("| | |X| | | | |\n"));
    }

    #[test]
    fn test_prompt_frontend() {
        let mut output = Vec::new();
        let mut console = Console::new(
            Cursor::new("3\nabc\n2\n".as_bytes()),
            &mut output,
            Box::new(|| Box::new(AlwaysColumn(1)) as Box<dyn MoveSource>),
        );
        assert_eq!(console.prompt_frontend().unwrap(), Frontend::Tui);
        drop(console);

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Welcome to Connect4! Press 1 to play in the console"));
        assert!(output.contains("Sorry, that's not a valid selection."));
        assert!(output.contains("That's not an integer."));
    }
}
