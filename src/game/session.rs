use log::{info, warn};

use super::{Board, Player, PlayerProfile};
use crate::ai::{ComputerPlayer, MoveSource};
use crate::error::GameError;

pub const GAME_NAME: &str = "Connect4";

/// Number of player slots in a session
pub const PLAYER_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Players not assigned yet
    Setup,
    InProgress,
    Won,
    Tied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
}

/// Identities handed out when a session is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub first: PlayerProfile,
    pub second: PlayerProfile,
    pub computer: PlayerProfile,
}

impl Roster {
    /// Check that every seat has a name and a visible token, and that the
    /// seats that can meet in one game never share a token.
    pub fn validate(&self) -> Result<(), GameError> {
        let seats = [
            ("first", &self.first),
            ("second", &self.second),
            ("computer", &self.computer),
        ];
        for (seat, profile) in seats {
            if profile.name.trim().is_empty() {
                return Err(GameError::InvalidRoster(format!(
                    "{seat}.name must not be empty"
                )));
            }
            if profile.token.is_whitespace() || profile.token.is_control() {
                return Err(GameError::InvalidRoster(format!(
                    "{seat}.token must be a visible character"
                )));
            }
        }

        if self.first.token == self.second.token {
            return Err(GameError::InvalidRoster(
                "first.token and second.token must differ".into(),
            ));
        }
        if self.first.token == self.computer.token {
            return Err(GameError::InvalidRoster(
                "computer.token must differ from first.token".into(),
            ));
        }

        Ok(())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster {
            first: PlayerProfile::first(),
            second: PlayerProfile::second(),
            computer: PlayerProfile::computer(),
        }
    }
}

/// One game between two players, replayable through [`Session::restart`].
///
/// Drivers call [`Session::take_turn`] and then [`Session::check_won`]; the
/// winner is the player who moved last, the one opposite the current slot.
#[derive(Debug)]
pub struct Session {
    board: Board,
    roster: Roster,
    players: Option<[Player; PLAYER_SLOTS]>,
    mode: Option<GameMode>,
    current: usize,
    winner: Option<usize>,
}

impl Session {
    /// Start a session in Setup. Fails if the roster lets two seats share a
    /// token or gives a seat a blank one.
    pub fn new(roster: Roster) -> Result<Self, GameError> {
        roster.validate()?;
        Ok(Self::with_valid_roster(roster))
    }

    fn with_valid_roster(roster: Roster) -> Self {
        Session {
            board: Board::new(),
            roster,
            players: None,
            mode: None,
            current: 0,
            winner: None,
        }
    }

    /// Seat two human players from the roster.
    pub fn configure_human_vs_human(&mut self) {
        self.players = Some([
            Player::from_profile(&self.roster.first),
            Player::from_profile(&self.roster.second),
        ]);
        self.mode = Some(GameMode::HumanVsHuman);
        info!(
            "{} vs {}",
            self.roster.first.name, self.roster.second.name
        );
    }

    /// Seat the first human player against an automated player driven by `source`.
    pub fn configure_human_vs_automated(&mut self, source: Box<dyn MoveSource>) {
        let computer = ComputerPlayer::new(source);
        info!(
            "{} vs {} ({})",
            self.roster.first.name,
            self.roster.computer.name,
            computer.source_name()
        );
        self.players = Some([
            Player::from_profile(&self.roster.first),
            Player::automated(&self.roster.computer, computer),
        ]);
        self.mode = Some(GameMode::HumanVsComputer);
    }

    /// Drop the current player's token into a 1-indexed column. The turn
    /// passes to the other player only when the move is accepted.
    /// Turns are refused once a win has been recorded; a full board refuses
    /// them through the column checks.
    pub fn take_turn(&mut self, column: usize) -> bool {
        let Some(players) = &self.players else {
            warn!("turn in column {column} ignored: players not assigned");
            return false;
        };
        if self.winner.is_some() {
            warn!("turn in column {column} ignored: game already won");
            return false;
        }

        let placed = self.board.place(column, &players[self.current]);
        if placed {
            self.current = (self.current + 1) % PLAYER_SLOTS;
        }
        placed
    }

    /// Check for four in a row and record the player who just moved as the
    /// winner.
    pub fn check_won(&mut self) -> bool {
        let won = self.board.is_won();
        if won && self.players.is_some() && self.winner.is_none() {
            let winner = (self.current + 1) % PLAYER_SLOTS;
            self.winner = Some(winner);
            if let Some(player) = self.winner() {
                info!(
                    "{} wins after {} moves",
                    player.name(),
                    self.board.moves_played()
                );
            }
        }
        won
    }

    pub fn check_tied(&self) -> bool {
        self.board.is_tied()
    }

    /// Start a fresh board with the same players; the first slot moves first.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current = 0;
        self.winner = None;
        info!("game restarted");
    }

    /// Ask the current player's move source for a column on a snapshot of the
    /// board. The column is not validated.
    pub fn automated_move(&mut self) -> Result<usize, GameError> {
        let players = self.players.as_mut().ok_or(GameError::PlayersNotAssigned)?;
        let computer = players[self.current]
            .computer_mut()
            .ok_or(GameError::NoAutomatedPlayer)?;
        computer.set_board_state(&self.board);
        computer.make_move()
    }

    pub fn status(&self) -> GameStatus {
        if self.players.is_none() {
            GameStatus::Setup
        } else if self.winner.is_some() {
            GameStatus::Won
        } else if self.board.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn players(&self) -> Option<&[Player; PLAYER_SLOTS]> {
        self.players.as_ref()
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn is_single_player_mode(&self) -> bool {
        self.mode == Some(GameMode::HumanVsComputer)
    }

    /// Slot of the player whose turn it is
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current])
    }

    pub fn winner(&self) -> Option<&Player> {
        let players = self.players.as_ref()?;
        self.winner.map(|slot| &players[slot])
    }

    /// Player whose token is `token`, used by front ends to colour cells.
    pub fn player_for_token(&self, token: char) -> Option<&Player> {
        self.players
            .as_ref()?
            .iter()
            .find(|player| player.token() == token)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_roster(Roster::default())
    }
}
