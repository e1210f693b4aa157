use crate::error::GameError;
use crate::game::Board;

/// Picks a column for a non-human player.
///
/// Picks need not be legal: the caller drops the token through the session and
/// asks again when the board rejects it.
pub trait MoveSource {
    /// Select a 1-indexed column given a read-only view of the board.
    fn select_column(&mut self, board: &Board) -> usize;

    /// Return the source's display name.
    fn name(&self) -> &str;
}

/// An automated player: a move source plus the board snapshot it plays on.
pub struct ComputerPlayer {
    source: Box<dyn MoveSource>,
    board_state: Option<Board>,
}

impl ComputerPlayer {
    pub fn new(source: Box<dyn MoveSource>) -> Self {
        ComputerPlayer {
            source,
            board_state: None,
        }
    }

    /// Hand the player a snapshot of the board to choose from.
    pub fn set_board_state(&mut self, board: &Board) {
        self.board_state = Some(*board);
    }

    /// Choose a column on the attached board.
    pub fn make_move(&mut self) -> Result<usize, GameError> {
        let board = self.board_state.as_ref().ok_or(GameError::BoardNotAttached)?;
        Ok(self.source.select_column(board))
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}
