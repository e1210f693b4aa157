//! Automated opponents: the move source trait, the random source, and the
//! retry loop that turns unvalidated picks into an accepted turn.

mod move_source;
mod random;

pub use move_source::{ComputerPlayer, MoveSource};
pub use random::RandomMoveSource;

use log::trace;

use crate::error::GameError;
use crate::game::Session;

/// Play the current automated player's turn, re-sampling until the board
/// accepts a column. Returns the accepted column.
pub fn play_automated_turn(session: &mut Session) -> Result<usize, GameError> {
    if session.board().legal_columns().is_empty() {
        return Err(GameError::BoardFull);
    }

    loop {
        let column = session.automated_move()?;
        if session.take_turn(column) {
            return Ok(column);
        }
        trace!("automated pick {column} rejected, sampling again");
    }
}
