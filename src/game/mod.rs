//! Core Connect Four logic: the board engine, player identities, and the
//! two-player session that rotates turns over a board.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, MoveError, COLS, CONNECT, ROWS};
pub use player::{Controller, Player, PlayerColor, PlayerProfile};
pub use session::{GameMode, GameStatus, Roster, Session, GAME_NAME, PLAYER_SLOTS};
