use std::path::PathBuf;

/// Wiring errors between a driver, the session and the automated player.
/// Illegal moves are not errors; they come back as `false` from a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board state not set for computer player")]
    BoardNotAttached,

    #[error("current player is not an automated player")]
    NoAutomatedPlayer,

    #[error("no open column left to play")]
    BoardFull,

    #[error("players have not been assigned yet")]
    PlayersNotAssigned,

    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
