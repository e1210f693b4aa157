use serde::{Deserialize, Serialize};

use crate::ai::ComputerPlayer;

/// Display colour of a player's tokens. Only front ends look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    #[default]
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
}

impl PlayerColor {
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Magenta => "Magenta",
            PlayerColor::Cyan => "Cyan",
        }
    }
}

/// Configurable identity of a player slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub token: char,
    pub color: PlayerColor,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, token: char, color: PlayerColor) -> Self {
        PlayerProfile {
            name: name.into(),
            token,
            color,
        }
    }

    pub fn first() -> Self {
        Self::new("Player 1", 'X', PlayerColor::Red)
    }

    pub fn second() -> Self {
        Self::new("Player 2", 'O', PlayerColor::Yellow)
    }

    pub fn computer() -> Self {
        Self::new("Computer", 'O', PlayerColor::Yellow)
    }
}

/// Who picks the columns for a player.
pub enum Controller {
    Human,
    Automated(ComputerPlayer),
}

pub struct Player {
    name: String,
    token: char,
    color: PlayerColor,
    controller: Controller,
}

impl Player {
    pub fn human(name: impl Into<String>, token: char, color: PlayerColor) -> Self {
        Player {
            name: name.into(),
            token,
            color,
            controller: Controller::Human,
        }
    }

    pub fn automated(profile: &PlayerProfile, computer: ComputerPlayer) -> Self {
        Player {
            name: profile.name.clone(),
            token: profile.token,
            color: profile.color,
            controller: Controller::Automated(computer),
        }
    }

    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self::human(profile.name.clone(), profile.token, profile.color)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> char {
        self.token
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    /// The automated move source behind this player, if it has one
    pub fn computer_mut(&mut self) -> Option<&mut ComputerPlayer> {
        match &mut self.controller {
            Controller::Human => None,
            Controller::Automated(computer) => Some(computer),
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("token", &self.token)
            .field("color", &self.color)
            .field("human", &self.is_human())
            .finish()
    }
}
