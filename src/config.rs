use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{PlayerColor, PlayerProfile, Roster};

/// The two human seats.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: PlayerProfile,
    pub second: PlayerProfile,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: PlayerProfile::first(),
            second: PlayerProfile::second(),
        }
    }
}

/// Identity of the automated opponent and the seed for its picks.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    pub name: String,
    pub token: char,
    pub color: PlayerColor,
    /// Fixed seed for reproducible games; seeded from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        let profile = PlayerProfile::computer();
        ComputerConfig {
            name: profile.name,
            token: profile.token,
            color: profile.color,
            seed: None,
        }
    }
}

impl ComputerConfig {
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile::new(self.name.clone(), self.token, self.color)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub computer: ComputerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values. The seats follow the same rules a
    /// [`Session`](crate::game::Session) enforces on its roster.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roster()
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }

    /// Player identities for a new session
    pub fn roster(&self) -> Roster {
        Roster {
            first: self.players.first.clone(),
            second: self.players.second.clone(),
            computer: self.computer.profile(),
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
