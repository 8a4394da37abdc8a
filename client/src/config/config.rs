use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{DEFAULT_COMPUTER_MOVE_DELAY, GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub const DEFAULT_CONFIG_FILE: &str = "tic_tac_toe_client.yaml";
pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub vs_computer: bool,
    pub computer_move_delay_ms: u64,
    pub theme: Theme,
    pub seed: Option<u64>,
}

impl Config {
    pub fn mode(&self) -> GameMode {
        if self.vs_computer {
            GameMode::VsComputer
        } else {
            GameMode::TwoPlayers
        }
    }

    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.mode(),
            computer_move_delay: Duration::from_millis(self.computer_move_delay_ms),
            seed: self.seed,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vs_computer: false,
            computer_move_delay_ms: DEFAULT_COMPUTER_MOVE_DELAY.as_millis() as u64,
            theme: Theme::default(),
            seed: None,
        }
    }
}
