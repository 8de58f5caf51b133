pub(crate) use tictactoe_core::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use tictactoe_core::engine::{Difficulty, GameMode, Mark};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";
const MAX_THINKING_DELAY_MS: u32 = 5000;

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    TwoPlayer,
    VsComputer,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: ModeKind,
    pub difficulty: Difficulty,
    pub computer_mark: Mark,
    pub thinking_delay_ms: u32,
}

impl GameConfig {
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeKind::TwoPlayer => GameMode::TwoPlayer,
            ModeKind::VsComputer => GameMode::VsComputer {
                difficulty: self.difficulty,
                computer_mark: self.computer_mark,
            },
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_mark == Mark::Empty {
            return Err("computer_mark must be x or o".to_string());
        }
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub use_prefix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                mode: ModeKind::VsComputer,
                difficulty: Difficulty::Medium,
                computer_mark: Mark::O,
                thinking_delay_ms: 650,
            },
            log: LogConfig { use_prefix: false },
        }
    }
}
