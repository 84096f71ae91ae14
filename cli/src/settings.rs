use std::path::Path;

use anyhow::Context;
use sapper_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;

/// Board settings read from a TOML file, e.g.
///
/// ```toml
/// board_width = 16
/// board_height = 16
/// number_of_mines = 40
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub board_width: Coord,
    pub board_height: Coord,
    pub number_of_mines: CellCount,
}

impl Default for Settings {
    fn default() -> Self {
        let GameConfig {
            width,
            height,
            mines,
        } = GameConfig::beginner();
        Self {
            board_width: width,
            board_height: height,
            number_of_mines: mines,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn game_config(&self) -> sapper_core::Result<GameConfig> {
        GameConfig::new(self.board_width, self.board_height, self.number_of_mines)
    }
}
