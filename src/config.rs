//! Typed application configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::Level;

use crate::{
    game::{MarkSymbols, SortOrder},
    products::ProductFilter,
    todo::TodoList,
    ui::Screen,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub game: GameConfig,
    pub products: ProductsConfig,
    pub todos: TodosConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub start_screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mark_a: String,
    pub mark_b: String,
    /// Move list order: oldest first when true.
    pub ascending: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        let symbols = MarkSymbols::default();
        Self {
            mark_a: symbols.a,
            mark_b: symbols.b,
            ascending: true,
        }
    }
}

impl GameConfig {
    pub fn symbols(&self) -> MarkSymbols {
        MarkSymbols {
            a: self.mark_a.clone(),
            b: self.mark_b.clone(),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        if self.ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsConfig {
    pub filter_text: String,
    pub in_stock_only: bool,
    /// JSON catalog replacing the built-in one.
    pub catalog: Option<PathBuf>,
}

impl ProductsConfig {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            text: self.filter_text.clone(),
            in_stock_only: self.in_stock_only,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialTask {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodosConfig {
    pub initial: Vec<InitialTask>,
}

impl Default for TodosConfig {
    fn default() -> Self {
        let initial = TodoList::default()
            .tasks()
            .iter()
            .map(|t| InitialTask {
                text: t.text.clone(),
                done: t.done,
            })
            .collect();
        Self { initial }
    }
}

impl TodosConfig {
    pub fn todo_list(&self) -> TodoList {
        TodoList::new(self.initial.iter().map(|t| (t.text.clone(), t.done)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub dir: PathBuf,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from("logs"),
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// `~/.config/component-lab/config.toml` or the platform equivalent.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("component-lab").join("config.toml")
    }

    /// Loads `path`, or the default location when `None`.
    ///
    /// Only a missing file at the default location yields `Config::default()`;
    /// an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path, true),
            None => Self::load_from(&Self::config_path(), false),
        }
    }

    fn load_from(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - each mark symbol is exactly one visible character
    /// - the two symbols differ
    /// - the log level names a tracing level
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, symbol) in [("mark_a", &self.game.mark_a), ("mark_b", &self.game.mark_b)] {
            let mut chars = symbol.chars();
            let single = matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_whitespace());
            if !single {
                return Err(ConfigError::Invalid {
                    message: format!("game.{name} must be a single visible character, got {symbol:?}"),
                });
            }
        }

        if self.game.mark_a == self.game.mark_b {
            return Err(ConfigError::Invalid {
                message: format!("game.mark_a and game.mark_b are both {:?}", self.game.mark_a),
            });
        }

        if self.logging.level.parse::<Level>().is_err() {
            return Err(ConfigError::Invalid {
                message: format!("unknown logging.level {:?}", self.logging.level),
            });
        }

        Ok(())
    }
}
