//! Configuration module for the vlark CLI.
//!
//! Settings come from `vlark.toml`. Every field has a default, so a
//! partial file or no file at all is fine.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vlark_lex::config::DEFAULT_MAX_LINE_LENGTH;
use vlark_lex::LexerConfig;

use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "vlark.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Line Classifier and Tokenizer settings.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Driver settings.
    #[serde(default)]
    pub driver: DriverSection,

    /// Diagnostic output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Longest accepted physical line, in characters.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Columns a tab advances the position by.
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,
}

/// `[driver]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverSection {
    /// Worker threads for lexing several files.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

/// `[output]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Color diagnostics when writing to a terminal.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print the offending source line under each diagnostic.
    #[serde(default = "default_true")]
    pub show_snippets: bool,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_tab_width() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(1)
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            tab_width: default_tab_width(),
        }
    }
}

impl Default for DriverSection {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            color: true,
            show_snippets: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/vlark`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CliError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Driver settings built from this configuration.
    ///
    /// `jobs` overrides `[driver] jobs` when given.
    pub fn session_config(&self, jobs: Option<u32>) -> vlark_drv::Config {
        vlark_drv::Config {
            lexer: LexerConfig::default()
                .with_max_line_length(self.lexer.max_line_length)
                .with_tab_width(self.lexer.tab_width),
            jobs: jobs.unwrap_or(self.driver.jobs) as usize,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("vlark").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("vlark").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
