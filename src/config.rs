use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Suggestion cap mirroring the usual UI affordance of five menu entries.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Edit-distance threshold beyond which candidates are excluded.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Main dictionary file, one word per line.
    pub dictionary: Option<PathBuf>,

    /// User dictionary file; created on first save.
    pub personal_dictionary: Option<PathBuf>,

    /// Regexes for words the CLI should not report (the engine itself
    /// checks every token).
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    #[serde(default = "default_max_distance")]
    pub max_edit_distance: usize,
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

fn default_max_distance() -> usize {
    DEFAULT_MAX_DISTANCE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            personal_dictionary: None,
            ignore_patterns: vec![
                r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
                r"https?://\S+".to_string(),         // URLs
                r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
            ],
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_edit_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global
    /// config > defaults.
    pub fn load(
        dictionary: Option<PathBuf>,
        personal_dict: Option<PathBuf>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Local config (overrides global)
        let local_path = PathBuf::from(".spellcore.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // CLI overrides
        if let Some(path) = dictionary {
            config.dictionary = Some(path);
        }
        if let Some(path) = personal_dict {
            config.personal_dictionary = Some(path);
        }
        if !cli_patterns.is_empty() {
            config.ignore_patterns.extend(cli_patterns);
        }

        // Fall back to the standard locations
        if config.dictionary.is_none() {
            config.dictionary = Self::default_dictionary_path();
        }
        if config.personal_dictionary.is_none() {
            config.personal_dictionary = Self::default_personal_dict_path();
        }

        // Ensure the personal dictionary file exists so a later save
        // has somewhere to go
        if let Some(path) = &config.personal_dictionary {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create personal dictionary directory")?;
            }
            if !path.exists() {
                fs::write(path, "").context("Failed to create personal dictionary file")?;
            }
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.max_suggestions != DEFAULT_MAX_SUGGESTIONS {
            self.max_suggestions = other.max_suggestions;
        }
        if other.max_edit_distance != DEFAULT_MAX_DISTANCE {
            self.max_edit_distance = other.max_edit_distance;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcore").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_dictionary_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcore").map(|dirs| dirs.data_dir().join("words.txt"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellcore").map(|dirs| dirs.config_dir().join("personal.txt"))
    }
}
