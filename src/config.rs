//! Configuration handling for deck-cards
//!
//! Settings are resolved from three layers, highest precedence first:
//! command-line flags, environment variables (handled by clap), and an
//! optional TOML file at `~/.config/deck-cards/config.toml` (or the path in
//! `DECK_CARDS_CONFIG`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::DateStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    /// True when required settings were absent (as opposed to a broken file)
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Missing(_))
    }
}

/// Contents of the optional config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Nextcloud base URL, e.g. `https://cloud.example.com`
    pub url: Option<String>,

    pub username: Option<String>,

    /// App password
    pub password: Option<String>,

    pub board_id: Option<u64>,

    pub include_archived: Option<bool>,

    pub show_owner: Option<bool>,

    pub date_format: Option<DateStyle>,
}

impl FileConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "deck-cards", "deck-cards")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the file at `path`; a missing file yields empty defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub board_id: Option<u64>,
    pub include_archived: bool,
    pub show_owner: bool,
    pub date_format: Option<DateStyle>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub board_id: u64,
    pub include_archived: bool,
    pub show_owner: bool,
    pub date_style: DateStyle,
}

impl Settings {
    /// Merges flags over the config file and checks required values
    ///
    /// Empty strings and a board id of 0 count as missing. Missing fields are
    /// reported together, in the order: base URL, username, app password,
    /// board id.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self, ConfigError> {
        let base_url = present(overrides.url).or_else(|| present(file.url));
        let username = present(overrides.username).or_else(|| present(file.username));
        let password = present(overrides.password).or_else(|| present(file.password));
        let board_id = overrides
            .board_id
            .filter(|id| *id != 0)
            .or(file.board_id.filter(|id| *id != 0));

        let mut missing = Vec::new();
        if base_url.is_none() {
            missing.push("base URL");
        }
        if username.is_none() {
            missing.push("username");
        }
        if password.is_none() {
            missing.push("app password");
        }
        if board_id.is_none() {
            missing.push("board id");
        }

        match (base_url, username, password, board_id) {
            (Some(base_url), Some(username), Some(password), Some(board_id)) => Ok(Self {
                base_url,
                username,
                password,
                board_id,
                include_archived: overrides.include_archived
                    || file.include_archived.unwrap_or(false),
                show_owner: overrides.show_owner || file.show_owner.unwrap_or(false),
                date_style: overrides
                    .date_format
                    .or(file.date_format)
                    .unwrap_or_default(),
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn complete() -> Overrides {
        Overrides {
            url: Some("https://cloud.example.com".to_string()),
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            board_id: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_from_overrides() {
        let settings = Settings::resolve(complete(), FileConfig::default()).unwrap();
        assert_eq!(settings.base_url, "https://cloud.example.com");
        assert_eq!(settings.board_id, 7);
        assert!(!settings.include_archived);
        assert!(!settings.show_owner);
        assert_eq!(settings.date_style, DateStyle::Relative);
    }

    #[test]
    fn missing_all_required_in_order() {
        let err = Settings::resolve(Overrides::default(), FileConfig::default()).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(
            err.to_string(),
            "Missing: base URL, username, app password, board id"
        );
    }

    #[test]
    fn empty_values_count_as_missing() {
        let overrides = Overrides {
            username: Some(String::new()),
            board_id: Some(0),
            ..complete()
        };
        let err = Settings::resolve(overrides, FileConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Missing: username, board id");
    }

    #[test]
    fn file_fills_gaps() {
        let file = FileConfig {
            url: Some("https://file.example.com".to_string()),
            password: Some("from-file".to_string()),
            board_id: Some(3),
            include_archived: Some(true),
            date_format: Some(DateStyle::Iso),
            ..Default::default()
        };
        let overrides = Overrides {
            url: None,
            password: None,
            ..complete()
        };

        let settings = Settings::resolve(overrides, file).unwrap();
        assert_eq!(settings.base_url, "https://file.example.com");
        assert_eq!(settings.password, "from-file");
        assert_eq!(settings.board_id, 7);
        assert!(settings.include_archived);
        assert_eq!(settings.date_style, DateStyle::Iso);
    }

    #[test]
    fn flags_win_over_file() {
        let file = FileConfig {
            url: Some("https://file.example.com".to_string()),
            date_format: Some(DateStyle::Iso),
            ..Default::default()
        };
        let overrides = Overrides {
            date_format: Some(DateStyle::Local),
            ..complete()
        };

        let settings = Settings::resolve(overrides, file).unwrap();
        assert_eq!(settings.base_url, "https://cloud.example.com");
        assert_eq!(settings.date_style, DateStyle::Local);
    }

    #[test]
    fn parse_config_file() {
        let toml = r#"
url = "https://cloud.example.com"
username = "alice"
board_id = 12
show_owner = true
date_format = "local"
"#;

        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.board_id, Some(12));
        assert_eq!(config.show_owner, Some(true));
        assert_eq!(config.date_format, Some(DateStyle::Local));
        assert!(config.password.is_none());
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = FileConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn load_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "board_id = \"not a number\"").unwrap();

        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.is_missing());
    }
}
