use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Could not expand notes path {path}: {message}")]
    ExpandError { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub notes_path: PathBuf,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How the terminal viewer draws a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix each rendered line with its line index
    pub show_line_numbers: bool,
    /// Draw checked items dimmed and struck through
    pub dim_checked: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            dim_checked: true,
        }
    }
}

impl Config {
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: notes_path.into(),
            display: DisplayConfig::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config = Self::parse(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        config.notes_path = Self::expand_path(&config.notes_path)?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marknote");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and `$VAR` references in a configured path
    fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .map(|expanded| PathBuf::from(expanded.as_ref()))
            .map_err(|e| ConfigError::ExpandError {
                path: path_str.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/marknote/config.toml"));
    }

    #[test]
    fn test_display_defaults_when_section_missing() {
        let config = Config::parse(r#"notes_path = "/n""#).unwrap();
        assert_eq!(config.display, DisplayConfig::default());
        assert!(config.display.dim_checked);
        assert!(!config.display.show_line_numbers);
    }

    #[test]
    fn test_partial_display_section() {
        let config = Config::parse(
            r#"
notes_path = "/n"

[display]
show_line_numbers = true
"#,
        )
        .unwrap();
        assert_eq!(
            config.display,
            DisplayConfig {
                show_line_numbers: true,
                dim_checked: true,
            }
        );
    }

    #[test]
    fn test_missing_notes_path_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[display]\ndim_checked = false\n").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/test/path")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MARKNOTE_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$MARKNOTE_TEST_VAR/subdir")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("MARKNOTE_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_unknown_var() {
        let result = Config::expand_path(Path::new("$MARKNOTE_SURELY_UNSET_VAR/notes"));
        assert!(matches!(result, Err(ConfigError::ExpandError { .. })));
    }

    #[test]
    fn test_expand_plain_paths_unchanged() {
        for path in ["/absolute/path", "relative/path"] {
            assert_eq!(Config::expand_path(Path::new(path)).unwrap(), PathBuf::from(path));
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load_from_path(&non_existent_config).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut config = Config::new("/tmp/test-notes");
        config.display.show_line_numbers = true;

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
    }
}
