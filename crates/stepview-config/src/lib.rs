use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stepview_engine::view::DEFAULT_PLACEHOLDER;
use stepview_engine::{Animation, HIGHLIGHT_DURATION, RenderOptions};
use thiserror::Error;

pub const DEFAULT_HEADING: &str = "Generated Sequence";

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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replay script used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_path: Option<PathBuf>,
    pub replay_interval_ms: u64,
    /// Highlight window; drives both the clear timer and the pulse
    pub highlight_ms: u64,
    pub entrance_ms: u64,
    pub stagger_ms: u64,
    pub fade_ms: u64,
    pub heading: String,
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_path: None,
            replay_interval_ms: 1500,
            highlight_ms: HIGHLIGHT_DURATION.as_millis() as u64,
            entrance_ms: 500,
            stagger_ms: 100,
            fade_ms: 300,
            heading: DEFAULT_HEADING.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the script path
        config.script_path = config
            .script_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/stepview");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    pub fn replay_interval(&self) -> Duration {
        Duration::from_millis(self.replay_interval_ms)
    }

    pub fn animation(&self) -> Animation {
        Animation {
            highlight: self.highlight(),
            entrance: Duration::from_millis(self.entrance_ms),
            stagger: Duration::from_millis(self.stagger_ms),
            fade: Duration::from_millis(self.fade_ms),
            ..Animation::default()
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            animation: self.animation(),
            placeholder: self.placeholder.clone(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
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

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/stepview/config.toml"));
    }

    #[test]
    fn test_defaults_match_render_defaults() {
        let config = Config::default();

        assert_eq!(config.render_options(), RenderOptions::default());
        assert_eq!(config.highlight(), HIGHLIGHT_DURATION);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("highlight_ms = 750\n").unwrap();

        assert_eq!(config.highlight_ms, 750);
        assert_eq!(config.stagger_ms, 100);
        assert_eq!(config.heading, DEFAULT_HEADING);
        assert_eq!(config.script_path, None);
    }

    #[test]
    fn test_pulse_follows_highlight_window() {
        let config = Config {
            highlight_ms: 1200,
            ..Config::default()
        };

        assert_eq!(config.animation().highlight, Duration::from_millis(1200));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/script.json");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/script.json"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/script.json");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "highlight_ms = \"soon\"").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            script_path: Some(PathBuf::from("/tmp/steps.json")),
            replay_interval_ms: 800,
            heading: "Outreach".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_script_path_env_var_in_toml() {
        unsafe {
            env::set_var("STEPVIEW_SCRIPTS", "/custom/scripts");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "script_path = \"$STEPVIEW_SCRIPTS/demo.json\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.script_path,
            Some(PathBuf::from("/custom/scripts/demo.json"))
        );

        unsafe {
            env::remove_var("STEPVIEW_SCRIPTS");
        }
    }
}
