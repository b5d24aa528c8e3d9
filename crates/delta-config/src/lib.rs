//! Configuration management for delta rendering.
//!
//! Parses `delta.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! image_policy = "flush-line"
//! title_policy = "first-op"
//! escape_html = true
//! ```

use std::path::{Path, PathBuf};

use delta_renderer::{DeltaRenderer, ImagePolicy, RenderBackend, TitlePolicy};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override image policy.
    pub image_policy: Option<ImagePolicy>,
    /// Override title policy.
    pub title_policy: Option<TitlePolicy>,
    /// Override HTML escaping flag.
    pub escape_html: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "delta.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// What happens to an open line when an image op arrives.
    pub image_policy: ImagePolicy,
    /// How the title is chosen when the document starts with an image.
    pub title_policy: TitlePolicy,
    /// Whether text and attribute values are HTML-escaped.
    pub escape_html: bool,
}

impl RenderConfig {
    /// Build a renderer configured with these settings and title extraction enabled.
    #[must_use]
    pub fn renderer<B: RenderBackend>(&self) -> DeltaRenderer<B> {
        DeltaRenderer::new()
            .with_image_policy(self.image_policy)
            .with_title_policy(self.title_policy)
            .with_html_escaping(self.escape_html)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `delta.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(image_policy) = settings.image_policy {
            self.render.image_policy = image_policy;
        }
        if let Some(title_policy) = settings.title_policy {
            self.render.title_policy = title_policy;
        }
        if let Some(escape_html) = settings.escape_html {
            self.render.escape_html = escape_html;
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

/// Search for config file in `start` and its parents.
fn discover_config_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.image_policy, ImagePolicy::KeepLineOpen);
        assert_eq!(config.render.title_policy, TitlePolicy::FirstText);
        assert!(!config.render.escape_html);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render.image_policy, ImagePolicy::KeepLineOpen);
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r#"
[render]
image_policy = "flush-line"
title_policy = "first-op"
escape_html = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.image_policy, ImagePolicy::FlushLine);
        assert_eq!(config.render.title_policy, TitlePolicy::FirstOp);
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_parse_invalid_policy() {
        let toml = r#"
[render]
image_policy = "sometimes"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nescape_html = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert!(config.render.escape_html);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delta.toml");
        std::fs::write(&path, "[render\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delta.toml");
        std::fs::write(&path, "[render]\nescape_html = true\n").unwrap();

        let settings = CliSettings {
            image_policy: Some(ImagePolicy::FlushLine),
            escape_html: Some(false),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.render.image_policy, ImagePolicy::FlushLine);
        assert_eq!(config.render.title_policy, TitlePolicy::FirstText);
        assert!(!config.render.escape_html);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            discover_config_from(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_renderer_from_config() {
        let config = RenderConfig {
            image_policy: ImagePolicy::FlushLine,
            ..RenderConfig::default()
        };
        let result = config
            .renderer::<delta_renderer::HtmlBackend>()
            .render_str(r#"{"ops":[{"insert":"a"},{"insert":{"image":"x.png"}},{"insert":"\n"}]}"#)
            .unwrap();
        assert_eq!(result.html, "<p>a</p>\n<img src=\"x.png\" />\n<p></p>\n");
        assert_eq!(result.title.as_deref(), Some("a"));
    }
}
