use noteflow_engine::{
    DEFAULT_THEME, DraftDefaults, EmphasisStyle, HeadingStyle, RenderOptions, StyleBundle,
    ThemeRegistry,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
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
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder that relative note paths are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,
    pub wechat: WechatSettings,
    pub xhs: XhsSettings,
    /// User themes keyed by id. Missing roles take the default theme's style.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub themes: BTreeMap<String, StyleBundle>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WechatSettings {
    pub map_h1_to_h2: bool,
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cover_id: Option<String>,
}

impl Default for WechatSettings {
    fn default() -> Self {
        Self {
            map_h1_to_h2: true,
            theme: DEFAULT_THEME.to_string(),
            author: None,
            default_cover_id: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XhsSettings {
    pub emphasis_style: EmphasisStyle,
    pub heading_style: HeadingStyle,
    pub max_line_length: usize,
}

impl Default for XhsSettings {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            emphasis_style: options.emphasis_style,
            heading_style: options.heading_style,
            max_line_length: options.max_line_length,
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

        // Expand shell variables and tilde in the notes folder
        config.notes_path = config
            .notes_path
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

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/noteflow");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Render options for both platforms, before any command-line overrides.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            heading_shift: self.wechat.map_h1_to_h2,
            theme: self.wechat.theme.clone(),
            emphasis_style: self.xhs.emphasis_style,
            heading_style: self.xhs.heading_style,
            max_line_length: self.xhs.max_line_length,
        }
    }

    /// Built-in themes plus the user's, which replace built-ins of the same id.
    pub fn theme_registry(&self) -> ThemeRegistry {
        self.themes
            .iter()
            .fold(ThemeRegistry::builtin(), |registry, (id, bundle)| {
                registry.with_theme(id.clone(), bundle.clone())
            })
    }

    pub fn draft_defaults(&self, fallback_title: impl Into<String>) -> DraftDefaults {
        DraftDefaults {
            author: self.wechat.author.clone(),
            cover_media_id: self.wechat.default_cover_id.clone().unwrap_or_default(),
            fallback_title: fallback_title.into(),
        }
    }
}
