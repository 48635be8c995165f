use crate::errors::{AppError, AppResult};
use crate::render::{Layout, Palette};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub palette: Palette,
    /// Base-14 PDF font used for sheet text.
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_bold_font")]
    pub bold_font: String,
}

fn default_font() -> String {
    "Helvetica".to_string()
}
fn default_bold_font() -> String {
    "Helvetica-Bold".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            palette: Palette::default(),
            font: default_font(),
            bold_font: default_bold_font(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eldsheet")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldsheet.conf")
    }

    /// Load configuration from `path` (or the default file), falling back to
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject layouts that cannot hold a grid.
    pub fn validate(&self) -> AppResult<()> {
        let l = &self.layout;

        if l.width <= 0.0 || l.height <= 0.0 {
            return Err(AppError::Config(format!(
                "canvas size must be positive (got {}x{})",
                l.width, l.height
            )));
        }
        if l.timeline_width() <= 0.0 {
            return Err(AppError::Config(
                "margins and label column leave no room for the timeline".into(),
            ));
        }
        if l.row_height <= 2.0 * Layout::BAR_INSET {
            return Err(AppError::Config(format!(
                "row_height {} leaves no room for a bar",
                l.row_height
            )));
        }
        if l.grid_bottom() > l.content_bottom() {
            return Err(AppError::Config("grid does not fit on the canvas".into()));
        }

        Ok(())
    }

    /// Write the default configuration to `path` (or the default file).
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
