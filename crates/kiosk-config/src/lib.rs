//! Feria launcher configuration
//!
//! Settings are read from `feria.toml` (or the file named by `FERIA_CONFIG`),
//! every section falling back to built-in defaults, and then selectively
//! overridden from `FERIA_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `FERIA_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "feria.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure for the launcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    pub window: WindowConfig,
    pub text: TextConfig,
    pub assets: AssetsConfig,
    pub splash: SplashConfig,
    pub about: AboutConfig,
    pub failure: FailureConfig,
    /// Institutions shown as menu cards, left to right.
    pub institutions: Vec<InstitutionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Target frame rate of the render loop
    pub fps: u32,
    pub background: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Path to the regular font file (.ttf/.otf); system sans-serif when unset
    pub font: Option<PathBuf>,
    /// Path to the bold font file used for titles
    pub bold_font: Option<PathBuf>,
    pub body_size: f32,
    pub small_size: f32,
    pub title_size: f32,
    /// Extra spacing between wrapped lines in pixels
    pub line_padding: f32,
    /// Extra spacing after a paragraph in pixels
    pub paragraph_padding: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory every relative asset path is resolved against
    pub root: PathBuf,
    pub click_sound: PathBuf,
    pub splash_logo: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub duration_secs: f32,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub title: String,
    pub body: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureConfig {
    /// Seconds the window stays up after a fatal error before the process exits
    pub grace_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionConfig {
    pub name: String,
    pub area: String,
    pub url: String,
    pub image: PathBuf,
    #[serde(default)]
    pub summary: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            text: TextConfig::default(),
            assets: AssetsConfig::default(),
            splash: SplashConfig::default(),
            about: AboutConfig::default(),
            failure: FailureConfig::default(),
            institutions: default_institutions(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Launcher Feria ISB 2025 - Mi carrera ideal".to_string(),
            width: 900,
            height: 560,
            fps: 60,
            background: [18, 18, 24],
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            bold_font: None,
            body_size: 26.0,
            small_size: 20.0,
            title_size: 40.0,
            line_padding: 2.0,
            paragraph_padding: 8.0,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            click_sound: PathBuf::from("assets/click.mp3"),
            splash_logo: PathBuf::from("assets/isb.png"),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.8,
            title: "ISB 2025 University Fair".to_string(),
            subtitle: "Loading launcher...".to_string(),
        }
    }
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            title: "About the launcher".to_string(),
            body: "This launcher is a simple kiosk front end.\n\
                   Select a university to see details\n\
                   and open its official site."
                .to_string(),
            url: None,
        }
    }
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self { grace_secs: 3.0 }
    }
}

/// The three institutions presented at the fair.
pub fn default_institutions() -> Vec<InstitutionConfig> {
    vec![
        InstitutionConfig {
            name: "UVM".to_string(),
            area: "Ingeniera en Sistemas Computacionales".to_string(),
            url: "https://uvm.mx/".to_string(),
            image: PathBuf::from("assets/uvm.png"),
            summary: "Su oferta en licenciaturas de ingeniería es amplia y muy buena, debido a \
                      las becas y costos que tiene, al igual que su buen desarrollo en estas. \
                      Esto y en como tienen su plan de estudio y lo que ofrecen aparte de la \
                      licenciatura."
                .to_string(),
        },
        InstitutionConfig {
            name: "UP".to_string(),
            area: "Ingeniería en Inteligencia de Datos y Ciberseguridad".to_string(),
            url: "https://www.up.edu.mx/".to_string(),
            image: PathBuf::from("assets/up.png"),
            summary: "La Universidad Panamericana es una institución educativa privada en México \
                      que ofrece programas académicos de alta calidad, incluyendo ingeniería en \
                      inteligencia de datos y ciberseguridad pero con ofertas un poco limitadas, \
                      donde es muy buena opción para este tipo de carreras pero no tiene muchas \
                      opciones sobre tecnología."
                .to_string(),
        },
        InstitutionConfig {
            name: "Universidad Simón Bolívar".to_string(),
            area: "Licenciatura en Tecnologías de la Información en los Negocios".to_string(),
            url: "https://usb.edu.mx/".to_string(),
            image: PathBuf::from("assets/usb.png"),
            summary: "La Universidad Simón Bolívar ofrece programas innovadores en tecnologías de \
                      la información aplicadas a los negocios, con un enfoque práctico y \
                      actualizado, se caracteriza por sus carreras que combinan ciencias sociales \
                      y tecnología de buena manera y la hace una opción interesante."
                .to_string(),
        },
    ]
}

impl KioskConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the config file: `FERIA_CONFIG` if set, else `feria.toml`.
    pub fn config_path() -> PathBuf {
        std::env::var_os("FERIA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path`, or return defaults if the file is
    /// absent. A file that exists but cannot be used is reported and ignored.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no config file at {}; using built-in defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; using built-in defaults", error_chain(&err));
                Self::default()
            }
        }
    }

    pub fn load_or_default() -> Self {
        Self::load_or_default_from(&Self::config_path())
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored with a warning.
    pub fn merge_with_env(&mut self) {
        if let Ok(font) = std::env::var("FERIA_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Ok(font) = std::env::var("FERIA_BOLD_FONT") {
            self.text.bold_font = Some(PathBuf::from(font));
        }
        if let Some(fps) = env_parse::<u32>("FERIA_FPS").filter(|fps| *fps > 0) {
            self.window.fps = fps;
        }
        if let Some(secs) = env_parse::<f32>("FERIA_SPLASH_SECS").filter(|s| *s > 0.0) {
            self.splash.duration_secs = secs;
        }
        if let Ok(sound) = std::env::var("FERIA_CLICK_SOUND") {
            self.assets.click_sound = PathBuf::from(sound);
        }
        if let Some(secs) = env_parse::<f32>("FERIA_GRACE_SECS").filter(|s| *s >= 0.0) {
            self.failure.grace_secs = secs;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from the config file (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} is empty",
                self.window.width, self.window.height
            )));
        }
        if self.window.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".to_string()));
        }
        if !(self.splash.duration_secs > 0.0) {
            return Err(ConfigError::Invalid("splash duration must be positive".to_string()));
        }
        let text = &self.text;
        if text.line_padding < 0.0 || !(text.paragraph_padding > text.line_padding) {
            return Err(ConfigError::Invalid(format!(
                "paragraph_padding ({}) must be greater than line_padding ({}), which must not be negative",
                text.paragraph_padding, text.line_padding
            )));
        }
        if self.institutions.is_empty() {
            return Err(ConfigError::Invalid("at least one institution is required".to_string()));
        }
        if let Some(bad) = self.institutions.iter().find(|i| i.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("institution with url {:?} has no name", bad.url)));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
