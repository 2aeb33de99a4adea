//! Configuration types.
//!
//! Configuration lives in `config.toml` under the platform config directory
//! (`~/.config/folio/config.toml` on Linux). Every section is optional and
//! falls back to the values the page ships with.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FolioConfig {
    /// Hero typewriter settings
    #[serde(default)]
    pub typewriter: TypewriterConfig,

    /// Floating element drag settings
    #[serde(default)]
    pub drag: DragConfig,

    /// Stats counter settings
    #[serde(default)]
    pub counter: CounterConfig,

    /// Background particle pool
    #[serde(default)]
    pub particles: ParticleConfig,

    /// Layout used by the headless stage
    #[serde(default)]
    pub stage: StageConfig,
}

impl FolioConfig {
    /// Reject values that parse but cannot drive the page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typewriter.phrases.is_empty() {
            return Err(ConfigError::Invalid(
                "typewriter.phrases must not be empty".to_string(),
            ));
        }
        if let Some(index) = self.typewriter.phrases.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "typewriter.phrases[{}] is empty",
                index
            )));
        }
        if self.counter.steps == 0 {
            return Err(ConfigError::Invalid(
                "counter.steps must be positive".to_string(),
            ));
        }
        if self.drag.hover_scale.is_nan() || self.drag.hover_scale <= 0.0 {
            return Err(ConfigError::Invalid(
                "drag.hover_scale must be positive".to_string(),
            ));
        }
        if self.particles.spawn_interval_ms == 0 || self.particles.lifetime_ms == 0 {
            return Err(ConfigError::Invalid(
                "particles.spawn_interval_ms and particles.lifetime_ms must be positive"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Typewriter phrases and per-phase delays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    /// Delay after typing a character.
    pub type_delay_ms: u64,
    /// Delay after deleting a character.
    pub delete_delay_ms: u64,
    /// Pause once a phrase is fully typed.
    pub hold_full_ms: u64,
    /// Pause once a phrase is fully deleted.
    pub hold_empty_ms: u64,
}

impl TypewriterConfig {
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    pub fn hold_full(&self) -> Duration {
        Duration::from_millis(self.hold_full_ms)
    }

    pub fn hold_empty(&self) -> Duration {
        Duration::from_millis(self.hold_empty_ms)
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Full Stack Developer",
                "Frontend Specialist",
                "Backend Engineer",
                "React Developer",
                "UI/UX Enthusiast",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            type_delay_ms: 150,
            delete_delay_ms: 100,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

/// Visual state of floating elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    /// Stacking order while an element is being dragged.
    pub lifted_z_index: i32,
    /// Stacking order once released (behind page content).
    pub resting_z_index: i32,
    /// Scale applied while hovered or dragged.
    pub hover_scale: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            lifted_z_index: 1000,
            resting_z_index: -1,
            hover_scale: 1.1,
        }
    }
}

/// Stats counter animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CounterConfig {
    /// Number of increments to reach the target.
    pub steps: u32,
    /// Total animation time.
    pub duration_ms: u64,
}

impl CounterConfig {
    /// Delay between increments.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.duration_ms / u64::from(self.steps.max(1)))
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: 50,
            duration_ms: 2000,
        }
    }
}

/// Background particles: a bounded pool refilled on an interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Maximum number of live particles.
    pub capacity: usize,
    /// How often one particle is added while below capacity.
    pub spawn_interval_ms: u64,
    /// How long each particle lives.
    pub lifetime_ms: u64,
}

impl ParticleConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            spawn_interval_ms: 3000,
            lifetime_ms: 20000,
        }
    }
}

/// Viewport and floating elements for the headless stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub floating: Vec<FloatingSpec>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            floating: vec![
                FloatingSpec::new("float-react", 60.0, 60.0, 80.0, 120.0),
                FloatingSpec::new("float-node", 60.0, 60.0, 200.0, 260.0),
                FloatingSpec::new("float-python", 60.0, 60.0, 120.0, 420.0),
            ],
        }
    }
}

/// A floating element anchored to the viewport's bottom-right corner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloatingSpec {
    pub id: String,
    pub width: f64,
    pub height: f64,
    /// Stylesheet `right` offset.
    pub right: f64,
    /// Stylesheet `bottom` offset.
    pub bottom: f64,
}

impl FloatingSpec {
    pub fn new(id: impl Into<String>, width: f64, height: f64, right: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            right,
            bottom,
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error; defaults are returned instead.
pub fn load_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config found at {:?}, using defaults", path);
        return Ok(FolioConfig::default());
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    let config: FolioConfig = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;

    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}
