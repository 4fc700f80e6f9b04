//! Tween configuration: the active color space and the handled properties.
//!
//! Configuration is layered. Later layers override earlier ones:
//!
//! 1. Defaults (`rgb`, properties `style` and `color`)
//! 2. A YAML document ([`TweenConfig::from_yaml`] / [`TweenConfig::from_file`])
//! 3. The `COLORTWEEN_MODE` environment variable ([`TweenConfig::with_env_override`])
//!
//! Every layer is validated when it is applied, so an unsupported mode is
//! reported at startup rather than on the first tween.
//!
//! ```rust
//! use colortween::{ColorSpace, TweenConfig};
//!
//! let config = TweenConfig::from_yaml("mode: hsl").unwrap();
//! assert_eq!(config.mode, ColorSpace::Hsl);
//! assert_eq!(config.properties, vec!["style", "color"]);
//!
//! assert!(TweenConfig::from_yaml("mode: lab").is_err());
//! ```

use std::path::Path;

use colortween_codec::ColorSpace;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::env::EnvReader;
use crate::error::{Result, TweenError};

/// Environment variable that overrides the configured mode.
pub const MODE_ENV_VAR: &str = "COLORTWEEN_MODE";

/// Property names handled when none are configured.
pub const DEFAULT_PROPERTIES: [&str; 2] = ["style", "color"];

/// Settings shared by every tween driven through one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TweenConfig {
    /// Space all parsing, serialization and interpolation happens in.
    pub mode: ColorSpace,
    /// Animatable property names registered with the scheduler.
    pub properties: Vec<String>,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            mode: ColorSpace::default(),
            properties: DEFAULT_PROPERTIES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl TweenConfig {
    /// Creates a configuration with the given mode and default properties.
    pub fn with_mode(mode: ColorSpace) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parses a YAML configuration document.
    ///
    /// Missing keys take their defaults. An empty document yields the
    /// default configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| TweenError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TweenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading tween configuration");
        Self::from_yaml(&content).map_err(|e| e.in_file(path))
    }

    /// Applies the [`MODE_ENV_VAR`] override, if set and non-empty.
    pub fn with_env_override(mut self, env: &impl EnvReader) -> Result<Self> {
        match env.var(MODE_ENV_VAR) {
            Some(value) if !value.trim().is_empty() => {
                self.mode = value.parse().map_err(|e| {
                    TweenError::config(format!("{} is not a valid mode: {}", MODE_ENV_VAR, e))
                })?;
                debug!(mode = %self.mode, "mode overridden from environment");
                Ok(self)
            }
            _ => Ok(self),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.properties.is_empty() {
            return Err(TweenError::config("at least one property must be listed"));
        }
        if let Some(blank) = self.properties.iter().find(|p| p.trim().is_empty()) {
            return Err(TweenError::config(format!(
                "property names must not be blank, got {:?}",
                blank
            )));
        }
        Ok(())
    }
}
