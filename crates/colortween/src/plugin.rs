//! The boundary toward an animation scheduler.
//!
//! A scheduler drives property animations frame by frame and delegates color
//! properties to a [`TweenPlugin`]. The contract has three entry points:
//!
//! 1. **Registration**: [`ColorPlugin::install`] hands the plugin and its
//!    property names to a [`PluginHost`] once.
//! 2. **Init**: [`TweenPlugin::init`] runs once when a property starts
//!    animating and may rewrite the initial value.
//! 3. **Tween**: [`TweenPlugin::tween`] runs every frame with the keyed start
//!    and end values and the eased ratio. It returns the color to apply, or
//!    [`TweenValue::Ignore`] to leave the property untouched.
//!
//! ```rust
//! use std::collections::HashMap;
//! use colortween::{ColorPlugin, ColorSpace, TweenPlugin, TweenValue};
//!
//! let plugin = ColorPlugin::new(ColorSpace::Rgb);
//!
//! let start = HashMap::from([("color".to_string(), "#000".to_string())]);
//! let end = HashMap::from([("color".to_string(), "#fff".to_string())]);
//!
//! let frame = plugin.tween("color", None, &start, &end, 0.5);
//! assert_eq!(frame, TweenValue::Color("rgb(128,128,128)".into()));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use colortween_codec::ColorSpace;
use tracing::debug;

use crate::config::TweenConfig;
use crate::interpolator::{Interpolator, TweenValue};

/// Keyed boundary values for the properties of one animated object.
pub trait PropertyValues {
    /// Returns the value stored for `property`, if any.
    fn get_value(&self, property: &str) -> Option<&str>;
}

impl<K, V, S> PropertyValues for HashMap<K, V, S>
where
    K: std::borrow::Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get_value(&self, property: &str) -> Option<&str> {
        self.get(property).map(|v| v.as_ref())
    }
}

impl<K, V> PropertyValues for BTreeMap<K, V>
where
    K: std::borrow::Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get_value(&self, property: &str) -> Option<&str> {
        self.get(property).map(|v| v.as_ref())
    }
}

/// A property interpolator a scheduler can delegate to.
pub trait TweenPlugin: Send + Sync {
    /// Called once when `property` starts animating from `value`.
    ///
    /// Returns the value the scheduler should use from now on.
    fn init(&self, property: &str, value: Option<&str>) -> Option<String>;

    /// Called every frame for `property`.
    ///
    /// `current` is the value currently applied; `start` and `end` hold the
    /// boundary values keyed by property name.
    fn tween(
        &self,
        property: &str,
        current: Option<&str>,
        start: &dyn PropertyValues,
        end: &dyn PropertyValues,
        ratio: f64,
    ) -> TweenValue;
}

/// A scheduler that plugins register themselves with.
pub trait PluginHost {
    /// Registers `plugin` as the handler for `properties`.
    fn install_plugin(&mut self, properties: &[String], plugin: Box<dyn TweenPlugin>);
}

/// Tweens color-valued properties in a configured color space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPlugin {
    interpolator: Interpolator,
    properties: Vec<String>,
}

impl ColorPlugin {
    /// Creates a plugin for the default properties (`style`, `color`).
    pub fn new(space: ColorSpace) -> Self {
        Self::from_config(&TweenConfig::with_mode(space))
    }

    /// Creates a plugin from a validated configuration.
    pub fn from_config(config: &TweenConfig) -> Self {
        Self {
            interpolator: Interpolator::from_config(config),
            properties: config.properties.clone(),
        }
    }

    /// Returns the property names this plugin handles.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Returns `true` if this plugin handles `property`.
    pub fn handles(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }

    /// Returns the interpolator backing this plugin.
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Registers this plugin with `host` for its configured properties.
    pub fn install(self, host: &mut impl PluginHost) {
        debug!(
            properties = ?self.properties,
            space = %self.interpolator.space(),
            "installing color plugin"
        );
        let properties = self.properties.clone();
        host.install_plugin(&properties, Box::new(self));
    }
}

impl Default for ColorPlugin {
    fn default() -> Self {
        Self::from_config(&TweenConfig::default())
    }
}

impl TweenPlugin for ColorPlugin {
    fn init(&self, property: &str, value: Option<&str>) -> Option<String> {
        debug!(property, "starting color tween");
        self.interpolator.init(value)
    }

    fn tween(
        &self,
        property: &str,
        _current: Option<&str>,
        start: &dyn PropertyValues,
        end: &dyn PropertyValues,
        ratio: f64,
    ) -> TweenValue {
        self.interpolator
            .tween(start.get_value(property), end.get_value(property), ratio)
    }
}
