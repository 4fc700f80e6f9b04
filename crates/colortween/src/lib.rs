//! # colortween
//!
//! Color tweening for animation schedulers.
//!
//! A scheduler animates properties frame by frame. For color-valued
//! properties it hands the start color, the end color and an eased ratio to
//! this crate and applies whatever comes back. Colors may be written in any of
//! the grammars [`colortween_codec`] reads (`#f80`, `#ff8800`, `rgb(...)`,
//! `hsl(...)`), and may differ in grammar between start and end.
//!
//! ## Color spaces
//!
//! Interpolation happens in one active [`ColorSpace`]:
//!
//! - **`rgb`** (default): a straight line through the RGB cube.
//!   `#f00 → #00f` at `0.5` is `rgb(128,0,128)`.
//! - **`hsl`**: hue, saturation and lightness are interpolated independently,
//!   so hue sweeps the spectrum. `#f00 → #00f` at `0.5` is `hsl(120,100%,50%)`.
//!
//! Hue is not interpolated along the shorter arc; `hsl(350,…) → hsl(10,…)`
//! travels through 180.
//!
//! ## Quick Start
//!
//! ```rust
//! use colortween::{ColorSpace, Interpolator, TweenValue};
//!
//! let interp = Interpolator::new(ColorSpace::Rgb);
//! let frame = interp.tween(Some("#000"), Some("rgb(255,255,255)"), 0.25);
//! assert_eq!(frame, TweenValue::Color("rgb(64,64,64)".into()));
//! ```
//!
//! ## Plugging into a scheduler
//!
//! [`ColorPlugin`] implements [`TweenPlugin`] and registers itself for the
//! configured properties with any [`PluginHost`]:
//!
//! ```rust
//! use colortween::{ColorPlugin, PluginHost, TweenConfig, TweenPlugin};
//!
//! struct Scheduler {
//!     plugins: Vec<(Vec<String>, Box<dyn TweenPlugin>)>,
//! }
//!
//! impl PluginHost for Scheduler {
//!     fn install_plugin(&mut self, properties: &[String], plugin: Box<dyn TweenPlugin>) {
//!         self.plugins.push((properties.to_vec(), plugin));
//!     }
//! }
//!
//! let config = TweenConfig::from_yaml("mode: hsl\nproperties: [fill]").unwrap();
//! let mut scheduler = Scheduler { plugins: Vec::new() };
//! ColorPlugin::from_config(&config).install(&mut scheduler);
//!
//! assert_eq!(scheduler.plugins[0].0, vec!["fill"]);
//! ```
//!
//! ## Failure handling
//!
//! Tweening never fails loudly. An absent or unreadable boundary color turns
//! the frame into [`TweenValue::Ignore`] and is logged through `tracing` at
//! `warn` level. Use [`Interpolator::try_tween`] to get the error instead.
//! Configuration errors, in contrast, are reported eagerly as [`TweenError`].

mod config;
mod env;
mod error;
mod interpolator;
mod plugin;
mod swatch;

pub use colortween_codec::{normalize, parse, serialize, ChannelTriplet, CodecError, ColorSpace};
pub use config::{TweenConfig, DEFAULT_PROPERTIES, MODE_ENV_VAR};
pub use env::{EnvReader, MockEnv, RealEnv};
pub use error::{Result, TweenError};
pub use interpolator::{Interpolator, TweenValue};
pub use plugin::{ColorPlugin, PluginHost, PropertyValues, TweenPlugin};
pub use swatch::{displayable_rgb, rgb_to_ansi256, swatch};
