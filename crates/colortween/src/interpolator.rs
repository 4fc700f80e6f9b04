//! Linear interpolation between two color strings.
//!
//! An [`Interpolator`] owns the active [`ColorSpace`]. Both boundary colors are
//! parsed into that space, each channel is interpolated by the ratio and
//! rounded half-up, and the result is serialized in the same space:
//!
//! ```text
//! channel = round(start + (end - start) * ratio)
//! ```
//!
//! In RGB the path is a straight line through the RGB cube. In HSL the hue
//! channel sweeps across the spectrum, so red → blue passes through green.
//!
//! ```rust
//! use colortween::{ColorSpace, Interpolator, TweenValue};
//!
//! let rgb = Interpolator::new(ColorSpace::Rgb);
//! assert_eq!(
//!     rgb.tween(Some("rgb(0,0,0)"), Some("rgb(100,200,50)"), 0.5),
//!     TweenValue::Color("rgb(50,100,25)".into())
//! );
//!
//! let hsl = Interpolator::new(ColorSpace::Hsl);
//! assert_eq!(
//!     hsl.tween(Some("#f00"), Some("#00f"), 0.5),
//!     TweenValue::Color("hsl(120,100%,50%)".into())
//! );
//!
//! // Unreadable boundaries are skipped, not applied.
//! assert_eq!(rgb.tween(Some("notacolor"), Some("#fff"), 0.5), TweenValue::Ignore);
//! ```

use colortween_codec::{self as codec, ChannelTriplet, CodecError, ColorSpace};
use tracing::{debug, warn};

use crate::config::TweenConfig;

/// Outcome of a single tween step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TweenValue {
    /// The color to apply this frame.
    Color(String),
    /// Leave the property unmodified this frame.
    Ignore,
}

impl TweenValue {
    /// Returns `true` for [`TweenValue::Ignore`].
    pub fn is_ignore(&self) -> bool {
        matches!(self, TweenValue::Ignore)
    }

    /// Returns the color, if any.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            TweenValue::Color(color) => Some(color),
            TweenValue::Ignore => None,
        }
    }

    /// Converts into the color, if any.
    pub fn into_color(self) -> Option<String> {
        match self {
            TweenValue::Color(color) => Some(color),
            TweenValue::Ignore => None,
        }
    }
}

impl From<Result<String, CodecError>> for TweenValue {
    fn from(result: Result<String, CodecError>) -> Self {
        result.map(TweenValue::Color).unwrap_or(TweenValue::Ignore)
    }
}

/// Interpolates colors in a single, owned color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interpolator {
    space: ColorSpace,
}

impl Interpolator {
    /// Creates an interpolator working in `space`.
    pub fn new(space: ColorSpace) -> Self {
        Self { space }
    }

    /// Creates an interpolator from a configuration's mode.
    pub fn from_config(config: &TweenConfig) -> Self {
        Self::new(config.mode)
    }

    /// Returns the active space.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Switches the active space.
    ///
    /// The next call observes the new space. Strings produced earlier are not
    /// converted.
    pub fn set_space(&mut self, space: ColorSpace) {
        self.space = space;
    }

    /// Parses `value` into channels in the active space.
    pub fn channels(&self, value: &str) -> Result<ChannelTriplet, CodecError> {
        codec::parse(value, self.space)
    }

    /// Interpolates between `start` and `end`, surfacing parse failures.
    ///
    /// `ratio` is not clamped: values outside `0.0..=1.0` extrapolate past the
    /// boundary colors.
    pub fn try_tween(&self, start: &str, end: &str, ratio: f64) -> Result<String, CodecError> {
        let from = self.channels(start)?;
        let to = self.channels(end)?;
        Ok(codec::serialize(from.lerp(&to, ratio), self.space))
    }

    /// Interpolates between `start` and `end` for one scheduler frame.
    ///
    /// Returns [`TweenValue::Ignore`] when either boundary is absent or cannot
    /// be read, so a bad color skips the frame instead of being applied.
    pub fn tween(&self, start: Option<&str>, end: Option<&str>, ratio: f64) -> TweenValue {
        let (Some(start), Some(end)) = (start, end) else {
            debug!("tween boundary missing, ignoring frame");
            return TweenValue::Ignore;
        };
        match self.try_tween(start, end, ratio) {
            Ok(color) => TweenValue::Color(color),
            Err(err) => {
                warn!(%err, start, end, "couldn't read color, ignoring frame");
                TweenValue::Ignore
            }
        }
    }

    /// Normalizes an initial property value to the active space.
    ///
    /// Absent values stay absent. Values that cannot be read are returned
    /// unchanged.
    pub fn init(&self, value: Option<&str>) -> Option<String> {
        let value = value?;
        match codec::normalize(value, self.space) {
            Ok(normalized) => {
                debug!(
                    value,
                    normalized = %normalized,
                    space = %self.space,
                    "normalized initial color"
                );
                Some(normalized)
            }
            Err(err) => {
                warn!(%err, "couldn't read color, leaving it unchanged");
                Some(value.to_string())
            }
        }
    }

    /// Samples `steps` evenly spaced colors from `start` to `end`, inclusive.
    ///
    /// One step yields just the start color; zero steps yield nothing.
    pub fn ramp(&self, start: &str, end: &str, steps: usize) -> Result<Vec<String>, CodecError> {
        let from = self.channels(start)?;
        let to = self.channels(end)?;

        let last = steps.saturating_sub(1).max(1) as f64;
        Ok((0..steps)
            .map(|i| codec::serialize(from.lerp(&to, i as f64 / last), self.space))
            .collect())
    }
}
