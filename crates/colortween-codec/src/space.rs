//! The two channel spaces colors are parsed into and serialized from.
//!
//! A [`ColorSpace`] decides both the meaning of a [`ChannelTriplet`] and the
//! textual form produced by [`serialize`]:
//!
//! | Space | Channels | Serialized form |
//! |-------|----------|-----------------|
//! | [`ColorSpace::Rgb`] | red, green, blue (0–255) | `rgb(R,G,B)` |
//! | [`ColorSpace::Hsl`] | hue (degrees), saturation, lightness (percent) | `hsl(H,S%,L%)` |
//!
//! Names are parsed case-insensitively:
//!
//! ```rust
//! use colortween_codec::ColorSpace;
//!
//! assert_eq!("HSL".parse::<ColorSpace>().unwrap(), ColorSpace::Hsl);
//! assert_eq!(ColorSpace::default(), ColorSpace::Rgb);
//! assert!("lab".parse::<ColorSpace>().is_err());
//! ```
//!
//! [`ChannelTriplet`]: crate::ChannelTriplet
//! [`serialize`]: crate::serialize

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// The color space used for parsing, serialization and interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Red, green and blue channels. Tweens move in a straight line through the RGB cube.
    #[default]
    Rgb,
    /// Hue, saturation and lightness. Tweens sweep across the hue spectrum.
    Hsl,
}

impl ColorSpace {
    /// Every supported space, in declaration order.
    pub const ALL: [ColorSpace; 2] = [ColorSpace::Rgb, ColorSpace::Hsl];

    /// Returns the configuration name of this space.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsl => "hsl",
        }
    }

    /// Returns the other space.
    pub fn other(self) -> ColorSpace {
        match self {
            ColorSpace::Rgb => ColorSpace::Hsl,
            ColorSpace::Hsl => ColorSpace::Rgb,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CodecError::UnknownColorSpace(s.to_string()))
    }
}
