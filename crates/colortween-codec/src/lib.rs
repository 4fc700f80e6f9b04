//! # colortween-codec
//!
//! Reads CSS-style color strings into numeric channels and writes them back.
//!
//! Four surface syntaxes are accepted:
//!
//! | Syntax | Example | Notes |
//! |--------|---------|-------|
//! | Short hex | `#f80`, `f80` | `#` optional, digits doubled |
//! | Full hex | `#ff8800` | 7-8 digits accepted, alpha ignored |
//! | RGB | `rgb(255,136,0)`, `rgba(255,136,0,0.5)` | alpha ignored |
//! | HSL | `hsl(32,100%,50%)`, `hsl(32,100,50)` | `%` optional |
//!
//! Colors are parsed into a [`ChannelTriplet`] in a target [`ColorSpace`] and
//! serialized back to `rgb(R,G,B)` or `hsl(H,S%,L%)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use colortween_codec::{normalize, parse, serialize, ColorSpace};
//!
//! // Parse into HSL channels
//! let hsl = parse("#ff0000", ColorSpace::Hsl).unwrap();
//! assert_eq!(serialize(hsl, ColorSpace::Hsl), "hsl(0,100%,50%)");
//!
//! // Or normalize in one step
//! assert_eq!(normalize("hsl(240,100%,50%)", ColorSpace::Rgb).unwrap(), "rgb(0,0,255)");
//! ```
//!
//! ## Rounding
//!
//! Parsing never rounds. Serialization rounds half-up (`floor(x + 0.5)`) and
//! does not clamp: `rgb(300,0,0)` stays `rgb(300,0,0)` and a hue of `400`
//! is written as `400`. Channels that are not finite, such as the infinite
//! saturation `rgb(510,0,0)` produces in HSL, are written as `0`.

mod channels;
mod codec;
mod convert;
mod error;
mod grammar;
mod space;

pub use channels::{round_half_up, ChannelTriplet};
pub use codec::{normalize, parse, serialize, to_hsl_string, to_rgb_string};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::{CodecError, Result};
pub use grammar::{tokenize, ColorToken, Grammar};
pub use space::ColorSpace;
