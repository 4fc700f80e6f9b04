//! The four accepted color grammars and the ordered routine that matches them.
//!
//! Supported surface syntaxes:
//!
//! - HSL: `hsl(h,s,l)` or `hsl(h,s%,l%)`; hue in degrees, saturation and
//!   lightness in percent, fractional values allowed
//! - RGB: `rgb(r,g,b)` or `rgba(r,g,b,a)`; 1–3 digit integer channels, alpha ignored
//! - Full hex: `#rrggbb`; 7 or 8 digits are accepted and only the first six are read
//! - Short hex: `#rgb` or `rgb` without the `#`; each digit is doubled
//!
//! Separators are a comma optionally followed by one space. Matching is
//! ASCII case-insensitive and ignores surrounding whitespace.
//!
//! # Precedence
//!
//! [`tokenize`] tries the grammars in [`Grammar::PRECEDENCE`] order and the
//! first match wins:
//!
//! | Order | Grammar | Native space |
//! |-------|---------|--------------|
//! | 1 | [`Grammar::Hsl`] | HSL |
//! | 2 | [`Grammar::Rgb`] | RGB |
//! | 3 | [`Grammar::FullHex`] | RGB |
//! | 4 | [`Grammar::ShortHex`] | RGB |
//!
//! ```rust
//! use colortween_codec::{tokenize, ChannelTriplet, ColorToken};
//!
//! assert_eq!(
//!     tokenize("#f80"),
//!     ColorToken::ShortHex(ChannelTriplet::new(255.0, 136.0, 0.0))
//! );
//! assert_eq!(tokenize("cornflowerblue"), ColorToken::Unrecognized);
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::channels::ChannelTriplet;
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::space::ColorSpace;

static HSL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^hsl\((\d+(?:\.\d*)?|\.\d+), ?(\d+(?:\.\d*)?|\.\d+)%?, ?(\d+(?:\.\d*)?|\.\d+)%?\)$",
    )
    .expect("HSL pattern is valid")
});

static RGB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgba?\((\d{1,3}), ?(\d{1,3}), ?(\d{1,3})(?:, ?(?:\d+(?:\.\d*)?|\.\d+)%?)?\)$")
        .expect("RGB pattern is valid")
});

static FULL_HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#([0-9a-f]{6,8})$").expect("full hex pattern is valid"));

static SHORT_HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?([0-9a-f]{3})$").expect("short hex pattern is valid"));

/// One of the accepted textual color grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `rgb(r,g,b)` / `rgba(r,g,b,a)`
    Rgb,
    /// `#rrggbb` (with up to two ignored alpha digits)
    FullHex,
    /// `#rgb` / `rgb`
    ShortHex,
}

impl Grammar {
    /// The order in which grammars are tried. The first match wins.
    pub const PRECEDENCE: [Grammar; 4] = [
        Grammar::Hsl,
        Grammar::Rgb,
        Grammar::FullHex,
        Grammar::ShortHex,
    ];

    /// Returns the space this grammar's channels are expressed in.
    pub fn native_space(self) -> ColorSpace {
        match self {
            Grammar::Hsl => ColorSpace::Hsl,
            Grammar::Rgb | Grammar::FullHex | Grammar::ShortHex => ColorSpace::Rgb,
        }
    }

    /// Returns `true` if `value` is written in this grammar.
    pub fn matches(self, value: &str) -> bool {
        self.pattern().is_match(value.trim())
    }

    /// Returns a short name for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::Hsl => "hsl",
            Grammar::Rgb => "rgb",
            Grammar::FullHex => "full-hex",
            Grammar::ShortHex => "short-hex",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Grammar::Hsl => &HSL_PATTERN,
            Grammar::Rgb => &RGB_PATTERN,
            Grammar::FullHex => &FULL_HEX_PATTERN,
            Grammar::ShortHex => &SHORT_HEX_PATTERN,
        }
    }

    /// Matches `value` against this grammar and reads its channels.
    fn capture(self, value: &str) -> Option<ColorToken> {
        let caps = self.pattern().captures(value)?;
        match self {
            Grammar::Hsl => decimal_channels(&caps).map(ColorToken::Hsl),
            Grammar::Rgb => decimal_channels(&caps).map(ColorToken::Rgb),
            Grammar::FullHex => {
                let hex = caps.get(1)?.as_str();
                let r = hex_byte(hex.get(0..2)?)?;
                let g = hex_byte(hex.get(2..4)?)?;
                let b = hex_byte(hex.get(4..6)?)?;
                Some(ColorToken::FullHex((r, g, b).into()))
            }
            Grammar::ShortHex => {
                let hex = caps.get(1)?.as_str();
                // #rgb -> #rrggbb
                let r = hex_byte(hex.get(0..1)?)? * 17;
                let g = hex_byte(hex.get(1..2)?)? * 17;
                let b = hex_byte(hex.get(2..3)?)? * 17;
                Some(ColorToken::ShortHex((r, g, b).into()))
            }
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn decimal_channels(caps: &Captures<'_>) -> Option<ChannelTriplet> {
    let mut channels = [0.0f64; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(ChannelTriplet(channels))
}

fn hex_byte(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

/// The result of matching a string against the grammar table.
///
/// Each matched variant carries the channels exactly as written in the
/// string, in the grammar's native space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorToken {
    /// HSL channels as written.
    Hsl(ChannelTriplet),
    /// RGB channels as written.
    Rgb(ChannelTriplet),
    /// RGB channels read from a 6-digit hex string.
    FullHex(ChannelTriplet),
    /// RGB channels read from a 3-digit hex string.
    ShortHex(ChannelTriplet),
    /// No grammar matched.
    Unrecognized,
}

impl ColorToken {
    /// Returns the grammar that matched, or `None` for [`ColorToken::Unrecognized`].
    pub fn grammar(&self) -> Option<Grammar> {
        match self {
            ColorToken::Hsl(_) => Some(Grammar::Hsl),
            ColorToken::Rgb(_) => Some(Grammar::Rgb),
            ColorToken::FullHex(_) => Some(Grammar::FullHex),
            ColorToken::ShortHex(_) => Some(Grammar::ShortHex),
            ColorToken::Unrecognized => None,
        }
    }

    /// Returns `true` if no grammar matched.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ColorToken::Unrecognized)
    }

    /// Expresses the matched channels in `target`.
    ///
    /// Channels already in `target` are returned untouched (no rounding);
    /// others go through the RGB ↔ HSL transform.
    pub fn into_space(self, target: ColorSpace) -> Option<ChannelTriplet> {
        let (native, channels) = match self {
            ColorToken::Hsl(c) => (ColorSpace::Hsl, c),
            ColorToken::Rgb(c) | ColorToken::FullHex(c) | ColorToken::ShortHex(c) => {
                (ColorSpace::Rgb, c)
            }
            ColorToken::Unrecognized => return None,
        };

        Some(match (native, target) {
            (ColorSpace::Hsl, ColorSpace::Rgb) => hsl_to_rgb(channels),
            (ColorSpace::Rgb, ColorSpace::Hsl) => rgb_to_hsl(channels),
            _ => channels,
        })
    }
}

/// Matches `value` against the grammars in [`Grammar::PRECEDENCE`] order.
pub fn tokenize(value: &str) -> ColorToken {
    let value = value.trim();
    Grammar::PRECEDENCE
        .iter()
        .find_map(|grammar| grammar.capture(value))
        .unwrap_or(ColorToken::Unrecognized)
}
