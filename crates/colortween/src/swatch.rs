//! Terminal color swatches for previewing tween output.

use colortween_codec::{parse, ColorSpace};
use console::{Color, Style};

use crate::error::Result;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use colortween::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Reads `value` as RGB and clamps each channel into a byte.
///
/// Tween output may carry out-of-range channels; a terminal can only show
/// the nearest displayable color.
pub fn displayable_rgb(value: &str) -> Result<(u8, u8, u8)> {
    let [r, g, b] = parse(value, ColorSpace::Rgb)?
        .rounded()
        .to_array()
        .map(|c| c.clamp(0.0, 255.0) as u8);
    Ok((r, g, b))
}

/// Renders a three-cell block in `value`'s color.
///
/// Styling follows `console`'s color detection, so the block is plain spaces
/// when output is not a color terminal.
pub fn swatch(value: &str) -> Result<String> {
    let index = rgb_to_ansi256(displayable_rgb(value)?);
    Ok(Style::new()
        .bg(Color::Color256(index))
        .apply_to("   ")
        .to_string())
}
