//! RGB ↔ HSL channel conversion.
//!
//! Both directions work on unrounded [`ChannelTriplet`]s:
//!
//! - RGB channels are `0.0–255.0`
//! - HSL hue is in degrees, saturation and lightness in percent (`0.0–100.0`)
//!
//! The transforms are the standard hexcone formulas. Achromatic inputs
//! (`max == min` in RGB, `s == 0` in HSL) always map to hue `0`, never NaN.
//!
//! ```rust
//! use colortween_codec::{hsl_to_rgb, rgb_to_hsl, ChannelTriplet};
//!
//! let hsl = rgb_to_hsl(ChannelTriplet::new(255.0, 0.0, 0.0));
//! assert_eq!(hsl, ChannelTriplet::new(0.0, 100.0, 50.0));
//!
//! let rgb = hsl_to_rgb(ChannelTriplet::new(240.0, 100.0, 50.0));
//! assert_eq!(rgb, ChannelTriplet::new(0.0, 0.0, 255.0));
//! ```

use crate::channels::ChannelTriplet;

// ─── RGB → HSL ──────────────────────────────────────────────────────────────

/// Converts RGB channels (0–255) to HSL (degrees, percent, percent).
pub fn rgb_to_hsl(rgb: ChannelTriplet) -> ChannelTriplet {
    let [r, g, b] = rgb.0.map(|c| c / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return ChannelTriplet::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Sextant of the hue circle, picked by the dominant channel (red wins ties).
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ChannelTriplet::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

// ─── HSL → RGB ──────────────────────────────────────────────────────────────

/// Converts HSL channels (degrees, percent, percent) to RGB (0–255).
pub fn hsl_to_rgb(hsl: ChannelTriplet) -> ChannelTriplet {
    let h = hsl[0] / 360.0;
    let s = hsl[1] / 100.0;
    let l = hsl[2] / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return ChannelTriplet::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    ChannelTriplet::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Evaluates one RGB channel at hue offset `t` (in turns).
///
/// `t` is wrapped by at most one turn in either direction, matching the
/// canonical formula; hues beyond that fall through to `p`.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
