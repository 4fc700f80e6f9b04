//! Parsing color strings into channel triplets and serializing them back.

use crate::channels::{round_half_up, ChannelTriplet};
use crate::error::{CodecError, Result};
use crate::grammar::tokenize;
use crate::space::ColorSpace;

/// Parses `value` into channels in `target`.
///
/// A string already written in `target`'s grammar is returned unconverted,
/// with no rounding. Any other accepted grammar is read and converted.
///
/// # Errors
///
/// Returns [`CodecError::UnrecognizedColorFormat`] if `value` matches none of
/// the accepted grammars.
///
/// # Example
///
/// ```rust
/// use colortween_codec::{parse, ChannelTriplet, ColorSpace};
///
/// assert_eq!(
///     parse("#f00", ColorSpace::Hsl).unwrap(),
///     ChannelTriplet::new(0.0, 100.0, 50.0)
/// );
/// assert!(parse("notacolor", ColorSpace::Rgb).is_err());
/// ```
pub fn parse(value: &str, target: ColorSpace) -> Result<ChannelTriplet> {
    tokenize(value)
        .into_space(target)
        .ok_or_else(|| CodecError::UnrecognizedColorFormat(value.to_string()))
}

/// Serializes channels in `space` to their canonical string.
///
/// Channels are rounded half-up and written as integers. Nothing is clamped
/// and hue is not wrapped, so out-of-range channels appear as-is. Non-finite
/// channels (an infinite saturation from a far out-of-range input, or a `NaN`
/// ratio) are written as `0`.
///
/// ```rust
/// use colortween_codec::{serialize, ChannelTriplet, ColorSpace};
///
/// let c = ChannelTriplet::new(127.5, 0.0, 300.2);
/// assert_eq!(serialize(c, ColorSpace::Rgb), "rgb(128,0,300)");
/// assert_eq!(serialize(c, ColorSpace::Hsl), "hsl(128,0%,300%)");
/// ```
pub fn serialize(channels: ChannelTriplet, space: ColorSpace) -> String {
    let [a, b, c] = channels.0.map(|x| {
        if x.is_finite() {
            round_half_up(x) as i64
        } else {
            0
        }
    });
    match space {
        ColorSpace::Rgb => format!("rgb({},{},{})", a, b, c),
        ColorSpace::Hsl => format!("hsl({},{}%,{}%)", a, b, c),
    }
}

/// Rewrites `value` in the canonical form of `space`.
pub fn normalize(value: &str, space: ColorSpace) -> Result<String> {
    Ok(serialize(parse(value, space)?, space))
}

/// Rewrites `value` as `rgb(R,G,B)`.
///
/// ```rust
/// use colortween_codec::to_rgb_string;
///
/// assert_eq!(to_rgb_string("#f00").unwrap(), "rgb(255,0,0)");
/// assert_eq!(to_rgb_string("#ff0000").unwrap(), "rgb(255,0,0)");
/// ```
pub fn to_rgb_string(value: &str) -> Result<String> {
    normalize(value, ColorSpace::Rgb)
}

/// Rewrites `value` as `hsl(H,S%,L%)`.
pub fn to_hsl_string(value: &str) -> Result<String> {
    normalize(value, ColorSpace::Hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // parse
    // =========================================================================

    #[test]
    fn parse_rgb_into_rgb_is_passthrough() {
        assert_eq!(
            parse("rgb(12,34,56)", ColorSpace::Rgb).unwrap(),
            ChannelTriplet::new(12.0, 34.0, 56.0)
        );
    }

    #[test]
    fn parse_hsl_into_hsl_keeps_fractions() {
        assert_eq!(
            parse("hsl(16.04,100%,60.39%)", ColorSpace::Hsl).unwrap(),
            ChannelTriplet::new(16.04, 100.0, 60.39)
        );
    }

    #[test]
    fn parse_hex_into_both_spaces() {
        assert_eq!(
            parse("#3366cc", ColorSpace::Rgb).unwrap(),
            ChannelTriplet::new(51.0, 102.0, 204.0)
        );
        assert_eq!(
            parse("#fff", ColorSpace::Hsl).unwrap(),
            ChannelTriplet::new(0.0, 0.0, 100.0)
        );
    }

    #[test]
    fn parse_rgb_into_hsl_converts() {
        let hsl = parse("rgb(128,128,128)", ColorSpace::Hsl).unwrap();
        assert_eq!(hsl[0], 0.0);
        assert_eq!(hsl[1], 0.0);
        assert!((hsl[2] - 50.196).abs() < 0.001);
    }

    #[test]
    fn parse_unrecognized_is_an_error() {
        assert_eq!(
            parse("notacolor", ColorSpace::Rgb),
            Err(CodecError::UnrecognizedColorFormat("notacolor".to_string()))
        );
        assert!(parse("", ColorSpace::Hsl).is_err());
    }

    // =========================================================================
    // serialize
    // =========================================================================

    #[test]
    fn serialize_rounds_half_up() {
        let c = ChannelTriplet::new(0.5, 1.49, 254.5);
        assert_eq!(serialize(c, ColorSpace::Rgb), "rgb(1,1,255)");
    }

    #[test]
    fn serialize_does_not_clamp() {
        let c = ChannelTriplet::new(-10.0, 300.0, 0.0);
        assert_eq!(serialize(c, ColorSpace::Rgb), "rgb(-10,300,0)");

        let c = ChannelTriplet::new(400.0, 120.0, -5.0);
        assert_eq!(serialize(c, ColorSpace::Hsl), "hsl(400,120%,-5%)");
    }

    #[test]
    fn serialize_never_prints_negative_zero() {
        let c = ChannelTriplet::new(-0.2, -0.0, 0.0);
        assert_eq!(serialize(c, ColorSpace::Rgb), "rgb(0,0,0)");
    }

    #[test]
    fn serialize_writes_non_finite_channels_as_zero() {
        let c = ChannelTriplet::new(f64::INFINITY, f64::NAN, f64::NEG_INFINITY);
        assert_eq!(serialize(c, ColorSpace::Rgb), "rgb(0,0,0)");
        assert_eq!(serialize(c, ColorSpace::Hsl), "hsl(0,0%,0%)");
    }

    // =========================================================================
    // normalize
    // =========================================================================

    #[test]
    fn normalize_to_rgb() {
        assert_eq!(to_rgb_string("#f00").unwrap(), "rgb(255,0,0)");
        assert_eq!(to_rgb_string("#ff0000").unwrap(), "rgb(255,0,0)");
        assert_eq!(to_rgb_string("rgb(1, 2, 3)").unwrap(), "rgb(1,2,3)");
        assert_eq!(to_rgb_string("hsl(120,100%,25%)").unwrap(), "rgb(0,128,0)");
        assert_eq!(to_rgb_string("hsl(200,50%,40%)").unwrap(), "rgb(51,119,153)");
    }

    #[test]
    fn normalize_to_hsl() {
        assert_eq!(to_hsl_string("#f00").unwrap(), "hsl(0,100%,50%)");
        assert_eq!(to_hsl_string("rgb(255,107,53)").unwrap(), "hsl(16,100%,60%)");
        assert_eq!(to_hsl_string("hsl(200, 50, 40)").unwrap(), "hsl(200,50%,40%)");
        assert_eq!(to_hsl_string("#808080").unwrap(), "hsl(0,0%,50%)");
    }

    #[test]
    fn normalize_far_out_of_range_rgb_to_hsl() {
        // l = 1 makes the saturation denominator zero.
        assert_eq!(normalize("rgb(510,0,0)", ColorSpace::Hsl).unwrap(), "hsl(0,0%,100%)");
    }

    #[test]
    fn normalize_propagates_unrecognized() {
        assert!(matches!(
            normalize("bogus", ColorSpace::Hsl),
            Err(CodecError::UnrecognizedColorFormat(_))
        ));
    }
}
