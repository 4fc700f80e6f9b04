//! The in-memory form of a color: three unclamped `f64` channels.

use std::ops::Index;

/// An ordered triple of channel values.
///
/// The meaning depends on the [`ColorSpace`](crate::ColorSpace) it was parsed
/// into: `(r, g, b)` nominally in 0–255, or `(h, s, l)` with hue in degrees and
/// saturation/lightness in percent. Values are never clamped; out-of-range
/// channels propagate through interpolation and serialization as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelTriplet(pub [f64; 3]);

impl ChannelTriplet {
    /// Creates a triplet from three channel values.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self([a, b, c])
    }

    /// Returns the channels as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Linearly interpolates each channel toward `end`.
    ///
    /// `ratio` is not clamped: values outside `0.0..=1.0` extrapolate past
    /// the endpoints.
    pub fn lerp(&self, end: &Self, ratio: f64) -> Self {
        let [a0, b0, c0] = self.0;
        let [a1, b1, c1] = end.0;
        Self([
            a0 + (a1 - a0) * ratio,
            b0 + (b1 - b0) * ratio,
            c0 + (c1 - c0) * ratio,
        ])
    }

    /// Rounds every channel half-up. See [`round_half_up`].
    pub fn rounded(&self) -> Self {
        Self(self.0.map(round_half_up))
    }
}

impl Index<usize> for ChannelTriplet {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; 3]> for ChannelTriplet {
    fn from(channels: [f64; 3]) -> Self {
        Self(channels)
    }
}

impl From<(u8, u8, u8)> for ChannelTriplet {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self([f64::from(r), f64::from(g), f64::from(b)])
    }
}

/// Rounds to the nearest integer, ties toward positive infinity (`floor(x + 0.5)`).
///
/// This differs from [`f64::round`] for negative ties: `-2.5` becomes `-2.0`.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_ties_go_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(127.5), 128.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        let a = ChannelTriplet::new(0.0, 0.0, 0.0);
        let b = ChannelTriplet::new(100.0, 200.0, 50.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = ChannelTriplet::new(0.0, 0.0, 0.0);
        let b = ChannelTriplet::new(100.0, 200.0, 50.0);
        assert_eq!(a.lerp(&b, 0.5), ChannelTriplet::new(50.0, 100.0, 25.0));
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range() {
        let a = ChannelTriplet::new(100.0, 100.0, 100.0);
        let b = ChannelTriplet::new(200.0, 0.0, 100.0);
        assert_eq!(a.lerp(&b, 1.5), ChannelTriplet::new(250.0, -50.0, 100.0));
        assert_eq!(a.lerp(&b, -1.0), ChannelTriplet::new(0.0, 200.0, 100.0));
    }

    #[test]
    fn rounded_applies_per_channel() {
        let t = ChannelTriplet::new(127.5, 0.4, 254.5).rounded();
        assert_eq!(t, ChannelTriplet::new(128.0, 0.0, 255.0));
    }

    #[test]
    fn conversions_and_indexing() {
        let t = ChannelTriplet::from((255, 128, 0));
        assert_eq!(t[0], 255.0);
        assert_eq!(t[1], 128.0);
        assert_eq!(t[2], 0.0);
        assert_eq!(ChannelTriplet::from([1.0, 2.0, 3.0]).to_array(), [1.0, 2.0, 3.0]);
    }
}
