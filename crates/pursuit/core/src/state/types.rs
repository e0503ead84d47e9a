use std::fmt;

/// Point in world space. `y` is up; detection works on the `x`/`z` plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance ignoring height, so agents on a bridge still see the street.
    #[inline]
    pub fn planar_distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// Bounded "wanted stars" value.
///
/// Construction and arithmetic always clamp into `0..=MAX`, so an out of range
/// level cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertLevel(u8);

impl AlertLevel {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(5);

    #[inline]
    pub const fn new(stars: u8) -> Self {
        if stars > Self::MAX.0 {
            Self::MAX
        } else {
            Self(stars)
        }
    }

    #[inline]
    pub const fn stars(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_max(self) -> bool {
        self.0 == Self::MAX.0
    }

    /// Adds stars, clamping at [`AlertLevel::MAX`].
    #[inline]
    pub const fn raised_by(self, stars: u32) -> Self {
        if stars >= Self::MAX.0 as u32 {
            Self::MAX
        } else {
            Self::new(self.0 + stars as u8)
        }
    }

    /// Removes stars, clamping at zero.
    #[inline]
    pub const fn lowered_by(self, stars: u8) -> Self {
        Self(self.0.saturating_sub(stars))
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}★", self.0)
    }
}
