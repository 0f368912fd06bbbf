//! Geographic coordinate and non-negative distance value types.

use std::fmt;

use crate::RouteError;

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// Stored as `f64` (unlike a city-scale simulation's `f32` points) because
/// snapshot round-tripping must reproduce the source map's coordinates
/// exactly and routes can span distances where single-precision rounding
/// would matter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Haversine great-circle distance in metres (mean Earth radius 6,371,000 m).
    pub fn distance_to(self, other: Coordinate) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let d_phi = (other.latitude - self.latitude).to_radians();
        let d_lambda = (other.longitude - self.longitude).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }

    /// Sum of absolute degree differences — the raw input to the A*
    /// heuristic's metre scaling, not a distance in its own right.
    pub fn manhattan_degrees_to(self, other: Coordinate) -> f64 {
        (self.latitude - other.latitude).abs() + (self.longitude - other.longitude).abs()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A non-negative distance in metres.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(f64);

impl Distance {
    /// Construct a `Distance`. Fails with [`RouteError::InvalidArgument`] if `meters` is negative.
    pub fn new(meters: f64) -> Result<Self, RouteError> {
        if meters < 0.0 {
            return Err(RouteError::InvalidArgument(format!(
                "distance cannot be negative: {meters}"
            )));
        }
        Ok(Self(meters))
    }

    /// Construct a `Distance` known to be non-negative (e.g. a sum of
    /// already-validated distances), skipping the fallible path.
    pub const fn from_meters_unchecked(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kilometers(self) -> f64 {
        self.0 / 1000.0
    }

    #[inline]
    pub fn miles(self) -> f64 {
        self.0 / 1609.34
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Distance) -> Distance {
        Distance(self.0 + other.0)
    }

    /// Subtraction that saturates at zero rather than going negative.
    pub fn saturating_sub(self, other: Distance) -> Distance {
        Distance((self.0 - other.0).max(0.0))
    }
}

impl std::ops::Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Distance {
        self.saturating_add(rhs)
    }
}

impl std::ops::Sub for Distance {
    type Output = Distance;
    fn sub(self, rhs: Distance) -> Distance {
        self.saturating_sub(rhs)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}
