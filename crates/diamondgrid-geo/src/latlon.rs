//! Geographic points on the unit sphere.

use std::fmt;

use glam::DVec3;

use crate::SpherePoint;

/// A geographic point expressed as latitude and longitude in degrees.
///
/// The unit-vector frame is the standard geodetic right-handed frame:
/// x toward (0°, 0°), y toward (0°, 90°E), z toward the north pole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon {
    /// Latitude in degrees. Range: \[-90, 90\].
    /// Positive = north of the equator. Negative = south.
    pub latitude: f64,
    /// Longitude in degrees. Range: (-180, 180\].
    /// Positive = east. Negative = west.
    pub longitude: f64,
}

impl LatLon {
    /// Construct a `LatLon`, clamping latitude to \[-90, 90\] and wrapping
    /// longitude into (-180, 180\].
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: wrap_longitude(longitude),
        }
    }

    /// Convert to a unit vector in the geodetic frame.
    #[must_use]
    pub fn to_unit_vector(&self) -> DVec3 {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    /// Recover a `LatLon` from a direction vector (need not be unit length).
    ///
    /// A zero vector maps to (0°, 0°).
    #[must_use]
    pub fn from_unit_vector(v: DVec3) -> Self {
        let len = v.length();
        if len < 1e-30 {
            return Self::new(0.0, 0.0);
        }
        let d = v / len;
        Self::new(
            d.z.clamp(-1.0, 1.0).asin().to_degrees(),
            d.y.atan2(d.x).to_degrees(),
        )
    }

    /// Great-circle angular distance to `other`, in radians.
    /// Uses the haversine formula.
    #[must_use]
    pub fn distance_to(&self, other: &LatLon) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * a.sqrt().clamp(-1.0, 1.0).asin()
    }

    /// The point on the shorter great-circle arc halfway between `self`
    /// and `other`, computed by normalizing the chord sum of the two
    /// unit vectors.
    ///
    /// Exactly antipodal endpoints have no unique midpoint; the chord
    /// sum degenerates and this method picks an arbitrary point on the
    /// equidistant great circle.
    #[must_use]
    pub fn midpoint_to(&self, other: &LatLon) -> Self {
        let a = self.to_unit_vector();
        let b = other.to_unit_vector();
        let sum = a + b;
        if sum.length_squared() < 1e-24 {
            // Antipodal: any perpendicular direction is equidistant.
            let perp = if a.z.abs() < 0.9 {
                a.cross(DVec3::Z)
            } else {
                a.cross(DVec3::X)
            };
            return Self::from_unit_vector(perp);
        }
        Self::from_unit_vector(sum)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.4}\u{00B0}{}, {:.4}\u{00B0}{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
        )
    }
}

impl SpherePoint for LatLon {
    fn midpoint(&self, other: &Self) -> Self {
        self.midpoint_to(other)
    }

    fn distance(&self, other: &Self) -> f64 {
        self.distance_to(other)
    }

    fn to_unit_vector(&self) -> DVec3 {
        LatLon::to_unit_vector(self)
    }
}

/// Wrap a longitude in degrees into (-180, 180\].
fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}
