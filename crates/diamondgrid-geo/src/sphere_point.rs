//! Capability contract for geometry backends.

use glam::DVec3;

/// The operations the subdivision engine requires from a point on the
/// unit sphere.
///
/// Implemented by [`LatLon`](crate::LatLon); any alternative geometry
/// backend (e.g. a vector-native point, or one carrying extra payload)
/// can be substituted as long as it honors the contract:
///
/// - `midpoint` returns the point on the *shorter* great-circle arc
///   equidistant from both endpoints;
/// - `distance` is the great-circle angular distance in radians:
///   non-negative, symmetric, and zero iff the points coincide;
/// - `to_unit_vector` maps into a right-handed sphere-centered frame,
///   consistently for all points, so that cross/dot half-space tests
///   are meaningful across points.
pub trait SpherePoint: Copy {
    /// The point on the shorter great-circle arc halfway between
    /// `self` and `other`.
    fn midpoint(&self, other: &Self) -> Self;

    /// Great-circle angular distance to `other`, in radians.
    fn distance(&self, other: &Self) -> f64;

    /// This point as a unit vector in a right-handed sphere-centered
    /// coordinate frame.
    fn to_unit_vector(&self) -> DVec3;
}
