//! Spherical-point primitives for the diamondgrid DGGS: geographic coordinates,
//! great-circle midpoints and distances, and unit-vector conversion.

mod latlon;
mod sphere_point;

pub use latlon::LatLon;
pub use sphere_point::SpherePoint;
