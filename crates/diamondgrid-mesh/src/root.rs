//! The depth-0 partition: an octahedron of four pole-to-pole diamonds.

use diamondgrid_geo::LatLon;

use crate::diamond::Diamond;
use crate::error::MeshError;
use crate::label::Label;

/// The four depth-0 diamonds whose union is the entire sphere.
///
/// Each root diamond is a lune spanning 90° of longitude: its north and
/// south corners are the geographic poles and its east/west corners sit
/// on the equator. Diamond `i` spans longitudes
/// `[theta + i·90°, theta + (i+1)·90°]` and carries label `A` + `i`.
#[derive(Clone, Debug)]
pub struct RootVolume {
    diamonds: [Diamond<LatLon>; 4],
}

impl RootVolume {
    /// Build the root volume for the given orientation angle `theta`
    /// (degrees, longitude of root diamond 0's west corner).
    ///
    /// Returns [`MeshError::InvalidConfiguration`] if `theta` is not
    /// finite.
    pub fn build(theta_deg: f64) -> Result<Self, MeshError> {
        if !theta_deg.is_finite() {
            return Err(MeshError::InvalidConfiguration(format!(
                "root orientation angle must be finite, got {theta_deg}"
            )));
        }

        let north = LatLon::new(90.0, 0.0);
        let south = LatLon::new(-90.0, 0.0);

        let diamonds = [0u8, 1, 2, 3].map(|i| {
            let west = LatLon::new(0.0, theta_deg + f64::from(i) * 90.0);
            let east = LatLon::new(0.0, theta_deg + f64::from(i + 1) * 90.0);
            Diamond::new(north, east, south, west, 0, Label::root(i))
        });

        log::debug!("built root volume with theta = {theta_deg}\u{00B0}");
        Ok(Self { diamonds })
    }

    /// The four root diamonds in label order `A`–`D`.
    ///
    /// The locate scan probes them in this order, which is what makes
    /// boundary-point assignment deterministic.
    #[must_use]
    pub fn diamonds(&self) -> &[Diamond<LatLon>; 4] {
        &self.diamonds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_produces_four_root_diamonds() {
        let roots = RootVolume::build(-25.0).unwrap();
        assert_eq!(roots.diamonds().len(), 4);
        for (i, d) in roots.diamonds().iter().enumerate() {
            assert_eq!(d.level, 0);
            assert_eq!(d.label, Label::root(i as u8));
        }
    }

    #[test]
    fn test_root_diamond_zero_has_pole_corners() {
        let roots = RootVolume::build(-25.0).unwrap();
        let d = &roots.diamonds()[0];
        assert_eq!(d.n, LatLon::new(90.0, 0.0));
        assert_eq!(d.s, LatLon::new(-90.0, 0.0));
        assert_eq!(d.w, LatLon::new(0.0, -25.0));
        assert_eq!(d.e, LatLon::new(0.0, 65.0));
    }

    #[test]
    fn test_root_coverage() {
        // Every sample point lands in at least one root diamond, and
        // interior samples in exactly one.
        let roots = RootVolume::build(-25.0).unwrap();
        let samples = [
            LatLon::new(0.0, 0.0),
            LatLon::new(48.8566, 2.3522),
            LatLon::new(-33.8688, 151.2093),
            LatLon::new(64.1, -21.9),
            LatLon::new(-77.8, 166.7),
            LatLon::new(12.0, -170.0),
            LatLon::new(-5.0, 100.0),
            LatLon::new(33.0, -118.0),
        ];
        for p in samples {
            let hits = roots.diamonds().iter().filter(|d| d.contains(&p)).count();
            assert_eq!(hits, 1, "point {p} contained by {hits} root diamonds");
        }
    }

    #[test]
    fn test_poles_are_covered() {
        let roots = RootVolume::build(-25.0).unwrap();
        for pole in [LatLon::new(90.0, 0.0), LatLon::new(-90.0, 0.0)] {
            let hits = roots.diamonds().iter().filter(|d| d.contains(&pole)).count();
            assert!(hits >= 1, "pole {pole} claimed by no root diamond");
        }
    }

    #[test]
    fn test_shared_meridian_point_claimed_by_both_neighbors() {
        // Closed-interval containment: the meridian at theta + 90° is
        // the E edge of diamond 0 and the W edge of diamond 1.
        let roots = RootVolume::build(-25.0).unwrap();
        let on_edge = LatLon::new(30.0, 65.0);
        assert!(roots.diamonds()[0].contains(&on_edge));
        assert!(roots.diamonds()[1].contains(&on_edge));
    }

    #[test]
    fn test_non_finite_theta_rejected() {
        assert!(matches!(
            RootVolume::build(f64::NAN),
            Err(MeshError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            RootVolume::build(f64::INFINITY),
            Err(MeshError::InvalidConfiguration(_))
        ));
    }
}
