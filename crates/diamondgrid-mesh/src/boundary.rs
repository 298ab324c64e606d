//! Geodesic boundary rendering: expand a diamond's corners into a
//! drawable polyline and normalize longitudes across the antimeridian.

use diamondgrid_geo::LatLon;

use crate::diamond::Diamond;

/// Rendering resolution target. A diamond at this level or deeper is
/// rendered as its bare four corners; shallower diamonds get one
/// midpoint-insertion pass per level of difference, so a root diamond's
/// long edges come out as smooth geodesics.
pub const REFERENCE_DEPTH: u32 = 8;

/// Render a diamond's boundary as a closed ring of geographic points.
///
/// Starts from the four cardinal points and refines
/// `max(0, REFERENCE_DEPTH - level)` times; each pass inserts the
/// great-circle midpoint between every consecutive pair (including the
/// last-to-first wrap), doubling the point count, so k passes yield
/// `4 * 2^k` points.
///
/// If the ring straddles the ±180° line (minimum and maximum longitude
/// have opposite signs and differ by more than 180°), every negative
/// longitude is shifted by +360° so the whole ring lies in one
/// contiguous longitude interval. Known limitation: a ring that
/// legitimately spans more than 180° of longitude without crossing the
/// antimeridian trips the same heuristic and gets shifted too.
#[must_use]
pub fn render_boundary(diamond: &Diamond<LatLon>) -> Vec<LatLon> {
    let mut points = diamond.cardinal_points().to_vec();
    let passes = REFERENCE_DEPTH.saturating_sub(diamond.level);
    for _ in 0..passes {
        points = refine(&points);
    }
    normalize_antimeridian(&mut points);
    points
}

/// One refinement pass: insert the geodesic midpoint after every point,
/// treating the sequence as a closed ring.
fn refine(points: &[LatLon]) -> Vec<LatLon> {
    let mut refined = Vec::with_capacity(points.len() * 2);
    for i in 0..points.len() {
        let start = points[i];
        let end = points[(i + 1) % points.len()];
        refined.push(start);
        refined.push(start.midpoint_to(&end));
    }
    refined
}

/// Shift negative longitudes by +360° when the ring is judged to cross
/// the ±180° line.
fn normalize_antimeridian(points: &mut [LatLon]) {
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    for p in points.iter() {
        min_lon = min_lon.min(p.longitude);
        max_lon = max_lon.max(p.longitude);
    }
    if min_lon < 0.0 && max_lon > 0.0 && max_lon - min_lon > 180.0 {
        for p in points.iter_mut() {
            if p.longitude < 0.0 {
                p.longitude += 360.0;
            }
        }
    }
}
