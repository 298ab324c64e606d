//! The diamond cell: an immutable spherical quadrilateral that knows
//! how to subdivide itself and test point containment.

use diamondgrid_geo::SpherePoint;

use crate::label::{Label, Quadrant};

/// Tolerance for the half-space boundary test. A point within this
/// distance of an edge plane counts as inside (closed-interval
/// semantics), so points exactly on a shared edge satisfy `contains`
/// for both neighbors and the locate scan's fixed probe order decides.
const BOUNDARY_EPS: f64 = 1e-12;

/// One cell of the diamond grid: a spherical quadrilateral with four
/// corners wound clockwise starting north, as seen from outside the
/// sphere.
///
/// Immutable once constructed. Diamonds are plain values regenerated
/// per traversal; the subdivision tree is never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Diamond<P> {
    /// North corner.
    pub n: P,
    /// East corner.
    pub e: P,
    /// South corner.
    pub s: P,
    /// West corner.
    pub w: P,
    /// Depth from the root (root diamonds are level 0).
    pub level: u32,
    /// Which branch of its parent (or which root) this diamond is.
    pub label: Label,
}

impl<P: SpherePoint> Diamond<P> {
    /// Construct a diamond from its four corners in N, E, S, W order.
    #[must_use]
    pub fn new(n: P, e: P, s: P, w: P, level: u32, label: Label) -> Self {
        Self {
            n,
            e,
            s,
            w,
            level,
            label,
        }
    }

    /// The four corners in the fixed N, E, S, W order.
    ///
    /// Every geometric algorithm (containment, subdivision, boundary
    /// refinement) assumes this winding; do not reorder.
    #[must_use]
    pub fn cardinal_points(&self) -> [P; 4] {
        [self.n, self.e, self.s, self.w]
    }

    /// Subdivide into the four child diamonds covering this cell's
    /// quadrants, clockwise from north.
    ///
    /// The five new vertices are great-circle midpoints: one per edge
    /// plus the midpoint of the E–W diagonal, which becomes the shared
    /// center corner of all four children. The children exactly tile
    /// the parent (up to floating-point tolerance): each shares two
    /// full edges with siblings and one vertex with each of the other
    /// two.
    ///
    /// Pure: same parent, same children, always.
    #[must_use]
    pub fn subdivide(&self) -> [Diamond<P>; 4] {
        let ne = self.n.midpoint(&self.e);
        let se = self.s.midpoint(&self.e);
        let sw = self.s.midpoint(&self.w);
        let nw = self.n.midpoint(&self.w);
        let o = self.e.midpoint(&self.w);
        let level = self.level + 1;

        [
            Diamond::new(self.n, ne, o, nw, level, Label::Child(Quadrant::North)),
            Diamond::new(ne, self.e, se, o, level, Label::Child(Quadrant::East)),
            Diamond::new(o, se, self.s, sw, level, Label::Child(Quadrant::South)),
            Diamond::new(nw, o, sw, self.w, level, Label::Child(Quadrant::West)),
        ]
    }

    /// Spherical point-in-quadrilateral test.
    ///
    /// Walks the closed corner loop N→E→S→W→N and half-space-tests the
    /// point against the plane through the sphere center and each edge.
    /// With the clockwise-from-outside winding of
    /// [`cardinal_points`](Self::cardinal_points), an interior point
    /// satisfies
    /// `(a × b) · p <= 0` for every directed edge `(a, b)`; a single
    /// positive projection puts the point outside. Using planes instead
    /// of planar angle sums keeps the test free of antimeridian and
    /// pole singularities.
    ///
    /// Boundary points (projection zero within tolerance) are inside.
    #[must_use]
    pub fn contains(&self, point: &P) -> bool {
        let p = point.to_unit_vector();
        let corners = self.cardinal_points();
        for i in 0..4 {
            let a = corners[i].to_unit_vector();
            let b = corners[(i + 1) % 4].to_unit_vector();
            if a.cross(b).dot(p) > BOUNDARY_EPS {
                return false;
            }
        }
        true
    }
}
