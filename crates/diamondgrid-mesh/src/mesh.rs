//! The mesh facade: address lookup and bounding-box cell covers over a
//! configured root volume.

use diamondgrid_geo::LatLon;

use crate::address::AddressTable;
use crate::boundary::render_boundary;
use crate::config::MeshConfig;
use crate::diamond::Diamond;
use crate::error::MeshError;
use crate::label::Label;
use crate::locate::locate;
use crate::root::RootVolume;

/// Hard cap on `levelmax`. Past this depth cell extents fall under f64
/// midpoint resolution and addresses stop being meaningful.
pub const MAX_LEVEL: u32 = 30;

/// Extra subdivision levels applied below the size-matched cell when
/// covering a bounding box, giving `4^EXTRA_LEVELS` leaf cells.
pub const EXTRA_LEVELS: u32 = 3;

/// The diamond grid over the whole sphere.
///
/// Owns the root volume, the maximum depth, and the address table.
/// Immutable after construction; every query is a pure function of the
/// mesh and its arguments, so a shared `EarthMesh` can serve
/// independent lookups from multiple threads without coordination.
#[derive(Clone, Debug)]
pub struct EarthMesh {
    roots: RootVolume,
    levelmax: u32,
    table: AddressTable,
    /// Great-circle distance (radians) between two opposite corners of
    /// a root diamond; the yardstick for size-to-level conversion.
    size0: f64,
}

impl EarthMesh {
    /// Build a mesh with the identity address table.
    pub fn new(config: &MeshConfig) -> Result<Self, MeshError> {
        Self::with_table(config, AddressTable::identity())
    }

    /// Build a mesh with a custom address table.
    pub fn with_table(config: &MeshConfig, table: AddressTable) -> Result<Self, MeshError> {
        config.validate()?;
        let roots = RootVolume::build(config.theta_deg)?;
        let first = &roots.diamonds()[0];
        let size0 = first.n.distance_to(&first.s);
        Ok(Self {
            roots,
            levelmax: config.levelmax,
            table,
            size0,
        })
    }

    /// The root volume this mesh is built on.
    #[must_use]
    pub fn root_volume(&self) -> &RootVolume {
        &self.roots
    }

    /// Maximum supported subdivision depth.
    #[must_use]
    pub fn levelmax(&self) -> u32 {
        self.levelmax
    }

    /// The cell address of `point` at the mesh's full depth: locate to
    /// `levelmax`, then encode the chain's labels.
    ///
    /// Deterministic: the same point always yields the same address.
    pub fn address_of(&self, point: LatLon) -> Result<String, MeshError> {
        let chain = locate(point, &self.roots, self.levelmax)?;
        let labels: Vec<Label> = chain.iter().map(|d| d.label).collect();
        self.table.encode(&labels)
    }

    /// The smallest subdivision level whose cells are no larger than
    /// `size` (great-circle radians): `floor(log2(size0 / size))`,
    /// clamped to `[0, levelmax]`. Non-positive sizes map to
    /// `levelmax`.
    #[must_use]
    pub fn level_from_size(&self, size: f64) -> u32 {
        if size <= 0.0 {
            return self.levelmax;
        }
        let level = (self.size0 / size).log2().floor();
        if level <= 0.0 {
            0
        } else {
            (level as u32).min(self.levelmax)
        }
    }

    /// Boundaries of leaf cells approximately covering a bounding box.
    ///
    /// The target depth comes from the box diagonal via
    /// [`level_from_size`](Self::level_from_size); `reference_point` is
    /// located to that depth, and the matched cell is then exhaustively
    /// subdivided [`EXTRA_LEVELS`] further, yielding `4^EXTRA_LEVELS`
    /// leaves whose rendered boundaries are returned.
    ///
    /// This is an approximate cover, not an exact clip: expansion only
    /// goes downward from the one cell containing the reference point,
    /// so leaves near but outside the true box can be included and box
    /// area outside the starting cell is not.
    pub fn cells_covering_bounding_box(
        &self,
        north: f64,
        east: f64,
        south: f64,
        west: f64,
        reference_point: LatLon,
    ) -> Result<Vec<Vec<LatLon>>, MeshError> {
        let diagonal = LatLon::new(north, west).distance_to(&LatLon::new(south, east));
        let level = self.level_from_size(diagonal);
        log::debug!(
            "covering box ({north}, {east}, {south}, {west}): diagonal {diagonal:.6} rad, level {level}"
        );

        let chain = locate(reference_point, &self.roots, level)?;
        let mut cells = vec![chain[chain.len() - 1]];
        for _ in 0..EXTRA_LEVELS {
            cells = cells
                .iter()
                .flat_map(Diamond::subdivide)
                .collect();
        }
        Ok(cells.iter().map(render_boundary).collect())
    }
}
