//! Dive-through point location: descend the subdivision tree from a
//! root diamond to a requested depth, always following the child that
//! contains the query point.

use diamondgrid_geo::LatLon;

use crate::diamond::Diamond;
use crate::error::MeshError;
use crate::root::RootVolume;

/// Locate `point` down to `depth` subdivision levels.
///
/// Returns the full descent chain: the containing root diamond followed
/// by one diamond per level, `depth + 1` entries in total. Each element
/// contains the point and is a child of the previous one.
///
/// Candidates are scanned in canonical order (roots `A`–`D`, children
/// N/E/S/W) and the first match wins. Containment is closed-interval,
/// so a point exactly on a shared edge satisfies both neighbors; the
/// fixed scan order turns that into a deterministic assignment to
/// exactly one diamond per level.
///
/// O(depth): one subdivision and a 4-way scan per level. No
/// backtracking: containment at level k implies containment by one
/// child at level k + 1 via the partition invariant.
pub fn locate(
    point: LatLon,
    roots: &RootVolume,
    depth: u32,
) -> Result<Vec<Diamond<LatLon>>, MeshError> {
    log::debug!("locating {point} to depth {depth}");

    let mut current = *roots
        .diamonds()
        .iter()
        .find(|d| d.contains(&point))
        .ok_or(MeshError::NotFound {
            latitude: point.latitude,
            longitude: point.longitude,
            level: 0,
        })?;

    let mut chain = Vec::with_capacity(depth as usize + 1);
    chain.push(current);

    for level in 1..=depth {
        let children = current.subdivide();
        current = *children
            .iter()
            .find(|c| c.contains(&point))
            .ok_or(MeshError::NotFound {
                latitude: point.latitude,
                longitude: point.longitude,
                level,
            })?;
        log::trace!("level {level}: descended into {:?}", current.label);
        chain.push(current);
    }

    Ok(chain)
}
