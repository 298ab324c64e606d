//! Octahedral diamond grid: recursive subdivision of the sphere into
//! addressable quadrilateral cells, point location, and geodesic
//! boundary rendering.

mod address;
mod boundary;
mod config;
mod diamond;
mod error;
mod label;
mod locate;
mod mesh;
mod root;

pub use address::AddressTable;
pub use boundary::{REFERENCE_DEPTH, render_boundary};
pub use config::{ConfigError, MeshConfig};
pub use diamond::Diamond;
pub use error::MeshError;
pub use label::{Label, Quadrant};
pub use locate::locate;
pub use mesh::{EXTRA_LEVELS, EarthMesh, MAX_LEVEL};
pub use root::RootVolume;
