//! Core error types.

/// Errors surfaced by the diamond grid core.
///
/// All variants are deterministic results of their inputs; retrying the
/// same call cannot change the outcome, so the core never retries or
/// recovers on its own.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// No candidate diamond at the given level contains the query
    /// point. Should not occur for points on the sphere given the
    /// partition invariant and closed-interval edge semantics; treated
    /// as a hard failure rather than papered over.
    #[error("no diamond at level {level} contains ({latitude}\u{00B0}, {longitude}\u{00B0})")]
    NotFound {
        /// Latitude of the query point, degrees.
        latitude: f64,
        /// Longitude of the query point, degrees.
        longitude: f64,
        /// Subdivision level at which the scan failed.
        level: u32,
    },

    /// A label symbol has no entry in the active address table.
    #[error("label symbol '{0}' has no entry in the address table")]
    UnknownSymbol(char),

    /// A malformed mesh parameter (out-of-range `levelmax`, non-finite
    /// orientation angle, ...).
    #[error("invalid mesh configuration: {0}")]
    InvalidConfiguration(String),
}
