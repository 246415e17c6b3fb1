#![warn(missing_docs)]

//! Arc-length resampling of polylines and quad-grid lofting.
//!
//! Curves arrive as polylines in a shared coordinate space. Each one is
//! resampled into the same number of points, evenly spaced by arc length,
//! and the results are joined into one vertex buffer. A single curve becomes
//! an open polyline; several curves become a grid of quads, one row per
//! curve. Vertices are returned relative to the mean of the curve origins.
//!
//! # Example
//!
//! ```
//! use curveloft::{mesh_from_curves, CurveInput, Point3, ResampleSpec, Topology};
//!
//! let curve = CurveInput::new(
//!     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)],
//!     Point3::new(5.0, 0.0, 0.0),
//! );
//! let mesh = mesh_from_curves(&[curve], &ResampleSpec::new(5, false)).unwrap();
//!
//! assert_eq!(mesh.vertices.points[0], Point3::new(-5.0, 0.0, 0.0));
//! assert_eq!(mesh.topology, Topology::Edges(vec![[0, 1], [1, 2], [2, 3], [3, 4]]));
//! ```

pub mod aggregate;
pub mod center;
pub mod error;
pub mod mesh;
pub mod polyline;
pub mod resample;
pub mod topology;

pub use aggregate::{build, CurveInput, VertexBuffer};
pub use center::{recenter, restore};
pub use curveloft_math::Point3;
pub use error::{ErrorKind, MeshError, Result};
pub use mesh::{mesh_from_curves, CurveMesh, MeshDefect};
pub use polyline::{arc_length, cumulative_lengths, Polyline};
pub use resample::resample;
pub use topology::{build_topology, Topology};

use serde::{Deserialize, Serialize};

/// Resampling parameters shared by every curve of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampleSpec {
    /// Number of points each curve is resampled into (at least 2).
    pub segment_count: usize,
    /// Treat each curve as closed, walking back to its first point.
    pub cyclic: bool,
}

impl ResampleSpec {
    /// Create a spec. Validation happens when the spec is used.
    pub fn new(segment_count: usize, cyclic: bool) -> Self {
        Self {
            segment_count,
            cyclic,
        }
    }

    /// Validate the spec.
    pub fn validate(&self) -> Result<()> {
        if self.segment_count < 2 {
            return Err(MeshError::InvalidSegmentCount(self.segment_count));
        }
        Ok(())
    }

    /// Collapse per-curve specs into the one spec a batch runs with.
    ///
    /// # Errors
    ///
    /// * [`MeshError::NoCurves`] if `specs` is empty
    /// * [`MeshError::MismatchedSpecs`] if any two specs differ
    /// * [`MeshError::InvalidSegmentCount`] if the agreed spec is invalid
    pub fn uniform(specs: &[ResampleSpec]) -> Result<Self> {
        let (first, rest) = specs.split_first().ok_or(MeshError::NoCurves)?;
        if let Some(other) = rest.iter().find(|s| *s != first) {
            return Err(MeshError::MismatchedSpecs(*first, *other));
        }
        first.validate()?;
        Ok(*first)
    }
}
