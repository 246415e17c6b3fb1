//! The assembled result: local vertices, connectivity and placement.

use curveloft_math::Point3;
use tracing::debug;

use crate::aggregate::{build, CurveInput, VertexBuffer};
use crate::center::{recenter, restore};
use crate::error::Result;
use crate::topology::{build_topology, Topology};
use crate::ResampleSpec;

/// A mesh built from one or more curves.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMesh {
    /// Vertices relative to `center`.
    pub vertices: VertexBuffer,
    /// Edges for a single curve, quads for several.
    pub topology: Topology,
    /// Mean of the curve origins; where the mesh should be placed.
    pub center: Point3,
}

/// A structural problem found by [`CurveMesh::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshDefect {
    /// An edge or face refers to a vertex that does not exist.
    IndexOutOfRange {
        /// Position of the element in its list.
        element: usize,
        /// The offending index.
        index: u32,
    },
    /// An edge or face uses the same vertex twice.
    RepeatedIndex {
        /// Position of the element in its list.
        element: usize,
    },
    /// Edges were built for several curves, or faces for one.
    TopologyKindMismatch,
    /// The vertex count is not a multiple of the points per curve.
    RaggedBuffer,
}

impl CurveMesh {
    /// Number of curves the mesh was built from.
    pub fn curve_count(&self) -> usize {
        self.vertices.curve_count()
    }

    /// Vertices translated back to world space.
    pub fn world_vertices(&self) -> VertexBuffer {
        restore(&self.vertices, &self.center)
    }

    /// Check the mesh for structural defects.
    ///
    /// Meshes returned by [`mesh_from_curves`] are always valid; this is for
    /// meshes that were edited or deserialized by a host.
    pub fn validate(&self) -> Vec<MeshDefect> {
        let mut defects = Vec::new();
        let per_curve = self.vertices.points_per_curve;
        if per_curve == 0 || self.vertices.len() % per_curve != 0 {
            defects.push(MeshDefect::RaggedBuffer);
        }

        let single_curve = self.curve_count() == 1;
        let (elements, kind_matches): (Vec<&[u32]>, bool) = match &self.topology {
            Topology::Edges(edges) => (edges.iter().map(|e| &e[..]).collect(), single_curve),
            Topology::Faces(faces) => (faces.iter().map(|f| &f[..]).collect(), !single_curve),
        };

        let vertex_count = self.vertices.len();
        for (element, indices) in elements.iter().enumerate() {
            for &index in indices.iter() {
                if index as usize >= vertex_count {
                    defects.push(MeshDefect::IndexOutOfRange { element, index });
                }
            }
            let repeated = indices
                .iter()
                .enumerate()
                .any(|(i, a)| indices[i + 1..].contains(a));
            if repeated {
                defects.push(MeshDefect::RepeatedIndex { element });
            }
        }
        if !kind_matches {
            defects.push(MeshDefect::TopologyKindMismatch);
        }
        defects
    }
}

/// Build a mesh from curves: resample each curve, recenter on the mean curve
/// origin, and connect the points.
///
/// # Errors
///
/// Any [`MeshError`](crate::MeshError) from resampling or topology; no
/// partial mesh is returned.
///
/// # Example
///
/// ```
/// use curveloft::{mesh_from_curves, CurveInput, Point3, ResampleSpec, Topology};
///
/// let curves = [
///     CurveInput::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)], Point3::origin()),
///     CurveInput::new(vec![Point3::new(0.0, 1.0, 0.0), Point3::new(3.0, 1.0, 0.0)], Point3::origin()),
/// ];
/// let mesh = mesh_from_curves(&curves, &ResampleSpec::new(4, false)).unwrap();
/// assert_eq!(mesh.vertices.len(), 8);
/// assert!(matches!(mesh.topology, Topology::Faces(ref faces) if faces.len() == 3));
/// ```
pub fn mesh_from_curves(curves: &[CurveInput], spec: &ResampleSpec) -> Result<CurveMesh> {
    let (world, center) = build(curves, spec)?;
    let vertices = recenter(&world, &center);
    let topology = build_topology(spec.segment_count, curves.len())?;

    debug!(
        curves = curves.len(),
        vertices = vertices.len(),
        elements = topology.len(),
        cyclic = spec.cyclic,
        "built curve mesh"
    );

    Ok(CurveMesh {
        vertices,
        topology,
        center,
    })
}
