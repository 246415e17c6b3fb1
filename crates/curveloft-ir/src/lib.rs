//! Scene document format for curveloft hosts.
//!
//! A scene is a flat list of named objects, each with a placement and a
//! payload: a curve (already tessellated into points), a mesh, or nothing.
//! Hosts read curves from a scene and write the resulting mesh back as
//! another object. The format is declarative; no resampling happens here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current document format version.
pub const FORMAT_VERSION: &str = "0.1";

/// 3D vector with f64 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// All components zero.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// All components one.
    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// What an object carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectData {
    /// A curve sampled into points, in object space.
    Curve {
        /// Sampled points in order.
        points: Vec<Vec3>,
        /// Per-curve closed flag; falls back to the host setting when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cyclic: Option<bool>,
    },
    /// A polygon mesh in object space.
    Mesh {
        /// Vertex positions.
        vertices: Vec<Vec3>,
        /// Loose edges as vertex index pairs.
        #[serde(default)]
        edges: Vec<[u32; 2]>,
        /// Faces as vertex index lists.
        #[serde(default)]
        faces: Vec<Vec<u32>>,
    },
    /// Placement only, no geometry.
    Empty,
}

impl ObjectData {
    /// Short name of the payload kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectData::Curve { .. } => "curve",
            ObjectData::Mesh { .. } => "mesh",
            ObjectData::Empty => "empty",
        }
    }

    /// Check if this is a curve.
    pub fn is_curve(&self) -> bool {
        matches!(self, ObjectData::Curve { .. })
    }
}

/// A named, placed object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique name within the scene.
    pub name: String,
    /// Object origin in world space.
    #[serde(default = "Vec3::zero")]
    pub location: Vec3,
    /// Euler rotation in degrees (applied X, then Y, then Z).
    #[serde(default = "Vec3::zero")]
    pub rotation: Vec3,
    /// Per-axis scale.
    #[serde(default = "Vec3::one")]
    pub scale: Vec3,
    /// Payload.
    pub data: ObjectData,
}

impl SceneObject {
    /// Create an object at the world origin with no rotation or scaling.
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            location: Vec3::zero(),
            rotation: Vec3::zero(),
            scale: Vec3::one(),
            data,
        }
    }

    /// Builder-style location setter.
    pub fn at(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }
}

/// Errors raised while looking up scene objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No object has this name.
    #[error("no object named '{0}' in scene")]
    UnknownObject(String),
}

/// A curveloft scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Format version string.
    pub version: String,
    /// Objects in document order.
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            objects: Vec::new(),
        }
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an object by name.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Resolve a selection by name, keeping the order of `names`.
    ///
    /// An empty selection selects every object in document order.
    pub fn selected(&self, names: &[String]) -> Result<Vec<&SceneObject>, SceneError> {
        if names.is_empty() {
            return Ok(self.objects.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.object(name)
                    .ok_or_else(|| SceneError::UnknownObject(name.clone()))
            })
            .collect()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
