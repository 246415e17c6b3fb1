//! Writing a built mesh out as a scene object or a Wavefront OBJ file.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;
use curveloft::{CurveMesh, Topology};
use curveloft_ir::{ObjectData, Scene, SceneObject, Vec3};

/// Output formats, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Scene JSON with the mesh appended as a new object.
    Scene,
    /// Wavefront OBJ in world space.
    Obj,
}

impl Format {
    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "json" => Ok(Format::Scene),
            "obj" => Ok(Format::Obj),
            _ => anyhow::bail!("Unknown output format: {}", ext),
        }
    }
}

/// Pick a name not yet used in `scene`, numbering duplicates `name.001`,
/// `name.002` and so on.
pub fn unique_name(scene: &Scene, name: &str) -> String {
    if scene.object(name).is_none() {
        return name.to_string();
    }
    (1..)
        .map(|n| format!("{}.{:03}", name, n))
        .find(|candidate| scene.object(candidate).is_none())
        .unwrap_or_else(|| name.to_string())
}

/// The mesh as a scene object: local vertices, placed at the mesh center.
pub fn mesh_object(mesh: &CurveMesh, name: &str) -> SceneObject {
    let vertices = mesh
        .vertices
        .points
        .iter()
        .map(|p| Vec3::new(p.x, p.y, p.z))
        .collect();
    let (edges, faces) = match &mesh.topology {
        Topology::Edges(edges) => (edges.clone(), Vec::new()),
        Topology::Faces(faces) => (Vec::new(), faces.iter().map(|f| f.to_vec()).collect()),
    };
    let center = mesh.center;
    SceneObject::new(
        name,
        ObjectData::Mesh {
            vertices,
            edges,
            faces,
        },
    )
    .at(Vec3::new(center.x, center.y, center.z))
}

/// Append the mesh to `scene` under a free name. Returns the name used.
pub fn add_to_scene(scene: &mut Scene, mesh: &CurveMesh, name: &str) -> String {
    let name = unique_name(scene, name);
    scene.objects.push(mesh_object(mesh, &name));
    name
}

/// Render the mesh as OBJ text with world-space vertices.
pub fn to_obj(mesh: &CurveMesh, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# curveloft {} curve(s)", mesh.curve_count());
    let _ = writeln!(out, "o {}", name);
    for p in &mesh.world_vertices().points {
        let _ = writeln!(out, "v {} {} {}", p.x, p.y, p.z);
    }
    // OBJ indices are 1-based
    match &mesh.topology {
        Topology::Edges(edges) => {
            for [a, b] in edges {
                let _ = writeln!(out, "l {} {}", a + 1, b + 1);
            }
        }
        Topology::Faces(faces) => {
            for [a, b, c, d] in faces {
                let _ = writeln!(out, "f {} {} {} {}", a + 1, b + 1, c + 1, d + 1);
            }
        }
    }
    out
}

/// Write the mesh to `output` in the format its extension names.
///
/// Scene output is `scene` with the mesh added; the input scene itself is
/// left untouched. Returns the name the mesh was given.
pub fn write_mesh(scene: &Scene, mesh: &CurveMesh, name: &str, output: &Path) -> Result<String> {
    match Format::from_path(output)? {
        Format::Scene => {
            let mut scene = scene.clone();
            let name = add_to_scene(&mut scene, mesh, name);
            fs::write(output, scene.to_json()?)?;
            Ok(name)
        }
        Format::Obj => {
            fs::write(output, to_obj(mesh, name))?;
            Ok(name.to_string())
        }
    }
}
