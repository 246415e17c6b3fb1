//! Turning selected scene objects into resampler input.

use anyhow::{bail, Result};
use curveloft::{mesh_from_curves, CurveInput, CurveMesh, Point3, Polyline, ResampleSpec};
use curveloft_ir::{ObjectData, Scene, SceneObject, Vec3};
use curveloft_math::{Transform, Vec3 as MathVec3};
use tracing::{debug, info};

use crate::config::Settings;

/// Curves ready for the core, with the spec they agreed on.
#[derive(Debug)]
pub struct CurveBatch {
    /// Curves in world space, in selection order.
    pub curves: Vec<CurveInput>,
    /// Spec shared by every curve.
    pub spec: ResampleSpec,
}

fn to_math(v: &Vec3) -> MathVec3 {
    MathVec3::new(v.x, v.y, v.z)
}

/// Object-to-world transform of a scene object.
pub fn object_transform(object: &SceneObject) -> Transform {
    let rotation = to_math(&object.rotation).map(f64::to_radians);
    Transform::from_location_rotation_scale(
        to_math(&object.location),
        rotation,
        to_math(&object.scale),
    )
}

/// World-space points of a curve object, or `None` for other kinds.
pub fn world_points(object: &SceneObject) -> Option<Vec<Point3>> {
    let ObjectData::Curve { points, .. } = &object.data else {
        return None;
    };
    let transform = object_transform(object);
    Some(
        points
            .iter()
            .map(|p| transform.apply_point(&Point3::new(p.x, p.y, p.z)))
            .collect(),
    )
}

/// Collect the selected curves of `scene`.
///
/// Fails when nothing is selected or when any selected object is not a
/// curve; the batch is all or nothing.
pub fn collect_curves(scene: &Scene, names: &[String], settings: &Settings) -> Result<CurveBatch> {
    let selected = scene.selected(names)?;
    if selected.is_empty() {
        bail!("Only curves can be selected (nothing is selected)");
    }
    if let Some(other) = selected.iter().find(|o| !o.data.is_curve()) {
        bail!(
            "Only curves can be selected ('{}' is of kind {})",
            other.name,
            other.data.kind()
        );
    }

    let mut curves = Vec::with_capacity(selected.len());
    let mut specs = Vec::with_capacity(selected.len());
    for object in selected {
        let ObjectData::Curve { cyclic, .. } = &object.data else {
            continue;
        };
        let points = world_points(object).unwrap_or_default();
        debug!(curve = %object.name, points = points.len(), "collected curve");
        curves.push(CurveInput::new(Polyline::new(points), Point3::from(to_math(&object.location))));
        specs.push(ResampleSpec::new(
            settings.points_per_curve(),
            cyclic.unwrap_or(settings.cyclic),
        ));
    }

    let spec = ResampleSpec::uniform(&specs)?;
    Ok(CurveBatch { curves, spec })
}

/// Collect the selection and build the mesh.
pub fn build_mesh(scene: &Scene, names: &[String], settings: &Settings) -> Result<CurveMesh> {
    let batch = collect_curves(scene, names, settings)?;
    let mesh = mesh_from_curves(&batch.curves, &batch.spec)?;

    let defects = mesh.validate();
    if !defects.is_empty() {
        bail!("built mesh is invalid: {:?}", defects);
    }

    info!(
        curves = batch.curves.len(),
        vertices = mesh.vertices.len(),
        elements = mesh.topology.len(),
        "mesh built"
    );
    Ok(mesh)
}
