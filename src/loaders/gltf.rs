use anyhow::{bail, Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use super::actor::ActorModel;
use crate::math::AABB;

/// Loads a glTF actor and measures it so it can be stood on the ground
pub fn load_actor_model(path: impl AsRef<Path>, scale: f32) -> Result<ActorModel> {
    let path = path.as_ref();
    log::info!("Loading actor model: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).context(format!("Failed to load glTF file: {:?}", path))?;

    log::debug!(
        "glTF loaded: {} scenes, {} nodes, {} meshes",
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count()
    );

    let mut bounds = None;
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut bounds)?;
        }
    }

    let Some(bounds) = bounds else {
        bail!("No mesh geometry found in {:?}", path);
    };

    log::info!(
        "Actor bounds {:?} .. {:?} (scaled height {:.3})",
        bounds.min,
        bounds.max,
        bounds.height() * scale
    );

    Ok(ActorModel {
        name: path.display().to_string(),
        bounds,
        scale,
        parts: Vec::new(),
    })
}

/// Recursively processes glTF nodes
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    bounds: &mut Option<AABB>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, bounds)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, bounds)?;
    }

    Ok(())
}

/// Grows `bounds` by every vertex of the mesh in world space
fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    bounds: &mut Option<AABB>,
) -> Result<()> {
    log::debug!("  Processing mesh: {:?}", mesh.name());

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)));

        if let Some(primitive_bounds) = AABB::from_points(positions) {
            *bounds = Some(match *bounds {
                Some(existing) => existing.union(&primitive_bounds),
                None => primitive_bounds,
            });
        }
    }

    Ok(())
}
