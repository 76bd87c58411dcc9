use anyhow::{bail, Context};
use glam::{Vec2, Vec3};
use gltf::buffer;

use crate::asset_pipeline::handedness::{flip_winding, mirror_z};
use crate::asset_pipeline::mesh_baker::bake_primitives;

/// One glTF primitive, already converted to the renderer's coordinate system.
pub struct ModelPrimitive {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

/// Triangle geometry shared by every node whose mesh filter references it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

pub type Buffers<'a> = &'a [buffer::Data];

impl Model {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            vertices,
            normals,
            uvs,
            indices,
        }
    }

    pub fn from_gltf(
        name: impl Into<String>,
        mesh: gltf::Mesh,
        buffers: Buffers,
    ) -> anyhow::Result<Model> {
        let name = name.into();
        let mut primitives = Vec::new();

        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                bail!("Unsupported primitive mode: {:?}", primitive.mode());
            }

            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            let vertices = reader
                .read_positions()
                .with_context(|| {
                    format!(
                        "Mesh {} primitive {} has no positions",
                        name,
                        primitive.index()
                    )
                })?
                .map(|position| mirror_z(Vec3::from(position)))
                .collect::<Vec<Vec3>>();

            let normals = reader
                .read_normals()
                .map(|normals| {
                    normals
                        .map(|normal| mirror_z(Vec3::from(normal)))
                        .collect()
                })
                .unwrap_or_default();

            let uvs = reader
                .read_tex_coords(0)
                .map(|tex_coords| tex_coords.into_f32().map(Vec2::from).collect())
                .unwrap_or_default();

            // Non-indexed primitives draw their vertices in order.
            let mut indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..vertices.len() as u32).collect(),
            };
            flip_winding(&mut indices);

            primitives.push(ModelPrimitive {
                vertices,
                normals,
                uvs,
                indices,
            });
        }

        if primitives.is_empty() {
            bail!("Mesh without primitives: {}", name);
        }

        Ok(bake_primitives(name, primitives))
    }
}
