use std::path::Path;

use anyhow::Context;
use glam::{Quat, Vec3};
use gltf::khr_lights_punctual;
use serde::Deserialize;

use crate::asset_pipeline::extras::parse_extras;
use crate::asset_pipeline::handedness::{mirror_z, mirror_z_rotation};
use crate::camera::Camera;
use crate::light::{Light, LightKind};
use crate::material_manager::{gltf_material_name, MaterialManager};
use crate::model::{Buffers, Model};
use crate::scene_graph::component::{MeshFilter, MeshRenderer};
use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::scene_graph::scene::Scene;

#[derive(Debug, Default, Deserialize)]
struct NodeExtras {
    enabled: Option<bool>,
}

impl Scene {
    /// Imports the default scene of a `.gltf`/`.glb` file. Materials are
    /// registered with `material_manager` and referenced by mesh renderers.
    pub fn from_gltf(
        path: impl AsRef<Path>,
        material_manager: &mut MaterialManager,
    ) -> anyhow::Result<Scene> {
        let path = path.as_ref();
        let (document, buffers, _images) =
            gltf::import(path).with_context(|| format!("Failed to import {}", path.display()))?;

        let file_name = path.display().to_string();
        material_manager.load_all_materials_from_gltf(&file_name, &document);

        let gltf_scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .context("No scenes in gltf")?;

        let scene_name = gltf_scene
            .name()
            .map(String::from)
            .or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        let mut scene = Scene::new(scene_name);
        scene.spawn_gltf_scene(material_manager, &file_name, &buffers, &gltf_scene)?;

        Ok(scene)
    }

    pub fn spawn_gltf_scene(
        &mut self,
        material_manager: &MaterialManager,
        file_name: &str,
        buffers: Buffers,
        scene: &gltf::Scene,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut last_object_id = None;

        for node in scene.nodes() {
            last_object_id = Some(self.spawn_gltf_node(
                material_manager,
                file_name,
                buffers,
                &node,
                None,
            )?);
        }

        Ok(last_object_id)
    }

    fn spawn_gltf_node(
        &mut self,
        material_manager: &MaterialManager,
        file_name: &str,
        buffers: Buffers,
        node: &gltf::Node,
        parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let node_name = node.name().unwrap_or("Unnamed").to_string();
        let mut object = Object3D::new(node_name.clone());

        let (translation, rotation, scale) = node.transform().decomposed();
        object.transform.set_transform(
            mirror_z(Vec3::from(translation)),
            mirror_z_rotation(Quat::from_array(rotation)),
            Vec3::from(scale),
        );

        if let Some(camera) = node.camera() {
            object = object.with_component(camera_from_gltf(&node_name, &camera));
        }

        if let Some(light) = node.light() {
            let extras: NodeExtras = parse_extras(&node_name, node.extras());
            let mut light = light_from_gltf(&light);
            light.enabled = extras.enabled.unwrap_or(true);
            object = object.with_component(light);
        }

        if let Some(mesh) = node.mesh() {
            let mesh_index = mesh.index();

            let model_id = match self.gltf_mesh_to_model.get(&mesh_index).copied() {
                Some(model_id) => model_id,
                None => {
                    let mesh_name = mesh
                        .name()
                        .map(String::from)
                        .unwrap_or_else(|| format!("{} (Mesh)", node_name));

                    let model = Model::from_gltf(mesh_name, mesh.clone(), buffers)
                        .with_context(|| format!("Failed to load mesh of node {}", node_name))?;
                    let model_id = self.add_model(model);
                    self.gltf_mesh_to_model.insert(mesh_index, model_id);

                    model_id
                }
            };

            object = object.with_component(MeshFilter { model_id });

            // glTF assigns materials per primitive; the renderer takes one per mesh.
            let material = mesh
                .primitives()
                .next()
                .map(|primitive| primitive.material())
                .filter(|material| material.index().is_some());

            if let Some(material) = material {
                let material_name = gltf_material_name(&material);
                match material_manager.get_gltf_material(file_name, &material_name) {
                    Some(material_id) => {
                        object = object.with_component(MeshRenderer { material_id });
                    }
                    None => log::warn!(
                        "Material {} of node {} was not loaded",
                        material_name,
                        node_name
                    ),
                }
            }
        }

        let object_id = self.add_object(object);

        if let Some(parent_id) = parent {
            self.set_object_parent(object_id, Some(parent_id));
        }

        for child in node.children() {
            self.spawn_gltf_node(material_manager, file_name, buffers, &child, Some(object_id))?;
        }

        Ok(object_id)
    }
}

fn camera_from_gltf(node_name: &str, camera: &gltf::Camera) -> Camera {
    match camera.projection() {
        gltf::camera::Projection::Perspective(perspective) => Camera {
            fov: perspective.yfov().to_degrees(),
            near: perspective.znear(),
            far: perspective.zfar().unwrap_or(Camera::default().far),
        },
        gltf::camera::Projection::Orthographic(orthographic) => {
            log::warn!(
                "Orthographic camera on {} exported with default field of view",
                node_name
            );
            Camera {
                near: orthographic.znear(),
                far: orthographic.zfar(),
                ..Camera::default()
            }
        }
    }
}

fn light_from_gltf(light: &khr_lights_punctual::Light) -> Light {
    let kind = match light.kind() {
        khr_lights_punctual::Kind::Point => LightKind::Point,
        khr_lights_punctual::Kind::Directional => LightKind::Directional,
        khr_lights_punctual::Kind::Spot { .. } => LightKind::Spot,
    };

    Light::new(kind, Vec3::from(light.color()).extend(1.0), light.intensity())
}
