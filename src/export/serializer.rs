use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;

use crate::camera::Camera;
use crate::export::config::ExportConfig;
use crate::export::markup::{Element, MarkupWriter};
use crate::export::writers::{write_camera, write_light, write_mesh, MeshSource};
use crate::material_manager::MaterialManager;
use crate::scene_graph::{Object3D, ObjectId, Scene, Transform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub scene_file: PathBuf,
    pub lights_written: usize,
    pub lights_disabled: usize,
    pub lights_rejected: usize,
    pub meshes_written: usize,
    pub materials_rejected: usize,
    pub side_car_files: Vec<PathBuf>,
}

impl ExportReport {
    fn new(scene_file: PathBuf) -> Self {
        Self {
            scene_file,
            lights_written: 0,
            lights_disabled: 0,
            lights_rejected: 0,
            meshes_written: 0,
            materials_rejected: 0,
            side_car_files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported(ExportReport),
    /// No root object carries a camera. The partial scene file was removed
    /// and nothing else was written.
    NoCamera,
}

/// File stem for the scene document: the last `/`-separated segment of the
/// scene name, without a trailing `.unity`.
pub fn scene_file_stem(scene_name: &str) -> &str {
    let name = scene_name.rsplit('/').next().unwrap_or_default();
    name.strip_suffix(".unity").unwrap_or(name)
}

pub struct SceneExporter<'a> {
    scene: &'a Scene,
    materials: &'a MaterialManager,
    config: &'a ExportConfig,
}

impl<'a> SceneExporter<'a> {
    pub fn new(scene: &'a Scene, materials: &'a MaterialManager, config: &'a ExportConfig) -> Self {
        Self {
            scene,
            materials,
            config,
        }
    }

    pub fn scene_file_path(&self) -> PathBuf {
        let stem = scene_file_stem(self.scene.name());
        self.config.output_dir.join(format!("{}.xml", stem))
    }

    pub fn export(&self) -> anyhow::Result<ExportOutcome> {
        if scene_file_stem(self.scene.name()).is_empty() {
            log::warn!("Scene has no name.");
        }

        self.scene.update_transforms();

        let scene_file = self.scene_file_path();
        let file = File::create(&scene_file)
            .with_context(|| format!("Failed to create {}", scene_file.display()))?;
        let mut markup = MarkupWriter::new(BufWriter::new(file));

        markup.begin("", &Element::new("Scene"))?;

        let indent = self.config.indent.as_str();
        let roots = self.scene.root_objects_sorted();

        match self.find_root_camera(&roots) {
            Some((camera, transform)) => write_camera(&mut markup, camera, transform, indent)?,
            None => {
                log::error!("no camera found");
                drop(markup);
                fs::remove_file(&scene_file)
                    .with_context(|| format!("Failed to remove {}", scene_file.display()))?;
                return Ok(ExportOutcome::NoCamera);
            }
        }

        let mut report = ExportReport::new(scene_file);

        for root_id in roots {
            let subtree: Vec<&Object3D> = self
                .scene
                .descendants_depth_first(root_id)
                .into_iter()
                .filter_map(|id| self.scene.get_object(id))
                .collect();

            for object in &subtree {
                self.write_lights(&mut markup, object, &mut report)?;
            }

            for object in &subtree {
                self.write_mesh_object(&mut markup, object, &mut report)?;
            }
        }

        markup.end("")?;
        markup.finish()?;

        log::info!("Scene exported successfully");
        log::debug!(
            "{}: {} lights, {} meshes",
            report.scene_file.display(),
            report.lights_written,
            report.meshes_written
        );

        Ok(ExportOutcome::Exported(report))
    }

    /// First camera on a root object, in sorted root order. Cameras below
    /// the roots are never considered.
    fn find_root_camera(&self, roots: &[ObjectId]) -> Option<(&'a Camera, &'a Transform)> {
        roots.iter().find_map(|id| {
            let object = self.scene.get_object(*id)?;
            object.camera().map(|camera| (camera, &object.transform))
        })
    }

    fn write_lights<W: Write>(
        &self,
        markup: &mut MarkupWriter<W>,
        object: &Object3D,
        report: &mut ExportReport,
    ) -> anyhow::Result<()> {
        for light in object.lights() {
            if !light.enabled {
                report.lights_disabled += 1;
                continue;
            }

            if write_light(markup, light, &object.transform, &self.config.indent)? {
                report.lights_written += 1;
            } else {
                report.lights_rejected += 1;
            }
        }

        Ok(())
    }

    fn write_mesh_object<W: Write>(
        &self,
        markup: &mut MarkupWriter<W>,
        object: &Object3D,
        report: &mut ExportReport,
    ) -> anyhow::Result<()> {
        let Some(mesh_filter) = object.mesh_filter() else {
            return Ok(());
        };

        let model = self
            .scene
            .get_model(mesh_filter.model_id)
            .with_context(|| format!("Mesh of {} is not part of the scene", object.name))?;

        let material = object.mesh_renderer().and_then(|renderer| {
            let material = self.materials.get(renderer.material_id);
            if material.is_none() {
                log::warn!("Material of {} is not registered", object.name);
            }
            material
        });

        let mesh = MeshSource {
            name: &object.name,
            model,
            transform: &object.transform,
            material,
        };

        let written = write_mesh(markup, &mesh, &self.config.output_dir, &self.config.indent)?;

        report.meshes_written += 1;
        if written.material_rejected {
            report.materials_rejected += 1;
        }
        report
            .side_car_files
            .extend(written.files.paths().iter().map(|path| path.to_path_buf()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_file_stem_strips_unity_extension() {
        assert_eq!(scene_file_stem("Assets/Levels/Main.unity"), "Main");
        assert_eq!(scene_file_stem("Main.unity"), "Main");
    }

    #[test]
    fn test_scene_file_stem_keeps_other_names() {
        assert_eq!(scene_file_stem("Assets/Levels/Main"), "Main");
        assert_eq!(scene_file_stem("Main.UNITY"), "Main.UNITY");
        assert_eq!(scene_file_stem("a.b"), "a.b");
    }

    #[test]
    fn test_scene_file_stem_empty() {
        assert_eq!(scene_file_stem(""), "");
        assert_eq!(scene_file_stem("Assets/Levels/"), "");
    }
}
