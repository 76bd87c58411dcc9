use std::collections::HashMap;

use glam::Vec4;
use id_arena::{Arena, Id};

use crate::asset_pipeline::extras::parse_extras;
use crate::asset_pipeline::materials::{MaterialData, MaterialExtras, ShaderKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GltfMaterialKey {
    pub file_name: String,
    pub material_name: String,
}

pub struct MaterialManager {
    materials: Arena<MaterialData>,
    materials_by_gltf: HashMap<GltfMaterialKey, MaterialId>,
}

pub type MaterialId = Id<MaterialData>;

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: Arena::new(),
            materials_by_gltf: HashMap::new(),
        }
    }

    pub fn add_material(&mut self, material_data: MaterialData) -> MaterialId {
        self.materials.alloc(material_data)
    }

    pub fn get(&self, id: MaterialId) -> Option<&MaterialData> {
        self.materials.get(id)
    }

    pub fn get_gltf_material(&self, file_name: &str, material_name: &str) -> Option<MaterialId> {
        let key = GltfMaterialKey {
            file_name: file_name.to_string(),
            material_name: material_name.to_string(),
        };
        self.materials_by_gltf.get(&key).copied()
    }

    pub fn load_all_materials_from_gltf(&mut self, file_name: &str, document: &gltf::Document) {
        for material in document.materials() {
            let material_name = gltf_material_name(&material);

            let key = GltfMaterialKey {
                file_name: file_name.to_string(),
                material_name: material_name.clone(),
            };

            if self.materials_by_gltf.contains_key(&key) {
                continue;
            }

            let extras: MaterialExtras = parse_extras(&material_name, material.extras());

            let shader = extras.shader.unwrap_or_else(|| {
                let kind = match material.alpha_mode() {
                    gltf::material::AlphaMode::Blend => ShaderKind::TransparentDiffuse,
                    _ => ShaderKind::Diffuse,
                };
                kind.name().to_string()
            });

            let base_color = Vec4::from(material.pbr_metallic_roughness().base_color_factor());
            let mut material_data = MaterialData::new(material_name, shader, base_color);

            if let Some(specular) = extras.specular {
                material_data.specular_color = Vec4::from(specular);
            }
            if let Some(shininess) = extras.shininess {
                material_data.shininess = shininess;
            }

            let id = self.add_material(material_data);
            self.materials_by_gltf.insert(key, id);
        }
    }

    pub fn materials(&self) -> impl Iterator<Item = &MaterialData> {
        self.materials.iter().map(|(_, material)| material)
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Name used to key a glTF material; unnamed materials fall back to their index.
pub fn gltf_material_name(material: &gltf::Material) -> String {
    match (material.name(), material.index()) {
        (Some(name), _) => name.to_string(),
        (None, Some(index)) => format!("Material {}", index),
        (None, None) => "Default material".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_material() {
        let mut manager = MaterialManager::new();
        let id = manager.add_material(MaterialData::new("Red", "Diffuse", Vec4::new(1.0, 0.0, 0.0, 1.0)));

        let material = manager.get(id).unwrap();
        assert_eq!(material.name, "Red");
        assert_eq!(material.shader, "Diffuse");
        assert_eq!(manager.materials().count(), 1);
        assert!(manager.get_gltf_material("scene.gltf", "Red").is_none());
    }
}
