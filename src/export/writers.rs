use std::io::Write;
use std::path::Path;

use crate::asset_pipeline::materials::{MaterialData, ShaderKind, WHITE};
use crate::camera::Camera;
use crate::export::encoders::{
    encode_bool, encode_color, encode_float, encode_rotation_matrix, encode_scale_matrix,
    encode_vec3,
};
use crate::export::geometry_files::GeometryFiles;
use crate::export::markup::{Element, MarkupWriter};
use crate::light::{Light, LightKind};
use crate::model::Model;
use crate::scene_graph::Transform;

pub fn camera_element(camera: &Camera, transform: &Transform) -> Element {
    Element::new("Camera")
        .attribute("fov", encode_float(camera.fov))
        .attribute("near", encode_float(camera.near))
        .attribute("far", encode_float(camera.far))
        .attribute("eyePosition", encode_vec3(transform.world_position()))
        .attribute("forward", encode_vec3(transform.forward()))
        .attribute("up", encode_vec3(transform.up()))
}

/// `None` for light kinds the renderer has no model for.
pub fn light_element(light: &Light, transform: &Transform) -> Option<Element> {
    let element = Element::new("Light");

    let element = match light.kind {
        LightKind::Point => element
            .attribute("type", "point")
            .attribute("diffuseLight", encode_color(light.color))
            .attribute("intensity", encode_float(light.intensity))
            .attribute("position", encode_vec3(transform.world_position()))
            .attribute("attenuation", "1.0"),
        LightKind::Directional => element
            .attribute("type", "directional")
            .attribute("diffuseLight", encode_color(light.color))
            .attribute("intensity", encode_float(light.intensity))
            .attribute("direction", encode_vec3(transform.forward())),
        LightKind::Spot | LightKind::Area => return None,
    };

    Some(element)
}

pub fn transform_element(transform: &Transform) -> Element {
    Element::new("Transform")
        .attribute("scale", encode_scale_matrix(transform.scale()))
        .attribute("rotation", encode_rotation_matrix(transform.world_rotation()))
        .attribute("position", encode_vec3(transform.world_position()))
}

/// `None` when the material's shader is not one of the [`ShaderKind`]s.
pub fn material_element(material: &MaterialData) -> Option<Element> {
    let shader = ShaderKind::from_name(&material.shader)?;

    // Only plain Specular reads its specular colour and shininess;
    // Transparent/Specular keeps the white / 1 defaults. Whether that was
    // intended by the format's authors is unknown, so it is kept as is.
    let (specular_color, shininess) = match shader {
        ShaderKind::Specular => (material.specular_color, material.shininess),
        _ => (WHITE, 1.0),
    };

    let element = Element::new("Material")
        .attribute("ambientColor", encode_color(WHITE))
        .attribute("diffuseColor", encode_color(material.color))
        .attribute("specularColor", encode_color(specular_color))
        .attribute("shininess", encode_float(shininess))
        .attribute("transparent", encode_bool(shader.is_transparent()))
        .attribute("reflection", "0")
        .attribute("refraction", "0");

    Some(element)
}

pub fn mesh_element(files: &GeometryFiles) -> Element {
    Element::new("Mesh")
        .attribute("vertices", files.vertices.display().to_string())
        .attribute("normals", files.normals.display().to_string())
        .attribute("uvs", files.uvs.display().to_string())
        .attribute("indices", files.indices.display().to_string())
}

pub fn write_camera<W: Write>(
    markup: &mut MarkupWriter<W>,
    camera: &Camera,
    transform: &Transform,
    indent: &str,
) -> anyhow::Result<()> {
    markup.write_element(indent, &camera_element(camera, transform))
}

/// Returns `false` if the light was rejected and nothing was written.
pub fn write_light<W: Write>(
    markup: &mut MarkupWriter<W>,
    light: &Light,
    transform: &Transform,
    indent: &str,
) -> anyhow::Result<bool> {
    let Some(element) = light_element(light, transform) else {
        log::error!("unsupported light type: {}", light.kind);
        return Ok(false);
    };

    markup.write_element(indent, &element)?;
    Ok(true)
}

pub fn write_transform<W: Write>(
    markup: &mut MarkupWriter<W>,
    transform: &Transform,
    indent: &str,
) -> anyhow::Result<()> {
    markup.write_element(indent, &transform_element(transform))
}

/// Returns `false` if the shader is unsupported and nothing was written.
pub fn write_material<W: Write>(
    markup: &mut MarkupWriter<W>,
    material: &MaterialData,
    indent: &str,
) -> anyhow::Result<bool> {
    let Some(element) = material_element(material) else {
        log::error!("unsupported shader: {}", material.shader);
        return Ok(false);
    };

    markup.write_element(indent, &element)?;
    Ok(true)
}

/// Everything the mesh writer needs from one mesh-carrying node.
pub struct MeshSource<'a> {
    pub name: &'a str,
    pub model: &'a Model,
    pub transform: &'a Transform,
    pub material: Option<&'a MaterialData>,
}

#[derive(Debug)]
pub struct WrittenMesh {
    pub files: GeometryFiles,
    /// Set when a material was attached but its shader was rejected.
    pub material_rejected: bool,
}

/// Writes the geometry side-car files, then the `Mesh` block referencing them.
pub fn write_mesh<W: Write>(
    markup: &mut MarkupWriter<W>,
    mesh: &MeshSource,
    output_dir: &Path,
    indent: &str,
) -> anyhow::Result<WrittenMesh> {
    let files = GeometryFiles::for_mesh(output_dir, mesh.name);
    files.write(mesh.model)?;

    let nested_indent = format!("{}{}", indent, indent);

    markup.begin(indent, &mesh_element(&files))?;
    write_transform(markup, mesh.transform, &nested_indent)?;

    let material_rejected = match mesh.material {
        Some(material) => !write_material(markup, material, &nested_indent)?,
        None => false,
    };

    markup.end(indent)?;

    Ok(WrittenMesh {
        files,
        material_rejected,
    })
}
