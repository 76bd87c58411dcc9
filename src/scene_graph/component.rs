use crate::camera::Camera;
use crate::light::Light;
use crate::material_manager::MaterialId;
use crate::scene_graph::scene::ModelId;

/// References the triangle geometry drawn at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshFilter {
    pub model_id: ModelId,
}

/// Assigns a material to the geometry of the node's mesh filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshRenderer {
    pub material_id: MaterialId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Camera(Camera),
    Light(Light),
    MeshFilter(MeshFilter),
    MeshRenderer(MeshRenderer),
}

impl From<Camera> for Component {
    fn from(camera: Camera) -> Self {
        Component::Camera(camera)
    }
}

impl From<Light> for Component {
    fn from(light: Light) -> Self {
        Component::Light(light)
    }
}

impl From<MeshFilter> for Component {
    fn from(mesh_filter: MeshFilter) -> Self {
        Component::MeshFilter(mesh_filter)
    }
}

impl From<MeshRenderer> for Component {
    fn from(mesh_renderer: MeshRenderer) -> Self {
        Component::MeshRenderer(mesh_renderer)
    }
}
