use id_arena::Id;

use crate::camera::Camera;
use crate::light::Light;
use crate::scene_graph::component::{Component, MeshFilter, MeshRenderer};
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub components: Vec<Component>,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
}

impl Object3D {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// First camera attached to this node.
    pub fn camera(&self) -> Option<&Camera> {
        self.components.iter().find_map(|component| match component {
            Component::Camera(camera) => Some(camera),
            _ => None,
        })
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.components.iter().filter_map(|component| match component {
            Component::Light(light) => Some(light),
            _ => None,
        })
    }

    pub fn mesh_filter(&self) -> Option<&MeshFilter> {
        self.components.iter().find_map(|component| match component {
            Component::MeshFilter(mesh_filter) => Some(mesh_filter),
            _ => None,
        })
    }

    pub fn mesh_renderer(&self) -> Option<&MeshRenderer> {
        self.components.iter().find_map(|component| match component {
            Component::MeshRenderer(mesh_renderer) => Some(mesh_renderer),
            _ => None,
        })
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::default(),
            components: Vec::new(),
            parent_id: None,
            child_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn test_typed_component_views() {
        let object = Object3D::new("Rig")
            .with_component(Light::point(Vec4::ONE, 1.0))
            .with_component(Camera::default())
            .with_component(Light::directional(Vec4::ONE, 0.5));

        assert_eq!(object.camera(), Some(&Camera::default()));
        assert_eq!(object.lights().count(), 2);
        assert!(object.mesh_filter().is_none());
        assert!(object.mesh_renderer().is_none());
        assert!(object.is_root());
    }
}
