use glam::{Mat4, Quat, Vec3};
use id_arena::{Arena, Id};
use std::collections::HashMap;

use crate::model::Model;
use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::scene_graph::transform::Transform;

pub type ModelId = Id<Model>;

pub struct Scene {
    name: String,
    pub objects: Arena<Object3D>,
    pub models: Arena<Model>,
    pub(super) gltf_mesh_to_model: HashMap<usize, ModelId>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Arena::new(),
            models: Arena::new(),
            gltf_mesh_to_model: HashMap::new(),
        }
    }

    /// Host-side scene name or path, e.g. `Assets/Levels/Main.unity`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    /// Adds `object` and attaches it under `parent_id`.
    pub fn add_child(&mut self, parent_id: ObjectId, object: Object3D) -> ObjectId {
        let object_id = self.add_object(object);
        self.set_object_parent(object_id, Some(parent_id));
        object_id
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn add_model(&mut self, model: Model) -> ModelId {
        self.models.alloc(model)
    }

    pub fn get_model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id)
    }

    /// Root objects ordered by name, using byte-wise comparison. Objects with
    /// equal names keep their insertion order.
    pub fn root_objects_sorted(&self) -> Vec<ObjectId> {
        let mut roots: Vec<(ObjectId, &str)> = self
            .objects
            .iter()
            .filter(|(_, object)| object.is_root())
            .map(|(id, object)| (id, object.name.as_str()))
            .collect();

        roots.sort_by(|(_, a), (_, b)| a.cmp(b));
        roots.into_iter().map(|(id, _)| id).collect()
    }

    /// `object_id` followed by its whole subtree in pre-order, children
    /// visited in the order they were attached.
    pub fn descendants_depth_first(&self, object_id: ObjectId) -> Vec<ObjectId> {
        let mut visited = Vec::new();
        let mut stack = vec![object_id];

        while let Some(id) = stack.pop() {
            let Some(object) = self.objects.get(id) else {
                continue;
            };

            visited.push(id);
            stack.extend(object.child_ids.iter().rev().copied());
        }

        visited
    }

    /// Recomputes world transforms for every dirty object, starting from the roots.
    pub fn update_transforms(&self) {
        let root_objects = self.objects.iter().filter_map(|(id, object)| {
            if object.is_root() {
                Some(id)
            } else {
                None
            }
        });

        for root_id in root_objects {
            self.update_object_transform_recursive(root_id, Mat4::IDENTITY, Quat::IDENTITY, false);
        }
    }

    fn update_object_transform_recursive(
        &self,
        object_id: ObjectId,
        parent_world_matrix: Mat4,
        parent_world_rotation: Quat,
        parent_changed: bool,
    ) {
        if let Some(object) = self.objects.get(object_id) {
            let changed = parent_changed || object.transform.is_world_dirty();

            if changed {
                let local_matrix = *object.transform.get_local_matrix();
                let world_matrix = parent_world_matrix * local_matrix;
                let world_rotation = parent_world_rotation * object.transform.rotation();
                object.transform.set_world(world_matrix, world_rotation);
            }

            let world_matrix = *object.transform.get_world_matrix();
            let world_rotation = object.transform.world_rotation();
            for &child_id in &object.child_ids {
                self.update_object_transform_recursive(
                    child_id,
                    world_matrix,
                    world_rotation,
                    changed,
                );
            }
        }
    }

    /// Invalidates world transforms for an object and all its descendants
    pub fn invalidate_object_hierarchy(&self, object_id: ObjectId) {
        if let Some(object) = self.objects.get(object_id) {
            object.transform.invalidate_world();

            for &child_id in &object.child_ids {
                self.invalidate_object_hierarchy(child_id);
            }
        }
    }

    /// Sets the parent of an object and updates child relationships
    pub fn set_object_parent(&mut self, child_id: ObjectId, new_parent_id: Option<ObjectId>) {
        if let Some(child) = self.objects.get(child_id) {
            if let Some(old_parent_id) = child.parent_id {
                if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                    old_parent.child_ids.retain(|&id| id != child_id);
                }
            }
        }

        if let Some(child) = self.objects.get_mut(child_id) {
            child.parent_id = new_parent_id;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.objects.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }

        self.invalidate_object_hierarchy(child_id);
    }

    pub fn set_object_transform(
        &mut self,
        object_id: ObjectId,
        translation: Vec3,
        rotation: Quat,
        scale: Vec3,
    ) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_transform(translation, rotation, scale);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn get_object_transform(&self, object_id: ObjectId) -> Option<&Transform> {
        self.objects.get(object_id).map(|object| &object.transform)
    }
}
