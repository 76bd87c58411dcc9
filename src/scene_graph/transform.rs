use glam::{Mat4, Quat, Vec3};
use std::cell::{Cell, Ref, RefCell};

#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,

    local_matrix: RefCell<Mat4>,
    world_matrix: RefCell<Mat4>,
    world_rotation: Cell<Quat>,
    local_dirty: Cell<bool>,
    world_dirty: Cell<bool>,
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self::from_trs(translation, Quat::IDENTITY, Vec3::ONE)
    }

    pub fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
            local_matrix: RefCell::new(Mat4::IDENTITY),
            world_matrix: RefCell::new(Mat4::IDENTITY),
            world_rotation: Cell::new(Quat::IDENTITY),
            local_dirty: Cell::new(true),
            world_dirty: Cell::new(true),
        }
    }

    pub fn get_local_matrix(&self) -> Ref<Mat4> {
        if self.local_dirty.get() {
            let matrix =
                Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation);

            self.local_matrix.replace(matrix);
            self.local_dirty.set(false);
            self.invalidate_world();
        }

        self.local_matrix.borrow()
    }

    pub fn get_world_matrix(&self) -> Ref<Mat4> {
        self.world_matrix.borrow()
    }

    /// Stores the composed parent chain. Rotation is tracked separately so
    /// that it stays a pure rotation under non-uniform parent scale.
    pub fn set_world(&self, world_matrix: Mat4, world_rotation: Quat) {
        self.world_matrix.replace(world_matrix);
        self.world_rotation.set(world_rotation);
        self.world_dirty.set(false);
    }

    pub fn invalidate_local(&self) {
        self.local_dirty.set(true);
        self.world_dirty.set(true);
    }

    pub fn invalidate_world(&self) {
        self.world_dirty.set(true);
    }

    pub fn is_world_dirty(&self) -> bool {
        self.world_dirty.get()
    }

    pub fn set_transform(&mut self, translation: Vec3, rotation: Quat, scale: Vec3) {
        self.translation = translation;
        self.rotation = rotation;
        self.scale = scale;
        self.invalidate_local();
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Local scale, never composed with the parents.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_matrix.borrow().w_axis.truncate()
    }

    pub fn world_rotation(&self) -> Quat {
        self.world_rotation.get()
    }

    /// Local +Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.world_rotation.get() * Vec3::Z
    }

    /// Local +Y in world space.
    pub fn up(&self) -> Vec3 {
        self.world_rotation.get() * Vec3::Y
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_translation(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_matrix_tracks_setters() {
        let mut transform = Transform::default();
        assert_eq!(*transform.get_local_matrix(), Mat4::IDENTITY);

        transform.set_transform(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::IDENTITY,
            Vec3::new(2.0, 1.0, 1.0),
        );

        let local = *transform.get_local_matrix();
        assert_eq!(local.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(local.x_axis.truncate(), Vec3::new(2.0, 0.0, 0.0));
        assert!(transform.is_world_dirty());
    }

    #[test]
    fn test_forward_and_up_follow_world_rotation() {
        let transform = Transform::default();
        transform.set_world(
            Mat4::IDENTITY,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );

        assert!(transform.forward().abs_diff_eq(Vec3::X, 1e-6));
        assert!(transform.up().abs_diff_eq(Vec3::Y, 1e-6));
        assert!(!transform.is_world_dirty());
    }
}
