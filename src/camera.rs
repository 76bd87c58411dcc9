/// Perspective camera attached to a scene node. The eye position and the
/// orientation come from the node's world transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 0.3,
            far: 1000.0,
        }
    }
}
