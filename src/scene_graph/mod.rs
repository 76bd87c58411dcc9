pub mod component;
mod gltf_import;
pub mod object3d;
pub mod scene;
pub mod transform;

pub use component::{Component, MeshFilter, MeshRenderer};
pub use object3d::{Object3D, ObjectId};
pub use scene::{ModelId, Scene};
pub use transform::Transform;
