pub mod extras;
pub mod handedness;
pub mod materials;
pub mod mesh_baker;
