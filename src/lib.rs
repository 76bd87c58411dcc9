pub mod asset_pipeline;
pub mod camera;
pub mod export;
pub mod light;
pub mod material_manager;
pub mod model;
pub mod scene_graph;

pub use glam;
