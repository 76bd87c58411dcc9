//! Writes a [`Scene`](crate::scene_graph::Scene) as the renderer's scene
//! document plus one set of geometry side-car files per mesh.

pub mod config;
pub mod encoders;
pub mod geometry_files;
pub mod markup;
pub mod serializer;
pub mod session;
pub mod writers;

pub use config::ExportConfig;
pub use serializer::{ExportOutcome, ExportReport, SceneExporter};
pub use session::ExportSession;
