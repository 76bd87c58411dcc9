use std::process::ExitCode;

use anyhow::Context;
use scene_export::export::{ExportOutcome, ExportSession};
use scene_export::material_manager::MaterialManager;
use scene_export::scene_graph::Scene;

fn main() -> anyhow::Result<ExitCode> {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <scene.gltf|scene.glb> <output-dir>", args[0]);
        return Ok(ExitCode::FAILURE);
    }

    let session = ExportSession::with_output_dir(&args[2]);
    if !session.can_export() {
        log::error!("Output directory {} does not exist", args[2]);
        return Ok(ExitCode::FAILURE);
    }

    let mut material_manager = MaterialManager::new();
    let scene = Scene::from_gltf(&args[1], &mut material_manager)
        .with_context(|| format!("Failed to load scene {}", args[1]))?;

    match session.run(&scene, &material_manager)? {
        Some(ExportOutcome::Exported(report)) => {
            log::info!(
                "Wrote {} ({} lights, {} meshes)",
                report.scene_file.display(),
                report.lights_written,
                report.meshes_written
            );
            Ok(ExitCode::SUCCESS)
        }
        Some(ExportOutcome::NoCamera) | None => Ok(ExitCode::FAILURE),
    }
}
