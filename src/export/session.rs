use std::path::{Path, MAIN_SEPARATOR};

use crate::export::config::ExportConfig;
use crate::export::serializer::{ExportOutcome, SceneExporter};
use crate::material_manager::MaterialManager;
use crate::scene_graph::Scene;

/// State owned by whatever triggers an export: the output directory the
/// user typed in. Created when the trigger opens and dropped with it.
#[derive(Debug, Default)]
pub struct ExportSession {
    output_dir: String,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn set_output_dir(&mut self, output_dir: impl Into<String>) {
        self.output_dir = output_dir.into();
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Export is only offered for a non-empty path naming an existing directory.
    pub fn can_export(&self) -> bool {
        !self.output_dir.is_empty() && Path::new(&self.output_dir).is_dir()
    }

    /// The output directory with a trailing path separator.
    pub fn normalized_output_dir(&self) -> String {
        if self.output_dir.ends_with('/') || self.output_dir.ends_with('\\') {
            self.output_dir.clone()
        } else {
            format!("{}{}", self.output_dir, MAIN_SEPARATOR)
        }
    }

    pub fn config(&self) -> ExportConfig {
        ExportConfig::new(self.normalized_output_dir())
    }

    /// Runs one export into the session's directory. Returns `None` without
    /// touching the disk when the directory is missing.
    pub fn run(
        &self,
        scene: &Scene,
        materials: &MaterialManager,
    ) -> anyhow::Result<Option<ExportOutcome>> {
        if !self.can_export() {
            log::warn!(
                "Output directory {:?} does not exist, nothing exported",
                self.output_dir
            );
            return Ok(None);
        }

        let config = self.config();
        SceneExporter::new(scene, materials, &config)
            .export()
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_path_cannot_export() {
        let session = ExportSession::new();
        assert!(!session.can_export());
    }

    #[test]
    fn test_missing_directory_cannot_export() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        let session = ExportSession::with_output_dir(missing.display().to_string());

        assert!(!session.can_export());
        let scene = Scene::new("Main");
        assert_eq!(session.run(&scene, &MaterialManager::new()).unwrap(), None);
        assert!(!missing.exists());
    }

    #[test]
    fn test_existing_directory_can_export() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let mut session = ExportSession::new();
        session.set_output_dir(temp_dir.path().display().to_string());

        assert!(session.can_export());
    }

    #[test]
    fn test_normalized_output_dir() {
        assert_eq!(ExportSession::with_output_dir("out/").normalized_output_dir(), "out/");
        assert_eq!(ExportSession::with_output_dir("out\\").normalized_output_dir(), "out\\");
        assert_eq!(
            ExportSession::with_output_dir("out").normalized_output_dir(),
            format!("out{}", MAIN_SEPARATOR)
        );
    }
}
