use std::path::PathBuf;

pub const DEFAULT_INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory receiving the scene document and the geometry side-car files.
    pub output_dir: PathBuf,
    /// Prefix for top-level blocks. Nested blocks repeat the parent's
    /// prefix twice.
    pub indent: String,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}
