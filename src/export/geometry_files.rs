//! Side-car files holding a mesh's bulk arrays next to the scene document.
//!
//! Vertices and normals are written one `x, y, z` per line, UVs one `x, y`
//! per line. Indices go on a single line, each followed by a space.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::{Vec2, Vec3};

use crate::export::encoders::{encode_vec2, encode_vec3};
use crate::model::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryFiles {
    pub vertices: PathBuf,
    pub normals: PathBuf,
    pub uvs: PathBuf,
    pub indices: PathBuf,
}

impl GeometryFiles {
    /// Paths are derived from the mesh name alone, so two meshes with the
    /// same name share (and overwrite) the same files.
    pub fn for_mesh(output_dir: &Path, mesh_name: &str) -> Self {
        let path = |extension: &str| output_dir.join(format!("{}.{}", mesh_name, extension));

        Self {
            vertices: path("vertices"),
            normals: path("normals"),
            uvs: path("uvs"),
            indices: path("indices"),
        }
    }

    pub fn paths(&self) -> [&Path; 4] {
        [&self.vertices, &self.normals, &self.uvs, &self.indices]
    }

    pub fn write(&self, model: &Model) -> anyhow::Result<()> {
        write_file(&self.vertices, |out| write_vec3_lines(out, &model.vertices))?;
        write_file(&self.normals, |out| write_vec3_lines(out, &model.normals))?;
        write_file(&self.uvs, |out| write_vec2_lines(out, &model.uvs))?;
        write_file(&self.indices, |out| write_indices(out, &model.indices))?;
        Ok(())
    }
}

fn write_file<F>(path: &Path, write_contents: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_contents(&mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

pub fn write_vec3_lines<W: Write>(out: &mut W, values: &[Vec3]) -> std::io::Result<()> {
    for value in values {
        writeln!(out, "{}", encode_vec3(*value))?;
    }
    Ok(())
}

pub fn write_vec2_lines<W: Write>(out: &mut W, values: &[Vec2]) -> std::io::Result<()> {
    for value in values {
        writeln!(out, "{}", encode_vec2(*value))?;
    }
    Ok(())
}

pub fn write_indices<W: Write>(out: &mut W, indices: &[u32]) -> std::io::Result<()> {
    for index in indices {
        write!(out, "{} ", index)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_mesh_name() {
        let files = GeometryFiles::for_mesh(Path::new("out/"), "Cube");

        assert_eq!(files.vertices, Path::new("out/Cube.vertices"));
        assert_eq!(files.normals, Path::new("out/Cube.normals"));
        assert_eq!(files.uvs, Path::new("out/Cube.uvs"));
        assert_eq!(files.indices, Path::new("out/Cube.indices"));
    }

    #[test]
    fn test_vec3_lines() {
        let mut out = Vec::new();
        write_vec3_lines(&mut out, &[Vec3::new(1.0, 2.5, -3.0), Vec3::ZERO]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1, 2.5, -3\n0, 0, 0\n");
    }

    #[test]
    fn test_vec2_lines() {
        let mut out = Vec::new();
        write_vec2_lines(&mut out, &[Vec2::new(0.5, 1.0)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5, 1\n");
    }

    #[test]
    fn test_indices_single_line() {
        let mut out = Vec::new();
        write_indices(&mut out, &[0, 1, 2, 2, 3, 0]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 1 2 2 3 0 ");
    }

    #[test]
    fn test_empty_arrays_write_empty_files() {
        let mut out = Vec::new();
        write_vec3_lines(&mut out, &[]).unwrap();
        write_indices(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
