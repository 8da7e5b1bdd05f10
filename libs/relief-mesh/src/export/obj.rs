//! OBJ mesh export

use crate::error::ReliefResult;
use crate::mesh::CylinderMesh;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `mesh` as Wavefront OBJ text and returns the number of bytes written.
///
/// Layout: every `v x y z`, then every `vt u v`, then every `vn x y z`, then
/// every `f a/a/a b/b/b c/c/c`. Position, texture coordinate and normal share
/// one 1-based index per vertex. Floats use the shortest representation that
/// round-trips, so output is byte-identical across runs.
///
/// # Example
///
/// ```rust
/// use relief_mesh::{convert, export::write_obj, IntensityGrid, ProjectionMode};
/// use config::constants::ReliefConfig;
///
/// let grid = IntensityGrid::filled(2, 2, 0.0).unwrap();
/// let mesh = convert(&grid, &ReliefConfig::default(), ProjectionMode::Sequential).unwrap();
/// let mut out = Vec::new();
/// let bytes = write_obj(&mesh, &mut out).unwrap();
/// assert_eq!(bytes as usize, out.len());
/// assert!(String::from_utf8(out).unwrap().contains("f 2/2/2 1/1/1 3/3/3"));
/// ```
pub fn write_obj<W: Write>(mesh: &CylinderMesh, writer: W) -> io::Result<u64> {
    let mut out = CountingWriter::new(writer);

    for p in mesh.positions() {
        writeln!(out, "v {:?} {:?} {:?}", p.x, p.y, p.z)?;
    }
    for uv in mesh.uvs() {
        writeln!(out, "vt {:?} {:?}", uv.x, uv.y)?;
    }
    for n in mesh.normals() {
        writeln!(out, "vn {:?} {:?} {:?}", n.x, n.y, n.z)?;
    }
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| i + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    out.flush()?;
    Ok(out.bytes)
}

/// Writes `mesh` to `path` and returns the size of the written file in bytes.
pub fn export_obj(mesh: &CylinderMesh, path: &Path) -> ReliefResult<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    drop(writer);

    let size = fs::metadata(path)?.len();
    tracing::info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        bytes = size,
        "wrote OBJ mesh"
    );
    Ok(size)
}

/// Forwards writes while counting the bytes accepted by the inner writer.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::IntensityGrid;
    use crate::params::PhysicalParams;
    use crate::projector::project;
    use crate::topology::build_triangles;

    fn mesh(height: usize, width: usize) -> CylinderMesh {
        let grid = IntensityGrid::filled(height, width, 0.0).unwrap();
        let params = PhysicalParams::new(1.0, 0.1, 0.5).unwrap();
        let arena = project(&grid, &params).unwrap();
        CylinderMesh::assemble(arena, build_triangles(height, width).unwrap()).unwrap()
    }

    fn render(mesh: &CylinderMesh) -> String {
        let mut out = Vec::new();
        write_obj(mesh, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_obj_section_order_and_counts() {
        let text = render(&mesh(3, 4));
        let tags: Vec<&str> = text
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();

        assert_eq!(tags.iter().filter(|t| **t == "v").count(), 12);
        assert_eq!(tags.iter().filter(|t| **t == "vt").count(), 12);
        assert_eq!(tags.iter().filter(|t| **t == "vn").count(), 12);
        assert_eq!(tags.iter().filter(|t| **t == "f").count(), 16);

        // sections are contiguous and ordered
        let mut dedup = tags.clone();
        dedup.dedup();
        assert_eq!(dedup, vec!["v", "vt", "vn", "f"]);
    }

    #[test]
    fn test_obj_first_vertex_lines() {
        let text = render(&mesh(2, 2));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "v 1.0 0.0 0.0");
        assert_eq!(lines[4], "vt 0.0 0.0");
        assert_eq!(lines[8], "vn 1.0 0.0 0.0");
        assert_eq!(lines[12], "f 1/1/1 2/2/2 4/4/4");
        assert_eq!(lines[13], "f 1/1/1 4/4/4 3/3/3");
    }

    #[test]
    fn test_obj_faces_are_one_based_and_shared() {
        let m = mesh(3, 5);
        let text = render(&m);
        let max = m.vertex_count();
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for corner in line.split_whitespace().skip(1) {
                let parts: Vec<usize> = corner.split('/').map(|p| p.parse().unwrap()).collect();
                assert_eq!(parts.len(), 3);
                assert!(parts[0] == parts[1] && parts[1] == parts[2]);
                assert!(parts[0] >= 1 && parts[0] <= max);
            }
        }
    }

    #[test]
    fn test_obj_output_is_deterministic() {
        let m = mesh(4, 7);
        assert_eq!(render(&m), render(&m));
    }

    #[test]
    fn test_export_obj_reports_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.obj");
        let m = mesh(2, 3);
        let size = export_obj(&m, &path).unwrap();
        assert_eq!(size, std::fs::read(&path).unwrap().len() as u64);
        assert_eq!(size as usize, render(&m).len());
    }

    #[test]
    fn test_export_obj_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ring.obj");
        let err = export_obj(&mesh(2, 2), &path).unwrap_err();
        assert!(matches!(err, crate::ReliefError::Io(_)));
    }
}
