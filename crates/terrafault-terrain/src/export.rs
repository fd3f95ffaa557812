//! Wavefront OBJ dump of a terrain's buffers.
//!
//! Writes `v` and `vn` records in vertex order followed by one `f` record per
//! triangle using 1-based `v//vn` references, so the output opens in common
//! mesh viewers and doubles as a readable buffer dump.

use std::io::{self, Write};
use std::path::Path;

use crate::Terrain;

/// Every OBJ line in output order, without trailing newlines.
fn obj_records(terrain: &Terrain) -> impl Iterator<Item = String> + '_ {
    let (min_z, max_z) = terrain.elevation_range();
    let header = format!(
        "# terrafault: {} vertices, {} faces, elevation [{}, {}]",
        terrain.num_vertices(),
        terrain.num_faces(),
        min_z,
        max_z
    );

    let vertices = terrain
        .positions()
        .iter()
        .map(|p| format!("v {} {} {}", p.x, p.y, p.z));
    let normals = terrain
        .normals()
        .iter()
        .map(|n| format!("vn {} {} {}", n.x, n.y, n.z));
    let faces = terrain.faces().iter().map(|&[a, b, c]| {
        let (a, b, c) = (a as u64 + 1, b as u64 + 1, c as u64 + 1);
        format!("f {a}//{a} {b}//{b} {c}//{c}")
    });

    std::iter::once(header)
        .chain(vertices)
        .chain(normals)
        .chain(faces)
}

pub fn write_obj<W: Write>(terrain: &Terrain, mut out: W) -> io::Result<()> {
    for line in obj_records(terrain) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

pub fn to_obj_string(terrain: &Terrain) -> String {
    obj_records(terrain).fold(String::new(), |mut buf, line| {
        buf.push_str(&line);
        buf.push('\n');
        buf
    })
}

/// Write the OBJ dump to `path`, creating parent directories as needed.
pub fn save_obj(terrain: &Terrain, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_obj(terrain, io::BufWriter::new(file))?;
    log::info!("Wrote OBJ to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrafault_core::types::{GridBounds, ShapingParams, TerrainParams};

    fn flat_terrain(divisions: u32) -> Terrain {
        let params = TerrainParams {
            shaping: ShapingParams {
                passes: 0,
                ..ShapingParams::default()
            },
            ..TerrainParams::with_grid(divisions, GridBounds::new(0.0, 2.0, 0.0, 2.0))
        };
        Terrain::from_seed(params, 0).expect("valid params")
    }

    #[test]
    fn test_record_counts() {
        let terrain = flat_terrain(3);
        let obj = to_obj_string(&terrain);
        let count = |prefix: &str| obj.lines().filter(|l| l.starts_with(prefix)).count();
        assert_eq!(count("v "), 16);
        assert_eq!(count("vn "), 16);
        assert_eq!(count("f "), 18);
        assert!(obj.starts_with("# terrafault: 16 vertices, 18 faces"));
    }

    #[test]
    fn test_records_are_one_based() {
        let terrain = flat_terrain(1);
        let obj = to_obj_string(&terrain);
        let lines: Vec<&str> = obj.lines().collect();
        assert_eq!(lines[1], "v 0 0 0");
        assert_eq!(lines[4], "v 2 2 0");
        assert_eq!(lines[5], "vn 0 0 1");
        // Faces [0, 3, 2] and [0, 1, 3]
        assert_eq!(lines[9], "f 1//1 4//4 3//3");
        assert_eq!(lines[10], "f 1//1 2//2 4//4");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_save_obj() {
        let terrain = flat_terrain(2);
        let dir = std::env::temp_dir().join(format!("terrafault-export-{}", std::process::id()));
        let path = dir.join("nested").join("flat.obj");
        save_obj(&terrain, &path).expect("should write");
        let contents = std::fs::read_to_string(&path).expect("should read back");
        assert_eq!(contents, to_obj_string(&terrain));
        let _ = std::fs::remove_dir_all(&dir);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_propagate() {
        let terrain = flat_terrain(1);
        let err = write_obj(&terrain, FailingWriter).expect_err("writer is closed");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_string_matches_writer_output() {
        let terrain = Terrain::from_seed(
            TerrainParams::with_grid(4, GridBounds::new(-1.0, 1.0, -1.0, 1.0)),
            11,
        )
        .expect("valid params");
        let mut buf = Vec::new();
        write_obj(&terrain, &mut buf).expect("vec writer");
        assert_eq!(String::from_utf8(buf).expect("utf8"), to_obj_string(&terrain));
        assert!(to_obj_string(&terrain).ends_with('\n'));
    }
}
