use crate::model::{Mesh, Model};
use std::collections::HashMap;
use std::io::BufRead;

#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: vertex needs three coordinates")]
    MissingCoordinate { line: usize },
    #[error("line {line}: face has {corners} corners, need at least 3")]
    DegenerateFace { line: usize, corners: usize },
    #[error("line {line}: vertex index {index} outside 1..={count}")]
    IndexOutOfRange { line: usize, index: i64, count: usize },
    #[error("no faces found")]
    NoGeometry,
}

/// Collects the faces of one `o`/`g` group, re-indexing the global position
/// list into a compact per-mesh vertex buffer.
struct MeshBuilder {
    mesh: Mesh,
    remap: HashMap<usize, u32>,
}

impl MeshBuilder {
    fn new(name: String) -> Self {
        Self {
            mesh: Mesh {
                name,
                ..Mesh::default()
            },
            remap: HashMap::new(),
        }
    }

    fn local_index(&mut self, global: usize, positions: &[[f32; 3]]) -> u32 {
        if let Some(&local) = self.remap.get(&global) {
            return local;
        }
        let local = self.remap.len() as u32;
        self.mesh.vertices.extend_from_slice(&positions[global]);
        self.remap.insert(global, local);
        local
    }

    fn finish(self, meshes: &mut Vec<Mesh>) {
        if !self.mesh.indices.is_empty() {
            meshes.push(self.mesh);
        }
    }
}

fn parse_f32(token: &str, line: usize) -> Result<f32, ObjError> {
    token.parse::<f32>().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Turns a face corner (`7`, `7/2`, `7//3`, `-1/2/3`) into a 0-based index.
fn resolve_corner(token: &str, line: usize, count: usize) -> Result<usize, ObjError> {
    let raw = token.split('/').next().unwrap_or(token);
    let index = raw.parse::<i64>().map_err(|_| ObjError::InvalidNumber {
        line,
        token: token.to_string(),
    })?;

    let resolved = if index > 0 {
        index - 1
    } else {
        count as i64 + index
    };

    if index == 0 || resolved < 0 || resolved >= count as i64 {
        return Err(ObjError::IndexOutOfRange { line, index, count });
    }
    Ok(resolved as usize)
}

/// Reads a Wavefront OBJ stream into triangulated meshes.
///
/// Only positions and faces are kept. Polygons are fan-triangulated and each
/// `o`/`g` statement starts a new mesh; empty groups are dropped.
pub fn parse<R: BufRead>(mut reader: R, name: &str) -> Result<Model, ObjError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut meshes = Vec::new();
    let mut current = MeshBuilder::new(name.to_string());
    let mut corners = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        // Exporters write comments and group names in whatever encoding they
        // like; only the ASCII statements matter here.
        let text = String::from_utf8_lossy(&buf);
        let mut tokens = text.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut xyz = [0.0f32; 3];
                for slot in &mut xyz {
                    let token = tokens.next().ok_or(ObjError::MissingCoordinate { line })?;
                    *slot = parse_f32(token, line)?;
                }
                positions.push(xyz);
            }
            Some("f") => {
                corners.clear();
                for token in tokens {
                    corners.push(resolve_corner(token, line, positions.len())?);
                }
                if corners.len() < 3 {
                    return Err(ObjError::DegenerateFace {
                        line,
                        corners: corners.len(),
                    });
                }
                let local: Vec<u32> = corners
                    .iter()
                    .map(|&global| current.local_index(global, &positions))
                    .collect();
                for k in 1..local.len() - 1 {
                    current
                        .mesh
                        .indices
                        .extend_from_slice(&[local[0], local[k], local[k + 1]]);
                }
            }
            Some("o") | Some("g") => {
                let group: Vec<&str> = tokens.collect();
                let group = if group.is_empty() {
                    name.to_string()
                } else {
                    group.join(" ")
                };
                std::mem::replace(&mut current, MeshBuilder::new(group)).finish(&mut meshes);
            }
            // Comments, normals, texture coordinates, materials and smoothing
            // groups carry nothing the viewer draws.
            _ => {}
        }
    }
    current.finish(&mut meshes);

    if meshes.is_empty() {
        return Err(ObjError::NoGeometry);
    }

    Ok(Model {
        name: name.to_string(),
        meshes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str) -> Result<Model, ObjError> {
        parse(text.as_bytes(), "test")
    }

    #[test]
    fn reads_a_single_triangle() {
        let model = parse_str("# tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        assert_eq!(model.meshes.len(), 1);
        let mesh = &model.meshes[0];
        assert_eq!(mesh.name, "test");
        assert_eq!(mesh.vertices, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn fan_triangulates_polygons_with_slash_corners() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\n\
                    f 1/1/1 2/1/1 3//1 4\n";
        let mesh = &parse_str(text).unwrap().meshes[0];
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn negative_indices_are_relative() {
        let mesh = &parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n").unwrap().meshes[0];
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn groups_split_meshes_and_compact_vertices() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 5 5 5\n\
                    o roof\nf 1 2 3\n\
                    g chimney stack\nf 4 2 3\n\
                    o empty\n";
        let model = parse_str(text).unwrap();
        let names: Vec<&str> = model.meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["roof", "chimney stack"]);

        let chimney = &model.meshes[1];
        assert_eq!(chimney.vertex_count(), 3);
        assert_eq!(&chimney.vertices[..3], &[5.0, 5.0, 5.0]);
        assert_eq!(chimney.indices, vec![0, 1, 2]);
    }

    #[test]
    fn rejects_bad_numbers_with_line() {
        let err = parse_str("v 0 0 0\nv 1 zero 0\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidNumber { line: 2, ref token } if token == "zero"));
    }

    #[test]
    fn rejects_short_vertices_and_faces() {
        assert!(matches!(
            parse_str("v 0 0\n").unwrap_err(),
            ObjError::MissingCoordinate { line: 1 }
        ));
        assert!(matches!(
            parse_str("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err(),
            ObjError::DegenerateFace { line: 3, corners: 2 }
        ));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n";
        assert!(matches!(
            parse_str(text).unwrap_err(),
            ObjError::IndexOutOfRange { index: 4, count: 3, .. }
        ));
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
        assert!(matches!(
            parse_str(text).unwrap_err(),
            ObjError::IndexOutOfRange { index: 0, .. }
        ));
    }

    #[test]
    fn non_utf8_comments_are_skipped() {
        let bytes: &[u8] = b"# caf\xe9\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let model = parse(bytes, "test").unwrap();
        assert_eq!(model.meshes[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn non_utf8_group_names_are_kept_lossily() {
        let bytes: &[u8] = b"v 0 0 0\nv 1 0 0\nv 0 1 0\ng maison_\xe9\r\nf 1 2 3\r\n";
        let model = parse(bytes, "test").unwrap();
        assert_eq!(model.meshes[0].name, "maison_\u{fffd}");
    }

    #[test]
    fn read_errors_name_their_cause() {
        let err = ObjError::from(std::io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "read failed: disk gone");
    }

    #[test]
    fn file_without_faces_is_incomplete() {
        assert!(matches!(
            parse_str("v 0 0 0\n").unwrap_err(),
            ObjError::NoGeometry
        ));
    }
}
