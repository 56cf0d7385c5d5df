use serde::{Deserialize, Serialize};

/// Triangulated geometry ready for upload: `vertices` holds x,y,z triples and
/// `indices` holds three vertex indices per triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

/// Axis-aligned extent of a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Extent {
    pub fn union(self, other: Extent) -> Extent {
        let mut out = self;
        for i in 0..3 {
            out.min[i] = out.min[i].min(other.min[i]);
            out.max[i] = out.max[i].max(other.max[i]);
        }
        out
    }

    pub fn size(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn extent(&self) -> Option<Extent> {
        let mut points = self.vertices.chunks_exact(3);
        let first = points.next()?;
        let start = Extent {
            min: [first[0], first[1], first[2]],
            max: [first[0], first[1], first[2]],
        };
        Some(points.fold(start, |acc, p| {
            acc.union(Extent {
                min: [p[0], p[1], p[2]],
                max: [p[0], p[1], p[2]],
            })
        }))
    }
}
