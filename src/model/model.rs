use crate::model::mesh::{Extent, Mesh};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub meshes: Vec<Mesh>,
}

impl Model {
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }

    /// Overall extent of every mesh, `None` for a model without vertices.
    pub fn extent(&self) -> Option<Extent> {
        self.meshes
            .iter()
            .filter_map(Mesh::extent)
            .reduce(Extent::union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(vertices: Vec<f32>) -> Mesh {
        Mesh {
            name: "m".to_string(),
            indices: vec![0, 1, 2],
            vertices,
        }
    }

    #[test]
    fn extent_spans_all_meshes() {
        let model = Model {
            name: "town".to_string(),
            meshes: vec![
                mesh(vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, -1.0, 0.5, 0.0]),
                mesh(vec![5.0, -2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 9.0]),
            ],
        };
        let extent = model.extent();
        assert_eq!(
            extent,
            Some(Extent {
                min: [-1.0, -2.0, 0.0],
                max: [5.0, 2.0, 9.0],
            })
        );
        assert_eq!(model.triangle_count(), 2);
        assert_eq!(extent.map(|e| e.size()), Some([6.0, 4.0, 9.0]));
    }

    #[test]
    fn empty_model_has_no_extent() {
        let model = Model::default();
        assert!(model.is_empty());
        assert_eq!(model.extent(), None);
        assert_eq!(model.triangle_count(), 0);
    }
}
