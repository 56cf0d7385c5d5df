use crate::error::ViewerError;
use crate::model::{Mesh, Model};
use crate::parser::obj;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load(path: &Path) -> Result<Model, ViewerError> {
    let file = File::open(path).map_err(|e| {
        ViewerError::new("model-open")
            .with_arg("path", path.display())
            .push_std(e)
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());

    let model = obj::parse(BufReader::new(file), &name).map_err(|e| {
        ViewerError::new("model-parse")
            .with_arg("path", path.display())
            .push_std(e)
    })?;

    log::info!(
        "Loaded '{}': {} meshes, {} vertices, {} triangles",
        model.name,
        model.meshes.len(),
        model.meshes.iter().map(Mesh::vertex_count).sum::<usize>(),
        model.triangle_count()
    );
    if let Some(extent) = model.extent() {
        log::info!(
            "Model bounding box: min={:?}, max={:?}, size={:?}",
            extent.min,
            extent.max,
            extent.size()
        );
    }

    Ok(model)
}

/// Loads `path`, falling back to an empty model when it cannot be read.
pub fn load_or_empty(path: &Path) -> Model {
    match load(path) {
        Ok(model) => model,
        Err(e) => {
            log::error!("Error loading the model: {e}");
            Model::default()
        }
    }
}
