use nalgebra_glm::Mat4;

/// Position-only vertex, laid out exactly like the loader's x,y,z triples.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub(crate) position: [f32; 3],
}

impl Vertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// Matrices handed to the shader, column-major.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    projection: [f32; 16],
    model_view: [f32; 16],
}

impl CameraUniform {
    pub fn new(projection: &Mat4, model_view: &Mat4) -> Self {
        let mut uniform: Self = bytemuck::Zeroable::zeroed();
        uniform.projection.copy_from_slice(projection.as_slice());
        uniform.model_view.copy_from_slice(model_view.as_slice());
        uniform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra_glm as glm;

    #[test]
    fn vertex_matches_loader_stride() {
        assert_eq!(size_of::<Vertex>(), 3 * size_of::<f32>());
        let flat = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let vertices: &[Vertex] = bytemuck::cast_slice(&flat);
        assert_eq!(vertices[1].position, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn uniform_is_column_major() {
        let translate = glm::translate(&glm::Mat4::identity(), &glm::vec3(1.0, 2.0, 3.0));
        let uniform = CameraUniform::new(&glm::Mat4::identity(), &translate);
        assert_eq!(size_of::<CameraUniform>(), 128);
        assert_eq!(&uniform.model_view[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(uniform.projection[0], 1.0);
    }
}
