/// Vertex data for the plane mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

pub const PLANE_SIZE: f32 = 10.0;
pub const PLANE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// The whole scene: one flat plane lying in XZ at y = 0, centered on the
/// origin. The camera starts one unit above it.
pub fn create_plane_scene() -> (Vec<Vertex>, Vec<u16>) {
    let half = PLANE_SIZE / 2.0;

    let vertices = vec![
        Vertex::new([-half, 0.0, -half], PLANE_COLOR),
        Vertex::new([-half, 0.0, half], PLANE_COLOR),
        Vertex::new([half, 0.0, half], PLANE_COLOR),
        Vertex::new([half, 0.0, -half], PLANE_COLOR),
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_is_flat_and_centered() {
        let (vertices, indices) = create_plane_scene();

        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        for v in &vertices {
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.position[0].abs(), PLANE_SIZE / 2.0);
            assert_eq!(v.position[2].abs(), PLANE_SIZE / 2.0);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let (vertices, indices) = create_plane_scene();
        for &i in &indices {
            assert!((i as usize) < vertices.len());
        }
    }
}
