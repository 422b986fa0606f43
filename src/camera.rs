use glam::{EulerRot, Mat3, Mat4, Vec3};

pub const DEFAULT_FOV_Y_DEGREES: f32 = 75.0;
pub const DEFAULT_Z_NEAR: f32 = 0.1;
pub const DEFAULT_Z_FAR: f32 = 100.0;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// First-person camera pose plus perspective parameters.
///
/// Rotation composes yaw-then-pitch (`EulerRot::YXZ`, zero roll), which
/// keeps the horizon level: no amount of looking around introduces roll.
pub struct Camera {
    pub position: Vec3,
    /// Rotation around the world Y axis, radians
    pub yaw: f32,
    /// Rotation around the local X axis, radians
    pub pitch: f32,
    /// World up vector
    pub up: Vec3,
    fov_y: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            up: Vec3::Y,
            fov_y: DEFAULT_FOV_Y_DEGREES.to_radians(),
            aspect,
            z_near: DEFAULT_Z_NEAR,
            z_far: DEFAULT_Z_FAR,
        }
    }

    /// Local-to-world rotation, yaw applied before pitch.
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Column 0 of the rotation matrix: the local right direction.
    /// Horizontal for zero roll, whatever the pitch.
    pub fn right_axis(&self) -> Vec3 {
        self.rotation_matrix().x_axis
    }

    /// The direction the camera is looking.
    pub fn forward_axis(&self) -> Vec3 {
        self.rotation_matrix() * Vec3::NEG_Z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward_axis(), self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Called on window resize, the camera's only resize concern.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_identity_pose_axes() {
        let camera = Camera::new(1.0);

        assert!((camera.right_axis() - Vec3::X).length() < EPS);
        assert!((camera.forward_axis() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_right_axis_stays_horizontal_under_pitch() {
        let mut camera = Camera::new(1.0);
        camera.pitch = 0.8;
        camera.yaw = 1.3;

        assert!(camera.right_axis().y.abs() < EPS);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let mut camera = Camera::new(1.0);
        camera.yaw = std::f32::consts::FRAC_PI_2;

        // Quarter turn left: forward swings from -Z to -X.
        assert!((camera.forward_axis() - Vec3::NEG_X).length() < EPS);
        assert!((camera.right_axis() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn test_forward_tilts_with_pitch() {
        let mut camera = Camera::new(1.0);
        camera.pitch = std::f32::consts::FRAC_PI_4;

        let forward = camera.forward_axis();
        assert!(forward.y > 0.0, "positive pitch looks up");
        assert!(forward.z < 0.0);
    }
}
