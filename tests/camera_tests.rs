use glam::{Vec3, Vec4};
use first_person::camera::Camera;

#[cfg(test)]
mod camera_tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_view_matrix_centers_camera_position() {
        let camera = Camera::new(16.0 / 9.0);

        let eye = camera.view_matrix() * camera.position.extend(1.0);
        assert!(eye.truncate().length() < EPS);
    }

    #[test]
    fn test_point_ahead_projects_inside_clip_volume() {
        let camera = Camera::new(16.0 / 9.0);

        // A point on the plane, a few units in front of the start pose.
        let world = Vec4::new(0.0, 0.0, -5.0, 1.0);
        let clip = camera.view_projection() * world;
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x.abs() <= 1.0);
        assert!(ndc.y.abs() <= 1.0);
        assert!(ndc.z >= 0.0 && ndc.z <= 1.0);
    }

    #[test]
    fn test_point_behind_projects_with_negative_w() {
        let camera = Camera::new(16.0 / 9.0);

        let world = Vec4::new(0.0, 1.0, 5.0, 1.0);
        let clip = camera.view_projection() * world;
        assert!(clip.w < 0.0);
    }

    #[test]
    fn test_set_aspect_changes_projection() {
        let mut camera = Camera::new(1.0);
        let square = camera.projection_matrix();

        camera.set_aspect(2.0);
        let wide = camera.projection_matrix();

        assert!((square.x_axis.x - 2.0 * wide.x_axis.x).abs() < EPS);
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        let mut camera = Camera::new(1.0);
        camera.yaw = 2.3;
        camera.pitch = -0.7;

        let m = camera.rotation_matrix();
        assert!((m.x_axis.length() - 1.0).abs() < EPS);
        assert!((m.y_axis.length() - 1.0).abs() < EPS);
        assert!((m.z_axis.length() - 1.0).abs() < EPS);
        assert!(m.x_axis.dot(m.y_axis).abs() < EPS);
        assert!(m.x_axis.dot(m.z_axis).abs() < EPS);
    }

    #[test]
    fn test_uniform_matches_view_projection() {
        let camera = Camera::new(1.5);

        let uniform = camera.to_uniform();
        let expected = camera.view_projection().to_cols_array_2d();
        assert_eq!(uniform.view_proj, expected);
    }

    #[test]
    fn test_up_is_world_y() {
        let camera = Camera::new(1.0);
        assert_eq!(camera.up, Vec3::Y);
    }
}
