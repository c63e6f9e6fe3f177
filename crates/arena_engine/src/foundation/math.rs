//! Math utilities and types
//!
//! Thin layer over nalgebra providing the vector types the simulation uses
//! plus the Euler-angle convention shared with the render collaborator.

pub use nalgebra::{Rotation3, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Build a rotation from Euler angles given in degrees.
///
/// Angles are per-axis (x, y, z) and applied in Z-Y-X order, the same
/// convention the render collaborator uses for model matrices. This is what
/// turns the player's yaw/pitch into a bullet's flight direction.
pub fn rotation_from_euler_deg(angles: Vec3) -> Rotation3<f32> {
    Rotation3::from_euler_angles(
        angles.x.to_radians(),
        angles.y.to_radians(),
        angles.z.to_radians(),
    )
}

/// Rotate a direction vector by Euler angles in degrees (Z-Y-X order).
pub fn rotate_euler_deg(direction: Vec3, angles: Vec3) -> Vec3 {
    rotation_from_euler_deg(angles) * direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_rotation_is_identity() {
        let v = rotate_euler_deg(Vec3::new(0.0, 0.0, -1.0), Vec3::zeros());
        assert_relative_eq!(v.x, 0.0);
        assert_relative_eq!(v.y, 0.0);
        assert_relative_eq!(v.z, -1.0);
    }

    #[test]
    fn yaw_quarter_turn_swings_forward_to_side() {
        // +90 degrees of yaw about Y takes -Z to -X.
        let v = rotate_euler_deg(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 90.0, 0.0));
        assert_relative_eq!(v.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn pitch_tilts_forward_up() {
        let v = rotate_euler_deg(Vec3::new(0.0, 0.0, -1.0), Vec3::new(90.0, 0.0, 0.0));
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-5);
    }
}
