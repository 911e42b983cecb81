use glam::{DAffine3, DMat3, DQuat, DVec3};

use crate::math::CatmullRomCurve;

/// Where the actor stands and which way it faces. Local +Z is forward, +Y is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: DVec3::ZERO,
        orientation: DQuat::IDENTITY,
    };

    /// Stand at `position` facing `target`
    pub fn looking_at(position: DVec3, target: DVec3) -> Self {
        Self {
            position,
            orientation: look_rotation(target - position),
        }
    }

    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }

    /// Local-to-world transform
    pub fn transform(&self) -> DAffine3 {
        DAffine3::from_rotation_translation(self.orientation, self.position)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotation taking local +Z onto `direction`, keeping +Y as close to world up as possible.
pub fn look_rotation(direction: DVec3) -> DQuat {
    let Some(z) = direction.try_normalize() else {
        return DQuat::IDENTITY;
    };
    // Straight up or down: pick the side axis from world Z instead
    let x = DVec3::Y
        .cross(z)
        .try_normalize()
        .unwrap_or_else(|| DVec3::Z.cross(z).normalize());
    let y = z.cross(x);

    DQuat::from_mat3(&DMat3::from_cols(x, y, z))
}

/// Actor pose at `progress` along the curve, facing the direction of travel
pub fn pose_at(curve: &CatmullRomCurve, progress: f64) -> Pose {
    let position = curve.point_at(progress);
    let tangent = curve.tangent_at(progress);
    Pose::looking_at(position, position + tangent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_look_rotation_identity_along_z() {
        let q = look_rotation(DVec3::Z);
        assert_close(q * DVec3::Z, DVec3::Z);
        assert_close(q * DVec3::Y, DVec3::Y);
    }

    #[test]
    fn test_look_rotation_turns_toward_x() {
        let q = look_rotation(DVec3::new(3.0, 0.0, 0.0));
        assert_close(q * DVec3::Z, DVec3::X);
        assert_close(q * DVec3::Y, DVec3::Y);
    }

    #[test]
    fn test_look_rotation_straight_up() {
        let q = look_rotation(DVec3::Y);
        assert_close(q * DVec3::Z, DVec3::Y);
        assert!(q.is_normalized());
    }

    #[test]
    fn test_look_rotation_zero_direction() {
        assert_eq!(look_rotation(DVec3::ZERO), DQuat::IDENTITY);
    }

    #[test]
    fn test_pose_transform_moves_local_offsets() {
        let pose = Pose::looking_at(DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 0.0));
        let behind = pose.transform().transform_point3(DVec3::new(0.0, 0.0, -1.0));
        assert_close(behind, DVec3::ZERO);
        assert_close(pose.forward(), DVec3::X);
    }
}
