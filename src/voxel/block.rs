//! Declarative block description
//!
//! A [`BlockSpec`] is the atomic unit every generator produces: one
//! axis-aligned box with a solid color, placed and rotated in the local space
//! of its parent group.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::color::Color;

/// One voxel block in local group space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Stable slot name within the generated list (e.g. `petal-3`, `leaf1`).
    pub key: String,
    pub position: Vec3,
    /// Box extents. Unit cube unless the generator says otherwise.
    pub size: Vec3,
    pub color: Color,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
}

impl BlockSpec {
    /// Unit cube at `position` with no rotation.
    pub fn new(key: impl Into<String>, position: Vec3, color: Color) -> Self {
        Self {
            key: key.into(),
            position,
            size: Vec3::ONE,
            color,
            rotation: Vec3::ZERO,
        }
    }

    /// Set the box extents.
    pub fn with_size(mut self, size: Vec3) -> Self {
        self.size = size;
        self
    }

    /// Set uniform box extents.
    pub fn with_cube_size(self, edge: f32) -> Self {
        self.with_size(Vec3::splat(edge))
    }

    /// Set the Euler rotation (radians, XYZ order).
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation as a quaternion.
    pub fn orientation(&self) -> Quat {
        euler_to_quat(self.rotation)
    }

    /// Placement matrix (translation and rotation, size excluded).
    pub fn placement(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }
}

/// Convert XYZ Euler angles (radians) to a quaternion.
#[inline]
pub fn euler_to_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Surface constants handed to the renderer with every block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockMaterial {
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for BlockMaterial {
    fn default() -> Self {
        Self {
            roughness: 0.8,
            metalness: 0.1,
        }
    }
}
