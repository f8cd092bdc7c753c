//! Scene graph nodes and their Euler-angle local transforms.

use glam::{Mat4, Vec3};

use crate::voxel::block::euler_to_quat;
use crate::voxel::BlockSpec;

/// Node handle, unique within one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneNodeId(pub u64);

/// Transform relative to the parent node: `T · R(euler XYZ) · S(uniform)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl LocalTransform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Placement of a block within its group. Block size is not a transform scale.
    pub fn from_block(block: &BlockSpec) -> Self {
        Self {
            position: block.position,
            rotation: block.rotation,
            scale: 1.0,
        }
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            euler_to_quat(self.rotation),
            self.position,
        )
    }
}

#[derive(Clone, Debug)]
pub enum NodeContent {
    Group,

    /// A single block. Its placement lives in the node's transform; size and
    /// color are read from the [`BlockSpec`] at flatten time.
    Block(BlockSpec),
}

/// One group or block, linked to its parent and ordered children.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: SceneNodeId,
    pub name: String,
    pub parent: Option<SceneNodeId>,
    pub children: Vec<SceneNodeId>,
    pub local_transform: LocalTransform,
    /// Written by the last `flatten`.
    pub world_transform: Mat4,
    pub content: NodeContent,
}

impl SceneNode {
    /// Detached node at the identity transform.
    pub fn new(id: SceneNodeId, name: impl Into<String>, content: NodeContent) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            children: Vec::new(),
            local_transform: LocalTransform::identity(),
            world_transform: Mat4::IDENTITY,
            content,
        }
    }
}
