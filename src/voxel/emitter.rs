//! Block list → GPU instance conversion.
//!
//! [`VoxelEmitter`] knows nothing about flowers or vases. It turns
//! [`BlockSpec`]s plus a parent world matrix into [`BlockInstance`]s that a
//! renderer can upload as-is and draw with one unit-cube mesh.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use serde::Serialize;

use super::block::{BlockMaterial, BlockSpec};
use super::color::Color;

/// One renderable block (96 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct BlockInstance {
    /// World matrix of a unit cube centered at the origin, column-major.
    pub model: [[f32; 4]; 4],
    // -- 64 bytes --
    /// Linear RGBA.
    pub color: [f32; 4],
    // -- 16 bytes --
    /// `[roughness, metalness, 0, 0]`
    pub material: [f32; 4],
    // -- 16 bytes --
    // Total: 96 bytes
}

impl BlockInstance {
    /// World matrix as a glam type.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    /// World-space center of the block.
    pub fn center(&self) -> Vec3 {
        self.model_matrix().w_axis.truncate()
    }
}

/// Converts block descriptions into GPU instances.
#[derive(Clone, Debug, Default)]
pub struct VoxelEmitter {
    material: BlockMaterial,
}

impl VoxelEmitter {
    pub fn new(material: BlockMaterial) -> Self {
        Self { material }
    }

    pub fn material(&self) -> BlockMaterial {
        self.material
    }

    /// Emit one block whose placement is already folded into `world`.
    pub fn emit_placed(&self, world: Mat4, size: Vec3, color: Color) -> BlockInstance {
        let model = world * Mat4::from_scale(size);
        BlockInstance {
            model: model.to_cols_array_2d(),
            color: color.to_linear_rgba(),
            material: [self.material.roughness, self.material.metalness, 0.0, 0.0],
        }
    }

    /// Emit one block under `parent_world`.
    pub fn emit_block(&self, block: &BlockSpec, parent_world: Mat4) -> BlockInstance {
        self.emit_placed(parent_world * block.placement(), block.size, block.color)
    }

    /// Emit a whole block list under a shared parent transform, preserving order.
    pub fn emit(&self, blocks: &[BlockSpec], parent_world: Mat4) -> Vec<BlockInstance> {
        blocks
            .iter()
            .map(|block| self.emit_block(block, parent_world))
            .collect()
    }
}
