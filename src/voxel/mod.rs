//! Voxel block primitives: colors, block descriptions, and instance emission

pub mod block;
pub mod color;
pub mod emitter;

pub use block::{BlockMaterial, BlockSpec};
pub use color::Color;
pub use emitter::{BlockInstance, VoxelEmitter};
