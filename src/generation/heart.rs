//! Heart ornament generation from a fixed eight-block template.

use glam::Vec3;

use crate::voxel::{BlockSpec, Color};

/// Unit-cube offsets: two three-block lobes, the bottom tip, and a center fill.
pub const HEART_TEMPLATE: [[f32; 3]; 8] = [
    // Left lobe
    [-0.5, 0.5, 0.0],
    [-1.0, 0.0, 0.0],
    [-0.5, -0.5, 0.0],
    // Right lobe
    [0.5, 0.5, 0.0],
    [1.0, 0.0, 0.0],
    [0.5, -0.5, 0.0],
    // Tip
    [0.0, -1.0, 0.0],
    // Center
    [0.0, 0.0, 0.0],
];

/// Builds one heart in template space. Scale and placement belong to the heart's group.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeartGenerator;

impl HeartGenerator {
    pub fn generate(&self, color: Color) -> Vec<BlockSpec> {
        HEART_TEMPLATE
            .iter()
            .enumerate()
            .map(|(i, offset)| BlockSpec::new(format!("heart-block-{i}"), Vec3::from_array(*offset), color))
            .collect()
    }
}
