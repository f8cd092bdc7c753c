//! Arrangement data model: the composed flowers, vase and hearts for one parameter set.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::palette::Season;
use crate::voxel::{BlockSpec, Color};
use super::flower::FlowerType;

/// One placed flower and its head geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerSpec {
    pub flower_type: FlowerType,
    pub color: Color,
    /// Group origin relative to the arrangement.
    pub position: Vec3,
    /// Yaw of the flower group (radians).
    pub base_rotation_y: f32,
    /// Sampled lean; the group pitch is its negation.
    pub tilt_angle_x: f32,
    /// Head blocks in group-local space.
    pub blocks: Vec<BlockSpec>,
}

impl FlowerSpec {
    /// Static Euler rotation of the flower group before sway.
    pub fn base_rotation(&self) -> Vec3 {
        Vec3::new(-self.tilt_angle_x, self.base_rotation_y, 0.0)
    }
}

/// The vase body and footing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VaseSpec {
    pub blocks: Vec<BlockSpec>,
}

/// One heart ornament on the outer ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeartSpec {
    pub position: Vec3,
    pub scale: f32,
    pub color: Color,
    /// Template blocks, unscaled.
    pub blocks: Vec<BlockSpec>,
}

/// Everything generated for one (season, colors, count) parameter set.
///
/// Replaced wholesale on every parameter change; never patched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrangementState {
    pub season: Season,
    pub selected_colors: Vec<Color>,
    pub num_flowers: usize,
    pub flowers: Vec<FlowerSpec>,
    pub vase: VaseSpec,
    pub hearts: Vec<HeartSpec>,
}

impl ArrangementState {
    /// Total number of blocks across flowers, vase and hearts.
    pub fn block_count(&self) -> usize {
        self.flowers.iter().map(|f| f.blocks.len()).sum::<usize>()
            + self.vase.blocks.len()
            + self.hearts.iter().map(|h| h.blocks.len()).sum::<usize>()
    }
}
