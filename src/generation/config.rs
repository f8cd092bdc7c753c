//! Generation constants, grouped per generator.
//!
//! Every field has a default matching the stock arrangement; a
//! [`BouquetConfig`](crate::scene::BouquetConfig) file may override any of them.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::voxel::Color;

/// Flower head geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerConfig {
    /// Edge length of a plain petal block; all other flower block sizes are multiples of it.
    pub block_size: f32,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self { block_size: 0.2 }
    }
}

/// Colors of the vase body and footing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VasePalette {
    pub main: Color,
    pub pattern: Color,
    pub highlight: Color,
    pub base: Color,
}

impl Default for VasePalette {
    fn default() -> Self {
        Self {
            main: Color::from_u32(0x4A4A4A),
            pattern: Color::from_u32(0x5A5A5A),
            highlight: Color::from_u32(0x6A6A6A),
            base: Color::from_u32(0x3A3A3A),
        }
    }
}

/// Vase body and footing layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaseConfig {
    /// Number of body rings.
    pub layers: u32,
    /// Ring radius of the top layer, in voxel units.
    pub radius: f32,
    /// Radius lost per layer going down.
    pub taper: f32,
    /// Blocks per ring.
    pub segments: u32,
    /// Block edge length and layer pitch.
    pub voxel_size: f32,
    /// Height of the top ring.
    pub top_y: f32,
    /// Footing disk radius, in voxel units.
    pub base_radius: f32,
    /// Half-width of the footing grid, in voxel units.
    pub base_extent: i32,
    pub palette: VasePalette,
}

impl Default for VaseConfig {
    fn default() -> Self {
        Self {
            layers: 5,
            radius: 2.5,
            taper: 0.4,
            segments: 12,
            voxel_size: 0.3,
            top_y: -2.0,
            base_radius: 2.5,
            base_extent: 2,
            palette: VasePalette::default(),
        }
    }
}

impl VaseConfig {
    /// Ring radius of layer `y` (in voxel units).
    #[inline]
    pub fn layer_radius(&self, y: u32) -> f32 {
        self.radius - y as f32 * self.taper
    }

    /// Height of layer `y`. `y == layers` is the footing.
    #[inline]
    pub fn layer_height(&self, y: u32) -> f32 {
        self.top_y - y as f32 * self.voxel_size
    }
}

/// Where flowers and hearts go around the vase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Ring radius for arrangements of more than one flower.
    pub flower_ring_radius: f32,
    /// Height of every flower head.
    pub flower_y: f32,
    /// Max absolute horizontal jitter per axis.
    pub flower_jitter: f32,
    /// Max absolute tilt about X (radians).
    pub max_tilt: f32,
    pub heart_ring_radius: f32,
    pub heart_y: f32,
    pub heart_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            flower_ring_radius: 0.9,
            flower_y: -1.95,
            flower_jitter: 0.04,
            max_tilt: PI / 8.0,
            heart_ring_radius: 2.5,
            heart_y: 0.5,
            heart_scale: 0.3,
        }
    }
}
