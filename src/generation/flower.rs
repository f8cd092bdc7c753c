//! Flower head generation
//!
//! A flower head is a ring of petal blocks (layout depends on [`FlowerType`])
//! followed by a yellow center block and two leaves. Blocks are produced in
//! the flower group's local space; the group's yaw and tilt are applied by the
//! scene, never baked into block coordinates.

use std::f32::consts::{FRAC_PI_4, TAU};
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::voxel::{BlockSpec, Color};
use super::config::FlowerConfig;

/// Center block color, shared by every flower type.
pub const CENTER_COLOR: Color = Color::from_u32(0xFFFF00);
/// Leaf color.
pub const LEAF_COLOR: Color = Color::from_u32(0x228B22);
/// Daisy petals ignore the supplied color.
pub const DAISY_PETAL_COLOR: Color = Color::WHITE;

/// Flower head style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerType {
    Rose,
    Daisy,
    Tulip,
    /// Any unrecognized name. Produces a bare head (center and leaves only).
    #[serde(other)]
    Unknown,
}

impl FlowerType {
    /// Types the composer draws from.
    pub const SAMPLED: [FlowerType; 3] = [FlowerType::Rose, FlowerType::Daisy, FlowerType::Tulip];

    /// Parse a lowercase type name. Unrecognized names map to [`FlowerType::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "rose" => FlowerType::Rose,
            "daisy" => FlowerType::Daisy,
            "tulip" => FlowerType::Tulip,
            _ => FlowerType::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlowerType::Rose => "rose",
            FlowerType::Daisy => "daisy",
            FlowerType::Tulip => "tulip",
            FlowerType::Unknown => "unknown",
        }
    }

    /// Petal ring layout, `None` for a bare head.
    pub fn petal_layout(&self) -> Option<PetalLayout> {
        match self {
            FlowerType::Rose => Some(PetalLayout {
                count: 8,
                radius: 0.4,
                height: 0.2,
                size: Vec3::ONE,
                pitch: 0.0,
                color: PetalColor::Supplied,
            }),
            FlowerType::Daisy => Some(PetalLayout {
                count: 12,
                radius: 0.5,
                height: 0.0,
                size: Vec3::new(1.5, 0.5, 1.0),
                pitch: 0.0,
                color: PetalColor::Fixed(DAISY_PETAL_COLOR),
            }),
            FlowerType::Tulip => Some(PetalLayout {
                count: 6,
                radius: 0.3,
                height: 0.3,
                size: Vec3::new(1.0, 2.0, 1.0),
                pitch: FRAC_PI_4,
                color: PetalColor::Supplied,
            }),
            FlowerType::Unknown => None,
        }
    }

    /// Number of petal blocks this type emits.
    pub fn petal_count(&self) -> usize {
        self.petal_layout().map_or(0, |layout| layout.count)
    }
}

impl fmt::Display for FlowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a petal's color comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PetalColor {
    /// The flower's sampled color.
    Supplied,
    /// A type-specific constant.
    Fixed(Color),
}

/// Radial petal ring parameters for one flower type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalLayout {
    pub count: usize,
    pub radius: f32,
    pub height: f32,
    /// Block extents as multiples of the base block size.
    pub size: Vec3,
    /// Pitch applied to every petal before its yaw.
    pub pitch: f32,
    pub color: PetalColor,
}

/// Builds the block list for one flower head.
#[derive(Clone, Debug, Default)]
pub struct FlowerGenerator {
    config: FlowerConfig,
}

impl FlowerGenerator {
    pub fn new(config: FlowerConfig) -> Self {
        Self { config }
    }

    pub fn block_size(&self) -> f32 {
        self.config.block_size
    }

    /// Generate the head blocks: petals in ring order, then `center`, `leaf1`, `leaf2`.
    pub fn generate(&self, flower_type: FlowerType, color: Color) -> Vec<BlockSpec> {
        let mut blocks = Vec::with_capacity(flower_type.petal_count() + 3);

        if let Some(layout) = flower_type.petal_layout() {
            self.push_petals(&layout, color, &mut blocks);
        }
        self.push_center_and_leaves(&mut blocks);

        blocks
    }

    fn push_petals(&self, layout: &PetalLayout, color: Color, out: &mut Vec<BlockSpec>) {
        let petal_color = match layout.color {
            PetalColor::Supplied => color,
            PetalColor::Fixed(fixed) => fixed,
        };
        let size = layout.size * self.config.block_size;

        for i in 0..layout.count {
            let angle = i as f32 / layout.count as f32 * TAU;
            let position = Vec3::new(
                angle.cos() * layout.radius,
                layout.height,
                angle.sin() * layout.radius,
            );
            out.push(
                BlockSpec::new(format!("petal-{i}"), position, petal_color)
                    .with_size(size)
                    .with_rotation(Vec3::new(layout.pitch, angle, 0.0)),
            );
        }
    }

    fn push_center_and_leaves(&self, out: &mut Vec<BlockSpec>) {
        let bs = self.config.block_size;
        let leaf_size = Vec3::new(bs * 2.0, bs * 0.5, bs);

        out.push(
            BlockSpec::new("center", Vec3::new(0.0, 0.2, 0.0), CENTER_COLOR)
                .with_cube_size(bs * 1.5),
        );
        out.push(
            BlockSpec::new("leaf1", Vec3::new(0.3, -0.4, 0.0), LEAF_COLOR)
                .with_size(leaf_size)
                .with_rotation(Vec3::new(0.0, FRAC_PI_4, 0.0)),
        );
        out.push(
            BlockSpec::new("leaf2", Vec3::new(-0.3, -0.6, 0.0), LEAF_COLOR)
                .with_size(leaf_size)
                .with_rotation(Vec3::new(0.0, -FRAC_PI_4, 0.0)),
        );
    }
}
