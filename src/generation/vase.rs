//! Vase generation
//!
//! The vase is a stack of tapering block rings with a rasterized disk as its
//! footing. It has no random inputs: the same config always produces the same
//! block list.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::voxel::{BlockSpec, Color};
use super::config::{VaseConfig, VasePalette};

/// Builds the vase body and footing.
#[derive(Clone, Debug, Default)]
pub struct VaseGenerator {
    config: VaseConfig,
}

impl VaseGenerator {
    pub fn new(config: VaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VaseConfig {
        &self.config
    }

    /// Body rings top to bottom, then the footing in row-major (x, z) order.
    pub fn generate(&self) -> Vec<BlockSpec> {
        let mut blocks = Vec::with_capacity(self.body_block_count() + self.base_cells().len());
        self.push_body(&mut blocks);
        self.push_base(&mut blocks);
        blocks
    }

    /// Number of blocks in the ringed body.
    pub fn body_block_count(&self) -> usize {
        (self.config.layers * self.config.segments) as usize
    }

    /// Ring color for block `i` of layer `y`.
    ///
    /// The pattern check runs first and the highlight check may overwrite it;
    /// the two are not merged.
    pub fn ring_color(palette: &VasePalette, y: u32, i: u32) -> Color {
        let mut color = palette.main;
        if i % 3 == 0 {
            color = palette.pattern;
        }
        if y % 2 == 0 && i % 4 == 0 {
            color = palette.highlight;
        }
        color
    }

    fn push_body(&self, out: &mut Vec<BlockSpec>) {
        let cfg = &self.config;
        for y in 0..cfg.layers {
            let radius = cfg.layer_radius(y);
            let height = cfg.layer_height(y);
            for i in 0..cfg.segments {
                let angle = i as f32 / cfg.segments as f32 * TAU;
                let position = Vec3::new(
                    angle.cos() * radius * cfg.voxel_size,
                    height,
                    angle.sin() * radius * cfg.voxel_size,
                );
                out.push(
                    BlockSpec::new(format!("vase-{y}-{i}"), position, Self::ring_color(&cfg.palette, y, i))
                        .with_cube_size(cfg.voxel_size),
                );
            }
        }
    }

    /// Integer grid cells inside the footing disk.
    pub fn base_cells(&self) -> Vec<(i32, i32)> {
        let extent = self.config.base_extent;
        let radius = self.config.base_radius;
        let mut cells = Vec::new();
        for x in -extent..=extent {
            for z in -extent..=extent {
                if ((x * x + z * z) as f32).sqrt() <= radius {
                    cells.push((x, z));
                }
            }
        }
        cells
    }

    fn push_base(&self, out: &mut Vec<BlockSpec>) {
        let cfg = &self.config;
        let base_y = cfg.layer_height(cfg.layers);
        for (x, z) in self.base_cells() {
            let position = Vec3::new(x as f32 * cfg.voxel_size, base_y, z as f32 * cfg.voxel_size);
            out.push(
                BlockSpec::new(format!("vase-base-{x}-{z}"), position, cfg.palette.base)
                    .with_cube_size(cfg.voxel_size),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let generator = VaseGenerator::default();
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_block_count() {
        let generator = VaseGenerator::default();
        // 5x5 footing grid loses only its four corners (sqrt(8) > 2.5)
        assert_eq!(generator.base_cells().len(), 21);
        assert_eq!(generator.body_block_count(), 60);
        assert_eq!(generator.generate().len(), 81);
    }

    #[test]
    fn test_ring_radius_and_height() {
        let generator = VaseGenerator::default();
        let blocks = generator.generate();
        for y in 0..5u32 {
            let expected_r = (2.5 - y as f32 * 0.4) * 0.3;
            let expected_h = -2.0 - y as f32 * 0.3;
            for i in 0..12u32 {
                let block = &blocks[(y * 12 + i) as usize];
                let r = Vec3::new(block.position.x, 0.0, block.position.z).length();
                assert!((r - expected_r).abs() < 1e-5, "layer {y} block {i}: r={r}");
                assert!((block.position.y - expected_h).abs() < 1e-5);
                assert_eq!(block.size, Vec3::splat(0.3));
            }
        }
    }

    #[test]
    fn test_ring_color_precedence() {
        let p = VasePalette::default();
        // i=0: pattern, then highlight overwrites on even layers
        assert_eq!(VaseGenerator::ring_color(&p, 0, 0), p.highlight);
        assert_eq!(VaseGenerator::ring_color(&p, 1, 0), p.pattern);
        // i=4: highlight only on even layers, otherwise main
        assert_eq!(VaseGenerator::ring_color(&p, 2, 4), p.highlight);
        assert_eq!(VaseGenerator::ring_color(&p, 3, 4), p.main);
        // i=3: pattern only
        assert_eq!(VaseGenerator::ring_color(&p, 0, 3), p.pattern);
        // i=1: main
        assert_eq!(VaseGenerator::ring_color(&p, 0, 1), p.main);
    }

    #[test]
    fn test_footing_below_last_layer() {
        let generator = VaseGenerator::default();
        let blocks = generator.generate();
        for block in &blocks[60..] {
            assert!((block.position.y - -3.5).abs() < 1e-5);
            assert_eq!(block.color, VasePalette::default().base);
        }
        assert!(blocks[60..].iter().all(|b| b.key.starts_with("vase-base-")));
    }
}
