//! Arrangement composition
//!
//! [`ArrangementComposer`] samples a type, color, jittered ring position and
//! tilt for every flower, builds the vase once, and rings six hearts around
//! the whole thing. All randomness comes from the caller's [`Rng`], so tests
//! can pin a seed while the scene uses its own per-instance generator.
//!
//! Season is recorded but does not influence which flower types are drawn.
//! Season presets only decide which palette the user starts from.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::palette::Season;
use crate::voxel::Color;
use super::arrangement::{ArrangementState, FlowerSpec, HeartSpec, VaseSpec};
use super::config::{FlowerConfig, LayoutConfig, VaseConfig};
use super::flower::{FlowerGenerator, FlowerType};
use super::heart::HeartGenerator;
use super::vase::VaseGenerator;

/// Hearts per arrangement.
pub const HEART_COUNT: usize = 6;

/// Heart colors, independent of the user's flower palette.
pub const ORNAMENT_PALETTE: [Color; 6] = [
    Color::from_u32(0xFF0000),
    Color::from_u32(0xFF69B4),
    Color::from_u32(0xFF1493),
    Color::from_u32(0xFFB6C1),
    Color::from_u32(0xFFC0CB),
    Color::from_u32(0xFF69B4),
];

/// Builds complete arrangements.
#[derive(Clone, Debug)]
pub struct ArrangementComposer {
    layout: LayoutConfig,
    flowers: FlowerGenerator,
    vase: VaseGenerator,
    hearts: HeartGenerator,
    ornament_palette: Vec<Color>,
}

impl Default for ArrangementComposer {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), FlowerConfig::default(), VaseConfig::default())
    }
}

impl ArrangementComposer {
    pub fn new(layout: LayoutConfig, flower: FlowerConfig, vase: VaseConfig) -> Self {
        Self {
            layout,
            flowers: FlowerGenerator::new(flower),
            vase: VaseGenerator::new(vase),
            hearts: HeartGenerator,
            ornament_palette: ORNAMENT_PALETTE.to_vec(),
        }
    }

    /// Replace the heart palette. An empty palette makes every heart red.
    pub fn with_ornament_palette(mut self, palette: Vec<Color>) -> Self {
        self.ornament_palette = palette;
        self
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Compose a fresh arrangement. Every call re-rolls all random choices.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        season: Season,
        selected_colors: &[Color],
        num_flowers: usize,
        rng: &mut R,
    ) -> ArrangementState {
        if num_flowers == 0 {
            log::warn!("Composing arrangement with zero flowers");
        }
        if selected_colors.is_empty() {
            log::warn!("No colors selected, flowers fall back to {}", Color::RED);
        }

        let flowers = (0..num_flowers)
            .map(|i| self.compose_flower(i, num_flowers, selected_colors, rng))
            .collect();
        let vase = VaseSpec { blocks: self.vase.generate() };
        let hearts = (0..HEART_COUNT).map(|i| self.compose_heart(i, rng)).collect();

        let state = ArrangementState {
            season,
            selected_colors: selected_colors.to_vec(),
            num_flowers,
            flowers,
            vase,
            hearts,
        };

        log::info!(
            "Composed {} arrangement: {} flowers, {} hearts, {} blocks",
            season,
            state.flowers.len(),
            state.hearts.len(),
            state.block_count()
        );
        state
    }

    /// Un-jittered ring position and base yaw of flower `index` out of `count`.
    ///
    /// A lone flower sits on the vase axis with zero yaw.
    pub fn flower_slot(&self, index: usize, count: usize) -> (Vec3, f32) {
        if count <= 1 {
            return (Vec3::new(0.0, self.layout.flower_y, 0.0), 0.0);
        }
        let angle = index as f32 / count as f32 * TAU;
        let r = self.layout.flower_ring_radius;
        (Vec3::new(angle.cos() * r, self.layout.flower_y, angle.sin() * r), angle)
    }

    /// Position of heart `index` on the ornament ring.
    pub fn heart_slot(&self, index: usize) -> Vec3 {
        let angle = index as f32 / HEART_COUNT as f32 * TAU;
        let r = self.layout.heart_ring_radius;
        Vec3::new(angle.cos() * r, self.layout.heart_y, angle.sin() * r)
    }

    fn compose_flower<R: Rng + ?Sized>(
        &self,
        index: usize,
        count: usize,
        selected_colors: &[Color],
        rng: &mut R,
    ) -> FlowerSpec {
        let (mut position, base_rotation_y) = self.flower_slot(index, count);
        if count > 1 {
            position.x += symmetric(rng, self.layout.flower_jitter);
            position.z += symmetric(rng, self.layout.flower_jitter);
        }

        let flower_type = FlowerType::SAMPLED[rng.random_range(0..FlowerType::SAMPLED.len())];
        let color = selected_colors.choose(rng).copied().unwrap_or(Color::RED);
        let tilt_angle_x = symmetric(rng, self.layout.max_tilt);

        FlowerSpec {
            flower_type,
            color,
            position,
            base_rotation_y,
            tilt_angle_x,
            blocks: self.flowers.generate(flower_type, color),
        }
    }

    fn compose_heart<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> HeartSpec {
        let color = self.ornament_palette.choose(rng).copied().unwrap_or(Color::RED);
        HeartSpec {
            position: self.heart_slot(index),
            scale: self.layout.heart_scale,
            color,
            blocks: self.hearts.generate(color),
        }
    }
}

/// Uniform sample in `[-half_width, half_width)`. Zero width yields zero.
#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * half_width
}
