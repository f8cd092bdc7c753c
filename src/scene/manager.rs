//! Scene manager: parameters in, animated block instances out.
//!
//! Owns the user parameters, the composer, the per-instance random generator
//! and the current [`ArrangementScene`]. Every parameter change composes a
//! fresh arrangement and rebuilds the scene before the next tick.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::AnimationDriver;
use crate::generation::{ArrangementComposer, ArrangementState};
use crate::palette::{ArrangementParams, Season};
use crate::voxel::{BlockInstance, Color, VoxelEmitter};

use super::arrangement::ArrangementScene;
use super::config::BouquetConfig;

/// Drives one bouquet scene.
pub struct SceneManager {
    config: BouquetConfig,
    params: ArrangementParams,
    composer: ArrangementComposer,
    driver: AnimationDriver,
    emitter: VoxelEmitter,
    seed: u64,
    rng: StdRng,
    state: ArrangementState,
    scene: ArrangementScene,
}

impl SceneManager {
    /// Create a scene with default parameters.
    pub fn new(config: BouquetConfig) -> Self {
        Self::with_params(config, ArrangementParams::default())
    }

    /// Create a scene and compose its first arrangement.
    pub fn with_params(config: BouquetConfig, params: ArrangementParams) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);

        let composer = ArrangementComposer::new(
            config.layout.clone(),
            config.flower.clone(),
            config.vase.clone(),
        );
        let driver = AnimationDriver::new(config.sway.clone());
        let emitter = VoxelEmitter::new(config.material);

        let state = composer.compose(params.season, &params.selected_colors, params.num_flowers, &mut rng);
        let scene = ArrangementScene::build(&state);

        log::info!("Scene created with seed {}", seed);

        Self {
            config,
            params,
            composer,
            driver,
            emitter,
            seed,
            rng,
            state,
            scene,
        }
    }

    /// Switch season; its preset palette replaces the current color selection.
    pub fn set_season(&mut self, season: Season) {
        self.params.select_season(season);
        self.regenerate();
    }

    /// Toggle one color in the selection.
    pub fn toggle_color(&mut self, color: Color) {
        self.params.toggle_color(color);
        self.regenerate();
    }

    pub fn set_flower_count(&mut self, count: usize) {
        self.params.set_flower_count(count);
        self.regenerate();
    }

    /// Replace all parameters at once.
    pub fn set_params(&mut self, params: ArrangementParams) {
        self.params = params;
        self.regenerate();
    }

    /// Re-roll the arrangement for the current parameters.
    pub fn regenerate(&mut self) {
        self.state = self.composer.compose(
            self.params.season,
            &self.params.selected_colors,
            self.params.num_flowers,
            &mut self.rng,
        );
        self.scene.rebuild(&self.state);
    }

    /// Animate to scene time `t` (seconds since start).
    pub fn tick(&mut self, t: f32) {
        self.scene.tick(&self.driver, t);
    }

    /// Current frame's block instances.
    pub fn instances(&mut self) -> Vec<BlockInstance> {
        self.scene.instances(&self.emitter)
    }

    pub fn state(&self) -> &ArrangementState {
        &self.state
    }

    pub fn params(&self) -> &ArrangementParams {
        &self.params
    }

    pub fn config(&self) -> &BouquetConfig {
        &self.config
    }

    /// Seed the random generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scene(&self) -> &ArrangementScene {
        &self.scene
    }
}
