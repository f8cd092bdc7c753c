//! Top-level bouquet configuration
//!
//! One JSON document groups every tunable: seed, layout, generator geometry,
//! sway curves and render material. Missing fields fall back to the stock
//! arrangement.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::SwayConfig;
use crate::core::{Error, Result};
use crate::generation::{FlowerConfig, LayoutConfig, VaseConfig};
use crate::voxel::BlockMaterial;

/// Configuration for a bouquet scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BouquetConfig {
    /// Pin the scene's random seed. `None` draws one from OS entropy at construction.
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
    pub flower: FlowerConfig,
    pub vase: VaseConfig,
    pub sway: SwayConfig,
    pub material: BlockMaterial,
}

impl BouquetConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded bouquet config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject geometry that cannot produce a sensible arrangement.
    pub fn validate(&self) -> Result<()> {
        if self.flower.block_size <= 0.0 {
            return Err(Error::Config(format!(
                "flower.block_size must be positive, got {}",
                self.flower.block_size
            )));
        }
        if self.vase.voxel_size <= 0.0 {
            return Err(Error::Config(format!(
                "vase.voxel_size must be positive, got {}",
                self.vase.voxel_size
            )));
        }
        if self.vase.layers > 0 && self.vase.layer_radius(self.vase.layers - 1) < 0.0 {
            return Err(Error::Config(format!(
                "vase.taper {} drives layer {} to a negative radius",
                self.vase.taper,
                self.vase.layers - 1
            )));
        }
        if self.vase.base_radius < 0.0 || self.vase.base_extent < 0 {
            return Err(Error::Config("vase footing radius and extent must be non-negative".into()));
        }
        if self.layout.heart_scale <= 0.0 {
            return Err(Error::Config(format!(
                "layout.heart_scale must be positive, got {}",
                self.layout.heart_scale
            )));
        }
        if self.layout.flower_jitter < 0.0 || self.layout.max_tilt < 0.0 {
            return Err(Error::Config("layout jitter and tilt bounds must be non-negative".into()));
        }
        Ok(())
    }
}
