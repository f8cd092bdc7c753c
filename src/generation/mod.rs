//! Procedural arrangement generation: flowers, vase and hearts as block lists.
//!
//! The pipeline is:
//! 1. [`ArrangementComposer`] samples per-flower type, color, position and tilt
//! 2. [`FlowerGenerator`] builds each flower head in its group's local space
//! 3. [`VaseGenerator`] builds the deterministic vase body and footing
//! 4. [`HeartGenerator`] builds the six ring ornaments from a fixed template

pub mod config;
pub mod arrangement;
pub mod composer;
pub mod flower;
pub mod heart;
pub mod vase;

pub use config::{FlowerConfig, LayoutConfig, VaseConfig, VasePalette};
pub use arrangement::{ArrangementState, FlowerSpec, HeartSpec, VaseSpec};
pub use composer::{ArrangementComposer, HEART_COUNT, ORNAMENT_PALETTE};
pub use flower::{FlowerGenerator, FlowerType};
pub use heart::HeartGenerator;
pub use vase::VaseGenerator;
