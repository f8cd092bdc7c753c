//! Season presets and the user's palette/count selection

pub mod params;
pub mod season;

pub use params::{ArrangementParams, FLOWER_COUNTS, PICKER_COLORS};
pub use season::{Season, SeasonPreset};
