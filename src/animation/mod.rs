//! Time-driven sway animation for arrangement groups and blocks

pub mod sway;

pub use sway::{AnimationDriver, NodeKind, Oscillation, SwayConfig, TransformDelta};
