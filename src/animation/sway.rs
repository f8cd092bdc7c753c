//! Stateless sway sampling
//!
//! Every animated node gets `base ⊕ delta(kind, t)` each frame, where `base`
//! is the static transform recorded at build time and `delta` depends only on
//! the node kind and the scene time. Nothing accumulates between frames, so
//! sampling the same `t` twice always gives the same transform.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::LocalTransform;

/// Which sway curve a node follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The whole arrangement group.
    Arrangement,
    Flower,
    Heart,
    /// An individual block mesh inside any group.
    Block,
}

/// `amplitude · sin(frequency · t)` and its cosine twin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    pub amplitude: f32,
    /// Angular frequency in rad/s.
    pub frequency: f32,
}

impl Oscillation {
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }

    #[inline]
    pub fn sin(&self, t: f32) -> f32 {
        (t * self.frequency).sin() * self.amplitude
    }

    #[inline]
    pub fn cos(&self, t: f32) -> f32 {
        (t * self.frequency).cos() * self.amplitude
    }
}

/// Amplitudes and frequencies of every sway curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwayConfig {
    /// Arrangement yaw.
    pub arrangement_yaw: Oscillation,
    pub flower_pitch: Oscillation,
    pub flower_yaw: Oscillation,
    /// Flower vertical bob.
    pub flower_bob: Oscillation,
    pub heart_yaw: Oscillation,
    pub heart_bob: Oscillation,
    /// Block pitch (sine) and roll (cosine).
    pub block_wobble: Oscillation,
}

impl Default for SwayConfig {
    fn default() -> Self {
        Self {
            arrangement_yaw: Oscillation::new(0.1, 0.2),
            flower_pitch: Oscillation::new(0.05, 0.5),
            flower_yaw: Oscillation::new(0.2, 0.5),
            flower_bob: Oscillation::new(0.1, 0.5),
            heart_yaw: Oscillation::new(0.2, 0.5),
            heart_bob: Oscillation::new(0.1, 0.5),
            block_wobble: Oscillation::new(0.1, 0.5),
        }
    }
}

/// Offset added to a node's base transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformDelta {
    /// Euler offset in radians (pitch, yaw, roll).
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl TransformDelta {
    /// Base transform with this delta added. Scale is untouched.
    pub fn apply_to(&self, base: &LocalTransform) -> LocalTransform {
        LocalTransform {
            position: base.position + self.translation,
            rotation: base.rotation + self.rotation,
            scale: base.scale,
        }
    }
}

/// Samples sway deltas for any node kind at any time.
#[derive(Clone, Debug, Default)]
pub struct AnimationDriver {
    config: SwayConfig,
}

impl AnimationDriver {
    pub fn new(config: SwayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SwayConfig {
        &self.config
    }

    /// Sway offset for `kind` at scene time `t` (seconds).
    pub fn delta(&self, kind: NodeKind, t: f32) -> TransformDelta {
        let c = &self.config;
        match kind {
            NodeKind::Arrangement => TransformDelta {
                rotation: Vec3::new(0.0, c.arrangement_yaw.sin(t), 0.0),
                translation: Vec3::ZERO,
            },
            NodeKind::Flower => TransformDelta {
                rotation: Vec3::new(c.flower_pitch.sin(t), c.flower_yaw.sin(t), 0.0),
                translation: Vec3::new(0.0, c.flower_bob.sin(t), 0.0),
            },
            NodeKind::Heart => TransformDelta {
                rotation: Vec3::new(0.0, c.heart_yaw.sin(t), 0.0),
                translation: Vec3::new(0.0, c.heart_bob.sin(t), 0.0),
            },
            NodeKind::Block => TransformDelta {
                rotation: Vec3::new(c.block_wobble.sin(t), 0.0, c.block_wobble.cos(t)),
                translation: Vec3::ZERO,
            },
        }
    }

    /// Transform of a node with static `base` at time `t`.
    pub fn sample(&self, kind: NodeKind, base: &LocalTransform, t: f32) -> LocalTransform {
        self.delta(kind, t).apply_to(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_function_of_time() {
        let driver = AnimationDriver::default();
        for kind in [NodeKind::Arrangement, NodeKind::Flower, NodeKind::Heart, NodeKind::Block] {
            for t in [0.0, 0.016, 1.5, 42.0, 1000.25] {
                assert_eq!(driver.delta(kind, t), driver.delta(kind, t));
            }
        }
    }

    #[test]
    fn test_zero_time_is_rest_pose_except_block_roll() {
        let driver = AnimationDriver::default();
        assert_eq!(driver.delta(NodeKind::Arrangement, 0.0), TransformDelta::default());
        assert_eq!(driver.delta(NodeKind::Flower, 0.0), TransformDelta::default());
        assert_eq!(driver.delta(NodeKind::Heart, 0.0), TransformDelta::default());
        let block = driver.delta(NodeKind::Block, 0.0);
        assert_eq!(block.rotation, Vec3::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn test_arrangement_yaw_curve() {
        let driver = AnimationDriver::default();
        let t = 3.0f32;
        let d = driver.delta(NodeKind::Arrangement, t);
        assert!((d.rotation.y - (t * 0.2).sin() * 0.1).abs() < 1e-6);
        assert_eq!(d.rotation.x, 0.0);
        assert_eq!(d.translation, Vec3::ZERO);
    }

    #[test]
    fn test_flower_composes_with_tilt_and_yaw() {
        let driver = AnimationDriver::default();
        let tilt = 0.2f32;
        let base_yaw = 1.1f32;
        let base = LocalTransform {
            position: Vec3::new(0.9, -1.95, 0.0),
            rotation: Vec3::new(-tilt, base_yaw, 0.0),
            scale: 1.0,
        };
        let t = 2.0f32;
        let s = (t * 0.5).sin();
        let out = driver.sample(NodeKind::Flower, &base, t);
        assert!((out.rotation.x - (-tilt + s * 0.05)).abs() < 1e-6);
        assert!((out.rotation.y - (base_yaw + s * 0.2)).abs() < 1e-6);
        assert!((out.position.y - (-1.95 + s * 0.1)).abs() < 1e-6);
        assert_eq!(out.position.x, 0.9);
    }

    #[test]
    fn test_heart_yaw_and_bob_share_phase() {
        let driver = AnimationDriver::default();
        for t in [0.3f32, 1.7, 9.0] {
            let d = driver.delta(NodeKind::Heart, t);
            assert!((d.rotation.y - 2.0 * d.translation.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_block_wobble_is_additive() {
        let driver = AnimationDriver::default();
        let base = LocalTransform {
            position: Vec3::ZERO,
            rotation: Vec3::new(std::f32::consts::FRAC_PI_4, 0.5, 0.0),
            scale: 1.0,
        };
        let t = 1.0f32;
        let out = driver.sample(NodeKind::Block, &base, t);
        assert!((out.rotation.x - (std::f32::consts::FRAC_PI_4 + (0.5f32).sin() * 0.1)).abs() < 1e-6);
        assert_eq!(out.rotation.y, 0.5);
        assert!((out.rotation.z - (0.5f32).cos() * 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_amplitudes_bound_the_delta() {
        let driver = AnimationDriver::default();
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let f = driver.delta(NodeKind::Flower, t);
            assert!(f.rotation.x.abs() <= 0.05 + 1e-6);
            assert!(f.rotation.y.abs() <= 0.2 + 1e-6);
            assert!(f.translation.y.abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn test_scale_untouched() {
        let driver = AnimationDriver::default();
        let base = LocalTransform { scale: 0.3, ..Default::default() };
        assert_eq!(driver.sample(NodeKind::Heart, &base, 5.0).scale, 0.3);
    }
}
