//! Core type aliases and re-exports

pub use glam::{
    Vec3,
    Mat4,
    Quat,
    EulerRot,
};

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
