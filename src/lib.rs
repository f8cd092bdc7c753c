//! voxel-bouquet - Procedural voxel flower arrangements with sway animation
//!
//! Parameters (season, colors, flower count) go into
//! [`generation::ArrangementComposer`]; block lists come out and are laid
//! into a [`scene::SceneGraph`] whose group transforms
//! [`animation::AnimationDriver`] rewrites every frame.

pub mod core;
pub mod voxel;
pub mod generation;
pub mod palette;
pub mod animation;
pub mod scene;
