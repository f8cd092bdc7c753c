//! Scene graph, arrangement layout, and the scene manager

pub mod arrangement;
pub mod config;
pub mod graph;
pub mod manager;
pub mod node;

pub use arrangement::{AnimatedNode, ArrangementScene};
pub use config::BouquetConfig;
pub use graph::SceneGraph;
pub use manager::SceneManager;
pub use node::{LocalTransform, NodeContent, SceneNode, SceneNodeId};
