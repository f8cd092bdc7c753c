//! Arrangement → scene graph
//!
//! Lays a composed [`ArrangementState`] out as groups and blocks and remembers
//! the static base transform of every animated node, so each frame can write
//! `base ⊕ sway(t)` without reading back what the previous frame wrote.
//!
//! ```text
//! root
//! └── arrangement          (Arrangement sway)
//!     ├── flower-{i}       (Flower sway, base = ring position, yaw, -tilt)
//!     │   └── petal-*, center, leaf1, leaf2   (Block wobble)
//!     ├── vase             (static)
//!     │   └── vase-*       (Block wobble)
//!     └── heart-{i}        (Heart sway, base y = 0, scale 0.3)
//!         └── heart-block-*  (Block wobble)
//! ```

use crate::animation::{AnimationDriver, NodeKind};
use crate::generation::ArrangementState;
use crate::voxel::{BlockInstance, BlockSpec, VoxelEmitter};

use super::graph::SceneGraph;
use super::node::{LocalTransform, NodeContent, SceneNodeId};

/// A node whose transform is rewritten every tick.
#[derive(Clone, Debug)]
pub struct AnimatedNode {
    pub id: SceneNodeId,
    pub kind: NodeKind,
    /// Transform at rest, recorded when the node was built.
    pub base: LocalTransform,
}

/// Scene graph for one arrangement plus its animation bookkeeping.
pub struct ArrangementScene {
    graph: SceneGraph,
    arrangement: Option<SceneNodeId>,
    flowers: Vec<SceneNodeId>,
    hearts: Vec<SceneNodeId>,
    vase: Option<SceneNodeId>,
    animated: Vec<AnimatedNode>,
}

impl ArrangementScene {
    /// An empty scene with only the root node.
    pub fn empty() -> Self {
        Self {
            graph: SceneGraph::new(),
            arrangement: None,
            flowers: Vec::new(),
            hearts: Vec::new(),
            vase: None,
            animated: Vec::new(),
        }
    }

    /// Build a scene for `state`.
    pub fn build(state: &ArrangementState) -> Self {
        let mut scene = Self::empty();
        scene.rebuild(state);
        scene
    }

    /// Drop the current arrangement subtree and lay out `state` in its place.
    pub fn rebuild(&mut self, state: &ArrangementState) {
        if let Some(old) = self.arrangement.take() {
            self.graph.remove(old);
        }
        self.flowers.clear();
        self.hearts.clear();
        self.vase = None;
        self.animated.clear();

        let root = self.graph.root();
        let arrangement = self.graph.add_child(root, "arrangement", NodeContent::Group);
        self.track(arrangement, NodeKind::Arrangement, LocalTransform::identity());
        self.arrangement = Some(arrangement);

        for (i, flower) in state.flowers.iter().enumerate() {
            let base = LocalTransform {
                position: flower.position,
                rotation: flower.base_rotation(),
                scale: 1.0,
            };
            let id = self.add_group(arrangement, format!("flower-{i}"), NodeKind::Flower, base);
            self.add_blocks(id, &flower.blocks);
            self.flowers.push(id);
        }

        let vase = self.graph.add_child(arrangement, "vase", NodeContent::Group);
        self.add_blocks(vase, &state.vase.blocks);
        self.vase = Some(vase);

        for (i, heart) in state.hearts.iter().enumerate() {
            // The bob owns the heart's height; only the ring x/z carry over.
            let base = LocalTransform {
                position: heart.position.with_y(0.0),
                rotation: glam::Vec3::ZERO,
                scale: heart.scale,
            };
            let id = self.add_group(arrangement, format!("heart-{i}"), NodeKind::Heart, base);
            self.add_blocks(id, &heart.blocks);
            self.hearts.push(id);
        }

        log::debug!(
            "Built arrangement scene: {} nodes, {} animated",
            self.graph.node_count(),
            self.animated.len()
        );
    }

    fn add_group(
        &mut self,
        parent: SceneNodeId,
        name: String,
        kind: NodeKind,
        base: LocalTransform,
    ) -> SceneNodeId {
        let id = self.graph.add_child(parent, name, NodeContent::Group);
        self.track(id, kind, base);
        id
    }

    fn add_blocks(&mut self, parent: SceneNodeId, blocks: &[BlockSpec]) {
        for block in blocks {
            let base = LocalTransform::from_block(block);
            let id = self.graph.add_child(parent, block.key.clone(), NodeContent::Block(block.clone()));
            self.track(id, NodeKind::Block, base);
        }
    }

    fn track(&mut self, id: SceneNodeId, kind: NodeKind, base: LocalTransform) {
        self.graph.set_transform(id, base.clone());
        self.animated.push(AnimatedNode { id, kind, base });
    }

    /// Write every animated node's transform for scene time `t`.
    pub fn tick(&mut self, driver: &AnimationDriver, t: f32) {
        for node in &self.animated {
            self.graph.set_transform(node.id, driver.sample(node.kind, &node.base, t));
        }
        log::trace!("Animated {} nodes at t={:.3}", self.animated.len(), t);
    }

    /// Flatten to GPU instances using the current transforms.
    pub fn instances(&mut self, emitter: &VoxelEmitter) -> Vec<BlockInstance> {
        self.graph.flatten(emitter)
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn arrangement_node(&self) -> Option<SceneNodeId> {
        self.arrangement
    }

    pub fn flower_nodes(&self) -> &[SceneNodeId] {
        &self.flowers
    }

    pub fn heart_nodes(&self) -> &[SceneNodeId] {
        &self.hearts
    }

    pub fn vase_node(&self) -> Option<SceneNodeId> {
        self.vase
    }

    pub fn animated_nodes(&self) -> &[AnimatedNode] {
        &self.animated
    }

    /// Current local transform of a node.
    pub fn transform(&self, id: SceneNodeId) -> Option<&LocalTransform> {
        self.graph.get(id).map(|node| &node.local_transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generation::ArrangementComposer;
    use crate::palette::Season;
    use crate::voxel::Color;

    fn state(n: usize, seed: u64) -> ArrangementState {
        ArrangementComposer::default().compose(
            Season::Spring,
            &[Color::from_u32(0xFF69B4)],
            n,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_build_node_counts() {
        let state = state(5, 1);
        let scene = ArrangementScene::build(&state);
        let groups = 1 + 5 + 1 + 6; // arrangement, flowers, vase, hearts
        assert_eq!(scene.graph().node_count(), 1 + groups + state.block_count());
        assert_eq!(scene.flower_nodes().len(), 5);
        assert_eq!(scene.heart_nodes().len(), 6);
        // Every node but root and vase group animates
        assert_eq!(scene.animated_nodes().len(), groups - 1 + state.block_count());
    }

    #[test]
    fn test_instances_cover_every_block() {
        let state = state(10, 2);
        let mut scene = ArrangementScene::build(&state);
        let instances = scene.instances(&VoxelEmitter::default());
        assert_eq!(instances.len(), state.block_count());
    }

    #[test]
    fn test_rebuild_replaces_everything() {
        let mut scene = ArrangementScene::build(&state(20, 3));
        let old_flower = scene.flower_nodes()[0];
        let smaller = state(1, 4);
        scene.rebuild(&smaller);

        assert!(scene.graph().get(old_flower).is_none());
        assert_eq!(scene.flower_nodes().len(), 1);
        assert_eq!(scene.graph().children(scene.graph().root()).count(), 1);
        assert_eq!(scene.graph().node_count(), 1 + 1 + 1 + 1 + 6 + smaller.block_count());
    }

    #[test]
    fn test_flower_base_transform() {
        let state = state(5, 5);
        let scene = ArrangementScene::build(&state);
        for (flower, id) in state.flowers.iter().zip(scene.flower_nodes()) {
            let t = scene.transform(*id).unwrap();
            assert_eq!(t.position, flower.position);
            assert_eq!(t.rotation, Vec3::new(-flower.tilt_angle_x, flower.base_rotation_y, 0.0));
        }
    }

    #[test]
    fn test_tick_is_idempotent_for_same_time() {
        let state = state(5, 6);
        let driver = AnimationDriver::default();
        let mut scene = ArrangementScene::build(&state);

        scene.tick(&driver, 3.25);
        let first = scene.instances(&VoxelEmitter::default());
        scene.tick(&driver, 10.0);
        scene.tick(&driver, 3.25);
        let second = scene.instances(&VoxelEmitter::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_tick_applies_sway_on_top_of_base() {
        let state = state(5, 7);
        let driver = AnimationDriver::default();
        let mut scene = ArrangementScene::build(&state);
        let t = 1.2f32;
        scene.tick(&driver, t);

        let heart = &state.hearts[0];
        let heart_t = scene.transform(scene.heart_nodes()[0]).unwrap();
        assert_eq!(heart_t.position.x, heart.position.x);
        assert_eq!(heart_t.scale, 0.3);

        let arrangement = scene.transform(scene.arrangement_node().unwrap()).unwrap();
        assert!((arrangement.rotation.y - (t * 0.2).sin() * 0.1).abs() < 1e-6);

        let vase = scene.transform(scene.vase_node().unwrap()).unwrap();
        assert_eq!(*vase, LocalTransform::identity());
    }

    #[test]
    fn test_heart_height_follows_bob_only() {
        let state = state(5, 1);
        let driver = AnimationDriver::default();
        let mut scene = ArrangementScene::build(&state);
        for t in [0.0f32, 1.0, 3.0, 7.5] {
            scene.tick(&driver, t);
            for (heart, id) in state.hearts.iter().zip(scene.heart_nodes()) {
                let tr = scene.transform(*id).unwrap();
                assert!((tr.position.y - (t * 0.5).sin() * 0.1).abs() < 1e-6, "t={t}: y={}", tr.position.y);
                assert_eq!(tr.position.x, heart.position.x);
                assert_eq!(tr.position.z, heart.position.z);
            }
        }
    }

    #[test]
    fn test_heart_blocks_scaled_in_world() {
        let state = state(1, 8);
        let mut scene = ArrangementScene::build(&state);
        let instances = scene.instances(&VoxelEmitter::default());
        // Hearts are the last 6 * 8 instances; their unit cubes shrink to the heart scale
        for instance in &instances[instances.len() - 48..] {
            let (scale, _, _) = instance.model_matrix().to_scale_rotation_translation();
            assert!((scale - Vec3::splat(0.3)).length() < 1e-5);
        }
    }
}
