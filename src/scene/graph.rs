//! Scene graph: groups and blocks in a parent/child tree.
//!
//! Groups carry the animated transforms (arrangement, flowers, hearts) and
//! blocks are leaves. [`SceneGraph::flatten`] resolves world matrices and emits
//! one [`BlockInstance`] per block, in depth-first child order.

use std::collections::HashMap;

use glam::Mat4;

use crate::voxel::{BlockInstance, VoxelEmitter};

use super::node::{LocalTransform, NodeContent, SceneNode, SceneNodeId};

/// Block hierarchy keyed by node id. Node 0 is the root group.
pub struct SceneGraph {
    nodes: HashMap<SceneNodeId, SceneNode>,
    next_id: u64,
}

impl SceneGraph {
    const ROOT: SceneNodeId = SceneNodeId(0);

    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(Self::ROOT, SceneNode::new(Self::ROOT, "root", NodeContent::Group));
        Self { nodes, next_id: 1 }
    }

    pub fn root(&self) -> SceneNodeId {
        Self::ROOT
    }

    /// Attach a new node as the last child of `parent`.
    pub fn add_child(
        &mut self,
        parent: SceneNodeId,
        name: impl Into<String>,
        content: NodeContent,
    ) -> SceneNodeId {
        let id = SceneNodeId(self.next_id);
        self.next_id += 1;

        let mut node = SceneNode::new(id, name, content);
        node.parent = Some(parent);
        self.nodes.insert(id, node);

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        id
    }

    /// Drop `id` and everything below it. The root is never removed.
    pub fn remove(&mut self, id: SceneNodeId) {
        if id == Self::ROOT {
            return;
        }
        let parent_id = match self.nodes.get(&id) {
            Some(node) => node.parent,
            None => return,
        };
        if let Some(parent) = parent_id.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != id);
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&next) {
                pending.extend(removed.children);
            }
        }
    }

    pub fn set_transform(&mut self, id: SceneNodeId, transform: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local_transform = transform;
        }
    }

    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn children(&self, id: SceneNodeId) -> impl Iterator<Item = SceneNodeId> + '_ {
        self.nodes
            .get(&id)
            .map_or(&[][..], |n| n.children.as_slice())
            .iter()
            .copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve world matrices and emit every block.
    ///
    /// Children are visited in insertion order, so blocks keep their generation order.
    pub fn flatten(&mut self, emitter: &VoxelEmitter) -> Vec<BlockInstance> {
        let mut out = Vec::new();
        // (node, parent world); children pushed in reverse to pop in order
        let mut stack = vec![(Self::ROOT, Mat4::IDENTITY)];

        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(&id) else {
                continue;
            };
            let world = parent_world * node.local_transform.to_mat4();
            node.world_transform = world;

            if let NodeContent::Block(block) = &node.content {
                out.push(emitter.emit_placed(world, block.size, block.color));
            }
            stack.extend(node.children.iter().rev().map(|&child| (child, world)));
        }
        out
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
