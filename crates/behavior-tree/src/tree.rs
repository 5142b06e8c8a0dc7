//! Behavior tree wrapper.

use crate::{Behavior, Status};

/// A behavior tree: exactly one root node graph.
///
/// The tree has no state of its own beyond the node graph; all resumable
/// state (cursors) lives inside composite nodes. A tree is built once for
/// one agent's controller and lives as long as the controller does; never
/// share one tree between two agents.
pub struct BehaviorTree<I, C> {
    root: Box<dyn Behavior<I, C>>,
}

impl<I: Copy, C> BehaviorTree<I, C> {
    /// Creates a tree around the given root node.
    pub fn new(root: Box<dyn Behavior<I, C>>) -> Self {
        Self { root }
    }

    /// Evaluates the tree from the root, returning its status unmodified.
    pub fn execute(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        self.root.tick(agent, world, dt)
    }
}
