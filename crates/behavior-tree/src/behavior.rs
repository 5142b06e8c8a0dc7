//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the fundamental abstraction
//! for all behavior tree nodes. The trait is generic over the agent id type
//! `I` and the world type `C`, so the same node library works against any
//! entity store.

use crate::Status;

/// A behavior tree node that can be evaluated against a world, once per tick.
///
/// Takes `&mut self` because composite nodes carry resumption cursors: a
/// node that returned [`Status::Running`] is re-entered at the same point on
/// the next tick. This is also why a tree must never be shared between two
/// agents: resuming one agent's branch would corrupt another's progress.
/// Exclusive ownership of the tree enforces that rule at compile time.
///
/// There are no `Send`/`Sync` bounds: evaluation is single-threaded and
/// cooperative, and leaf callables may capture `Rc`-shared controller state.
pub trait Behavior<I: Copy, C> {
    /// Evaluate this node for the given agent against the given world.
    ///
    /// # Arguments
    ///
    /// * `agent` - Id of the entity this tree is deciding for.
    /// * `world` - Mutable world/entity store; leaves read and mutate it.
    /// * `dt` - Time elapsed since the previous tick, in seconds.
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<I, C>>` to also implement `Behavior<I, C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<I: Copy, C> Behavior<I, C> for Box<dyn Behavior<I, C>> {
    #[inline]
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        (**self).tick(agent, world, dt)
    }
}
