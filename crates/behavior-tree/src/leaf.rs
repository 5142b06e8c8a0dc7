//! Leaf behavior nodes.
//!
//! Leaves wrap externally supplied callables: [`Action`] performs work
//! against the world and reports a full [`Status`], while [`Condition`]
//! checks a read-only predicate and never returns Running.

use crate::{Behavior, Status};

/// Executes a callable against the world.
///
/// The callable receives `(agent, world, dt)` and returns a [`Status`], so
/// an action may report `Running` to spread its work over multiple ticks.
/// Callables that can only answer yes/no should go through
/// [`crate::builder::action_from_bool`], which maps the boolean onto
/// Success/Failure with no Running capability.
pub struct Action<F> {
    callable: F,
}

impl<F> Action<F> {
    /// Creates an action node around the given callable.
    pub fn new(callable: F) -> Self {
        Self { callable }
    }
}

impl<I, C, F> Behavior<I, C> for Action<F>
where
    I: Copy,
    F: FnMut(I, &mut C, f32) -> Status,
{
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        (self.callable)(agent, world, dt)
    }
}

/// Checks a predicate against the world.
///
/// The predicate receives `(agent, world, dt)` with read-only world access;
/// `true` maps to Success and `false` to Failure. A condition never returns
/// Running.
pub struct Condition<P> {
    predicate: P,
}

impl<P> Condition<P> {
    /// Creates a condition node around the given predicate.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<I, C, P> Behavior<I, C> for Condition<P>
where
    I: Copy,
    P: FnMut(I, &C, f32) -> bool,
{
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        Status::from_bool((self.predicate)(agent, &*world, dt))
    }
}
