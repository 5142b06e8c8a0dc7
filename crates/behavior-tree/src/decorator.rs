//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or
//! execution. This module provides [`Inverter`] (NOT logic) and
//! [`AlwaysSucceed`] (failure suppression). Both leave a Running child
//! alone: suppressing or inverting an unfinished result would cut a
//! multi-tick behavior short.

use crate::{Behavior, Status};

/// Inverts the terminal result of its child behavior.
///
/// # Semantics
///
/// - Child `Success` → `Failure`
/// - Child `Failure` → `Success`
/// - Child `Running` → `Running` (the child still owns its next tick)
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<I, C> {
    child: Box<dyn Behavior<I, C>>,
}

impl<I: Copy, C> Inverter<I, C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<I, C>>) -> Self {
        Self { child }
    }
}

impl<I: Copy, C> Behavior<I, C> for Inverter<I, C> {
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        self.child.tick(agent, world, dt).invert()
    }
}

/// Converts a child's `Failure` into `Success`.
///
/// # Semantics
///
/// - Child `Success` → `Success`
/// - Child `Failure` → **still `Success`**
/// - Child `Running` → `Running`
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Guaranteed-success fallback branches at the end of a selector
pub struct AlwaysSucceed<I, C> {
    child: Box<dyn Behavior<I, C>>,
}

impl<I: Copy, C> AlwaysSucceed<I, C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<I, C>>) -> Self {
        Self { child }
    }
}

impl<I: Copy, C> Behavior<I, C> for AlwaysSucceed<I, C> {
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        match self.child.tick(agent, world, dt) {
            Status::Running => Status::Running,
            _ => Status::Success,
        }
    }
}
