//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, AlwaysSucceed, Behavior, Condition, Inverter, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<I, C>(children: Vec<Box<dyn Behavior<I, C>>>) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
{
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<I, C>(children: Vec<Box<dyn Behavior<I, C>>>) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
{
    Box::new(Selector::new(children))
}

/// Creates an action node from a status-returning callable.
#[inline]
pub fn action<I, C, F>(callable: F) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
    F: FnMut(I, &mut C, f32) -> Status + 'static,
{
    Box::new(Action::new(callable))
}

/// Creates an action node from a boolean callable.
///
/// `true` maps to Success and `false` to Failure; boolean actions have no
/// Running capability.
#[inline]
pub fn action_from_bool<I, C, F>(mut callable: F) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
    F: FnMut(I, &mut C, f32) -> bool + 'static,
{
    Box::new(Action::new(move |agent: I, world: &mut C, dt: f32| {
        Status::from_bool(callable(agent, world, dt))
    }))
}

/// Creates a condition node from a predicate.
#[inline]
pub fn condition<I, C, P>(predicate: P) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
    P: FnMut(I, &C, f32) -> bool + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<I, C>(child: Box<dyn Behavior<I, C>>) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
{
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<I, C>(child: Box<dyn Behavior<I, C>>) -> Box<dyn Behavior<I, C>>
where
    I: Copy + 'static,
    C: 'static,
{
    Box::new(AlwaysSucceed::new(child))
}
