//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both composites carry a resumption cursor. When a child returns
//! [`Status::Running`], the cursor stays on that child and the same child is
//! re-entered on the next tick, without re-evaluating its earlier siblings.
//! The cursor resets to the start only on a terminal (non-Running) result.

use crate::{Behavior, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right, starting at
/// its cursor:
/// - If a child returns `Failure`, the cursor resets and the sequence
///   returns `Failure` (the whole sequence aborts this tick)
/// - If a child returns `Running`, the cursor **stays on that child** and
///   the sequence returns `Running`
/// - If a child returns `Success`, the cursor advances and the next child
///   runs within the same tick
/// - If all children succeed, the cursor resets and the sequence returns
///   `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
///
/// An empty sequence returns `Success` (vacuous AND).
pub struct Sequence<I, C> {
    children: Vec<Box<dyn Behavior<I, C>>>,
    cursor: usize,
}

impl<I: Copy, C> Sequence<I, C> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<I, C>>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<I: Copy, C> Behavior<I, C> for Sequence<I, C> {
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(agent, world, dt) {
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure;
                }
                // Re-enter the same child next tick
                Status::Running => return Status::Running,
                Status::Success => self.cursor += 1,
            }
        }
        // All children succeeded (vacuously so when there are none)
        self.cursor = 0;
        Status::Success
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right, starting at
/// its cursor:
/// - If a child returns `Success`, the cursor resets and the selector
///   returns `Success` immediately
/// - If a child returns `Running`, the cursor **stays on that child** and
///   the selector returns `Running`
/// - If a child returns `Failure`, the cursor advances and the next child
///   runs within the same tick
/// - If all children fail, the cursor resets and the selector returns
///   `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. Child
/// order is the priority order: earlier children pre-empt later ones
/// whenever both would succeed.
///
/// An empty selector returns `Failure` (vacuous OR).
pub struct Selector<I, C> {
    children: Vec<Box<dyn Behavior<I, C>>>,
    cursor: usize,
}

impl<I: Copy, C> Selector<I, C> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior<I, C>>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<I: Copy, C> Behavior<I, C> for Selector<I, C> {
    fn tick(&mut self, agent: I, world: &mut C, dt: f32) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(agent, world, dt) {
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success;
                }
                // Re-enter the same child next tick
                Status::Running => return Status::Running,
                Status::Failure => self.cursor += 1,
            }
        }
        // All children failed (vacuously so when there are none)
        self.cursor = 0;
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{action, condition};

    struct TestWorld {
        value: i32,
        log: Vec<&'static str>,
    }

    impl TestWorld {
        fn new() -> Self {
            Self {
                value: 0,
                log: Vec::new(),
            }
        }
    }

    fn increment(label: &'static str) -> Box<dyn Behavior<u32, TestWorld>> {
        action(move |_, world: &mut TestWorld, _| {
            world.value += 1;
            world.log.push(label);
            Status::Success
        })
    }

    fn fail_always(label: &'static str) -> Box<dyn Behavior<u32, TestWorld>> {
        action(move |_, world: &mut TestWorld, _| {
            world.log.push(label);
            Status::Failure
        })
    }

    /// Returns Running a fixed number of times, then Success.
    fn running_for(ticks: u32) -> Box<dyn Behavior<u32, TestWorld>> {
        let mut remaining = ticks;
        action(move |_, world: &mut TestWorld, _| {
            if remaining > 0 {
                remaining -= 1;
                world.log.push("running");
                Status::Running
            } else {
                world.log.push("done");
                Status::Success
            }
        })
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![increment("a"), increment("b")]);

        let mut world = TestWorld::new();
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Success);
        assert_eq!(world.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            increment("a"),
            fail_always("b"),
            increment("c"), // Should not execute
        ]);

        let mut world = TestWorld::new();
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Failure);
        assert_eq!(world.log, vec!["a", "b"]);
    }

    #[test]
    fn sequence_resumes_running_child_across_ticks() {
        let mut seq = Sequence::new(vec![running_for(1), increment("b")]);

        let mut world = TestWorld::new();
        // Tick 1: first child is Running, cursor stays on it, B never runs
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Running);
        assert_eq!(world.log, vec!["running"]);

        // Tick 2: same child is re-entered, succeeds, and B runs within
        // the same call
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Success);
        assert_eq!(world.log, vec!["running", "done", "b"]);
    }

    #[test]
    fn sequence_does_not_reenter_committed_children() {
        let mut seq = Sequence::new(vec![increment("a"), running_for(1)]);

        let mut world = TestWorld::new();
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Running);
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Success);
        // "a" committed on tick 1 and was not re-evaluated on tick 2
        assert_eq!(world.log, vec!["a", "running", "done"]);
        assert_eq!(world.value, 1);
    }

    #[test]
    fn sequence_cursor_resets_after_terminal_result() {
        let mut seq = Sequence::new(vec![running_for(1), increment("b")]);

        let mut world = TestWorld::new();
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Running);
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Success);

        // After Success the cursor is back at the start; the first child
        // (now exhausted of Running ticks) runs again from scratch.
        world.log.clear();
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Success);
        assert_eq!(world.log, vec!["done", "b"]);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            fail_always("a"),
            increment("b"),
            increment("c"), // Should not execute
        ]);

        let mut world = TestWorld::new();
        assert_eq!(sel.tick(1, &mut world, 0.1), Status::Success);
        assert_eq!(world.log, vec!["a", "b"]);
    }

    #[test]
    fn selector_short_circuits_without_touching_later_children() {
        let mut sel = Selector::new(vec![
            condition(|_, _: &TestWorld, _| false),
            condition(|_, _: &TestWorld, _| true),
            increment("never"),
        ]);

        let mut world = TestWorld::new();
        assert_eq!(sel.tick(1, &mut world, 0.1), Status::Success);
        assert!(world.log.is_empty());
        assert_eq!(world.value, 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![fail_always("a"), fail_always("b")]);

        let mut world = TestWorld::new();
        assert_eq!(sel.tick(1, &mut world, 0.1), Status::Failure);
        assert_eq!(world.log, vec!["a", "b"]);
    }

    #[test]
    fn selector_holds_cursor_on_running_branch() {
        let mut sel = Selector::new(vec![fail_always("a"), running_for(1), increment("c")]);

        let mut world = TestWorld::new();
        assert_eq!(sel.tick(1, &mut world, 0.1), Status::Running);
        world.log.clear();

        // Tick 2: "a" is not re-evaluated; the Running branch completes and
        // pre-empts "c"
        assert_eq!(sel.tick(1, &mut world, 0.1), Status::Success);
        assert_eq!(world.log, vec!["done"]);
    }

    #[test]
    fn empty_sequence_is_vacuous_success() {
        let mut seq: Sequence<u32, TestWorld> = Sequence::new(vec![]);
        let mut world = TestWorld::new();
        assert_eq!(seq.tick(1, &mut world, 0.1), Status::Success);
    }

    #[test]
    fn empty_selector_is_vacuous_failure() {
        let mut sel: Selector<u32, TestWorld> = Selector::new(vec![]);
        let mut world = TestWorld::new();
        assert_eq!(sel.tick(1, &mut world, 0.1), Status::Failure);
    }
}
