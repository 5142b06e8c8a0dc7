//! Resumable behavior tree library for tick-driven game AI.
//!
//! This library provides a minimal, deterministic behavior tree
//! implementation for real-time simulations that advance in discrete ticks.
//!
//! - **Three-valued status**: [`Status::Running`] lets a node span multiple
//!   ticks; composites remember where they were and resume there on the
//!   next tick without re-evaluating already-committed siblings.
//! - **Single-threaded by design**: evaluation happens synchronously on the
//!   tick thread, so nodes carry no `Send`/`Sync` bounds.
//! - **Zero dependencies**: pure Rust with no external crates.
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success, Failure, or Running
//! - Composite nodes: [`Sequence`], [`Selector`] (cursor-based resumption)
//! - Leaf nodes: [`Action`], [`Condition`] (wrap externally supplied callables)
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - [`BehaviorTree`]: owns exactly one root node graph

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use leaf::{Action, Condition};
pub use status::Status;
pub use tree::BehaviorTree;
