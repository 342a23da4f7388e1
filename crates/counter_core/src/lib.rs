//! Counter Core Runtime
//!
//! This crate provides the primitives the counter widget is built on:
//!
//! - **Reactive Signals**: Fine-grained signals, derived values and effects
//! - **Update Cycles**: Per-cycle change sets handed to a single post-update hook
//! - **Task Queue**: A single-threaded queue for deferred continuations
//! - **Color**: Linear RGBA color used by the theme and effect crates
//!
//! # Example
//!
//! ```rust
//! use counter_core::reactive::ReactiveGraph;
//!
//! let mut graph = ReactiveGraph::new();
//!
//! let count = graph.create_signal(0i32);
//! let max = graph.create_signal(10i32);
//!
//! let at_max = graph.create_derived(move |g| {
//!     g.get(count).unwrap_or(0) >= g.get(max).unwrap_or(0)
//! });
//!
//! graph.set(count, 10);
//! assert_eq!(graph.get_derived(at_max), Some(true));
//! ```

pub mod color;
pub mod reactive;
pub mod task;
pub mod update;

pub use color::Color;
pub use reactive::{Derived, DirtyFlag, Effect, ReactiveGraph, Signal};
pub use task::{Task, TaskQueue};
pub use update::PropertyValues;
