//! Nestate: a hierarchical state machine engine with a bounded event queue.
//!
//! Nestate executes hierarchical state charts for reactive and embedded
//! control software. States nest: a composite state names a default
//! substate, an event a leaf cannot handle is offered to its ancestors, and
//! every transition runs exit actions up to - and entry actions down from -
//! the least common ancestor of the states involved. Events arrive through
//! a fixed-capacity, non-blocking queue that sheds its oldest record when
//! full, so memory and latency stay bounded no matter how fast producers
//! dispatch.
//!
//! # Core Concepts
//!
//! - **StateChart**: an immutable, single-rooted tree of states owned by
//!   the application, built once with [`ChartBuilder`]
//! - **TransitionTable**: plain `(source, event, target)` edges, matched in
//!   declaration order
//! - **Machine**: borrows chart and table, owns the event queue and the
//!   current leaf; [`Machine::run`] drains queued events FIFO and then runs
//!   the current leaf's run action once
//! - **Control**: the handle entry/run/exit actions receive to dispatch
//!   follow-up events or request cooperative termination
//!
//! # Example
//!
//! ```rust
//! use nestate::{transition_table, ChartBuilder, Machine, Status};
//!
//! #[derive(Clone, Copy, PartialEq)]
//! enum Ev {
//!     Power,
//!     Play,
//! }
//!
//! let mut builder = ChartBuilder::<Ev, ()>::new();
//! let root = builder.state("ROOT");
//! let off = builder.child("OFF", root);
//! let on = builder.child("ON", root);
//! let paused = builder.child("PAUSED", on);
//! let playing = builder.child("PLAYING", on);
//! builder.default_substate(root, off);
//! builder.default_substate(on, paused);
//!
//! let table = transition_table! {
//!     off => Ev::Power => on,
//!     on => Ev::Power => off,
//!     paused => Ev::Play => playing,
//! };
//!
//! let chart = builder.build().unwrap();
//! let mut machine = Machine::new(&chart, &table, root, ());
//! assert_eq!(machine.state(), off);
//!
//! // Powering on lands on ON's default substate.
//! machine.dispatch(Ev::Power, ());
//! assert_eq!(machine.run(), Status::Running);
//! assert_eq!(machine.state(), paused);
//!
//! machine.dispatch(Ev::Play, ());
//! machine.run();
//! assert_eq!(machine.state(), playing);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod queue;

// Re-export commonly used types
pub use crate::builder::{BuildError, ChartBuilder};
pub use crate::core::{
    Action, ActionSet, StateChart, StateId, StateNode, TransitionDef, TransitionTable,
    MAX_HIERARCHY_DEPTH,
};
pub use crate::machine::{Control, Event, Machine, Status, DEFAULT_EVENT_CAPACITY};
pub use crate::queue::RingQueue;
