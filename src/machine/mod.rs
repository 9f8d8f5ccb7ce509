//! The state machine engine.
//!
//! A [`Machine`] borrows an application-owned
//! [`StateChart`](crate::core::StateChart) and
//! [`TransitionTable`](crate::core::TransitionTable), owns one bounded event
//! queue, and tracks the current leaf state. Producers enqueue events with
//! [`Machine::dispatch`]; a scheduler drives the engine by calling
//! [`Machine::run`] at whatever cadence the application requires. Each
//! `run` drains the queue in FIFO order - applying at most one transition
//! per event - and then fires the current leaf's run action exactly once.
//!
//! # Execution model
//!
//! Single-threaded and cooperative: the engine spawns no threads and never
//! blocks. Every entry, run, and exit callback executes synchronously,
//! inline, on the caller of `run`. `dispatch` may originate from a
//! different execution context (an interrupt handler feeding a main loop is
//! the typical arrangement), but nothing here is internally synchronized -
//! the embedder serializes access to the machine, which safe Rust's `&mut`
//! discipline already insists on.
//!
//! Termination is cooperative: [`Machine::terminate`] (or
//! [`Control::terminate`] from inside an action) marks the machine
//! Terminated, and the engine observes the mark at its checkpoints - the
//! top of `run` and after each fully applied transition - never in the
//! middle of an action.

mod control;
mod engine;
mod event;

pub use control::{Control, Status};
pub use engine::{Machine, DEFAULT_EVENT_CAPACITY};
pub use event::Event;
