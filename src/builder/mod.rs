//! Builder API for declaring state charts and transition tables.
//!
//! This module is where configuration correctness lives: the fluent
//! [`ChartBuilder`] checks the structural rules - single root, default
//! substates that are direct children, nesting within the depth bound -
//! once, at [`build`](ChartBuilder::build) time, so the engine can stay
//! validation-free at run time. Transition tables are declared with the
//! [`transition_table!`](crate::transition_table) macro or assembled by
//! hand.

pub mod chart;
pub mod error;
pub mod macros;

pub use chart::ChartBuilder;
pub use error::BuildError;
