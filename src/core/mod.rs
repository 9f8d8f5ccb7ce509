//! Core state tree and transition data.
//!
//! This module contains the plain, immutable data the engine executes
//! against:
//! - State records in an arena, addressed by [`StateId`] handles
//! - The [`StateChart`] tree with its ancestry and least-common-ancestor
//!   walks
//! - The [`TransitionTable`] of `(source, event, target)` edges
//!
//! Everything here is read-only after construction and owned by the
//! embedding application; machines only borrow it.

mod chart;
mod state;
mod transition;

pub use chart::StateChart;
pub use state::{Action, ActionSet, StateId, StateNode, MAX_HIERARCHY_DEPTH};
pub use transition::{TransitionDef, TransitionTable};
