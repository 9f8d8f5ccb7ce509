//! Build errors for chart construction.

use crate::core::MAX_HIERARCHY_DEPTH;
use thiserror::Error;

/// Errors that can occur when building a state chart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("chart has no states. Declare a root with .state(name) before .build()")]
    EmptyChart,

    #[error("chart already has root '{first}'. Declare '{second}' with .child(name, parent)")]
    SecondRoot {
        first: &'static str,
        second: &'static str,
    },

    #[error("state '{state}' links to a handle that was not issued by this builder")]
    ForeignHandle { state: &'static str },

    #[error("default substate of '{state}' must be one of its direct children, but '{substate}' is not")]
    DefaultSubstateNotChild {
        state: &'static str,
        substate: &'static str,
    },

    #[error("state '{state}' sits at depth {depth}; charts may nest at most {max} levels", max = MAX_HIERARCHY_DEPTH)]
    DepthExceeded { state: &'static str, depth: usize },
}
