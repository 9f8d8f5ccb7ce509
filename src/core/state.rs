//! State identity, the action capability record, and the state node.

use crate::machine::Control;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Maximum root-to-leaf depth a chart may have.
///
/// The engine's entry-path buffer is sized by this bound; the builder
/// rejects charts that exceed it before they can reach the engine.
pub const MAX_HIERARCHY_DEPTH: usize = 8;

/// Stable handle to a state inside one [`StateChart`](crate::core::StateChart).
///
/// Handles are arena indexes issued by [`ChartBuilder`](crate::builder::ChartBuilder)
/// and are only meaningful against the chart that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(pub(crate) u32);

impl StateId {
    /// Position of this state in its chart's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

/// Callback invoked by the engine on state entry, exit, or per run cycle.
///
/// Actions receive a [`Control`] handle onto the running machine (dispatch,
/// terminate, queries) and the payload of the event being applied - for run
/// actions, the payload of the last event applied in the cycle. They execute
/// synchronously, inline, on the caller of `run()`.
pub type Action<E, P> = Arc<dyn Fn(&mut Control<E, P>, &P) + Send + Sync>;

/// The three independently optional callbacks a state may carry.
///
/// A plain capability record: any subset may be present, and absence is
/// simply skipped by the engine - there is no dispatch hierarchy behind it.
pub struct ActionSet<E, P> {
    /// Runs when the state is entered, ancestor-to-leaf order.
    pub entry: Option<Action<E, P>>,
    /// Runs once per `run()` cycle while this state is the current leaf.
    pub run: Option<Action<E, P>>,
    /// Runs when the state is exited, leaf-to-ancestor order.
    pub exit: Option<Action<E, P>>,
}

impl<E, P> Default for ActionSet<E, P> {
    fn default() -> Self {
        Self {
            entry: None,
            run: None,
            exit: None,
        }
    }
}

/// One immutable state record in a chart's arena.
///
/// A state with a default substate is *composite*: entering it re-resolves
/// the default chain down to a leaf every time, so the engine never records
/// a composite state as current.
pub struct StateNode<E, P> {
    pub(crate) name: &'static str,
    pub(crate) parent: Option<StateId>,
    pub(crate) default_substate: Option<StateId>,
    pub(crate) actions: ActionSet<E, P>,
}

impl<E, P> StateNode<E, P> {
    /// Display name of the state.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parent state, `None` for the root.
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Default substate entered when this state is a composite target.
    pub fn default_substate(&self) -> Option<StateId> {
        self.default_substate
    }

    /// Whether this state is a leaf (has no default substate).
    pub fn is_leaf(&self) -> bool {
        self.default_substate.is_none()
    }

    pub(crate) fn actions(&self) -> &ActionSet<E, P> {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_id_exposes_arena_index() {
        let id = StateId(3);
        assert_eq!(id.index(), 3);
    }

    #[test]
    fn state_id_debug_is_compact() {
        assert_eq!(format!("{:?}", StateId(7)), "StateId(7)");
    }

    #[test]
    fn default_action_set_is_empty() {
        let actions: ActionSet<u8, ()> = ActionSet::default();
        assert!(actions.entry.is_none());
        assert!(actions.run.is_none());
        assert!(actions.exit.is_none());
    }

    #[test]
    fn state_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&StateId(5)).unwrap();
        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId(5));
    }
}
