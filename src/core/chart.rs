//! The immutable state tree and the walks the engine performs on it.

use super::state::{StateId, StateNode};

/// An immutable, single-rooted tree of states.
///
/// The chart owns every [`StateNode`] in an arena addressed by [`StateId`]
/// handles; parent and default-substate links are handles into the same
/// arena, so the chart is the only owner and every other reference to a
/// state is lookup-only. Charts are built once via
/// [`ChartBuilder`](crate::builder::ChartBuilder), validated, and never
/// change for the lifetime of the machines that read them.
///
/// All methods are read-only queries; the chart performs no validation of
/// its own at query time.
pub struct StateChart<E, P> {
    pub(crate) nodes: Vec<StateNode<E, P>>,
}

impl<E, P> StateChart<E, P> {
    /// Look up a state record.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different chart's builder and is out
    /// of range here. Handles are only meaningful against their own chart.
    pub fn node(&self, id: StateId) -> &StateNode<E, P> {
        &self.nodes[id.index()]
    }

    /// Display name of a state.
    pub fn name(&self, id: StateId) -> &'static str {
        self.node(id).name
    }

    /// Parent of a state, `None` for the root.
    pub fn parent(&self, id: StateId) -> Option<StateId> {
        self.node(id).parent
    }

    /// The root state of the chart.
    pub fn root(&self) -> StateId {
        // The builder guarantees exactly one parentless node.
        let index = self
            .nodes
            .iter()
            .position(|node| node.parent.is_none())
            .unwrap_or(0);
        StateId(index as u32)
    }

    /// Number of states in the chart.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chart holds no states. Built charts never are.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate a state and its ancestors, nearest first, ending at the root.
    pub fn ancestry(&self, state: StateId) -> impl Iterator<Item = StateId> + '_ {
        std::iter::successors(Some(state), move |&s| self.parent(s))
    }

    /// Root-to-leaf distance of a state, counting the state itself.
    pub fn depth(&self, state: StateId) -> usize {
        self.ancestry(state).count()
    }

    /// Follow the default-substate chain of `state` down to a leaf.
    ///
    /// Returns `state` itself when it is already a leaf. Entering a
    /// composite state always re-resolves this chain; the engine keeps no
    /// memory of previously visited substates.
    pub fn resolve_leaf(&self, state: StateId) -> StateId {
        let mut leaf = state;
        while let Some(substate) = self.node(leaf).default_substate {
            leaf = substate;
        }
        leaf
    }

    /// Least common ancestor of two states.
    ///
    /// Symmetric two-cursor walk: both cursors climb one parent per step,
    /// and a cursor that runs off the top restarts at the *other* state's
    /// original node. The cursors meet at the least common ancestor within
    /// `2 * depth` steps regardless of how the two depths differ.
    ///
    /// `lca(a, a) == a`, and `lca(root, x) == root` for any `x`.
    pub fn least_common_ancestor(&self, a: StateId, b: StateId) -> StateId {
        let mut x = Some(a);
        let mut y = Some(b);
        while x != y {
            match (x, y) {
                (None, _) => x = Some(b),
                (_, None) => y = Some(a),
                (Some(sx), Some(sy)) => {
                    x = self.parent(sx);
                    y = self.parent(sy);
                }
            }
        }
        // The cursors meet on a node; a simultaneous run-off would need two
        // roots, which the builder rules out.
        x.unwrap_or(a)
    }
}
