//! Fluent construction and validation of state charts.

use crate::builder::error::BuildError;
use crate::core::{ActionSet, StateChart, StateId, StateNode, MAX_HIERARCHY_DEPTH};
use crate::machine::Control;
use std::sync::Arc;

/// Builder for [`StateChart`]s.
///
/// States are declared root first, children after their parents - which is
/// also what makes parent cycles unrepresentable. Handles returned by
/// [`state`](Self::state) and [`child`](Self::child) are used to attach
/// default substates and actions, and later to declare transition edges and
/// the machine's entry state.
///
/// All structural rules are checked once, in [`build`](Self::build); the
/// engine itself never validates at run time.
///
/// # Example
///
/// ```rust
/// use nestate::ChartBuilder;
///
/// let mut builder = ChartBuilder::<u8, ()>::new();
/// let root = builder.state("ROOT");
/// let idle = builder.child("IDLE", root);
/// let busy = builder.child("BUSY", root);
/// builder.default_substate(root, idle);
/// builder.on_entry(busy, |_, _| println!("spinning up"));
///
/// let chart = builder.build().unwrap();
/// assert_eq!(chart.resolve_leaf(root), idle);
/// ```
pub struct ChartBuilder<E, P> {
    nodes: Vec<StateNode<E, P>>,
}

impl<E, P> ChartBuilder<E, P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Declare the root state.
    ///
    /// Exactly one root is allowed; declaring a second is reported by
    /// [`build`](Self::build) as [`BuildError::SecondRoot`].
    pub fn state(&mut self, name: &'static str) -> StateId {
        self.push(name, None)
    }

    /// Declare a child of an already-declared state.
    pub fn child(&mut self, name: &'static str, parent: StateId) -> StateId {
        self.push(name, Some(parent))
    }

    /// Mark `substate` as the default substate of `state`, making `state`
    /// composite: entering it descends to `substate` (and onward down the
    /// default chain) instead of resting on `state` itself.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range for this builder.
    pub fn default_substate(&mut self, state: StateId, substate: StateId) {
        self.nodes[state.index()].default_substate = Some(substate);
    }

    /// Attach an entry action to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range for this builder.
    pub fn on_entry<F>(&mut self, state: StateId, action: F)
    where
        F: Fn(&mut Control<E, P>, &P) + Send + Sync + 'static,
    {
        self.nodes[state.index()].actions.entry = Some(Arc::new(action));
    }

    /// Attach a run action to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range for this builder.
    pub fn on_run<F>(&mut self, state: StateId, action: F)
    where
        F: Fn(&mut Control<E, P>, &P) + Send + Sync + 'static,
    {
        self.nodes[state.index()].actions.run = Some(Arc::new(action));
    }

    /// Attach an exit action to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range for this builder.
    pub fn on_exit<F>(&mut self, state: StateId, action: F)
    where
        F: Fn(&mut Control<E, P>, &P) + Send + Sync + 'static,
    {
        self.nodes[state.index()].actions.exit = Some(Arc::new(action));
    }

    /// Validate the declared tree and produce the immutable chart.
    pub fn build(self) -> Result<StateChart<E, P>, BuildError> {
        if self.nodes.is_empty() {
            return Err(BuildError::EmptyChart);
        }

        let mut root: Option<&'static str> = None;
        for (index, node) in self.nodes.iter().enumerate() {
            match node.parent {
                None => {
                    if let Some(first) = root {
                        return Err(BuildError::SecondRoot {
                            first,
                            second: node.name,
                        });
                    }
                    root = Some(node.name);
                }
                // Children always follow their parents, so any link that
                // does not point backwards came from another builder.
                Some(parent) if parent.index() >= index => {
                    return Err(BuildError::ForeignHandle { state: node.name });
                }
                Some(_) => {}
            }
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if let Some(substate) = node.default_substate {
                let child = self
                    .nodes
                    .get(substate.index())
                    .ok_or(BuildError::ForeignHandle { state: node.name })?;
                if child.parent != Some(StateId(index as u32)) {
                    return Err(BuildError::DefaultSubstateNotChild {
                        state: node.name,
                        substate: child.name,
                    });
                }
            }
        }

        for node in &self.nodes {
            let mut depth = 1;
            let mut cursor = node.parent;
            while let Some(parent) = cursor {
                depth += 1;
                cursor = self.nodes[parent.index()].parent;
            }
            if depth > MAX_HIERARCHY_DEPTH {
                return Err(BuildError::DepthExceeded {
                    state: node.name,
                    depth,
                });
            }
        }

        Ok(StateChart { nodes: self.nodes })
    }

    fn push(&mut self, name: &'static str, parent: Option<StateId>) -> StateId {
        let id = StateId(self.nodes.len() as u32);
        self.nodes.push(StateNode {
            name,
            parent,
            default_substate: None,
            actions: ActionSet::default(),
        });
        id
    }
}

impl<E, P> Default for ChartBuilder<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_rejected() {
        let result = ChartBuilder::<u8, ()>::new().build();
        assert_eq!(result.err(), Some(BuildError::EmptyChart));
    }

    #[test]
    fn second_root_is_rejected() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        builder.state("FIRST");
        builder.state("SECOND");

        assert_eq!(
            builder.build().err(),
            Some(BuildError::SecondRoot {
                first: "FIRST",
                second: "SECOND",
            })
        );
    }

    #[test]
    fn default_substate_must_be_a_direct_child() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let root = builder.state("ROOT");
        let a = builder.child("A", root);
        let grandchild = builder.child("DEEP", a);
        builder.default_substate(root, grandchild);

        assert_eq!(
            builder.build().err(),
            Some(BuildError::DefaultSubstateNotChild {
                state: "ROOT",
                substate: "DEEP",
            })
        );
    }

    #[test]
    fn foreign_default_substate_handle_is_rejected() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let root = builder.state("ROOT");
        builder.default_substate(root, StateId(40));

        assert_eq!(
            builder.build().err(),
            Some(BuildError::ForeignHandle { state: "ROOT" })
        );
    }

    #[test]
    fn chart_deeper_than_the_bound_is_rejected() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let mut state = builder.state("TOP");
        for _ in 1..MAX_HIERARCHY_DEPTH {
            state = builder.child("LEVEL", state);
        }
        builder.child("TOO_DEEP", state);

        assert_eq!(
            builder.build().err(),
            Some(BuildError::DepthExceeded {
                state: "TOO_DEEP",
                depth: MAX_HIERARCHY_DEPTH + 1,
            })
        );
    }

    #[test]
    fn chart_at_exactly_the_depth_bound_builds() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let mut state = builder.state("TOP");
        for _ in 1..MAX_HIERARCHY_DEPTH {
            state = builder.child("LEVEL", state);
        }

        let chart = builder.build().unwrap();
        assert_eq!(chart.depth(state), MAX_HIERARCHY_DEPTH);
    }

    #[test]
    fn built_chart_carries_links_and_actions() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let root = builder.state("ROOT");
        let leaf = builder.child("LEAF", root);
        builder.default_substate(root, leaf);
        builder.on_entry(leaf, |_, _| {});
        builder.on_run(leaf, |_, _| {});
        builder.on_exit(leaf, |_, _| {});

        let chart = builder.build().unwrap();
        let node = chart.node(leaf);
        assert_eq!(node.name(), "LEAF");
        assert_eq!(node.parent(), Some(root));
        assert!(node.is_leaf());
        assert_eq!(chart.node(root).default_substate(), Some(leaf));
    }

    #[test]
    fn single_root_with_no_children_builds() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let root = builder.state("ONLY");
        let chart = builder.build().unwrap();
        assert_eq!(chart.root(), root);
        assert_eq!(chart.len(), 1);
    }
}
