//! Transition resolution and the run cycle.

use crate::core::{StateChart, StateId, TransitionTable, MAX_HIERARCHY_DEPTH};
use crate::machine::{Control, Status};
use crate::queue::RingQueue;

/// Event queue capacity used by [`Machine::new`].
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// A hierarchical state machine executing against a borrowed chart.
///
/// The machine holds the current leaf state, the payload of the most
/// recently applied event, a termination mark, and one owned event queue.
/// Chart and transition table stay owned by the application; the machine
/// only reads them.
///
/// # Example
///
/// ```rust
/// use nestate::{ChartBuilder, Machine, Status, TransitionTable};
///
/// #[derive(Clone, Copy, PartialEq)]
/// enum Ev {
///     Power,
/// }
///
/// let mut builder = ChartBuilder::<Ev, ()>::new();
/// let root = builder.state("ROOT");
/// let off = builder.child("OFF", root);
/// let on = builder.child("ON", root);
/// builder.default_substate(root, off);
/// let chart = builder.build().unwrap();
///
/// let mut table = TransitionTable::new();
/// table.add(off, Ev::Power, on);
/// table.add(on, Ev::Power, off);
///
/// let mut machine = Machine::new(&chart, &table, root, ());
/// assert_eq!(machine.state(), off);
///
/// machine.dispatch(Ev::Power, ());
/// assert_eq!(machine.run(), Status::Running);
/// assert_eq!(machine.state(), on);
/// ```
pub struct Machine<'a, E, P> {
    chart: &'a StateChart<E, P>,
    table: &'a TransitionTable<E>,
    control: Control<E, P>,
}

impl<'a, E: Copy + PartialEq, P: Clone> Machine<'a, E, P> {
    /// Create a machine with the default event queue capacity
    /// ([`DEFAULT_EVENT_CAPACITY`]).
    ///
    /// Resolves `entry_state`'s default-substate chain down to a leaf and
    /// runs the entry actions of every state on the path from `entry_state`
    /// to that leaf, root-to-leaf order, `entry_state` included. The machine
    /// starts Running with an empty queue and the resolved leaf as current.
    pub fn new(
        chart: &'a StateChart<E, P>,
        table: &'a TransitionTable<E>,
        entry_state: StateId,
        initial_payload: P,
    ) -> Self {
        Self::with_capacity(chart, table, entry_state, initial_payload, DEFAULT_EVENT_CAPACITY)
    }

    /// Create a machine with an explicit event queue capacity.
    ///
    /// # Panics
    ///
    /// Panics if `queue_capacity` is zero.
    pub fn with_capacity(
        chart: &'a StateChart<E, P>,
        table: &'a TransitionTable<E>,
        entry_state: StateId,
        initial_payload: P,
        queue_capacity: usize,
    ) -> Self {
        let mut machine = Self {
            chart,
            table,
            control: Control {
                queue: RingQueue::new(queue_capacity),
                current: entry_state,
                current_data: initial_payload,
                status: Status::Running,
            },
        };
        let payload = machine.control.current_data.clone();
        machine.run_entries(chart.parent(entry_state), entry_state, &payload);
        machine
    }

    /// Enqueue `(event, payload)` for the next drain.
    ///
    /// Touches nothing but the queue, so it is cheap enough for any
    /// producer context the application considers legitimate. Never blocks;
    /// a full queue sheds its oldest unread record. Dispatched events are
    /// best-effort hints - an event no state handles is later discarded
    /// without notice.
    pub fn dispatch(&mut self, event: E, payload: P) {
        self.control.dispatch(event, payload);
    }

    /// Drain the queue, then run the current leaf's run action once.
    ///
    /// Already-terminated machines return the stored value immediately.
    /// Otherwise every queued event is processed in FIFO order; each one
    /// resolves against the current leaf's ancestor chain (nearest edge
    /// wins, at most one transition per event, unmatched events are
    /// dropped). If an action requests termination, the in-flight
    /// transition completes and `run` returns the stored value without
    /// touching the remaining queue or the run action.
    ///
    /// The run action receives the payload of the last event applied this
    /// cycle - not necessarily one aimed at the state that ended up
    /// current.
    pub fn run(&mut self) -> Status {
        if let Status::Terminated(value) = self.control.status {
            return Status::Terminated(value);
        }

        if let Some(value) = self.drain_events() {
            return Status::Terminated(value);
        }

        let action = self.chart.node(self.control.current).actions().run.clone();
        if let Some(action) = action {
            let payload = self.control.current_data.clone();
            action(&mut self.control, &payload);
        }

        Status::Running
    }

    /// The current leaf state. Pure query.
    pub fn state(&self) -> StateId {
        self.control.state()
    }

    /// The chart this machine executes against.
    pub fn chart(&self) -> &'a StateChart<E, P> {
        self.chart
    }

    /// Request cooperative termination with `value`.
    ///
    /// Observed at the top of the next `run` and after each fully applied
    /// transition; never preempts an action already executing.
    pub fn terminate(&mut self, value: i32) {
        self.control.terminate(value);
    }

    /// Number of dispatched events not yet processed.
    pub fn pending_events(&self) -> usize {
        self.control.pending_events()
    }

    /// Discard every queued, unprocessed event.
    pub fn flush_events(&mut self) {
        self.control.flush_events();
    }

    fn drain_events(&mut self) -> Option<i32> {
        while let Some(event) = self.control.queue.get() {
            let Some(target) = self.resolve_target(event.id) else {
                // Unhandled anywhere on the ancestor chain: dropped, by design.
                continue;
            };

            let lca = self
                .chart
                .least_common_ancestor(self.control.current, target);
            self.run_exits(lca, &event.payload);
            self.run_entries(Some(lca), target, &event.payload);
            self.control.current_data = event.payload;

            if let Status::Terminated(value) = self.control.status {
                return Some(value);
            }
        }
        None
    }

    /// First target reachable for `event`, walking the ancestor chain from
    /// the current leaf upward.
    fn resolve_target(&self, event: E) -> Option<StateId> {
        self.chart
            .ancestry(self.control.current)
            .find_map(|state| self.table.lookup(state, event))
    }

    /// Run exit actions from the current leaf up to `lca`, exclusive,
    /// nearest first.
    fn run_exits(&mut self, lca: StateId, payload: &P) {
        let chart = self.chart;
        let mut cursor = Some(self.control.current);
        while let Some(state) = cursor {
            if state == lca {
                break;
            }
            if let Some(action) = chart.node(state).actions().exit.clone() {
                action(&mut self.control, payload);
            }
            cursor = chart.parent(state);
        }
    }

    /// Resolve `target`'s default-substate chain to a leaf, run entry
    /// actions from `boundary` (exclusive) down to that leaf, and make the
    /// leaf current.
    ///
    /// The path buffer is bounded by [`MAX_HIERARCHY_DEPTH`]; states beyond
    /// the bound are silently left out of the entry sequence. The builder
    /// refuses charts that deep, so a validated chart never truncates.
    fn run_entries(&mut self, boundary: Option<StateId>, target: StateId, payload: &P) {
        let chart = self.chart;
        let leaf = chart.resolve_leaf(target);

        let mut path = [leaf; MAX_HIERARCHY_DEPTH];
        let mut depth = 0;
        let mut cursor = Some(leaf);
        while let Some(state) = cursor {
            if Some(state) == boundary || depth == MAX_HIERARCHY_DEPTH {
                break;
            }
            path[depth] = state;
            depth += 1;
            cursor = chart.parent(state);
        }

        for state in path[..depth].iter().rev() {
            if let Some(action) = chart.node(*state).actions().entry.clone() {
                action(&mut self.control, payload);
            }
        }

        self.control.current = leaf;
    }
}
