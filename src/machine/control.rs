//! The handle actions receive onto the running machine.

use crate::core::StateId;
use crate::machine::Event;
use crate::queue::RingQueue;
use serde::{Deserialize, Serialize};

/// Meta-state of the engine, returned by [`Machine::run`](crate::machine::Machine::run).
///
/// `Terminated` is absorbing: once observed, no further events are drained
/// and no actions execute; every later `run` returns the stored value
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The machine is live and processing events.
    Running,
    /// Termination was requested with the given value.
    Terminated(i32),
}

impl Status {
    /// Whether this status is [`Status::Terminated`].
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated(_))
    }
}

/// Mutable view of a machine handed to entry, run, and exit actions.
///
/// This is the engine half an action may touch while the chart and table
/// stay borrowed read-only: the event queue, the termination mark, and the
/// current-state queries. Dispatching from inside an action is legitimate -
/// the new record joins the same drain in FIFO position.
///
/// Termination requested here is cooperative: the in-flight transition
/// still completes, and the engine stops at its next checkpoint.
pub struct Control<E, P> {
    pub(crate) queue: RingQueue<Event<E, P>>,
    pub(crate) current: StateId,
    pub(crate) current_data: P,
    pub(crate) status: Status,
}

impl<E, P> Control<E, P> {
    /// Enqueue an event for a later (or the ongoing) drain.
    ///
    /// Never blocks; on a full queue the oldest unread record is shed.
    pub fn dispatch(&mut self, event: E, payload: P) {
        self.queue.put(Event { id: event, payload });
    }

    /// Request cooperative termination with `value`.
    pub fn terminate(&mut self, value: i32) {
        self.status = Status::Terminated(value);
    }

    /// The current leaf state.
    ///
    /// During a transition this is the leaf the machine is leaving until
    /// the entry sequence completes, exactly as the actions observe it.
    pub fn state(&self) -> StateId {
        self.current
    }

    /// Number of events still queued.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Discard every queued, unprocessed event.
    pub fn flush_events(&mut self) {
        self.queue.flush();
    }
}
