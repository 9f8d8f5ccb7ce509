//! The queued event record.

/// One dispatched event: an application event id plus its payload.
///
/// Records have value semantics - they are moved into queue storage on
/// dispatch and moved out again when the drain phase of
/// [`Machine::run`](crate::machine::Machine::run) consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event<E, P> {
    /// Application-defined event identity, matched against transition edges.
    pub id: E,
    /// Opaque payload handed to the actions the event triggers.
    pub payload: P,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_carries_id_and_payload() {
        let event = Event {
            id: 4u8,
            payload: "data",
        };
        assert_eq!(event.id, 4);
        assert_eq!(event.payload, "data");
    }
}
