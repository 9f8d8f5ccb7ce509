//! Transition edges and the table the engine resolves them against.

use super::state::StateId;
use serde::{Deserialize, Serialize};

/// One `(source, event, target)` edge of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDef<E> {
    /// State the edge leaves from.
    pub source: StateId,
    /// Event that triggers the edge.
    pub event: E,
    /// State the edge leads to; may be composite, in which case entry
    /// re-resolves its default-substate chain.
    pub target: StateId,
}

/// An immutable, ordered list of transition edges.
///
/// Several edges may share a source state. Lookup is a linear scan in
/// declaration order - the first matching edge wins - behind this one
/// narrow method, so an implementation indexed by `(state, event)` could be
/// substituted without changing the engine's contract. For the small tables
/// of reactive control charts the scan is the simpler trade.
///
/// Tables are plain data and serialize cleanly for external tooling; the
/// ergonomic way to declare one is the
/// [`transition_table!`](crate::transition_table) macro.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable<E> {
    edges: Vec<TransitionDef<E>>,
}

impl<E> TransitionTable<E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Append an edge. Edges are matched in the order they were added.
    pub fn add(&mut self, source: StateId, event: E, target: StateId) {
        self.edges.push(TransitionDef {
            source,
            event,
            target,
        });
    }

    /// All edges in declaration order.
    pub fn edges(&self) -> &[TransitionDef<E>] {
        &self.edges
    }

    /// Number of edges in the table.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the table has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<E: Copy + PartialEq> TransitionTable<E> {
    /// Target of the first edge leaving `source` on `event`, if any.
    pub fn lookup(&self, source: StateId, event: E) -> Option<StateId> {
        self.edges
            .iter()
            .find(|edge| edge.source == source && edge.event == event)
            .map(|edge| edge.target)
    }
}

impl<E> FromIterator<TransitionDef<E>> for TransitionTable<E> {
    fn from_iter<I: IntoIterator<Item = TransitionDef<E>>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> StateId {
        StateId(raw)
    }

    #[test]
    fn lookup_finds_matching_edge() {
        let mut table = TransitionTable::new();
        table.add(id(1), 'p', id(2));
        table.add(id(2), 'q', id(1));

        assert_eq!(table.lookup(id(1), 'p'), Some(id(2)));
        assert_eq!(table.lookup(id(2), 'q'), Some(id(1)));
    }

    #[test]
    fn lookup_without_match_returns_none() {
        let mut table = TransitionTable::new();
        table.add(id(1), 'p', id(2));

        assert_eq!(table.lookup(id(1), 'x'), None);
        assert_eq!(table.lookup(id(3), 'p'), None);
    }

    #[test]
    fn first_matching_edge_wins() {
        let mut table = TransitionTable::new();
        table.add(id(1), 'p', id(2));
        table.add(id(1), 'p', id(3));

        assert_eq!(table.lookup(id(1), 'p'), Some(id(2)));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table: TransitionTable<char> = TransitionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup(id(1), 'p'), None);
    }

    #[test]
    fn table_collects_from_edge_iterator() {
        let table: TransitionTable<u8> = [
            TransitionDef {
                source: id(1),
                event: 7,
                target: id(2),
            },
            TransitionDef {
                source: id(2),
                event: 8,
                target: id(1),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(id(2), 8), Some(id(1)));
    }

    #[test]
    fn table_round_trips_through_json() {
        let mut table = TransitionTable::new();
        table.add(id(1), 4u8, id(2));
        table.add(id(2), 5u8, id(1));

        let json = serde_json::to_string(&table).unwrap();
        let back: TransitionTable<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
