//! Macros for ergonomic transition table declaration.

/// Declare a [`TransitionTable`](crate::core::TransitionTable) as a block of
/// `source => event => target` edges.
///
/// Edges are matched in declaration order: the first edge whose source and
/// event match wins.
///
/// # Example
///
/// ```
/// use nestate::{transition_table, ChartBuilder};
///
/// #[derive(Clone, Copy, PartialEq)]
/// enum Ev {
///     Power,
///     Play,
/// }
///
/// let mut builder = ChartBuilder::<Ev, ()>::new();
/// let root = builder.state("ROOT");
/// let off = builder.child("OFF", root);
/// let on = builder.child("ON", root);
/// builder.default_substate(root, off);
/// # let _chart = builder.build().unwrap();
///
/// let table = transition_table! {
///     off => Ev::Power => on,
///     on => Ev::Power => off,
///     on => Ev::Play => on,
/// };
/// assert_eq!(table.len(), 3);
/// ```
#[macro_export]
macro_rules! transition_table {
    ( $( $source:expr => $event:expr => $target:expr ),* $(,)? ) => {{
        let mut table = $crate::core::TransitionTable::new();
        $( table.add($source, $event, $target); )*
        table
    }};
}

#[cfg(test)]
mod tests {
    use crate::builder::ChartBuilder;
    use crate::core::TransitionTable;

    #[test]
    fn macro_builds_edges_in_order() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let root = builder.state("ROOT");
        let a = builder.child("A", root);
        let b = builder.child("B", root);

        let table = transition_table! {
            a => 1 => b,
            b => 2 => a,
        };

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(a, 1), Some(b));
        assert_eq!(table.lookup(b, 2), Some(a));
    }

    #[test]
    fn empty_invocation_yields_empty_table() {
        let table: TransitionTable<u8> = transition_table! {};
        assert!(table.is_empty());
    }

    #[test]
    fn trailing_comma_is_optional() {
        let mut builder = ChartBuilder::<u8, ()>::new();
        let root = builder.state("ROOT");
        let a = builder.child("A", root);

        let table = transition_table! { root => 1 => a };
        assert_eq!(table.lookup(root, 1), Some(a));
    }
}
