/*!
The dominance relation between edges.

Two edges dominate one another when they share an endpoint in the same role:
a common source, a common target, or --- for parallel edges --- both.
The relative rotation order of such a pair at the shared node decides which
of the two runs left of the other throughout the span the pair shares, and so
constrains whether the embedding can be planar.

The relation is symmetric in existence but each pair generates exactly one
table entry, held against the smaller-indexed edge, so clause generation
visits a pair once.

Pairs meeting head to tail (the target of one is the source of the other) and
anti-parallel pairs produce no entry.
In an upward drawing the vertical spans of such a pair cannot overlap --- for
an anti-parallel pair the upward rule is already violated --- so no side
relation between them is ever consulted.
*/

use crate::db::index::GraphIndex;
use crate::misc::log::targets;

/// The role-sharing shape of a dominating pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DominanceKind {
    /// The pair shares its source: both edges leave the pivot upwards.
    Fanout,

    /// The pair shares its target: both edges enter the pivot from below.
    Fanin,

    /// The pair shares both endpoints, in the same direction.
    Parallel,
}

/// One entry of the dominance table: a partner edge and the shared pivot node.
///
/// For a [Parallel](DominanceKind::Parallel) pair the pivot is the common source.
#[derive(Clone, Copy, Debug)]
pub struct Dominator {
    /// The index of the larger-indexed edge of the pair.
    pub partner: u32,

    /// The index of the shared node.
    pub pivot: u32,

    /// How the pair shares the pivot.
    pub kind: DominanceKind,
}

/// For every edge, the ordered list of edges dominating it.
#[derive(Debug)]
pub struct DominanceTable {
    entries: Vec<Vec<Dominator>>,
    len: usize,
}

impl DominanceTable {
    /// Computes the dominance table of an indexed graph.
    pub fn build(index: &GraphIndex) -> Self {
        let m = index.edge_count();
        let mut entries = vec![Vec::new(); m as usize];
        let mut len = 0;

        for e in 0..m {
            let (se, te) = (index.source(e), index.target(e));
            if se == te {
                continue;
            }
            for f in (e + 1)..m {
                let (sf, tf) = (index.source(f), index.target(f));
                if sf == tf {
                    continue;
                }

                let entry = if se == sf && te == tf {
                    Some(Dominator {
                        partner: f,
                        pivot: se,
                        kind: DominanceKind::Parallel,
                    })
                } else if se == tf && te == sf {
                    None
                } else if se == sf {
                    Some(Dominator {
                        partner: f,
                        pivot: se,
                        kind: DominanceKind::Fanout,
                    })
                } else if te == tf {
                    Some(Dominator {
                        partner: f,
                        pivot: te,
                        kind: DominanceKind::Fanin,
                    })
                } else {
                    None
                };

                if let Some(entry) = entry {
                    entries[e as usize].push(entry);
                    len += 1;
                }
            }
        }

        log::debug!(target: targets::DOMINANCE, "{len} dominating pairs");

        DominanceTable { entries, len }
    }

    /// The edges dominating the edge with the given index.
    pub fn dominators(&self, edge: u32) -> &[Dominator] {
        &self.entries[edge as usize]
    }

    /// The total number of dominating pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no pair dominates any other.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::graph::Digraph;

    #[test]
    fn classification() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let w = g.add_node();
        g.add_edge(u, v); // 0
        g.add_edge(u, w); // 1: shares source u with 0
        g.add_edge(v, w); // 2: head to tail with 0, shares target w with 1

        let index = GraphIndex::build(&g);
        let table = DominanceTable::build(&index);

        assert_eq!(table.len(), 2);

        let d0 = table.dominators(0);
        assert_eq!(d0.len(), 1);
        assert_eq!(d0[0].partner, 1);
        assert_eq!(d0[0].kind, DominanceKind::Fanout);
        assert_eq!(d0[0].pivot, index.node_index(u));

        let d1 = table.dominators(1);
        assert_eq!(d1.len(), 1);
        assert_eq!(d1[0].partner, 2);
        assert_eq!(d1[0].kind, DominanceKind::Fanin);
        assert_eq!(d1[0].pivot, index.node_index(w));
    }

    #[test]
    fn parallel_and_antiparallel() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        g.add_edge(u, v); // 0
        g.add_edge(u, v); // 1: parallel to 0
        g.add_edge(v, u); // 2: anti-parallel to both

        let index = GraphIndex::build(&g);
        let table = DominanceTable::build(&index);

        assert_eq!(table.len(), 1);
        assert_eq!(table.dominators(0)[0].kind, DominanceKind::Parallel);
        assert!(table.dominators(1).is_empty());
        assert!(table.dominators(2).is_empty());
    }
}
