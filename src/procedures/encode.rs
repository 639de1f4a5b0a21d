/*!
Clause generation.

The encoding describes an upward drawing with one node per level.
A model picks a total upward order of the nodes through the `tau` pool and,
for every pair of edges whose vertical spans can overlap, a side through the
`mu` pool --- which of the two runs left of the other throughout the shared
span.
Under the full-embedding strategy the `sigma` pool additionally linearizes
the rotation at each node as outgoing edges left to right followed by
incoming edges right to left.

The rules, in the order they are emitted:

- *upward* --- every edge points upwards: a unit clause per edge orienting
  its `tau` variable, and the empty clause for a self loop.
- *tau transitivity* --- the node order is a transitive tournament: two
  clauses per node triple forbidding both three-cycles.
- *sigma transitivity* (full embedding only) --- the rotation at each node is
  a transitive tournament, and outgoing edges precede incoming ones in the
  linearization.
- *planarity* --- the side relation is consistent: at every shared endpoint
  the rotation agrees with the side (full embedding only), and over every
  edge triple whose spans mutually overlap the sides form no cycle.
  The triple clauses carry `tau` guard literals which satisfy the clause
  whenever some pair of the spans is in fact disjoint.
- *tutte* --- an edge spanning strictly over a node passes the whole fan of
  that node on one side: guarded equivalence of the two sides, per node, per
  pair of incident edges, per spanning candidate.

Every clause is handed to the oracle as it is produced; nothing is retained.

A satisfying model of these rules is exactly a combinatorial upward-planar
drawing: levels from `tau`, a crossing-free left-to-right arrangement from
`mu`, rotations from `sigma`.
Conversely any upward-planar drawing induces a model, so unsatisfiability is
a certificate of non-planarity.
*/

use crate::context::{Engine, Phase, Strategy};
use crate::db::dominance::DominanceKind;
use crate::misc::log::targets;
use crate::oracle::{Model, Oracle};
use crate::structures::literal::Literal;

impl<O: Oracle> Engine<O> {
    /// Allocates the variable pools and emits every rule of the strategy.
    pub fn encode(&mut self) {
        debug_assert_eq!(self.phase, Phase::Init);

        self.pools.allocate_tau(self.index.node_count());
        if self.strategy == Strategy::FullEmbedding {
            self.pools.allocate_sigma(&self.index);
        }
        self.pools.allocate_mu(&self.index, &self.dominance);
        self.oracle.ensure_variables(self.pools.count());

        self.rule_upward();
        self.rule_tau_transitive();
        if self.strategy == Strategy::FullEmbedding {
            self.rule_sigma_transitive();
        }
        self.rule_planarity();
        self.rule_tutte();

        self.phase = Phase::Encoded;
        log::info!(
            target: targets::ENCODE,
            "encoded: {} variables, {} clauses",
            self.pools.count(),
            self.clauses
        );
    }

    /// A unit clause per edge, oriented source below target.
    ///
    /// A self loop produces the empty clause: no upward drawing exists.
    fn rule_upward(&mut self) {
        let index = &self.index;
        let pools = &self.pools;
        let oracle = &mut self.oracle;
        let mut emitted: u64 = 0;

        for e in 0..index.edge_count() {
            let (s, t) = (index.source(e), index.target(e));
            if s == t {
                oracle.add_clause(&[]);
            } else {
                oracle.add_clause(&[pools.tau(s, t)]);
            }
            emitted += 1;
        }

        self.clauses += emitted;
        log::trace!(target: targets::ENCODE, "upward: {emitted} clauses");
    }

    /// Forbids both three-cycles of every node triple, so the `tau`
    /// tournament is a total order.
    fn rule_tau_transitive(&mut self) {
        let index = &self.index;
        let pools = &self.pools;
        let oracle = &mut self.oracle;
        let mut emitted: u64 = 0;

        let n = index.node_count();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let ij = pools.tau(i, j);
                    let jk = pools.tau(j, k);
                    let ik = pools.tau(i, k);
                    oracle.add_clause(&[-ij, -jk, ik]);
                    oracle.add_clause(&[ij, jk, -ik]);
                    emitted += 2;
                }
            }
        }

        self.clauses += emitted;
        log::trace!(target: targets::ENCODE, "tau transitivity: {emitted} clauses");
    }

    /// Rotation shape at each node: outgoing edges precede incoming ones in
    /// the linearization, and the incident tournament is a total order.
    fn rule_sigma_transitive(&mut self) {
        let index = &self.index;
        let pools = &self.pools;
        let oracle = &mut self.oracle;
        let mut emitted: u64 = 0;

        for v in 0..index.node_count() {
            let incident = index.incident(v);

            for &e in incident {
                if !index.is_source(v, e) {
                    continue;
                }
                for &f in incident {
                    if e == f || index.is_source(v, f) {
                        continue;
                    }
                    oracle.add_clause(&[pools.sigma_at(index, v, e, f)]);
                    emitted += 1;
                }
            }

            for a in 0..incident.len() {
                for b in (a + 1)..incident.len() {
                    for c in (b + 1)..incident.len() {
                        let (e, f, g) = (incident[a], incident[b], incident[c]);
                        let ef = pools.sigma_at(index, v, e, f);
                        let fg = pools.sigma_at(index, v, f, g);
                        let eg = pools.sigma_at(index, v, e, g);
                        oracle.add_clause(&[-ef, -fg, eg]);
                        oracle.add_clause(&[ef, fg, -eg]);
                        emitted += 2;
                    }
                }
            }
        }

        self.clauses += emitted;
        log::trace!(target: targets::ENCODE, "sigma transitivity: {emitted} clauses");
    }

    /// Side consistency.
    ///
    /// For every dominating pair the rotation at the pivot fixes the side:
    /// at a common source or for parallel edges the orders coincide, at a
    /// common target the rotation is read right to left and the side flips.
    /// These links are only meaningful under the full-embedding strategy;
    /// without a `sigma` pool the side variables are free at the pivots.
    ///
    /// For every edge triple with pairwise side variables the sides must not
    /// form a cycle while all three spans mutually overlap.
    /// The guard literals each assert that one span ends before another
    /// begins, so the clause only bites when every pair overlaps.
    fn rule_planarity(&mut self) {
        let index = &self.index;
        let dominance = &self.dominance;
        let pools = &self.pools;
        let oracle = &mut self.oracle;
        let mut emitted: u64 = 0;

        if self.strategy == Strategy::FullEmbedding {
            for e in 0..index.edge_count() {
                for dominator in dominance.dominators(e) {
                    let f = dominator.partner;
                    let side = pools.mu(e, f);
                    let rotation = pools.sigma_at(index, dominator.pivot, e, f);
                    match dominator.kind {
                        DominanceKind::Fanout | DominanceKind::Parallel => {
                            oracle.add_clause(&[-rotation, side]);
                            oracle.add_clause(&[rotation, -side]);
                        }
                        DominanceKind::Fanin => {
                            oracle.add_clause(&[-rotation, -side]);
                            oracle.add_clause(&[rotation, side]);
                        }
                    }
                    emitted += 2;
                }
            }
        }

        let m = index.edge_count();
        for e in 0..m {
            for f in (e + 1)..m {
                if !pools.has_mu(e, f) {
                    continue;
                }
                for g in (f + 1)..m {
                    if !pools.has_mu(f, g) || !pools.has_mu(e, g) {
                        continue;
                    }

                    let mut guard = Vec::with_capacity(9);
                    for (i, j) in [(e, f), (f, e), (e, g), (g, e), (f, g), (g, f)] {
                        guard.push(pools.tau(index.target(j), index.source(i)));
                    }
                    guard.sort_unstable();
                    guard.dedup();

                    let ef = pools.mu(e, f);
                    let fg = pools.mu(f, g);
                    let eg = pools.mu(e, g);

                    let mut clause = guard.clone();
                    clause.extend([-ef, -fg, eg]);
                    oracle.add_clause(&clause);

                    let mut clause = guard;
                    clause.extend([ef, fg, -eg]);
                    oracle.add_clause(&clause);

                    emitted += 2;
                }
            }
        }

        self.clauses += emitted;
        log::trace!(target: targets::ENCODE, "planarity: {emitted} clauses");
    }

    /// Fan contiguity.
    ///
    /// An edge whose span runs strictly over a node cannot thread between
    /// the incident edges of that node, so its side against every incident
    /// edge is the same.
    /// The guard literals satisfy the clause whenever the span does not in
    /// fact cover the node.
    fn rule_tutte(&mut self) {
        let index = &self.index;
        let pools = &self.pools;
        let oracle = &mut self.oracle;
        let mut emitted: u64 = 0;

        let m = index.edge_count();
        for v in 0..index.node_count() {
            let incident = index.incident(v);
            if incident.len() < 2 {
                continue;
            }

            for g in 0..m {
                let (sg, tg) = (index.source(g), index.target(g));
                if sg == tg || sg == v || tg == v {
                    continue;
                }
                let below = pools.tau(v, sg);
                let above = pools.tau(tg, v);

                for a in 0..incident.len() {
                    for b in (a + 1)..incident.len() {
                        let (d1, d2) = (incident[a], incident[b]);
                        if !pools.has_mu(g, d1) || !pools.has_mu(g, d2) {
                            continue;
                        }
                        let first = pools.mu(g, d1);
                        let second = pools.mu(g, d2);
                        oracle.add_clause(&[below, above, -first, second]);
                        oracle.add_clause(&[below, above, first, -second]);
                        emitted += 2;
                    }
                }
            }
        }

        self.clauses += emitted;
        log::trace!(target: targets::ENCODE, "tutte: {emitted} clauses");
    }

    /// Pins the order and side pools to the values of a known model, the
    /// sides negated when `mirror` is set.
    ///
    /// The mirrored pinning describes the horizontal reflection of the
    /// drawing behind the model --- the same node order with every side and
    /// every same-direction rotation pair flipped --- so it is satisfiable
    /// whenever the model was genuine.
    pub(crate) fn rule_fixed(&mut self, model: &Model, mirror: bool) {
        let pools = &self.pools;
        let oracle = &mut self.oracle;
        let mut emitted: u64 = 0;

        for variable in pools.tau_variables() {
            oracle.add_clause(&[Literal::new(variable, model.value(variable))]);
            emitted += 1;
        }
        for variable in pools.mu_variables() {
            oracle.add_clause(&[Literal::new(variable, model.value(variable) != mirror)]);
            emitted += 1;
        }

        self.clauses += emitted;
        log::debug!(
            target: targets::ENCODE,
            "fixed {emitted} variables, mirrored: {mirror}"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::context::{Engine, Phase, Strategy};
    use crate::oracle::VarisatOracle;
    use crate::structures::graph::Digraph;

    #[test]
    fn single_edge_order_only() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        g.add_edge(u, v);

        let mut engine = Engine::new(
            &g,
            Strategy::OrderOnly,
            Config::default(),
            VarisatOracle::new(),
        );
        engine.encode();

        // One tau variable and its orienting unit clause; nothing else.
        assert_eq!(engine.number_of_variables(), 1);
        assert_eq!(engine.number_of_clauses(), 1);
        assert_eq!(engine.phase(), Phase::Encoded);
    }

    #[test]
    fn fanout_pair_order_only() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let w = g.add_node();
        g.add_edge(u, v);
        g.add_edge(u, w);

        let mut engine = Engine::new(
            &g,
            Strategy::OrderOnly,
            Config::default(),
            VarisatOracle::new(),
        );
        engine.encode();

        // Three tau variables, one mu variable for the fanout pair.
        assert_eq!(engine.number_of_variables(), 4);
        // Two upward units, two clauses for the single node triple.
        assert_eq!(engine.number_of_clauses(), 4);
    }
}
