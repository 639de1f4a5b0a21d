/*!
The three pools of boolean decision variables.

- `tau` --- one variable per unordered pair of distinct nodes, read as "the
  first node precedes the second in the upward order".
- `sigma` --- one variable per unordered pair of edges sharing a node, read
  as "the first edge precedes the second in the rotation at the shared node".
- `mu` --- one variable per dominating pair and one auxiliary variable per
  independent pair, read as "the first edge runs left of the second
  throughout their common span".

Variables are sequential integers from 1 and are never shared between pools.
Each accessor hands out a [Literal] for an arbitrary orientation of its pair,
negating the canonical variable where the orientation is reversed.

The `sigma` accessor additionally takes the node at which the rotation is
read.
The rotation linearization places outgoing edges left to right followed by
incoming edges right to left --- the clockwise cyclic order cut at the left
horizontal --- so for a pair sharing two nodes the order at the target is the
reverse of the order at the source, and the accessor negates accordingly.
*/

use std::collections::HashMap;

use crate::db::dominance::DominanceTable;
use crate::db::index::GraphIndex;
use crate::structures::literal::{Literal, Variable};

#[derive(Clone, Copy, Debug)]
struct SigmaEntry {
    variable: Variable,
    /// The node index at which the positive polarity reads "smaller edge first".
    canonical: u32,
}

/// The variable pools of one invocation of the engine.
#[derive(Debug, Default)]
pub struct VariablePools {
    node_count: u32,
    tau: Vec<Variable>,
    sigma: HashMap<(u32, u32), SigmaEntry>,
    mu: HashMap<(u32, u32), Variable>,
    next: Variable,
}

impl VariablePools {
    /// Empty pools; nothing is allocated.
    pub fn new() -> Self {
        VariablePools {
            node_count: 0,
            tau: Vec::new(),
            sigma: HashMap::new(),
            mu: HashMap::new(),
            next: 1,
        }
    }

    fn fresh(&mut self) -> Variable {
        let variable = self.next;
        self.next += 1;
        variable
    }

    /// The total number of allocated variables, across all pools.
    pub fn count(&self) -> u32 {
        self.next - 1
    }

    /// Allocates one order variable per unordered pair of distinct nodes.
    pub fn allocate_tau(&mut self, node_count: u32) {
        debug_assert!(self.tau.is_empty());
        self.node_count = node_count;
        let n = node_count as usize;
        let pairs = n * n.saturating_sub(1) / 2;
        self.tau.reserve(pairs);
        for _ in 0..pairs {
            let variable = self.fresh();
            self.tau.push(variable);
        }
    }

    /// Allocates one rotation variable per unordered pair of edges sharing a node.
    ///
    /// Pairs involving a self loop are skipped; no rotation constraint on a
    /// self loop is meaningful.
    pub fn allocate_sigma(&mut self, index: &GraphIndex) {
        let m = index.edge_count();
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
                let canonical = if se == sf {
                    se
                } else if se == tf && te == sf {
                    se.min(te)
                } else if se == tf {
                    se
                } else if te == sf || te == tf {
                    te
                } else {
                    continue;
                };
                let variable = self.fresh();
                self.sigma.insert((e, f), SigmaEntry { variable, canonical });
            }
        }
    }

    /// Allocates one side variable per dominance entry, and one auxiliary
    /// side variable per independent pair of edges.
    pub fn allocate_mu(&mut self, index: &GraphIndex, dominance: &DominanceTable) {
        let m = index.edge_count();
        for e in 0..m {
            for dominator in dominance.dominators(e) {
                let variable = self.fresh();
                self.mu.insert((e, dominator.partner), variable);
            }
        }
        for e in 0..m {
            if index.source(e) == index.target(e) {
                continue;
            }
            for f in (e + 1)..m {
                if index.source(f) == index.target(f) {
                    continue;
                }
                if index.independent(e, f) {
                    let variable = self.fresh();
                    self.mu.insert((e, f), variable);
                }
            }
        }
    }

    /// The literal "node `i` precedes node `j` in the upward order".
    pub fn tau(&self, i: u32, j: u32) -> Literal {
        debug_assert_ne!(i, j);
        let (a, b, polarity) = if i < j { (i, j, true) } else { (j, i, false) };
        let n = self.node_count as usize;
        let (a, b) = (a as usize, b as usize);
        let position = a * n - a * (a + 1) / 2 + (b - a - 1);
        Literal::new(self.tau[position], polarity)
    }

    /// The literal "edge `e` precedes edge `f` in the rotation at node `at`".
    ///
    /// The two edges must share the node `at`.
    pub fn sigma_at(&self, index: &GraphIndex, at: u32, e: u32, f: u32) -> Literal {
        debug_assert_ne!(e, f);
        let (a, b) = if e < f { (e, f) } else { (f, e) };
        let entry = self
            .sigma
            .get(&(a, b))
            .copied()
            .expect("sigma variable missing for an edge pair sharing a node");
        debug_assert!(
            (index.source(e) == at || index.target(e) == at)
                && (index.source(f) == at || index.target(f) == at)
        );
        let polarity = (e == a) == (at == entry.canonical);
        Literal::new(entry.variable, polarity)
    }

    /// Whether a side variable exists for the pair.
    pub fn has_mu(&self, e: u32, f: u32) -> bool {
        let key = if e < f { (e, f) } else { (f, e) };
        self.mu.contains_key(&key)
    }

    /// The literal "edge `e` runs left of edge `f` throughout their common span".
    pub fn mu(&self, e: u32, f: u32) -> Literal {
        debug_assert_ne!(e, f);
        let (a, b) = if e < f { (e, f) } else { (f, e) };
        let variable = *self
            .mu
            .get(&(a, b))
            .expect("mu variable missing for an overlappable edge pair");
        Literal::new(variable, e == a)
    }

    /// An iterator over the allocated order variables.
    pub fn tau_variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.tau.iter().copied()
    }

    /// An iterator over the allocated side variables.
    pub fn mu_variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.mu.values().copied()
    }
}
