/*!
The context --- the public entry points of the engine, and the per-invocation state behind them.

An [UpwardPlanarity] structure holds a configuration and the diagnostics of
the most recent invocation.
Each call to [test_upward_planarity](UpwardPlanarity::test_upward_planarity)
or [embed_upward_planar](UpwardPlanarity::embed_upward_planar) builds a fresh
[Engine] over the given graph --- indices, dominance table, variable pools,
formula --- runs it to a conclusion, and discards it.

# Example
```rust
use upsat::context::{NodeOrder, UpwardPlanarity};
use upsat::structures::graph::Digraph;

let mut graph = Digraph::new();
let u = graph.add_node();
let v = graph.add_node();
let w = graph.add_node();
graph.add_edge(u, v);
graph.add_edge(v, w);

let mut engine = UpwardPlanarity::default();
let mut order = NodeOrder::default();

let planar = engine.test_upward_planarity(&graph, Some(&mut order)).unwrap();
assert!(planar);
assert_eq!(order[u], 0);
assert_eq!(order[v], 1);
assert_eq!(order[w], 2);
```
*/

mod engine;
pub use engine::Engine;

use slotmap::SecondaryMap;

use crate::config::Config;
use crate::misc::log::targets;
use crate::oracle::VarisatOracle;
use crate::procedures::solve::Conclusion;
use crate::structures::graph::{Digraph, EdgeId, NodeId};
use crate::types::err::ErrorKind;

/// A caller-allocated per-node output array for the discovered upward order.
///
/// Written only on a positive result.
pub type NodeOrder = SecondaryMap<NodeId, usize>;

/// The designation of the outer face of an embedding.
///
/// `node` is the lowest edge-bearing node of the upward order and `edge` the
/// first edge of its rotation; the unbounded face lies to the left of `edge`
/// read away from `node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OuterFace {
    pub node: NodeId,
    pub edge: EdgeId,
}

/// The two encode/solve/decode strategies of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Certify existence of an upward-planar embedding and recover a node
    /// order, without pinning down a rotation system.
    OrderOnly,

    /// The complete rule set: node order, rotation system, outer face.
    FullEmbedding,
}

/// The phase of an invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fresh; nothing encoded.
    Init,

    /// The formula is built.
    Encoded,

    /// The oracle has answered.
    Solved,

    /// A model has been decoded into order and rotations.
    Decoded,

    /// A re-solve under fixing clauses is in flight.
    Fixing,

    /// The embedding is ready.
    Resolved,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "Init"),
            Self::Encoded => write!(f, "Encoded"),
            Self::Solved => write!(f, "Solved"),
            Self::Decoded => write!(f, "Decoded"),
            Self::Fixing => write!(f, "Fixing"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// The upward-planarity engine.
#[derive(Debug, Default)]
pub struct UpwardPlanarity {
    config: Config,
    variables: u32,
    clauses: u64,
    outer: Option<OuterFace>,
}

impl UpwardPlanarity {
    /// An engine with the given configuration.
    pub fn new(config: Config) -> Self {
        UpwardPlanarity {
            config,
            variables: 0,
            clauses: 0,
            outer: None,
        }
    }

    /// Decides whether the graph admits an upward-planar embedding.
    ///
    /// Runs the order-only strategy.
    /// On a positive result the discovered upward order is written to
    /// `node_order`, when supplied.
    /// The graph is not mutated.
    pub fn test_upward_planarity(
        &mut self,
        graph: &Digraph,
        node_order: Option<&mut NodeOrder>,
    ) -> Result<bool, ErrorKind> {
        let mut engine = Engine::new(graph, Strategy::OrderOnly, self.config, VarisatOracle::new());
        let conclusion = engine.run();
        self.variables = engine.number_of_variables();
        self.clauses = engine.number_of_clauses();
        self.outer = None;

        match conclusion? {
            Conclusion::NotUpwardPlanar => Ok(false),

            Conclusion::UpwardPlanar(certificate) => {
                if let Some(order) = node_order {
                    for (node, rank) in certificate.order {
                        order.insert(node, rank);
                    }
                }
                Ok(true)
            }
        }
    }

    /// Computes an upward-planar embedding, if one exists.
    ///
    /// Runs the full-embedding strategy.
    /// On a positive result the rotation of every node is rewritten in place,
    /// the [outer face](UpwardPlanarity::outer_face) is recorded, and the
    /// discovered upward order is written to `node_order`, when supplied.
    /// On a negative result the graph is left structurally unchanged.
    pub fn embed_upward_planar(
        &mut self,
        graph: &mut Digraph,
        node_order: Option<&mut NodeOrder>,
    ) -> Result<bool, ErrorKind> {
        let conclusion = {
            let mut engine = Engine::new(
                graph,
                Strategy::FullEmbedding,
                self.config,
                VarisatOracle::new(),
            );
            let conclusion = engine.run();
            self.variables = engine.number_of_variables();
            self.clauses = engine.number_of_clauses();
            conclusion
        };
        self.outer = None;

        match conclusion? {
            Conclusion::NotUpwardPlanar => Ok(false),

            Conclusion::UpwardPlanar(certificate) => {
                for (node, rotation) in certificate.rotations {
                    graph.set_rotation(node, rotation);
                }
                self.outer = certificate.outer;
                if let Some(order) = node_order {
                    for (node, rank) in certificate.order {
                        order.insert(node, rank);
                    }
                }
                log::info!(target: targets::DRIVER, "embedding ready");
                Ok(true)
            }
        }
    }

    /// The outer face recorded by the most recent successful embed.
    pub fn outer_face(&self) -> Option<OuterFace> {
        self.outer
    }

    /// The number of variables of the most recently built formula.
    pub fn number_of_variables(&self) -> u32 {
        self.variables
    }

    /// The number of clauses of the most recently built formula.
    ///
    /// Clause counts can be cubic or worse in the size of the graph, hence
    /// the wider type.
    pub fn number_of_clauses(&self) -> u64 {
        self.clauses
    }

    /// Discards all derived state and diagnostics.
    ///
    /// Safe to call at any time, including after a completed or failed call.
    pub fn reset(&mut self) {
        self.variables = 0;
        self.clauses = 0;
        self.outer = None;
    }
}
