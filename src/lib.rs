/*!
A library for deciding upward planarity of directed graphs, and for computing
upward-planar embeddings, by reduction to boolean satisfiability.

A directed graph is *upward planar* when it can be drawn in the plane with
every edge a curve which strictly ascends from its source to its target and
no two edges crossing.
Deciding the property is NP-complete in general, and this library decides it
by encoding the existence of such a drawing as a conjunctive normal form
formula and handing the formula to a complete SAT solver.

The encoding works over a drawing with one node per horizontal level.
Three variable pools describe a drawing: an upward order of the nodes, a side
relation between edges whose vertical spans overlap, and --- when an
embedding is wanted rather than a yes-or-no answer --- a rotation order at
each node.
A handful of rule families tie the pools together so that models and
upward-planar drawings correspond exactly; see the
[encode](crate::procedures::encode) procedure for the details.

Two entry points are provided on an
[UpwardPlanarity](crate::context::UpwardPlanarity) structure:

- [test_upward_planarity](crate::context::UpwardPlanarity::test_upward_planarity)
  decides the property and optionally reports a witnessing node order,
  without touching the graph.
- [embed_upward_planar](crate::context::UpwardPlanarity::embed_upward_planar)
  additionally rewrites the rotation at every node of the graph to an
  upward-planar rotation system and designates the outer face.

Infeasibility is a result, not an error: both entry points return
`Ok(false)` for a graph which is not upward planar.

# Example

```rust
use upsat::context::UpwardPlanarity;
use upsat::structures::graph::Digraph;

// A diamond: two ascending paths from s to t.
let mut graph = Digraph::new();
let s = graph.add_node();
let a = graph.add_node();
let b = graph.add_node();
let t = graph.add_node();
graph.add_edge(s, a);
graph.add_edge(a, t);
graph.add_edge(s, b);
graph.add_edge(b, t);

let mut engine = UpwardPlanarity::default();
let embedded = engine.embed_upward_planar(&mut graph, None).unwrap();

assert!(embedded);
let outer = engine.outer_face().unwrap();
assert_eq!(outer.node, s);
```
*/

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod structures;
pub mod types;
