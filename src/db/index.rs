/*!
Dense indices over the nodes and edges of a graph.

Graph handles are stable arena keys and in general are not contiguous --- a
graph which has seen removals has holes.
The encoder wants to address nodes and edges as integers in `[0, n)` and
`[0, m)`, so an invocation starts by building a [GraphIndex]: bijective maps
between handles and dense indices, endpoint tables in index space, and the
incident edges of every node.

Self loops are kept out of the incident lists.
No rotation constraint on a self loop is meaningful, as a graph containing
one is never upward planar; the upward rule rejects such graphs on its own.
*/

use slotmap::SecondaryMap;

use crate::misc::log::targets;
use crate::structures::graph::{Digraph, EdgeId, NodeId};

/// Dense indices for the nodes and edges of a graph, with endpoint and incidence tables.
#[derive(Debug)]
pub struct GraphIndex {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,

    node_index: SecondaryMap<NodeId, u32>,
    edge_index: SecondaryMap<EdgeId, u32>,

    sources: Vec<u32>,
    targets: Vec<u32>,

    incident: Vec<Vec<u32>>,
}

impl GraphIndex {
    /// Indexes the given graph.
    ///
    /// Linear in the size of the graph.
    pub fn build(graph: &Digraph) -> Self {
        let mut nodes = Vec::with_capacity(graph.node_count());
        let mut node_index = SecondaryMap::new();
        for node in graph.nodes() {
            node_index.insert(node, nodes.len() as u32);
            nodes.push(node);
        }

        let mut edges = Vec::with_capacity(graph.edge_count());
        let mut edge_index = SecondaryMap::new();
        let mut sources = Vec::with_capacity(graph.edge_count());
        let mut targets = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            edge_index.insert(edge, edges.len() as u32);
            edges.push(edge);
            let (source, target) = graph.endpoints(edge);
            sources.push(node_index[source]);
            targets.push(node_index[target]);
        }

        let mut incident = vec![Vec::new(); nodes.len()];
        for (v, &node) in nodes.iter().enumerate() {
            for &edge in graph.rotation(node) {
                let (source, target) = graph.endpoints(edge);
                if source == target {
                    continue;
                }
                incident[v].push(edge_index[edge]);
            }
        }

        log::debug!(
            target: targets::INDEX,
            "indexed {} nodes and {} edges",
            nodes.len(),
            edges.len()
        );

        GraphIndex {
            nodes,
            edges,
            node_index,
            edge_index,
            sources,
            targets,
            incident,
        }
    }

    /// The number of indexed nodes.
    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// The number of indexed edges.
    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }

    /// The handle of the node with the given index.
    pub fn node(&self, index: u32) -> NodeId {
        self.nodes[index as usize]
    }

    /// The handle of the edge with the given index.
    pub fn edge(&self, index: u32) -> EdgeId {
        self.edges[index as usize]
    }

    /// The index of a node handle.
    pub fn node_index(&self, node: NodeId) -> u32 {
        self.node_index[node]
    }

    /// The index of an edge handle.
    pub fn edge_index(&self, edge: EdgeId) -> u32 {
        self.edge_index[edge]
    }

    /// The index of the source node of the edge with the given index.
    pub fn source(&self, edge: u32) -> u32 {
        self.sources[edge as usize]
    }

    /// The index of the target node of the edge with the given index.
    pub fn target(&self, edge: u32) -> u32 {
        self.targets[edge as usize]
    }

    /// Whether the node with index `node` is the source of the edge with index `edge`.
    pub fn is_source(&self, node: u32, edge: u32) -> bool {
        self.sources[edge as usize] == node
    }

    /// The incident edges of the node with the given index, self loops excluded.
    pub fn incident(&self, node: u32) -> &[u32] {
        &self.incident[node as usize]
    }

    /// Whether two edges have no endpoint in common.
    pub fn independent(&self, e: u32, f: u32) -> bool {
        let (se, te) = (self.source(e), self.target(e));
        let (sf, tf) = (self.source(f), self.target(f));
        se != sf && se != tf && te != sf && te != tf
    }
}
