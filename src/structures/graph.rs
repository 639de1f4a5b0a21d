/*!
Directed graphs with a mutable rotation system.

A [Digraph] stores nodes and edges in arenas with stable keys, so handles
remain valid across removals elsewhere in the graph.
Each node carries its incident edges --- incoming and outgoing --- in a list
whose order is the *rotation* at the node: the linearized cyclic order of the
edges around the node in a drawing.

A graph is built by the caller and read by the upward-planarity engine.
The only mutation the engine performs is [set_rotation](Digraph::set_rotation)
on every node after a successful embedding.

Stale keys, or rotations which do not mention exactly the incident edges, are
contract violations on the side of the caller and panic.
*/

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A stable handle to a node of a [Digraph].
    pub struct NodeId;

    /// A stable handle to an edge of a [Digraph].
    pub struct EdgeId;
}

#[derive(Clone, Debug, Default)]
struct Node {
    rotation: Vec<EdgeId>,
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    source: NodeId,
    target: NodeId,
}

/// A directed graph, possibly disconnected, with a rotation order at each node.
#[derive(Clone, Debug, Default)]
pub struct Digraph {
    nodes: SlotMap<NodeId, Node>,
    edges: SlotMap<EdgeId, Edge>,
}

impl Digraph {
    /// An empty graph.
    pub fn new() -> Self {
        Digraph::default()
    }

    /// Adds a fresh node and returns its handle.
    pub fn add_node(&mut self) -> NodeId {
        self.nodes.insert(Node::default())
    }

    /// Adds a directed edge from `source` to `target` and returns its handle.
    ///
    /// The edge is appended to the rotation of both endpoints.
    /// A self loop appears once in the rotation of its node.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        assert!(self.nodes.contains_key(source), "stale source node handle");
        assert!(self.nodes.contains_key(target), "stale target node handle");

        let edge = self.edges.insert(Edge { source, target });
        self.nodes[source].rotation.push(edge);
        if source != target {
            self.nodes[target].rotation.push(edge);
        }
        edge
    }

    /// Removes an edge, dropping it from the rotation of its endpoints.
    pub fn remove_edge(&mut self, edge: EdgeId) {
        let Edge { source, target } = self.edges.remove(edge).expect("stale edge handle");
        self.nodes[source].rotation.retain(|&e| e != edge);
        if source != target {
            self.nodes[target].rotation.retain(|&e| e != edge);
        }
    }

    /// Removes a node together with every incident edge.
    pub fn remove_node(&mut self, node: NodeId) {
        let incident = self
            .nodes
            .get(node)
            .expect("stale node handle")
            .rotation
            .clone();
        for edge in incident {
            self.remove_edge(edge);
        }
        self.nodes.remove(node);
    }

    /// The number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// An iterator over the node handles of the graph.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys()
    }

    /// An iterator over the edge handles of the graph.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys()
    }

    /// The source node of an edge.
    pub fn source(&self, edge: EdgeId) -> NodeId {
        self.edges[edge].source
    }

    /// The target node of an edge.
    pub fn target(&self, edge: EdgeId) -> NodeId {
        self.edges[edge].target
    }

    /// The endpoints of an edge, source first.
    pub fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        let Edge { source, target } = self.edges[edge];
        (source, target)
    }

    /// The incident edges of a node, in rotation order.
    pub fn rotation(&self, node: NodeId) -> &[EdgeId] {
        &self.nodes[node].rotation
    }

    /// Replaces the rotation of a node.
    ///
    /// The replacement must be a permutation of the current rotation.
    pub fn set_rotation(&mut self, node: NodeId, rotation: Vec<EdgeId>) {
        let current = &self.nodes[node].rotation;
        let mut sorted_current = current.clone();
        sorted_current.sort_unstable();
        let mut sorted_new = rotation.clone();
        sorted_new.sort_unstable();
        assert_eq!(
            sorted_current, sorted_new,
            "a rotation must mention exactly the incident edges of the node"
        );

        self.nodes[node].rotation = rotation;
    }

    /// The number of incident edges of a node.
    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes[node].rotation.len()
    }

    /// The outgoing edges of a node, in rotation order.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.nodes[node]
            .rotation
            .iter()
            .copied()
            .filter(move |&e| self.edges[e].source == node)
    }

    /// The incoming edges of a node, in rotation order.
    pub fn in_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.nodes[node]
            .rotation
            .iter()
            .copied()
            .filter(move |&e| self.edges[e].target == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_and_inspect() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let e = g.add_edge(u, v);

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.endpoints(e), (u, v));
        assert_eq!(g.rotation(u), &[e]);
        assert_eq!(g.rotation(v), &[e]);
        assert_eq!(g.out_edges(u).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.in_edges(v).collect::<Vec<_>>(), vec![e]);
    }

    #[test]
    fn removal_updates_rotations() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let w = g.add_node();
        let uv = g.add_edge(u, v);
        let uw = g.add_edge(u, w);

        g.remove_edge(uv);
        assert_eq!(g.rotation(u), &[uw]);
        assert_eq!(g.rotation(v), &[] as &[EdgeId]);

        g.remove_node(w);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn rotation_replacement() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let w = g.add_node();
        let uv = g.add_edge(u, v);
        let uw = g.add_edge(u, w);

        g.set_rotation(u, vec![uw, uv]);
        assert_eq!(g.rotation(u), &[uw, uv]);
    }

    #[test]
    #[should_panic]
    fn rotation_must_be_a_permutation() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let uv = g.add_edge(u, v);

        g.set_rotation(u, vec![uv, uv]);
    }

    #[test]
    fn self_loop_once_in_rotation() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let e = g.add_edge(u, u);
        assert_eq!(g.rotation(u), &[e]);
    }
}
