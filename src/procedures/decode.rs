/*!
Model decoding.

Both pools to be read back are tournaments: `tau` over the nodes and, at
each node, `sigma` over the incident edges.
The encoding forces each tournament to be transitive, so the rank of an
element is exactly the number of elements the model places before it.
Decoding therefore counts predecessors and places by score, which needs no
comparison sort and cannot misbehave on a malformed model --- two elements
with the same score expose an intransitive tournament, reported as a
[ConsistencyError] rather than decoded into a wrong answer.
*/

use crate::db::index::GraphIndex;
use crate::db::variables::VariablePools;
use crate::misc::log::targets;
use crate::oracle::Model;
use crate::types::err::ConsistencyError;

/// An embedding read out of a model, in dense index space.
#[derive(Debug)]
pub struct Decoded {
    /// The rank of each node in the upward order.
    pub order: Vec<usize>,

    /// The rotation at each node, incident edges only.
    pub rotations: Vec<Vec<u32>>,

    /// The lowest edge-bearing node and the first edge of its rotation, or
    /// `None` for an edgeless graph.
    pub anchor: Option<(u32, u32)>,
}

impl Decoded {
    /// Whether the embedding is the canonical one of its mirror pair.
    ///
    /// Canonical means the rotation at the anchor starts no later, by edge
    /// index, than it ends.
    /// Mirroring a drawing reverses the anchor rotation, so exactly one of a
    /// mirror pair is canonical whenever the anchor has two or more incident
    /// edges.
    pub fn is_canonical(&self) -> bool {
        match self.anchor {
            None => true,
            Some((v, _)) => {
                let rotation = &self.rotations[v as usize];
                rotation[0] <= rotation[rotation.len() - 1]
            }
        }
    }
}

/// Ranks every node by its number of `tau` predecessors in the model.
///
/// With `verify` set, duplicate ranks are reported as
/// [OrderNotTotal](ConsistencyError::OrderNotTotal).
pub fn write_node_order(
    pools: &VariablePools,
    model: &Model,
    node_count: u32,
    verify: bool,
) -> Result<Vec<usize>, ConsistencyError> {
    let n = node_count as usize;
    let mut order = vec![0_usize; n];
    for i in 0..node_count {
        let mut rank = 0;
        for j in 0..node_count {
            if i != j && model.holds(pools.tau(j, i)) {
                rank += 1;
            }
        }
        order[i as usize] = rank;
    }

    if verify {
        let mut seen = vec![false; n];
        for &rank in &order {
            if seen[rank] {
                log::warn!(target: targets::DECODE, "node order is not total");
                return Err(ConsistencyError::OrderNotTotal);
            }
            seen[rank] = true;
        }
    }

    Ok(order)
}

/// Reads the rotation at node `v` out of the model, by `sigma` predecessor
/// counts over the incident edges.
///
/// With `verify` set, duplicate positions are reported as
/// [RotationNotTotal](ConsistencyError::RotationNotTotal).
pub fn sort_by_sigma(
    index: &GraphIndex,
    pools: &VariablePools,
    model: &Model,
    v: u32,
    verify: bool,
) -> Result<Vec<u32>, ConsistencyError> {
    let incident = index.incident(v);
    let mut scored: Vec<(usize, u32)> = incident
        .iter()
        .map(|&e| {
            let position = incident
                .iter()
                .filter(|&&f| f != e && model.holds(pools.sigma_at(index, v, f, e)))
                .count();
            (position, e)
        })
        .collect();

    if verify {
        let mut seen = vec![false; scored.len()];
        for &(position, _) in &scored {
            if seen[position] {
                log::warn!(target: targets::DECODE, "rotation at node {v} is not total");
                return Err(ConsistencyError::RotationNotTotal { node: v });
            }
            seen[position] = true;
        }
    }

    scored.sort_unstable();
    Ok(scored.into_iter().map(|(_, e)| e).collect())
}

/// Decodes a full embedding: the node order, the rotation at every node, and
/// the anchor designating the outer face.
pub fn embed_from_model(
    index: &GraphIndex,
    pools: &VariablePools,
    model: &Model,
    verify: bool,
) -> Result<Decoded, ConsistencyError> {
    let order = write_node_order(pools, model, index.node_count(), verify)?;

    let mut rotations = Vec::with_capacity(index.node_count() as usize);
    for v in 0..index.node_count() {
        rotations.push(sort_by_sigma(index, pools, model, v, verify)?);
    }

    let mut anchor = None;
    let mut lowest = usize::MAX;
    for v in 0..index.node_count() {
        let rotation = &rotations[v as usize];
        if !rotation.is_empty() && order[v as usize] < lowest {
            lowest = order[v as usize];
            anchor = Some((v, rotation[0]));
        }
    }

    log::debug!(target: targets::DECODE, "decoded embedding, anchor: {anchor:?}");

    Ok(Decoded {
        order,
        rotations,
        anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::graph::Digraph;

    fn path_pools() -> VariablePools {
        // Three nodes, tau variables 1..=3 for the pairs (0,1), (0,2), (1,2).
        let mut pools = VariablePools::new();
        pools.allocate_tau(3);
        pools
    }

    #[test]
    fn ranks_from_a_transitive_tournament() {
        let pools = path_pools();
        // 0 < 1, 0 < 2, 1 < 2.
        let model = Model::new(vec![false, true, true, true]);
        let order = write_node_order(&pools, &model, 3, true).unwrap();
        assert_eq!(order, vec![0, 1, 2]);

        // 2 < 1, 2 < 0, 1 < 0.
        let model = Model::new(vec![false, false, false, false]);
        let order = write_node_order(&pools, &model, 3, true).unwrap();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn an_intransitive_tournament_is_rejected() {
        let pools = path_pools();
        // 0 < 1, 1 < 2, 2 < 0: every node has exactly one predecessor.
        let model = Model::new(vec![false, true, false, true]);
        assert_eq!(
            write_node_order(&pools, &model, 3, true),
            Err(ConsistencyError::OrderNotTotal)
        );
    }

    #[test]
    fn rotation_readback() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let w = g.add_node();
        g.add_edge(u, v); // 0
        g.add_edge(u, w); // 1

        let index = GraphIndex::build(&g);
        let mut pools = VariablePools::new();
        pools.allocate_sigma(&index);
        assert_eq!(pools.count(), 1);

        let ui = index.node_index(u);
        // Variable 1 true: edge 0 before edge 1 at the fanout source.
        let model = Model::new(vec![false, true]);
        assert_eq!(sort_by_sigma(&index, &pools, &model, ui, true).unwrap(), vec![0, 1]);
        let model = Model::new(vec![false, false]);
        assert_eq!(sort_by_sigma(&index, &pools, &model, ui, true).unwrap(), vec![1, 0]);
    }
}
