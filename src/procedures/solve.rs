/*!
The solve driver.

[run](crate::context::Engine::run) walks an engine through its phases:
encode, hand the formula to the oracle, and on a model decode what the
strategy asked for.

Under the full-embedding strategy the oracle is free to return either member
of a mirror pair of drawings.
When fixing is enabled and the first model decodes to the non-canonical
member, the driver pins the order and mirrored side pools on top of the
existing formula and solves once more; the second model is the reflection of
the first and decodes to the canonical member.
A second solve coming back unsatisfiable contradicts the first model and is
reported as a consistency error.
*/

use crate::context::{Engine, OuterFace, Phase, Strategy};
use crate::misc::log::targets;
use crate::oracle::{Oracle, Outcome};
use crate::procedures::decode;
use crate::structures::graph::{EdgeId, NodeId};
use crate::types::err::{ConsistencyError, ErrorKind};

/// What a finished run concluded about the graph.
#[derive(Debug)]
pub enum Conclusion {
    /// The graph admits no upward-planar embedding.
    NotUpwardPlanar,

    /// The graph is upward planar, with the witness the strategy produces.
    UpwardPlanar(Certificate),
}

/// The decoded witness of a positive conclusion, in graph handles.
#[derive(Debug)]
pub struct Certificate {
    /// Every node with its rank in the upward order.
    pub order: Vec<(NodeId, usize)>,

    /// Every node with its rotation.
    ///
    /// Empty under the order-only strategy.
    pub rotations: Vec<(NodeId, Vec<EdgeId>)>,

    /// The outer face designation, under the full-embedding strategy.
    pub outer: Option<OuterFace>,
}

impl<O: Oracle> Engine<O> {
    /// Runs the engine to a conclusion.
    pub fn run(&mut self) -> Result<Conclusion, ErrorKind> {
        self.encode();

        let outcome = self.oracle.solve()?;
        self.phase = Phase::Solved;

        let model = match outcome {
            Outcome::Unsatisfiable => {
                log::info!(target: targets::DRIVER, "not upward planar");
                return Ok(Conclusion::NotUpwardPlanar);
            }
            Outcome::Satisfiable(model) => model,
        };

        let verify = self.config.verify_models;

        match self.strategy {
            Strategy::OrderOnly => {
                let order =
                    decode::write_node_order(&self.pools, &model, self.index.node_count(), verify)?;
                self.phase = Phase::Resolved;
                log::info!(target: targets::DRIVER, "upward planar");
                Ok(Conclusion::UpwardPlanar(self.certificate(
                    order,
                    Vec::new(),
                    None,
                )))
            }

            Strategy::FullEmbedding => {
                let mut decoded =
                    decode::embed_from_model(&self.index, &self.pools, &model, verify)?;
                self.phase = Phase::Decoded;

                if self.config.fix_embedding && !decoded.is_canonical() {
                    self.phase = Phase::Fixing;
                    log::debug!(target: targets::DRIVER, "model is not canonical, re-solving mirrored");
                    self.rule_fixed(&model, true);

                    match self.oracle.solve()? {
                        Outcome::Unsatisfiable => {
                            return Err(ConsistencyError::FixingUnsatisfiable.into());
                        }
                        Outcome::Satisfiable(mirrored) => {
                            decoded = decode::embed_from_model(
                                &self.index,
                                &self.pools,
                                &mirrored,
                                verify,
                            )?;
                            debug_assert!(decoded.is_canonical());
                        }
                    }
                }

                self.phase = Phase::Resolved;
                log::info!(target: targets::DRIVER, "upward planar, embedding decoded");
                Ok(Conclusion::UpwardPlanar(self.certificate(
                    decoded.order,
                    decoded.rotations,
                    decoded.anchor,
                )))
            }
        }
    }

    /// Lifts a decoded witness out of dense index space into graph handles.
    fn certificate(
        &self,
        order: Vec<usize>,
        rotations: Vec<Vec<u32>>,
        anchor: Option<(u32, u32)>,
    ) -> Certificate {
        let order = order
            .into_iter()
            .enumerate()
            .map(|(v, rank)| (self.index.node(v as u32), rank))
            .collect();

        let rotations = rotations
            .into_iter()
            .enumerate()
            .map(|(v, rotation)| {
                let edges = rotation.into_iter().map(|e| self.index.edge(e)).collect();
                (self.index.node(v as u32), edges)
            })
            .collect();

        let outer = anchor.map(|(v, e)| OuterFace {
            node: self.index.node(v),
            edge: self.index.edge(e),
        });

        Certificate {
            order,
            rotations,
            outer,
        }
    }
}
