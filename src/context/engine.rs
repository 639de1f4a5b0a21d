/*!
The engine of a single invocation.

An [Engine] bundles everything one decision needs: the dense [GraphIndex]
and [DominanceTable] of the graph, the [VariablePools] of the encoding,
the oracle holding the formula, and the phase the invocation has reached.
The procedures --- [encode](crate::procedures::encode),
[solve](crate::procedures::solve), [decode](crate::procedures::decode) ---
are written against this structure.
*/

use crate::config::Config;
use crate::context::{Phase, Strategy};
use crate::db::dominance::DominanceTable;
use crate::db::index::GraphIndex;
use crate::db::variables::VariablePools;
use crate::oracle::Oracle;
use crate::structures::graph::Digraph;

/// The state of one invocation over one graph.
pub struct Engine<O: Oracle> {
    pub(crate) strategy: Strategy,
    pub(crate) config: Config,
    pub(crate) phase: Phase,

    pub(crate) index: GraphIndex,
    pub(crate) dominance: DominanceTable,
    pub(crate) pools: VariablePools,

    pub(crate) oracle: O,
    pub(crate) clauses: u64,
}

impl<O: Oracle> Engine<O> {
    /// An engine over the given graph, with nothing yet encoded.
    pub fn new(graph: &Digraph, strategy: Strategy, config: Config, oracle: O) -> Self {
        let index = GraphIndex::build(graph);
        let dominance = DominanceTable::build(&index);

        Engine {
            strategy,
            config,
            phase: Phase::Init,
            index,
            dominance,
            pools: VariablePools::new(),
            oracle,
            clauses: 0,
        }
    }

    /// The strategy the engine runs.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The phase the invocation has reached.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The number of variables allocated so far.
    pub fn number_of_variables(&self) -> u32 {
        self.pools.count()
    }

    /// The number of clauses handed to the oracle so far.
    pub fn number_of_clauses(&self) -> u64 {
        self.clauses
    }
}
