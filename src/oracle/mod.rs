/*!
The satisfiability oracle --- an external collaborator behind a trait.

The engine is the sole producer of variables and clauses.
It hands the oracle a conjunctive normal form formula clause by clause,
asks for a solve, and on a satisfiable outcome reads back a [Model].
Nothing else of the oracle is inspected, and the oracle must support
repeated solves over a growing clause prefix --- the fixing rule of the
full-embedding strategy appends unit clauses to an already-solved formula
and solves again.

The canonical implementation is [VarisatOracle], backed by the varisat
solver.
*/

pub mod varisat;

pub use self::varisat::VarisatOracle;

use crate::structures::literal::{Literal, Variable};
use crate::types::err::OracleError;

/// An immutable boolean assignment to every allocated variable.
///
/// Valid until the oracle is solved again.
#[derive(Clone, Debug)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// A model over `values`, indexed by variable with index zero unused.
    pub fn new(values: Vec<bool>) -> Self {
        Model { values }
    }

    /// The value the model assigns to a variable.
    pub fn value(&self, variable: Variable) -> bool {
        self.values[variable as usize]
    }

    /// Whether the model satisfies a literal.
    pub fn holds(&self, literal: Literal) -> bool {
        self.value(literal.variable()) == literal.polarity()
    }
}

/// The outcome of a solve.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The formula is satisfiable, on the given model.
    Satisfiable(Model),

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

/// The interface the engine requires of a satisfiability oracle.
pub trait Oracle {
    /// Declares variables `1..=count` to the oracle.
    ///
    /// Called once, after the pools are populated and before any clause is
    /// added.
    fn ensure_variables(&mut self, count: u32);

    /// Appends a clause, given as a disjunction of literals.
    ///
    /// The empty clause makes the formula unsatisfiable.
    fn add_clause(&mut self, clause: &[Literal]);

    /// Determines the satisfiability of the accumulated formula.
    fn solve(&mut self) -> Result<Outcome, OracleError>;
}
