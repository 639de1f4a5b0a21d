/*!
The varisat-backed oracle.

Literals cross the boundary in their DIMACS integer form, so the engine's
variable numbering coincides with the solver's.
varisat solves incrementally: clauses added after a solve extend the same
formula, which is what the fixing rule relies on.
*/

use ::varisat::{ExtendFormula, Lit, Solver};

use crate::misc::log::targets;
use crate::oracle::{Model, Oracle, Outcome};
use crate::structures::literal::Literal;
use crate::types::err::OracleError;

/// A satisfiability oracle backed by the varisat solver.
#[derive(Default)]
pub struct VarisatOracle {
    solver: Solver<'static>,
    declared: u32,
}

impl VarisatOracle {
    /// A fresh oracle with an empty formula.
    pub fn new() -> Self {
        VarisatOracle {
            solver: Solver::new(),
            declared: 0,
        }
    }
}

impl Oracle for VarisatOracle {
    fn ensure_variables(&mut self, count: u32) {
        while self.declared < count {
            self.solver.new_var();
            self.declared += 1;
        }
    }

    fn add_clause(&mut self, clause: &[Literal]) {
        let literals: Vec<Lit> = clause
            .iter()
            .map(|literal| Lit::from_dimacs(literal.as_dimacs()))
            .collect();
        self.solver.add_clause(&literals);
    }

    fn solve(&mut self) -> Result<Outcome, OracleError> {
        match self.solver.solve() {
            Err(e) => Err(OracleError::Backend(e.to_string())),

            Ok(false) => {
                log::debug!(target: targets::ORACLE, "unsatisfiable");
                Ok(Outcome::Unsatisfiable)
            }

            Ok(true) => {
                let literals = self.solver.model().ok_or(OracleError::MissingModel)?;
                let mut values = vec![false; self.declared as usize + 1];
                for literal in literals {
                    let variable = literal.var().to_dimacs() as usize;
                    if variable < values.len() {
                        values[variable] = literal.is_positive();
                    }
                }
                log::debug!(target: targets::ORACLE, "satisfiable");
                Ok(Outcome::Satisfiable(Model::new(values)))
            }
        }
    }
}
