//! Abstract structures used throughout the library.
//!
//! - [graph] contains the directed graph representation the engine consumes, including its mutable rotation system.
//! - [literal] contains the representation of boolean variables and literals passed to the satisfiability oracle.

pub mod graph;
pub mod literal;
