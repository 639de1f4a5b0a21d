//! Databases of state derived from the input graph.
//!
//! Each database is built fresh for an invocation of the engine and read-only afterwards:
//!
//! - The [index](crate::db::index) database assigns dense integer indices to the nodes and edges of the graph.
//! - The [dominance](crate::db::dominance) database records, for every edge, the edges dominating it.
//! - The [variables](crate::db::variables) database holds the three pools of boolean decision variables.

pub mod dominance;
pub mod index;
pub mod variables;
