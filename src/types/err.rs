//! Error types used in the library.
//!
//! Infeasibility --- a graph which is not upward planar --- is *not* an error.
//! The entry points report it as `Ok(false)`.
//! Errors cover the two remaining failure shapes of a solve:
//!
//! - The oracle was unable to produce an answer.
//! - A returned model violates an invariant the encoding is supposed to guarantee, which indicates a bug in the encoder or decoder and aborts the call rather than returning an incorrect embedding.
//!
//! Malformed graph input --- stale handles, foreign rotation contents --- is a caller contract violation and panics instead.

/// Any error raised by an entry point of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Oracle(OracleError),
    Consistency(ConsistencyError),
}

/// Failures of the satisfiability oracle itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OracleError {
    /// The backing solver reported an error of its own.
    Backend(String),

    /// The backing solver reported satisfiability without a model.
    MissingModel,
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// A decoded model violated an invariant the encoding guarantees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The rotation variables at a node do not describe a total order.
    RotationNotTotal {
        /// The dense index of the offending node.
        node: u32,
    },

    /// The node order variables do not describe a total order.
    OrderNotTotal,

    /// A fixing solve over a known model came back unsatisfiable.
    FixingUnsatisfiable,
}

impl From<ConsistencyError> for ErrorKind {
    fn from(e: ConsistencyError) -> Self {
        ErrorKind::Consistency(e)
    }
}
