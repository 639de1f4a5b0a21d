/*!
Configuration of the engine.

All configuration is held by the entry point structure and copied into each
invocation.
The defaults favour reproducibility over the cheapest possible solve.
*/

/// The configuration of an [UpwardPlanarity](crate::context::UpwardPlanarity) engine.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Re-solve with fixing clauses when the first model is not canonical, so
    /// repeat embeds of the same graph agree.
    ///
    /// Without this the reported embedding is whichever model the oracle
    /// happens to find first.
    pub fix_embedding: bool,

    /// Verify that decoded rotations are total orders before the graph is
    /// touched.
    ///
    /// A violation is reported as a [ConsistencyError](crate::types::err::ConsistencyError) rather than an incorrect embedding.
    pub verify_models: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fix_embedding: true,
            verify_models: true,
        }
    }
}
