/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, narrowed by target to
the phases of an invocation.
No log implementation is provided; for details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [index building](crate::db::index).
    pub const INDEX: &str = "index";

    /// Logs related to the [dominance table](crate::db::dominance).
    pub const DOMINANCE: &str = "dominance";

    /// Logs related to [clause generation](crate::procedures::encode).
    pub const ENCODE: &str = "encode";

    /// Logs related to the [satisfiability oracle](crate::oracle).
    pub const ORACLE: &str = "oracle";

    /// Logs related to [model decoding](crate::procedures::decode).
    pub const DECODE: &str = "decode";

    /// Logs related to the [strategy driver](crate::procedures::solve).
    pub const DRIVER: &str = "driver";
}
