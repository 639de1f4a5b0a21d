//! Procedures over an [Engine](crate::context::Engine): clause generation, the solve driver, and model decoding.

pub mod decode;
pub mod encode;
pub mod solve;
