//! General types, at present errors.

pub mod err;
