//! Geometry core: corner solving and outline assembly.

pub mod corner;
pub mod outline;
pub(crate) mod solve;
