//! Logging indirection for the optional `tracing` feature.
//!
//! The geometry core logs two kinds of events: strategy selection
//! (debug) and degenerate-solve fallbacks (warn). With the feature off,
//! both macros expand to nothing and the crate carries no logging
//! dependency at all.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
