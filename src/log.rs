//! Logging shims.
//!
//! With the `tracing` feature the geometry code logs through `tracing`; without
//! it the macros below swallow their arguments so the closed-form paths stay free
//! of any subscriber lookups.

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
