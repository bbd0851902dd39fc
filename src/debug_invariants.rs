//! Opt-in invariant checking for grid data structures.
//!
//! Checks run in debug builds and whenever the `strict-invariants` or
//! `check-invariants` feature is enabled; release builds skip them.

use crate::grid_error::GridError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), GridError>;

    /// Panic on the first violated invariant when checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), std::any::type_name::<Self>());
    }
}

/// Run a fallible check and panic with `context` on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $context:expr) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!("[invariants] {}: {}", $context, e);
        }
    };
}
