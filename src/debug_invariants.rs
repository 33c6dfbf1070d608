//! Opt-in consistency checks for complex bookkeeping.
//!
//! Debug builds always run the checks after each mutation; release builds run
//! them only with the `strict-invariants` or `check-invariants` feature.

use crate::complex_error::CellComplexError;

/// Trait for structures whose internal bookkeeping can be re-validated.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), CellComplexError>;

    /// Panic on the first violation when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible check and panic with context when invariant checking is
/// enabled; compiles to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
