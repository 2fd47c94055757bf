//! Backend capability reporting.

use crate::CapabilityFlags;

/// Report which optional behaviors a backend supports.
///
/// Generic callers — most notably the conformance suite in
/// [`conformance`](crate::conformance) — consult this before exercising a
/// behavior the contract leaves backend-defined, rather than assuming
/// every backend behaves alike.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsCapabilities`.
pub trait FsCapabilities: Send + Sync {
    /// Return this backend's capability flags.
    ///
    /// Implementations should return a constant value; capabilities are
    /// a property of the backend, not of its current state.
    fn capabilities(&self) -> CapabilityFlags;
}
