//! Testability ports for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniform index draws.
///
/// Implementations are shared across request tasks, so they must be safe to
/// call concurrently.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform draw in `0..len`. `len` is never zero.
    fn gen_index(&self, len: usize) -> usize;
}
