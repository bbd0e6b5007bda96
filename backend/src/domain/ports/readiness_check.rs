//! Driven port for readiness checks.

/// A dependency the readiness probe consults before reporting the service as
/// ready.
#[cfg_attr(test, mockall::automock)]
pub trait ReadinessCheck: Send + Sync {
    /// Stable name reported in the probe payload.
    fn name(&self) -> &'static str;

    /// Whether the dependency is currently usable.
    fn is_ok(&self) -> bool;
}
