use crate::error::Context;

/// Trait for types that can be converted to physics error reports.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and associated context. Every error type in the
/// physics crates implements it so that callers can render a consistent
/// report regardless of which layer (units, values, configuration) failed.
pub trait AsPhysicsError {
    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Context provides supplementary information that can help users understand
    /// the error better or suggest how to fix it, for example the units of both
    /// operands of a rejected addition.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }
}
