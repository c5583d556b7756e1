//! Errors for the physics crates

mod context;
mod traits;

use std::fmt;

pub use context::Context;
pub use traits::AsPhysicsError;

/// Unified error representation for the physics crates
///
/// This struct represents errors in a format suitable for display to users.
/// It holds a human-readable message and any notes or help attached by the
/// error that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicsError {
    /// Human-readable error message
    message: String,
    /// Optional context information
    context: Vec<Context>,
}

impl PhysicsError {
    /// Creates a new `PhysicsError` from an error that implements `AsPhysicsError`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use physics_shared::error::{AsPhysicsError, Context, PhysicsError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsPhysicsError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    ///
    ///     fn context(&self) -> Vec<Context> {
    ///         vec![Context::Help("try again".to_string())]
    ///     }
    /// }
    ///
    /// let error = PhysicsError::from_error(&SimpleError("something went wrong".to_string()));
    /// assert_eq!(error.message(), "something went wrong");
    /// assert_eq!(error.context().len(), 1);
    /// ```
    pub fn from_error(error: &impl AsPhysicsError) -> Self {
        Self {
            message: error.message(),
            context: error.context(),
        }
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context information
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}

impl fmt::Display for PhysicsError {
    /// Renders the message followed by one indented line per context entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;

        for context in &self.context {
            write!(f, "\n  = {context}")?;
        }

        Ok(())
    }
}

impl std::error::Error for PhysicsError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct MismatchError;

    impl AsPhysicsError for MismatchError {
        fn message(&self) -> String {
            "cannot add `V` and `A`".to_string()
        }

        fn context(&self) -> Vec<Context> {
            vec![
                Context::Note("left operand has dimensionality [mass]".to_string()),
                Context::Help("convert one operand".to_string()),
            ]
        }
    }

    struct PlainError;

    impl AsPhysicsError for PlainError {
        fn message(&self) -> String {
            "plain".to_string()
        }
    }

    #[test]
    fn from_error_keeps_message_and_context() {
        let error = PhysicsError::from_error(&MismatchError);

        assert_eq!(error.message(), "cannot add `V` and `A`");
        assert_eq!(
            error.context(),
            &[
                Context::Note("left operand has dimensionality [mass]".to_string()),
                Context::Help("convert one operand".to_string()),
            ]
        );
    }

    #[test]
    fn display_lists_context_lines() {
        let error = PhysicsError::from_error(&MismatchError);

        assert_eq!(
            error.to_string(),
            "error: cannot add `V` and `A`\n  = note: left operand has dimensionality [mass]\n  = help: convert one operand"
        );
    }

    #[test]
    fn default_context_is_empty() {
        let error = PhysicsError::from_error(&PlainError);

        assert!(error.context().is_empty());
        assert_eq!(error.to_string(), "error: plain");
    }
}
