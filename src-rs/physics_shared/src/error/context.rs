use std::fmt;

/// Represents different types of contextual information that can be associated with errors.
///
/// The `Context` enum provides a way to attach additional information to error messages,
/// helping users understand why a unit or value operation was rejected and how to fix it.
///
/// # Examples
///
/// ```rust
/// use physics_shared::error::Context;
///
/// let note = Context::Note("left operand has unit `V`".to_string());
/// let help = Context::Help("convert one operand with `adjust_unit`".to_string());
///
/// assert_eq!(note.to_string(), "note: left operand has unit `V`");
/// assert_eq!(help.to_string(), "help: convert one operand with `adjust_unit`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information or context about the error.
    ///
    /// Notes provide supplementary details, such as the units or shapes of the
    /// operands involved in a failed operation.
    Note(String),

    /// Helpful suggestions for resolving the error.
    Help(String),
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note(note) => write!(f, "note: {note}"),
            Self::Help(help) => write!(f, "help: {help}"),
        }
    }
}
