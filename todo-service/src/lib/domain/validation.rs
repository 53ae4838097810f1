/// A single field-level rule violation.
///
/// Request validation collects these instead of stopping at the first
/// failure, so a caller sees everything wrong with a submission at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending input field
    pub field: &'static str,
    /// Human-readable description of the broken rule
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
