//! Span definitions per kernel operation: assertion, deduction, learning.

/// Create a fact assertion span.
#[macro_export]
macro_rules! assert_span {
    ($source:expr, $label:expr, $target:expr) => {
        tracing::debug_span!(
            "archanon.assert",
            source_id = %$source,
            label = %$label,
            target_id = %$target
        )
    };
}

/// Create a deduction span.
#[macro_export]
macro_rules! deduction_span {
    ($source:expr, $property:expr) => {
        tracing::debug_span!("archanon.deduction", source_id = %$source, property = %$property)
    };
}

/// Create a learning span.
#[macro_export]
macro_rules! learning_span {
    () => {
        tracing::info_span!("archanon.learning")
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSERT: &str = "archanon.assert";
    pub const DEDUCTION: &str = "archanon.deduction";
    pub const LEARNING: &str = "archanon.learning";
}
