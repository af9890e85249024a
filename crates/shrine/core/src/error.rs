//! Common error infrastructure for shrine-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (`WorldError`, `ActionError`,
//! `RegistryError`, `RecipeError`) live next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Fail-soft execution**: action errors are absorbed at the step that raised
//!   them and never cross [`Action::perform`](crate::Action::perform)
//! - **Severity Classification**: errors are categorized so hosts can choose a
//!   log level or a recovery strategy
//! - **Stable codes**: every variant has a static identifier for tests and logs

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: the world refused a change this time (occupied, unloaded)
/// - **Validation**: content definitions are malformed or reference unknown ids
/// - **Internal**: unexpected host behaviour that should be investigated
/// - **Fatal**: the engine cannot continue with this input at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - the same action may succeed on a later trigger.
    Recoverable,

    /// Validation error - invalid content, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency in the host.
    Internal,

    /// Fatal error - cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken host.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all shrine-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ShrineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
