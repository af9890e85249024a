use shrine_core::{ErrorSeverity, ShrineError};

/// Failures while assembling a runtime from content.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl ShrineError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
