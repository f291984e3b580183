use libris_core_types::RequestId;
use thiserror::Error;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events and in the
/// messages the CLI prints on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the
/// operation, store path and session id for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add backing store path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for library persistence
///
/// A missing book is never an error: lookups report it as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    /// Backing store does not exist yet
    #[error("Backing store not found: {path}")]
    StoreNotFound { path: String },

    /// Backing store exists but does not hold a valid book list
    #[error("Backing store {path} is malformed: {reason}")]
    StoreMalformed { path: String, reason: String },

    /// Filesystem failure while reading or writing the backing store
    #[error("I/O error during {op} on {path}: {message}")]
    Io {
        op: String,
        path: String,
        message: String,
    },

    /// Collection could not be encoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LibraryError> for ExError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::StoreNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_op("load")
                .with_path(path)
                .with_message("Backing store not found"),

            LibraryError::StoreMalformed { path, reason } => {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("load")
                    .with_path(path)
                    .with_message(reason)
            }

            LibraryError::Io { op, path, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_path(path)
                .with_message(message),

            LibraryError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
