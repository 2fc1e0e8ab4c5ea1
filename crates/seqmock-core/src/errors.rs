use seqmock_core_types::RequestId;
use thiserror::Error;

/// Result type alias using SeqMockError
pub type Result<T> = std::result::Result<T, SeqMockError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs and tests. Only
/// `NotFound` is ever surfaced to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    NotFound,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus context for logging. Built from a `SeqMockError`
/// at the point where the error is reported.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
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

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the mock sequencer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeqMockError {
    /// Path segment is not made of hex digits and hyphens
    #[error("Invalid batch id in path: {batch_id:?}")]
    InvalidBatchId { batch_id: String },

    /// No route serves this method/path combination
    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// The HTTP server stopped with an I/O error
    #[error("Server error: {reason}")]
    Serve { reason: String },
}

impl SeqMockError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            SeqMockError::InvalidBatchId { .. } | SeqMockError::RouteNotFound { .. } => {
                ExErrorKind::NotFound
            }
            SeqMockError::Bind { .. } | SeqMockError::Serve { .. } => ExErrorKind::Io,
        }
    }
}

impl From<SeqMockError> for ExError {
    fn from(err: SeqMockError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            SeqMockError::InvalidBatchId { batch_id } => ExError::new(kind)
                .with_op("anchor_commitment")
                .with_entity_id(batch_id)
                .with_message(message),

            SeqMockError::RouteNotFound { .. } => ExError::new(kind).with_message(message),

            SeqMockError::Bind { addr, .. } => ExError::new(kind)
                .with_op("bind")
                .with_entity_id(addr)
                .with_message(message),

            SeqMockError::Serve { .. } => ExError::new(kind).with_op("serve").with_message(message),
        }
    }
}

impl From<&SeqMockError> for ExError {
    fn from(err: &SeqMockError) -> Self {
        err.clone().into()
    }
}
