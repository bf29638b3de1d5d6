/// Result type alias using ClienteleError
pub type Result<T> = std::result::Result<T, ClienteleError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClienteleErrorKind {
    // Structural/Validation
    InvalidInput,
    /// A source field could not be coerced to its target type
    Coercion,
    NotFound,
    /// Rejected by the store: duplicate email, consent outside {0,1},
    /// or an order referencing a client that does not exist
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ClienteleErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ClienteleErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ClienteleErrorKind::Coercion => "ERR_COERCION",
            ClienteleErrorKind::NotFound => "ERR_NOT_FOUND",
            ClienteleErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ClienteleErrorKind::Io => "ERR_IO",
            ClienteleErrorKind::Persistence => "ERR_PERSISTENCE",
            ClienteleErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus optional operation and record
/// context for debugging a failed load or query.
#[derive(Debug, Clone)]
pub struct ClienteleError {
    kind: ClienteleErrorKind,
    op: Option<String>,
    record: Option<usize>,
    message: String,
}

impl ClienteleError {
    /// Create a new error with the specified kind
    pub fn new(kind: ClienteleErrorKind) -> Self {
        Self {
            kind,
            op: None,
            record: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add source-record context (1-based, excluding the header row)
    pub fn with_record(mut self, record: usize) -> Self {
        self.record = Some(record);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ClienteleErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the source-record context, if any
    pub fn record(&self) -> Option<usize> {
        self.record
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ClienteleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if let Some(record) = self.record {
            write!(f, " at record {}", record)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ClienteleError {}
