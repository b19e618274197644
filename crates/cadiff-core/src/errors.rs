use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input contract
    /// A scalar has no reflexive equality (NaN, infinity) and cannot be hashed
    UnhashableValue,
    /// Structurally malformed in-memory input (e.g. a mapping with a repeated key)
    InvalidInput,
    /// Fewer or more than two sources were resolved for a comparison
    SourceCount,

    // Recovered anomalies
    /// Two records at a modified index expose different field-name sequences
    SchemaViolation,

    // Loading
    /// A source file or config file does not exist
    NotFound,
    /// Document bytes are not valid UTF-8 JSON, or have the wrong shape
    InvalidDocument,
    /// A required document field (`name`, the record list) is absent
    MissingField,
    /// A config file or config value cannot be interpreted
    InvalidConfig,
    /// A source pattern is not a valid glob
    InvalidPattern,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnhashableValue => "ERR_UNHASHABLE_VALUE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::SourceCount => "ERR_SOURCE_COUNT",
            ExErrorKind::SchemaViolation => "ERR_SCHEMA_VIOLATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidPattern => "ERR_INVALID_PATTERN",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// Whether an error of this kind aborts the whole comparison.
    ///
    /// Only schema violations are recovered locally and surfaced as findings.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ExErrorKind::SchemaViolation)
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus the context needed to say which
/// precondition failed and on which input.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    index: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            index: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add input path context (a file path or a value path such as `vstrands[2].stap`)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add record index context
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
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

    /// Get the input path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the record index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for cadiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CadiffError {
    /// A float without reflexive equality was found while canonicalizing
    #[error("Unhashable value at {path}: {value} has no stable equality")]
    UnhashableValue { path: String, value: String },

    /// A mapping repeats a key, so its content is ambiguous
    #[error("Duplicate key '{key}' in mapping at {path}")]
    DuplicateKey { path: String, key: String },

    /// The comparison needs exactly two sources
    #[error("Expected exactly two sources to compare, resolved {count}: {paths:?}")]
    SourceCount { count: usize, paths: Vec<String> },

    /// Records at the same modified index disagree on their field names
    #[error("Record {index} change in keys '{old_key}' != '{new_key}'")]
    KeyMismatch {
        index: usize,
        old_key: String,
        new_key: String,
    },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from CadiffError to ExError
///
/// Domain code raises the precise variant; callers and tests match on the
/// canonical kind and code.
impl From<CadiffError> for ExError {
    fn from(err: CadiffError) -> Self {
        let message = err.to_string();
        match err {
            CadiffError::UnhashableValue { path, .. } => {
                ExError::new(ExErrorKind::UnhashableValue)
                    .with_op("canonicalize")
                    .with_path(path)
                    .with_message(message)
            }
            CadiffError::DuplicateKey { path, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("canonicalize")
                .with_path(path)
                .with_message(message),
            CadiffError::SourceCount { .. } => ExError::new(ExErrorKind::SourceCount)
                .with_op("resolve_sources")
                .with_message(message),
            CadiffError::KeyMismatch { index, .. } => ExError::new(ExErrorKind::SchemaViolation)
                .with_op("diff_fields")
                .with_index(index)
                .with_message(message),
            CadiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}
