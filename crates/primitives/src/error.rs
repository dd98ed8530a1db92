use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Validation(validator::ValidationErrors),
    Auth(AuthError),
    NotFound(String),
    InsufficientFunds { requested: i64, available: i64 },
    FeeRequired { withdrawal_count: i32, fee: i64 },
    Conflict(String),
    Store(StoreError),
    Partial(PartialWrite),
    Config(String),
}

#[derive(Debug)]
pub enum AuthError {
    NoSession,
    UserMismatch,
    Rejected(String),
}

#[derive(Debug)]
pub enum StoreError {
    Unreachable(String),
    Rejected { status: u16, message: String },
    Decode(String),
}

/// A multi-step write that committed some steps and then failed. Earlier
/// steps are durable; nothing is rolled back.
#[derive(Debug)]
pub struct PartialWrite {
    pub operation: &'static str,
    pub committed: Vec<&'static str>,
    pub failed: &'static str,
    pub source: Box<ApiError>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::NotFound(what) => write!(f, "Not found: {}", what),
            ApiError::InsufficientFunds {
                requested,
                available,
            } => write!(
                f,
                "Insufficient funds: requested {} but only {} available",
                requested, available
            ),
            ApiError::FeeRequired {
                withdrawal_count,
                fee,
            } => write!(
                f,
                "Withdrawal fee of {} required after {} withdrawals",
                fee, withdrawal_count
            ),
            ApiError::Conflict(e) => write!(f, "Conflict: {}", e),
            ApiError::Store(e) => write!(f, "Store error: {}", e),
            ApiError::Partial(e) => write!(f, "Partial failure: {}", e),
            ApiError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoSession => write!(f, "No active session"),
            AuthError::UserMismatch => write!(f, "Session does not match requested user"),
            AuthError::Rejected(msg) => write!(f, "Session rejected: {}", msg),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unreachable(msg) => write!(f, "Record store unreachable: {}", msg),
            StoreError::Rejected { status, message } => {
                write!(f, "Record store rejected request ({}): {}", status, message)
            }
            StoreError::Decode(msg) => write!(f, "Invalid record store response: {}", msg),
        }
    }
}

impl fmt::Display for PartialWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} committed [{}] but {} failed: {}",
            self.operation,
            self.committed.join(", "),
            self.failed,
            self.source
        )
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Auth(e) => Some(e),
            ApiError::Store(e) => Some(e),
            ApiError::Partial(e) => Some(e.source.as_ref()),
            _ => None,
        }
    }
}

impl std::error::Error for AuthError {}

impl std::error::Error for StoreError {}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // The store rejects a bad or expired token before row policies run
            StoreError::Rejected {
                status: 401,
                message,
            } => ApiError::Auth(AuthError::Rejected(message)),
            other => ApiError::Store(other),
        }
    }
}

impl From<PartialWrite> for ApiError {
    fn from(err: PartialWrite) -> Self {
        ApiError::Partial(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Store(StoreError::Unreachable(err.to_string()))
    }
}

impl ApiError {
    /// Wrap a single field failure in the same shape `Validate` derives
    /// produce, so callers see one validation error type.
    pub fn validation(field: &'static str, error: validator::ValidationError) -> Self {
        let mut errors = validator::ValidationErrors::new();
        errors.add(field, error);
        ApiError::Validation(errors)
    }

    /// Reclassify an error that struck after earlier steps of `operation`
    /// already committed, so callers can tell durable half-applied state
    /// from a clean failure.
    pub fn into_partial(
        self,
        operation: &'static str,
        committed: Vec<&'static str>,
        failed: &'static str,
    ) -> Self {
        ApiError::Partial(PartialWrite {
            operation,
            committed,
            failed,
            source: Box::new(self),
        })
    }
}
