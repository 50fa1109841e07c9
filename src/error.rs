use std::fmt;

/// Errors that can occur in the business-access crate.
///
/// Resolution itself never fails. Errors only arise at the edges: loading a
/// catalog and overriding a selection.
#[derive(Debug)]
pub enum Error {
    /// The business catalog could not be built
    Catalog(CatalogError),
    /// A selection change was refused
    Violation(Violation),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(e) => write!(f, "Catalog error: {}", e),
            Error::Violation(v) => write!(f, "Access violation: {}", v),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Catalog(e) => Some(e),
            Error::Violation(v) => Some(v),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(e: CatalogError) -> Self {
        Error::Catalog(e)
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// Failure while building a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The JSON seed could not be decoded
    Parse(String),
    /// Two records share the same id
    DuplicateId(String),
    /// A metric or chart value is NaN or infinite
    NonFinite {
        /// Id of the offending record
        id: String,
        /// Path of the offending field, e.g. `metrics.totalRevenue`
        field: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "invalid catalog JSON: {}", msg),
            CatalogError::DuplicateId(id) => write!(f, "duplicate business id '{}'", id),
            CatalogError::NonFinite { id, field } => {
                write!(f, "non-finite value in '{}' of business '{}'", field, id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

/// A refused selection change with details about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of selection violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The requested business id is not in the catalog
    UnknownBusiness {
        /// The id that was requested
        id: String,
    },
    /// The operation requires the admin principal
    NotAdmin,
    /// The principal has not been resolved yet
    NotResolved,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::UnknownBusiness { id } => write!(f, "Unknown business '{}'", id),
            ViolationKind::NotAdmin => write!(f, "Admin required"),
            ViolationKind::NotResolved => write!(f, "Selection pending"),
        }
    }
}
