//! Readiness of the selection container.
//!
//! The authentication service reports the principal asynchronously, so the
//! selection cannot be trusted until that report has arrived. `Readiness`
//! makes the dependency explicit instead of relying on callback ordering.

use std::fmt;

/// Whether the current principal has been resolved.
///
/// ```text
/// Pending --identity known--> Resolved --identity changed--> Pending --> ...
/// ```
///
/// There is no terminal state; the cycle repeats for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    /// Principal identity not known yet
    #[default]
    Pending,
    /// Principal known and access resolved
    Resolved,
}

impl Readiness {
    /// Returns true while waiting for the principal.
    pub fn is_pending(self) -> bool {
        matches!(self, Readiness::Pending)
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Pending => write!(f, "pending"),
            Readiness::Resolved => write!(f, "resolved"),
        }
    }
}
