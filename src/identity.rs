//! Principal identities and the notifications that change them.

use std::fmt;

/// An authenticated user as reported by the authentication service.
///
/// Only the email takes part in access resolution; the id is carried for
/// log correlation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable identifier assigned by the authentication service
    pub id: String,
    /// Email address, if the account has one
    pub email: Option<String>,
}

impl Principal {
    /// Creates a principal with an email address.
    pub fn with_email(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
        }
    }

    /// Returns the email address, if any.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Kind of identity change pushed by the authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityEventKind {
    /// The session known at startup
    InitialSession,
    /// A user signed in
    SignedIn,
    /// The user signed out
    SignedOut,
    /// The session token was refreshed
    TokenRefreshed,
    /// The user's account details changed
    UserUpdated,
}

impl fmt::Display for IdentityEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityEventKind::InitialSession => write!(f, "initial_session"),
            IdentityEventKind::SignedIn => write!(f, "signed_in"),
            IdentityEventKind::SignedOut => write!(f, "signed_out"),
            IdentityEventKind::TokenRefreshed => write!(f, "token_refreshed"),
            IdentityEventKind::UserUpdated => write!(f, "user_updated"),
        }
    }
}

/// A change in the current principal.
///
/// # Examples
///
/// ```
/// use business_access::{IdentityEvent, IdentityEventKind, Principal};
///
/// let event = IdentityEvent::signed_in(Principal::with_email("u1", "a@x.com"));
/// assert_eq!(event.kind, IdentityEventKind::SignedIn);
/// assert_eq!(event.email(), Some("a@x.com"));
///
/// assert_eq!(IdentityEvent::signed_out().email(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityEvent {
    /// What happened
    pub kind: IdentityEventKind,
    /// The principal after the change; `None` when unauthenticated
    pub principal: Option<Principal>,
}

impl IdentityEvent {
    /// Creates an event.
    pub fn new(kind: IdentityEventKind, principal: Option<Principal>) -> Self {
        Self { kind, principal }
    }

    /// The session discovered at startup, possibly empty.
    pub fn initial(principal: Option<Principal>) -> Self {
        Self::new(IdentityEventKind::InitialSession, principal)
    }

    /// A sign-in.
    pub fn signed_in(principal: Principal) -> Self {
        Self::new(IdentityEventKind::SignedIn, Some(principal))
    }

    /// A sign-out.
    pub fn signed_out() -> Self {
        Self::new(IdentityEventKind::SignedOut, None)
    }

    /// Email of the principal after the change.
    pub fn email(&self) -> Option<&str> {
        self.principal.as_ref().and_then(Principal::email)
    }
}
