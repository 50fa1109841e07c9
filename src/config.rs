//! Runtime configuration.

/// Environment variable holding the admin email.
pub const ADMIN_EMAIL_VAR: &str = "BUSINESS_ACCESS_ADMIN_EMAIL";

/// Admin email used when [`ADMIN_EMAIL_VAR`] is unset or blank.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

/// Settings for access resolution.
///
/// # Examples
///
/// ```
/// use business_access::{Config, DEFAULT_ADMIN_EMAIL};
///
/// let config = Config::from_lookup(|_| None);
/// assert_eq!(config.admin_email(), DEFAULT_ADMIN_EMAIL);
///
/// let config = Config::default().with_admin_email("boss@x.com");
/// assert_eq!(config.admin_email(), "boss@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    admin_email: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable
    /// name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let admin_email = lookup(ADMIN_EMAIL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match admin_email {
            Some(admin_email) => Self { admin_email },
            None => {
                tracing::debug!(
                    var = ADMIN_EMAIL_VAR,
                    "admin email not configured, using default"
                );
                Self::default()
            }
        }
    }

    /// Replaces the admin email.
    pub fn with_admin_email(mut self, admin_email: impl Into<String>) -> Self {
        self.admin_email = admin_email.into();
        self
    }

    /// The single email granted admin visibility.
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
        }
    }
}
