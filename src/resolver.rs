//! Access resolution: which business a principal sees, and whether they are admin.
//!
//! The rule, in order:
//!
//! 1. No email: the first catalog record, not admin.
//! 2. Email equals the admin email (exact, case-sensitive): the first record, admin.
//! 3. Otherwise the first record in catalog order owned by the email, not admin.
//! 4. No owned record: the first record, not admin.
//!
//! An empty catalog selects nothing; the admin flag is still computed.

use std::fmt;

use crate::business::BusinessRecord;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::{MaskedEmail, MaybeEmail};

/// Which branch of the rule produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// No principal email
    Unauthenticated,
    /// Principal is the configured admin
    Admin,
    /// Principal owns the selected record
    Owner,
    /// Principal owns nothing; first record used
    Fallback,
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionOutcome::Unauthenticated => write!(f, "unauthenticated"),
            ResolutionOutcome::Admin => write!(f, "admin"),
            ResolutionOutcome::Owner => write!(f, "owner"),
            ResolutionOutcome::Fallback => write!(f, "fallback"),
        }
    }
}

/// Result of access resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    /// Initially selected record; `None` only for an empty catalog
    pub business: Option<&'a BusinessRecord>,
    /// Whether the principal has admin visibility over all records
    pub is_admin: bool,
    /// Which rule applied
    pub outcome: ResolutionOutcome,
}

impl Resolution<'_> {
    /// Id of the selected record.
    pub fn business_id(&self) -> Option<&str> {
        self.business.map(|b| b.id.as_str())
    }
}

/// Resolves the initial selection for `principal_email`.
///
/// Pure and total: identical inputs give identical output, and it never
/// panics, including on an empty catalog.
///
/// # Examples
///
/// ```
/// use business_access::{resolve, Catalog};
///
/// let catalog = Catalog::seed().unwrap();
///
/// let owner = resolve(Some("owner@ecommercepro.com"), catalog.as_slice(), "admin@example.com");
/// assert_eq!(owner.business_id(), Some("business-2"));
/// assert!(!owner.is_admin);
///
/// let admin = resolve(Some("admin@example.com"), catalog.as_slice(), "admin@example.com");
/// assert_eq!(admin.business_id(), Some("business-1"));
/// assert!(admin.is_admin);
/// ```
pub fn resolve<'a>(
    principal_email: Option<&str>,
    catalog: &'a [BusinessRecord],
    admin_email: &str,
) -> Resolution<'a> {
    let first = catalog.first();

    let Some(email) = principal_email else {
        return Resolution {
            business: first,
            is_admin: false,
            outcome: ResolutionOutcome::Unauthenticated,
        };
    };

    if email == admin_email {
        return Resolution {
            business: first,
            is_admin: true,
            outcome: ResolutionOutcome::Admin,
        };
    }

    match catalog.iter().find(|b| b.is_owned_by(email)) {
        Some(owned) => Resolution {
            business: Some(owned),
            is_admin: false,
            outcome: ResolutionOutcome::Owner,
        },
        None => Resolution {
            business: first,
            is_admin: false,
            outcome: ResolutionOutcome::Fallback,
        },
    }
}

/// [`resolve`] bound to a configured admin email, with logging.
///
/// # Examples
///
/// ```
/// use business_access::{AccessResolver, Catalog, Config};
///
/// let resolver = AccessResolver::new(&Config::default().with_admin_email("boss@x.com"));
/// let catalog = Catalog::seed().unwrap();
///
/// let resolution = resolver.resolve(Some("boss@x.com"), &catalog);
/// assert!(resolution.is_admin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessResolver {
    admin_email: String,
}

impl AccessResolver {
    /// Creates a resolver using the admin email from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            admin_email: config.admin_email().to_string(),
        }
    }

    /// The configured admin email.
    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Returns true if `email` is the admin email.
    pub fn is_admin(&self, email: &str) -> bool {
        email == self.admin_email
    }

    /// Resolves against `catalog`.
    pub fn resolve<'a>(&self, principal_email: Option<&str>, catalog: &'a Catalog) -> Resolution<'a> {
        let resolution = resolve(principal_email, catalog.as_slice(), &self.admin_email);

        match (resolution.outcome, resolution.business) {
            (_, None) => tracing::warn!(
                principal = %MaybeEmail(principal_email),
                is_admin = resolution.is_admin,
                "catalog is empty, nothing selected"
            ),
            (ResolutionOutcome::Fallback, Some(business)) => tracing::debug!(
                principal = %MaybeEmail(principal_email),
                business_id = %business.id,
                owner = %MaskedEmail(&business.owner_email),
                "principal owns no business, defaulting to first"
            ),
            (outcome, Some(business)) => tracing::debug!(
                principal = %MaybeEmail(principal_email),
                %outcome,
                business_id = %business.id,
                "access resolved"
            ),
        }

        resolution
    }
}

impl Default for AccessResolver {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::Metrics;

    const ADMIN: &str = "admin@x.com";

    fn record(id: &str, owner: &str) -> BusinessRecord {
        BusinessRecord {
            id: id.to_string(),
            name: format!("Business {}", id),
            owner_email: owner.to_string(),
            metrics: Metrics {
                total_revenue: 0.0,
                revenue_change: 0.0,
                active_users: 0,
                users_change: 0.0,
                sales: 0,
                sales_change: 0.0,
                active_now: 0,
                active_now_change: 0,
            },
            recent_activity: Vec::new(),
            chart_data: Vec::new(),
        }
    }

    fn scenario() -> Vec<BusinessRecord> {
        vec![
            record("b1", "a@x.com"),
            record("b2", "b@x.com"),
            record("b3", "c@x.com"),
        ]
    }

    #[test]
    fn owner_gets_their_business() {
        let catalog = scenario();
        let r = resolve(Some("b@x.com"), &catalog, ADMIN);
        assert_eq!(r.business_id(), Some("b2"));
        assert!(!r.is_admin);
        assert_eq!(r.outcome, ResolutionOutcome::Owner);
    }

    #[test]
    fn admin_gets_first_business() {
        let catalog = scenario();
        let r = resolve(Some(ADMIN), &catalog, ADMIN);
        assert_eq!(r.business_id(), Some("b1"));
        assert!(r.is_admin);
        assert_eq!(r.outcome, ResolutionOutcome::Admin);
    }

    #[test]
    fn admin_who_owns_a_later_record_still_gets_first() {
        let mut catalog = scenario();
        catalog.push(record("b4", ADMIN));
        let r = resolve(Some(ADMIN), &catalog, ADMIN);
        assert_eq!(r.business_id(), Some("b1"));
        assert!(r.is_admin);
    }

    #[test]
    fn unauthenticated_gets_first_business() {
        let catalog = scenario();
        let r = resolve(None, &catalog, ADMIN);
        assert_eq!(r.business_id(), Some("b1"));
        assert!(!r.is_admin);
        assert_eq!(r.outcome, ResolutionOutcome::Unauthenticated);
    }

    #[test]
    fn unknown_principal_falls_back_to_first() {
        let catalog = scenario();
        let r = resolve(Some("z@x.com"), &catalog, ADMIN);
        assert_eq!(r.business_id(), Some("b1"));
        assert!(!r.is_admin);
        assert_eq!(r.outcome, ResolutionOutcome::Fallback);
    }

    #[test]
    fn shared_owner_resolves_to_earliest_record() {
        let catalog = vec![
            record("b1", "a@x.com"),
            record("b2", "x@y.com"),
            record("b3", "x@y.com"),
        ];
        let r = resolve(Some("x@y.com"), &catalog, ADMIN);
        assert_eq!(r.business_id(), Some("b2"));
        assert!(!r.is_admin);
    }

    #[test]
    fn admin_match_is_case_sensitive() {
        let catalog = scenario();
        let r = resolve(Some("Admin@x.com"), &catalog, ADMIN);
        assert!(!r.is_admin);
        assert_eq!(r.outcome, ResolutionOutcome::Fallback);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let empty: Vec<BusinessRecord> = Vec::new();

        let r = resolve(Some("b@x.com"), &empty, ADMIN);
        assert!(r.business.is_none());
        assert!(!r.is_admin);

        let r = resolve(Some(ADMIN), &empty, ADMIN);
        assert!(r.business.is_none());
        assert!(r.is_admin);

        let r = resolve(None, &empty, ADMIN);
        assert!(r.business.is_none());
        assert!(!r.is_admin);
    }

    #[test]
    fn resolver_uses_configured_admin() {
        let catalog = Catalog::new(scenario()).unwrap();
        let resolver = AccessResolver::new(&Config::default().with_admin_email(ADMIN));

        assert!(resolver.is_admin(ADMIN));
        assert!(resolver.resolve(Some(ADMIN), &catalog).is_admin);
        assert!(!resolver.resolve(Some("a@x.com"), &catalog).is_admin);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(ResolutionOutcome::Fallback.to_string(), "fallback");
        assert_eq!(ResolutionOutcome::Unauthenticated.to_string(), "unauthenticated");
    }
}
