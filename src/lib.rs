//! Business selection and admin access resolution for a metrics dashboard.
//!
//! This crate decides which business record an authenticated user sees:
//! - **Owners** see the first business whose owner email matches theirs
//! - **The admin** (one configured email) starts on the first business and may switch freely
//! - **Everyone else**, signed in or not, sees the first business
//!
//! # Core Types
//!
//! - [`resolve`]: The pure resolution rule
//! - [`Catalog`]: Immutable, ordered set of [`BusinessRecord`]s
//! - [`AccessResolver`]: [`resolve`] bound to a [`Config`], with logging
//! - [`BusinessSelection`]: Selection state re-derived on every [`IdentityEvent`]
//! - [`AdminCap`]: Capability proving admin visibility for manual overrides
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use business_access::{
//!     AccessResolver, BusinessSelection, Catalog, Config, IdentityEvent, Principal,
//! };
//!
//! let config = Config::default().with_admin_email("boss@x.com");
//! let mut selection = BusinessSelection::new(
//!     Arc::new(Catalog::seed().unwrap()),
//!     AccessResolver::new(&config),
//! );
//!
//! selection.on_identity_change(&IdentityEvent::signed_in(Principal::with_email("u-1", "boss@x.com")));
//! let cap = selection.admin_cap().expect("admin");
//! let picked = selection.select_as_admin(cap, "business-3").expect("in catalog");
//! assert_eq!(picked.name, "Marketing Agency");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod business;
mod capability;
mod catalog;
mod config;
mod error;
mod identity;
mod logging;
mod resolver;
mod seed;
mod selection;
mod state;
mod summary;

pub use business::{BusinessRecord, ChartPoint, Metrics, Transaction, TransactionStatus};
pub use capability::AdminCap;
pub use catalog::Catalog;
pub use config::{Config, ADMIN_EMAIL_VAR, DEFAULT_ADMIN_EMAIL};
pub use error::{CatalogError, Error, Violation, ViolationKind};
pub use identity::{IdentityEvent, IdentityEventKind, Principal};
pub use logging::MaskedEmail;
pub use resolver::{resolve, AccessResolver, Resolution, ResolutionOutcome};
pub use selection::{BusinessSelection, IdentityTicket, SelectionView};
pub use state::Readiness;
pub use summary::MetricCard;
