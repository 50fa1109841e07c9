use std::sync::Arc;

use crate::business::BusinessRecord;
use crate::capability::AdminCap;
use crate::catalog::Catalog;
use crate::error::{Violation, ViolationKind};
use crate::identity::{IdentityEvent, Principal};
use crate::logging::MaybeEmail;
use crate::resolver::AccessResolver;
use crate::state::Readiness;

/// Handle for one in-flight identity change.
///
/// Issued by [`BusinessSelection::begin_identity_change`]. Only the most
/// recently issued ticket can complete; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTicket(u64);

/// Snapshot of the selection, as consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionView<'a> {
    /// Currently selected record; `None` before the first resolution or
    /// for an empty catalog
    pub selected_business: Option<&'a BusinessRecord>,
    /// Whether the principal has admin visibility
    pub is_admin: bool,
    /// True while the principal is being resolved
    pub is_loading: bool,
}

/// Selection state derived from the current principal.
///
/// Owned by the composition root and passed explicitly to whatever needs it.
/// Every identity change moves it back to [`Readiness::Pending`] and then,
/// once resolved, to [`Readiness::Resolved`].
///
/// # Identity Changes
///
/// Synchronous callers use [`on_identity_change`](Self::on_identity_change).
/// Callers that resolve the principal asynchronously split it in two:
///
/// ```text
/// begin_identity_change() -> ticket ... complete_identity_change(ticket, event)
/// ```
///
/// If a newer change begins before an older one completes, the older
/// completion is dropped. The latest identity always wins.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use business_access::{AccessResolver, BusinessSelection, Catalog, Config, IdentityEvent, Principal};
///
/// let resolver = AccessResolver::new(&Config::default());
/// let mut selection = BusinessSelection::new(Arc::new(Catalog::seed().unwrap()), resolver);
/// assert!(selection.view().is_loading);
///
/// selection.on_identity_change(&IdentityEvent::signed_in(Principal::with_email(
///     "u-1",
///     "owner@marketingagency.com",
/// )));
///
/// let view = selection.view();
/// assert!(!view.is_loading);
/// assert!(!view.is_admin);
/// assert_eq!(view.selected_business.map(|b| b.name.as_str()), Some("Marketing Agency"));
/// ```
#[derive(Debug, Clone)]
pub struct BusinessSelection {
    catalog: Arc<Catalog>,
    resolver: AccessResolver,
    readiness: Readiness,
    principal: Option<Principal>,
    selected: Option<usize>,
    is_admin: bool,
    generation: u64,
}

impl BusinessSelection {
    /// Creates a pending selection over `catalog`.
    pub fn new(catalog: Arc<Catalog>, resolver: AccessResolver) -> Self {
        Self {
            catalog,
            resolver,
            readiness: Readiness::Pending,
            principal: None,
            selected: None,
            is_admin: false,
            generation: 0,
        }
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current readiness.
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// The principal of the last applied identity change.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// The selected record.
    ///
    /// During a transient [`Readiness::Pending`] this is still the previous
    /// selection; check [`is_loading`](Self::is_loading) before trusting it.
    pub fn selected_business(&self) -> Option<&BusinessRecord> {
        self.selected.and_then(|i| self.catalog.as_slice().get(i))
    }

    /// Whether the principal has admin visibility.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// True while an identity change is unresolved.
    pub fn is_loading(&self) -> bool {
        self.readiness.is_pending()
    }

    /// Returns the `(selectedBusiness, isAdmin, isLoading)` snapshot.
    pub fn view(&self) -> SelectionView<'_> {
        SelectionView {
            selected_business: self.selected_business(),
            is_admin: self.is_admin,
            is_loading: self.is_loading(),
        }
    }

    /// Marks the selection pending and returns the ticket that may complete it.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_identity_change(&mut self) -> IdentityTicket {
        self.generation += 1;
        self.readiness = Readiness::Pending;
        IdentityTicket(self.generation)
    }

    /// Applies `event` if `ticket` is the latest one issued.
    ///
    /// Returns `false` and leaves the state untouched for a stale ticket.
    pub fn complete_identity_change(&mut self, ticket: IdentityTicket, event: &IdentityEvent) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.generation,
                event = %event.kind,
                "dropping stale identity change"
            );
            return false;
        }

        let resolution = self.resolver.resolve(event.email(), &self.catalog);
        self.selected = resolution.business_id().and_then(|id| self.catalog.position(id));
        self.is_admin = resolution.is_admin;
        self.principal = event.principal.clone();
        self.readiness = Readiness::Resolved;

        tracing::info!(
            event = %event.kind,
            principal = %MaybeEmail(event.email()),
            outcome = %resolution.outcome,
            business_id = resolution.business_id().unwrap_or("-"),
            is_admin = self.is_admin,
            "selection resolved"
        );
        true
    }

    /// Begins and immediately completes an identity change.
    pub fn on_identity_change(&mut self, event: &IdentityEvent) {
        let ticket = self.begin_identity_change();
        self.complete_identity_change(ticket, event);
    }

    /// Replaces the selected record with the catalog entry `id`.
    ///
    /// Only membership is checked. Restricting this to admins is the
    /// caller's choice; see [`select_as_admin`](Self::select_as_admin).
    ///
    /// # Errors
    ///
    /// Returns `ViolationKind::UnknownBusiness` if `id` is not in the catalog.
    pub fn set_selected_business(&mut self, id: &str) -> Result<&BusinessRecord, Violation> {
        let index = self.catalog.position(id).ok_or_else(|| {
            Violation::new(
                ViolationKind::UnknownBusiness { id: id.to_string() },
                "business is not in the catalog",
            )
        })?;

        self.selected = Some(index);
        tracing::info!(business_id = %id, is_admin = self.is_admin, "selection overridden");
        Ok(&self.catalog.as_slice()[index])
    }

    /// Returns an admin capability if the current principal resolved as admin.
    pub fn admin_cap(&self) -> Option<AdminCap> {
        self.require_admin().ok()
    }

    /// Like [`admin_cap`](Self::admin_cap), with the reason for refusal.
    ///
    /// # Errors
    ///
    /// `ViolationKind::NotResolved` while pending, `ViolationKind::NotAdmin`
    /// for any other principal.
    pub fn require_admin(&self) -> Result<AdminCap, Violation> {
        if self.readiness.is_pending() {
            return Err(Violation::new(
                ViolationKind::NotResolved,
                "principal not resolved yet",
            ));
        }
        if !self.is_admin {
            return Err(Violation::new(
                ViolationKind::NotAdmin,
                "only the admin can change the selected business",
            ));
        }
        Ok(AdminCap::new(self.generation))
    }

    /// Admin-only override of the selected record.
    ///
    /// # Errors
    ///
    /// `ViolationKind::NotAdmin` if `cap` was issued for an earlier identity,
    /// `ViolationKind::UnknownBusiness` if `id` is not in the catalog.
    pub fn select_as_admin(&mut self, cap: AdminCap, id: &str) -> Result<&BusinessRecord, Violation> {
        if cap.generation() != self.generation || self.readiness.is_pending() {
            return Err(Violation::new(
                ViolationKind::NotAdmin,
                "admin capability expired after an identity change",
            ));
        }
        self.set_selected_business(id)
    }
}
