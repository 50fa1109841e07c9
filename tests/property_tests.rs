//! Property tests for access resolution.
//!
//! These tests check the resolution rule against arbitrary catalogs,
//! principals and admin addresses.

use business_access::{resolve, BusinessRecord, Metrics};
use proptest::prelude::*;

fn metrics() -> Metrics {
    Metrics {
        total_revenue: 0.0,
        revenue_change: 0.0,
        active_users: 0,
        users_change: 0.0,
        sales: 0,
        sales_change: 0.0,
        active_now: 0,
        active_now_change: 0,
    }
}

// Strategy: small email pool so owners collide often
fn arb_email() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]@(x|y)\\.com").unwrap()
}

// Strategy: catalog with unique ids `b0..bn` and arbitrary owners
fn arb_catalog(max: usize) -> impl Strategy<Value = Vec<BusinessRecord>> {
    prop::collection::vec(arb_email(), 0..max).prop_map(|owners| {
        owners
            .into_iter()
            .enumerate()
            .map(|(i, owner_email)| BusinessRecord {
                id: format!("b{}", i),
                name: format!("Business {}", i),
                owner_email,
                metrics: metrics(),
                recent_activity: Vec::new(),
                chart_data: Vec::new(),
            })
            .collect()
    })
}

proptest! {
    /// Property: identical inputs give identical output
    #[test]
    fn proptest_resolution_is_deterministic(
        catalog in arb_catalog(8),
        email in prop::option::of(arb_email()),
        admin in arb_email()
    ) {
        let first = resolve(email.as_deref(), &catalog, &admin);
        let second = resolve(email.as_deref(), &catalog, &admin);
        prop_assert_eq!(first, second);
    }

    /// Property: unauthenticated principals see the first record, never admin
    #[test]
    fn proptest_unauthenticated_gets_first(
        catalog in arb_catalog(8),
        admin in arb_email()
    ) {
        let r = resolve(None, &catalog, &admin);
        prop_assert_eq!(r.business, catalog.first());
        prop_assert!(!r.is_admin);
    }

    /// Property: the admin sees the first record whatever they own
    #[test]
    fn proptest_admin_gets_first(
        catalog in arb_catalog(8),
        admin in arb_email()
    ) {
        let r = resolve(Some(admin.as_str()), &catalog, &admin);
        prop_assert_eq!(r.business, catalog.first());
        prop_assert!(r.is_admin);
    }

    /// Property: a non-admin owner gets the earliest record they own,
    /// anyone else gets the first record
    #[test]
    fn proptest_owner_first_hit_or_fallback(
        catalog in arb_catalog(8),
        email in arb_email(),
        admin in arb_email()
    ) {
        prop_assume!(email != admin);

        let r = resolve(Some(email.as_str()), &catalog, &admin);
        prop_assert!(!r.is_admin);

        match catalog.iter().position(|b| b.owner_email == email) {
            Some(i) => {
                prop_assert_eq!(r.business, Some(&catalog[i]));
                // nothing earlier is owned by the same email
                prop_assert!(catalog[..i].iter().all(|b| b.owner_email != email));
            }
            None => prop_assert_eq!(r.business, catalog.first()),
        }
    }

    /// Property: a non-empty catalog always selects something;
    /// an empty one never does
    #[test]
    fn proptest_selection_present_iff_catalog_non_empty(
        catalog in arb_catalog(4),
        email in prop::option::of(arb_email()),
        admin in arb_email()
    ) {
        let r = resolve(email.as_deref(), &catalog, &admin);
        prop_assert_eq!(r.business.is_some(), !catalog.is_empty());
        prop_assert_eq!(r.is_admin, email.as_deref() == Some(admin.as_str()));
    }
}
