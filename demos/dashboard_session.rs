//! Dashboard session walkthrough.
//!
//! This example plays a sequence of identity changes against the seed catalog
//! and prints what the dashboard would show after each one:
//! 1. Startup with no session
//! 2. An owner signs in
//! 3. The admin signs in and switches business
//! 4. Everyone signs out
//!
//! Run with: `cargo run --example dashboard_session`
//! Set `BUSINESS_ACCESS_ADMIN_EMAIL` to change the admin address.

use std::sync::Arc;

use business_access::{
    AccessResolver, BusinessSelection, Catalog, Config, Error, IdentityEvent, Principal,
};

fn print_view(label: &str, selection: &BusinessSelection) {
    let view = selection.view();
    println!("--- {} ---", label);
    match view.selected_business {
        Some(business) => {
            println!("business: {} ({})", business.name, business.id);
            for card in business.metric_cards() {
                println!("  {:<14} {:>12}  {}", card.title, card.value, card.change);
            }
            if let Some(peak) = business.chart_peak() {
                println!("  chart peak: {} = {}", peak.month, peak.value);
            }
        }
        None => println!("business: (none)"),
    }
    println!("admin: {}  loading: {}\n", view.is_admin, view.is_loading);
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = Config::from_env();
    let catalog = Arc::new(Catalog::seed()?);
    let mut selection = BusinessSelection::new(Arc::clone(&catalog), AccessResolver::new(&config));

    print_view("startup", &selection);

    selection.on_identity_change(&IdentityEvent::initial(None));
    print_view("no session", &selection);

    selection.on_identity_change(&IdentityEvent::signed_in(Principal::with_email(
        "user-42",
        "owner@ecommercepro.com",
    )));
    print_view("owner signed in", &selection);

    selection.on_identity_change(&IdentityEvent::signed_in(Principal::with_email(
        "user-1",
        config.admin_email(),
    )));
    let cap = selection.require_admin()?;
    selection.select_as_admin(cap, "business-3")?;
    print_view("admin switched business", &selection);

    selection.on_identity_change(&IdentityEvent::signed_out());
    print_view("signed out", &selection);

    Ok(())
}
