use std::cell::Cell;
use std::rc::Rc;

use super::*;

// =============================================================
// Subscription
// =============================================================

#[test]
fn subscription_runs_cancel_on_drop() {
    let cancelled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&cancelled);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    assert!(sub.is_active());
    drop(sub);
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn subscription_cancel_runs_exactly_once() {
    let cancelled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&cancelled);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    sub.cancel();
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn inert_subscription_is_inactive() {
    let sub = Subscription::inert();
    assert!(!sub.is_active());
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
}

// =============================================================
// MediaQuerySignal outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn media_query_signal_reports_light_outside_browser() {
    assert!(!MediaQuerySignal.prefers_dark());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn media_query_signal_watch_is_inert_outside_browser() {
    let sub = MediaQuerySignal.watch(Box::new(|_| {}));
    assert!(!sub.is_active());
}

#[test]
fn dark_scheme_query_text() {
    assert_eq!(DARK_SCHEME_QUERY, "(prefers-color-scheme: dark)");
}
