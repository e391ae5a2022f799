//! Scenarios spanning several core modules, the way a page drives them.

use crate::core::contact::{
    CONFIRMATION_BODY, ContactFlow, ContactForm, ContactSink, FormField, FormPhase, Interest,
    SUBMIT_LABEL, SUBMITTING_LABEL, SimulatedSink,
};
use crate::core::content::{ABOUT_STATS, PRODUCT_STATS};
use crate::core::counter::{COUNTER_DURATION_MS, Counter, CounterValue};
use crate::core::cursor::{CursorState, ElementInfo, HoverKind, PointerKind, classify};
use crate::core::magnetic::{Magnetic, Point, Rect};
use crate::core::nav::NavState;
use crate::core::reveal::{Reveal, RevealOptions, RevealPhase};
use crate::core::routes::{NAV_LINKS, Route};
use std::time::Duration;

// ============================================================================
// Stats row
// ============================================================================

#[test]
fn test_stats_row_counts_up_once() {
    for stat in ABOUT_STATS.iter().chain(PRODUCT_STATS) {
        let mut counter = Counter::new(stat.value, stat.suffix);
        assert!(counter.trigger());

        match counter.value().clone() {
            CounterValue::Numeric(target) => {
                let mut previous = 0;
                let mut t = 0.0;
                while t <= COUNTER_DURATION_MS {
                    let shown: i64 = counter.display_at(t).parse().unwrap();
                    assert!(shown >= previous, "{} went backwards", stat.label);
                    previous = shown;
                    t += 16.0;
                }
                assert_eq!(
                    counter.label_at(COUNTER_DURATION_MS),
                    format!("{}{}", target, stat.suffix)
                );
            }
            CounterValue::Literal(text) => {
                assert_eq!(counter.display_at(0.0), text);
            }
        }

        // Scrolling away and back never restarts it
        assert!(!counter.trigger());
    }
}

// ============================================================================
// Reveal
// ============================================================================

#[test]
fn test_reveal_survives_scroll_in_and_out() {
    let mut reveal = Reveal::new(RevealOptions::default().delay(200));
    let unseen = Reveal::new(RevealOptions::default());

    let observations = [false, true, false, true, true, false];
    let starts = observations
        .iter()
        .filter(|&&seen| reveal.observe(seen))
        .count();
    assert_eq!(starts, 1);

    reveal.settle();
    assert_eq!(reveal.phase(), RevealPhase::Settled);
    assert!(!reveal.observe(true));
    assert_ne!(reveal.style(), unseen.style());
}

// ============================================================================
// Contact page
// ============================================================================

#[test]
fn test_contact_visit_from_blank_to_confirmation() {
    let mut form = ContactForm::default();
    let mut flow = ContactFlow::new();
    let sink = SimulatedSink::default();

    // Blank submit is blocked before anything happens
    let err = flow.submit(&form).unwrap_err();
    assert_eq!(err.field(), FormField::Name);
    assert_eq!(flow.phase(), FormPhase::Idle);
    assert_eq!(flow.button_label(), SUBMIT_LABEL);

    form.set(FormField::Name, "Marco");
    form.set(FormField::Email, "marco@coastalbuild.com");
    form.set(FormField::Message, "Looking at Arc for four crews.");
    form.set(FormField::Interest, "pricing");
    assert_eq!(form.interest, Interest::Pricing);

    assert_eq!(flow.submit(&form), Ok(true));
    assert_eq!(flow.button_label(), SUBMITTING_LABEL);
    assert!(flow.confirmation().is_none());

    // Double clicks while the delay runs are ignored
    assert_eq!(flow.submit(&form), Ok(false));

    assert_eq!(sink.delay(), Duration::from_millis(1500));
    sink.accept(&form);
    flow.complete();

    assert_eq!(flow.phase(), FormPhase::Submitted);
    assert_eq!(flow.confirmation(), Some(CONFIRMATION_BODY));
}

// ============================================================================
// Chrome: navigation, cursor, magnetic buttons
// ============================================================================

#[test]
fn test_drawer_closes_on_every_nav_link() {
    let mut nav = NavState::new(Route::Home.path());
    for route in NAV_LINKS {
        nav.toggle_drawer();
        assert!(nav.is_drawer_open());
        nav.on_route_change(route.path());
        assert!(!nav.is_drawer_open());
        assert!(nav.is_active(route.path()));
    }
    assert_eq!(nav.pathname(), Route::Contact.path());
}

#[test]
fn test_cursor_over_magnetic_cta() {
    let mut cursor = CursorState::default();
    let mut magnetic = Magnetic::default();
    let rect = Rect::new(100.0, 100.0, 200.0, 50.0);

    let span = ElementInfo::new("span");
    let button = ElementInfo::new("button");
    let body = ElementInfo::new("body");
    let hover = classify([&span, &button, &body]);
    assert_eq!(hover, HoverKind::Interactive);

    cursor.on_move(Point::new(250.0, 130.0));
    cursor.on_hover(hover);
    let offset = magnetic.on_pointer_move(cursor.position, rect);
    assert!(offset.x > 0.0 && offset.y > 0.0);

    magnetic.on_pointer_leave();
    assert_eq!(magnetic.offset(), Point::ORIGIN);
}

#[test]
fn test_touch_devices_get_no_overlay() {
    assert!(!PointerKind::from_coarse_match(true).shows_overlay());
    assert!(PointerKind::from_coarse_match(false).shows_overlay());
}
