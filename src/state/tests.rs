//! Unit tests for the view-state machines. All pure: no DOM, no timers.

use std::time::Duration;

use super::contact::{ContactForm, Field, Phase, SUBMIT_DELAY};
use super::filter::{visible_projects, Filter};
use super::gallery::{resolve_drag, GalleryView, ScrollLock, DRAG_THRESHOLD_PX};
use super::reveal::{stagger_css, stagger_delay, RevealController, RevealProfile, STAGGER_STEP};
use crate::content::projects::{by_id, Category, PROJECTS};

// ============================================================================
// Reveal controller
// ============================================================================

#[test]
fn reveal_latch_fires_exactly_once() {
    let mut reveal = RevealController::new();
    reveal.observe(7);

    assert!(!reveal.is_visible(7));
    assert!(reveal.mark_visible(7));
    assert!(reveal.is_visible(7));

    // Repeat intersections after the latch are ignored.
    assert!(!reveal.mark_visible(7));
    assert!(reveal.is_visible(7));
    assert_eq!(reveal.pending(), 0);
}

#[test]
fn reveal_unknown_target_is_ignored() {
    let mut reveal = RevealController::new();
    assert!(!reveal.mark_visible(42));
    assert!(!reveal.is_visible(42));
}

#[test]
fn reveal_visibility_is_monotonic() {
    let mut reveal = RevealController::new();
    reveal.observe(1);
    assert!(reveal.mark_visible(1));

    // Re-observing a latched target must not re-arm it.
    reveal.observe(1);
    assert_eq!(reveal.pending(), 0);
    assert!(!reveal.mark_visible(1));
    assert!(reveal.is_visible(1));
}

#[test]
fn reveal_dropped_target_is_silent() {
    let mut reveal = RevealController::new();
    reveal.observe(3);
    reveal.drop_target(3);
    assert_eq!(reveal.pending(), 0);
    assert!(!reveal.mark_visible(3));

    // Dropping something never observed is also fine.
    reveal.drop_target(99);
}

#[test]
fn reveal_dispose_clears_pending_keeps_latched() {
    let mut reveal = RevealController::new();
    reveal.observe(1);
    reveal.observe(2);
    assert!(reveal.mark_visible(1));

    reveal.dispose();
    assert_eq!(reveal.pending(), 0);
    assert!(!reveal.mark_visible(2));
    assert!(reveal.is_visible(1));
}

#[test]
fn reveal_controllers_are_independent() {
    let mut a = RevealController::new();
    let mut b = RevealController::new();
    a.observe(1);
    b.observe(1);

    assert!(a.mark_visible(1));
    assert!(!b.is_visible(1));
    assert!(b.mark_visible(1));
}

#[test]
fn stagger_delay_is_linear_from_zero() {
    assert_eq!(stagger_delay(0, STAGGER_STEP), Duration::ZERO);
    assert_eq!(stagger_delay(1, STAGGER_STEP), Duration::from_millis(80));
    assert_eq!(stagger_delay(5, STAGGER_STEP), Duration::from_millis(400));
    assert_eq!(stagger_css(3, STAGGER_STEP), "240ms");
}

#[test]
fn reveal_profile_root_margin_format() {
    assert_eq!(RevealProfile::PAGE.root_margin(), "0px 0px -40px 0px");
    assert_eq!(RevealProfile::SECTION.root_margin(), "0px 0px 0px 0px");
}

// ============================================================================
// Portfolio filter
// ============================================================================

#[test]
fn filter_all_yields_full_catalog() {
    let visible = visible_projects(Filter::All);
    assert_eq!(visible.len(), PROJECTS.len());
    let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn filter_interior_yields_five_in_catalog_order() {
    let visible = visible_projects(Filter::Category(Category::Interior));
    assert_eq!(visible.len(), 5);
    assert!(visible.iter().all(|p| p.category == Category::Interior));
    let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 4, 5, 6, 7]);

    // Switching back to All restores all eight.
    assert_eq!(visible_projects(Filter::All).len(), 8);
}

#[test]
fn filter_result_is_always_a_subset() {
    for filter in Filter::options() {
        let visible = visible_projects(filter);
        assert!(visible.len() <= PROJECTS.len());
        assert!(visible.iter().all(|p| PROJECTS.iter().any(|q| q.id == p.id)));

        // Relative order matches the catalog.
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}

#[test]
fn filter_options_derive_from_catalog() {
    let options = Filter::options();
    assert_eq!(
        options,
        vec![
            Filter::All,
            Filter::Category(Category::Architecture),
            Filter::Category(Category::Interior),
            Filter::Category(Category::Cafe),
        ]
    );
    assert_eq!(options[0].label(), "All");

    // Every non-All option has at least one project behind it.
    for opt in &options[1..] {
        assert!(!visible_projects(*opt).is_empty());
    }
}

#[test]
fn filter_default_is_all() {
    assert_eq!(Filter::default(), Filter::All);
}

// ============================================================================
// Gallery modal
// ============================================================================

fn cafe() -> GalleryView {
    GalleryView::open(by_id(8).expect("cafe project in catalog"))
}

#[test]
fn gallery_opens_at_first_image() {
    let view = cafe();
    assert_eq!(view.index(), 0);
    assert_eq!(view.direction(), 0);
    assert_eq!(view.image_count(), 5);
    assert_eq!(view.current_image(), Some("/exterior/cafe1.jpeg"));
}

#[test]
fn gallery_advance_wraps_forward() {
    // Five-image set: four forward steps then one more returns to 0.
    let mut view = cafe();
    for expected in [1, 2, 3, 4] {
        view.advance(1);
        assert_eq!(view.index(), expected);
    }
    view.advance(1);
    assert_eq!(view.index(), 0);
    assert_eq!(view.direction(), 1);
}

#[test]
fn gallery_advance_wraps_backward() {
    let mut view = cafe();
    view.advance(-1);
    assert_eq!(view.index(), 4);
    assert_eq!(view.direction(), -1);
}

#[test]
fn gallery_index_stays_in_bounds() {
    let mut view = cafe();
    let steps = [1, 1, -1, 1, 1, 1, -1, -1, -1, -1, 1, -1];
    for d in steps {
        view.advance(d);
        assert!(view.index() < view.image_count());
    }
}

#[test]
fn gallery_single_image_never_advances() {
    let mut view = GalleryView::open(by_id(1).expect("project 1 in catalog"));
    assert_eq!(view.image_count(), 1);
    view.advance(1);
    view.advance(-1);
    assert_eq!(view.index(), 0);
    assert_eq!(view.direction(), 0);
}

#[test]
fn gallery_reopen_resets_index() {
    let mut view = cafe();
    view.advance(1);
    view.advance(1);
    assert_eq!(view.index(), 2);

    // Opening a project is always a fresh view at index 0.
    let reopened = cafe();
    assert_eq!(reopened.index(), 0);
}

#[test]
fn gallery_jump_derives_direction() {
    let mut view = cafe();
    view.jump(3);
    assert_eq!(view.index(), 3);
    assert_eq!(view.direction(), 1);

    view.jump(1);
    assert_eq!(view.index(), 1);
    assert_eq!(view.direction(), -1);

    // Jumping to the current index changes nothing.
    view.jump(1);
    assert_eq!(view.index(), 1);
    assert_eq!(view.direction(), -1);
}

#[test]
fn gallery_jump_out_of_range_is_noop() {
    let mut view = cafe();
    view.jump(5);
    assert_eq!(view.index(), 0);
    assert_eq!(view.direction(), 0);
}

#[test]
fn drag_resolution_threshold() {
    assert_eq!(resolve_drag(-120.0), Some(1));
    assert_eq!(resolve_drag(120.0), Some(-1));
    assert_eq!(resolve_drag(-DRAG_THRESHOLD_PX), Some(1));
    assert_eq!(resolve_drag(DRAG_THRESHOLD_PX), Some(-1));
    assert_eq!(resolve_drag(-59.9), None);
    assert_eq!(resolve_drag(59.9), None);
    assert_eq!(resolve_drag(0.0), None);
}

#[test]
fn scroll_lock_is_exactly_once() {
    let mut lock = ScrollLock::new();
    assert!(!lock.is_held());

    assert!(lock.acquire());
    assert!(lock.is_held());

    // Double acquire is observable as a no-op, never a second hold.
    assert!(!lock.acquire());
    assert!(lock.is_held());

    assert!(lock.release());
    assert!(!lock.is_held());

    // Double release never goes negative.
    assert!(!lock.release());
    assert!(!lock.is_held());
}

#[test]
fn scroll_lock_per_modal_cycle() {
    let mut lock = ScrollLock::new();
    for _ in 0..3 {
        assert!(lock.acquire());
        assert!(lock.release());
    }
}

// ============================================================================
// Contact form
// ============================================================================

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Jane".into());
    form.set_field(Field::Email, "j@x.com".into());
    form.set_field(Field::Subject, "Hi".into());
    form.set_field(Field::Message, "Hello".into());
    form
}

#[test]
fn contact_full_submission_flow() {
    let mut form = filled_form();
    assert_eq!(form.phase(), Phase::Editing);

    assert!(form.submit());
    assert_eq!(form.phase(), Phase::Submitting);
    assert!(form.is_submitting());
    assert!(!form.is_submitted());

    form.finish_submission();
    assert_eq!(form.phase(), Phase::Submitted);
    assert!(!form.is_submitting());
    assert!(form.is_submitted());
}

#[test]
fn contact_submit_requires_all_fields() {
    let mut form = filled_form();
    form.set_field(Field::Message, "   ".into());
    assert!(!form.is_complete());
    assert!(!form.submit());
    assert_eq!(form.phase(), Phase::Editing);
}

#[test]
fn contact_never_submitting_and_submitted_at_once() {
    let mut form = filled_form();
    assert!(!(form.is_submitting() && form.is_submitted()));
    form.submit();
    assert!(!(form.is_submitting() && form.is_submitted()));
    form.finish_submission();
    assert!(!(form.is_submitting() && form.is_submitted()));
}

#[test]
fn contact_submitted_is_terminal() {
    let mut form = filled_form();
    assert!(form.submit());
    form.finish_submission();

    // No transition leaves Submitted.
    assert!(!form.submit());
    form.finish_submission();
    assert_eq!(form.phase(), Phase::Submitted);

    // Edits after submission are discarded.
    form.set_field(Field::Name, "Someone Else".into());
    assert_eq!(form.field(Field::Name), "Jane");
}

#[test]
fn contact_double_submit_is_refused() {
    let mut form = filled_form();
    assert!(form.submit());
    assert!(!form.submit());
    assert_eq!(form.phase(), Phase::Submitting);
}

#[test]
fn contact_finish_without_submit_is_noop() {
    let mut form = filled_form();
    form.finish_submission();
    assert_eq!(form.phase(), Phase::Editing);
}

#[test]
fn contact_focus_tracking() {
    let mut form = ContactForm::new();
    assert_eq!(form.focused(), None);
    form.focus(Field::Email);
    assert_eq!(form.focused(), Some(Field::Email));
    form.blur();
    assert_eq!(form.focused(), None);

    // Submitting clears any lingering focus.
    let mut form = filled_form();
    form.focus(Field::Message);
    assert!(form.submit());
    assert_eq!(form.focused(), None);
}

#[test]
fn contact_submit_delay_matches_simulated_send() {
    assert_eq!(SUBMIT_DELAY, Duration::from_millis(1800));
}
