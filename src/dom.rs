//! Browser glue for the state machines: intersection observation, smooth
//! anchor scrolling, and the body scroll lock. Components reach the
//! document and window only through this module, so everything in
//! [`crate::state`] stays testable without a rendering environment.
//!
//! Compiled for the server too, but only invoked from effects and event
//! handlers, which never run during server rendering.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{document, window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use crate::state::reveal::{RevealController, RevealProfile};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn make_observer(
    profile: RevealProfile,
    callback: &ObserverCallback,
) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(profile.threshold));
    options.set_root_margin(&profile.root_margin());
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()
}

/// Page-wide reveal sweep: watches every element carrying a reveal class,
/// latches it `visible` on first intersection via a [`RevealController`],
/// and unobserves it. Dropping the handle disconnects the observer and
/// disposes outstanding registrations (section teardown).
pub struct RevealObserver {
    observer: IntersectionObserver,
    controller: Rc<RefCell<RevealController>>,
    _callback: ObserverCallback,
}

impl RevealObserver {
    /// Observe all current `.reveal`/`.reveal-left`/`.reveal-right`
    /// elements. Returns `None` outside a browser document.
    #[must_use]
    pub fn watch(profile: RevealProfile) -> Option<Self> {
        let list = document()
            .query_selector_all(".reveal, .reveal-left, .reveal-right")
            .ok()?;
        let elements: Vec<Element> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        let mut controller = RevealController::new();
        for id in 0..elements.len() {
            controller.observe(id);
        }
        let controller = Rc::new(RefCell::new(controller));

        let elements = Rc::new(elements);
        let cb_controller = Rc::clone(&controller);
        let cb_elements = Rc::clone(&elements);
        let callback: ObserverCallback =
            Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(id) = cb_elements.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if cb_controller.borrow_mut().mark_visible(id) {
                        let _ = target.class_list().add_1("visible");
                        observer.unobserve(&target);
                    }
                }
            });

        let observer = make_observer(profile, &callback)?;
        for el in elements.iter() {
            observer.observe(el);
        }

        Some(Self { observer, controller, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.controller.borrow_mut().dispose();
        self.observer.disconnect();
    }
}

/// One-shot observer for a single element, used by cards and skill bars
/// that enter the tree after the page sweep has run (e.g. on a filter
/// transition). Dropping the handle cancels the pending observation.
pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

#[must_use]
pub fn reveal_once(target: &Element, profile: RevealProfile) -> Option<RevealHandle> {
    let controller = Rc::new(RefCell::new(RevealController::new()));
    controller.borrow_mut().observe(0);

    let cb_controller = Rc::clone(&controller);
    let callback: ObserverCallback =
        Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() && cb_controller.borrow_mut().mark_visible(0) {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        });

    let observer = make_observer(profile, &callback)?;
    observer.observe(target);
    Some(RevealHandle { observer, _callback: callback })
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smooth-scroll to a section anchor by element id. Missing anchors are a
/// silent no-op.
pub fn scroll_to(anchor: &str) {
    let Some(el) = document().get_element_by_id(anchor) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Suspend or restore background page scrolling. Driven by the
/// [`crate::state::gallery::ScrollLock`] held by the portfolio section.
pub fn apply_scroll_lock(held: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    if held {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

/// Current vertical scroll position of the window.
#[must_use]
pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Document-relative top of a section, for the navbar scroll-spy. `None`
/// when the section is not in the tree.
#[must_use]
pub fn section_top(id: &str) -> Option<f64> {
    let el = document().get_element_by_id(id)?;
    let html: web_sys::HtmlElement = el.dyn_into().ok()?;
    Some(f64::from(html.offset_top()))
}
