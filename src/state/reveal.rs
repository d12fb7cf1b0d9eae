//! One-shot visibility tracking for scroll-driven reveals.
//!
//! Every section marks elements with a reveal class; a single observer per
//! owner watches them and flips each into its visible state the first time
//! it enters the viewport, then stops tracking it. The controller here is
//! the bookkeeping half of that mechanism: which targets are outstanding,
//! which have latched. The DOM half lives in [`crate::dom`].

use std::collections::BTreeSet;
use std::time::Duration;

/// Opaque handle for a tracked element, assigned by the owner.
pub type TargetId = usize;

/// Intersection tuning for one observer instance: the fraction of the
/// target that must be on screen, and a bottom root-margin that fires the
/// reveal slightly before the element clears the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealProfile {
    pub threshold: f64,
    pub root_margin_bottom: i32,
}

impl RevealProfile {
    /// App-level sweep over every `.reveal` element.
    pub const PAGE: Self = Self { threshold: 0.12, root_margin_bottom: -40 };
    /// Section headers and text blocks.
    pub const SECTION: Self = Self { threshold: 0.15, root_margin_bottom: 0 };
    /// Project cards, which stagger in and can tolerate an earlier trigger.
    pub const CARD: Self = Self { threshold: 0.10, root_margin_bottom: 0 };
    /// Skill bars, revealed only once a fifth of the bar is visible.
    pub const BAR: Self = Self { threshold: 0.20, root_margin_bottom: 0 };

    /// CSS `rootMargin` string for an intersection observer.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.root_margin_bottom)
    }
}

/// Per-step delay for card and bar reveals.
pub const STAGGER_STEP: Duration = Duration::from_millis(80);
/// Per-step delay for the circular skill gauges.
pub const GAUGE_STAGGER_STEP: Duration = Duration::from_millis(100);

/// Index-based animation delay, kept as a pure function so the stagger
/// schedule is testable apart from any timer.
#[must_use]
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Inline `transition-delay` value for a staggered child.
#[must_use]
pub fn stagger_css(index: usize, step: Duration) -> String {
    format!("{}ms", stagger_delay(index, step).as_millis())
}

/// Tracks which targets are still waiting to intersect and which have
/// latched visible. Visibility is monotonic: a target that has been marked
/// visible is never tracked, or hidden, again.
#[derive(Debug, Default)]
pub struct RevealController {
    pending: BTreeSet<TargetId>,
    visible: BTreeSet<TargetId>,
}

impl RevealController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target for visibility tracking. Re-observing an already
    /// visible target is a no-op; the latch holds.
    pub fn observe(&mut self, id: TargetId) {
        if !self.visible.contains(&id) {
            self.pending.insert(id);
        }
    }

    /// Latch a target visible. Returns `true` exactly once per observed
    /// target; the target is deregistered at the same moment, so repeat
    /// intersections and unknown ids report `false`.
    pub fn mark_visible(&mut self, id: TargetId) -> bool {
        if self.pending.remove(&id) {
            self.visible.insert(id);
            true
        } else {
            false
        }
    }

    /// Forget a target that left the render tree before intersecting.
    /// Silently ignores ids that were never observed.
    pub fn drop_target(&mut self, id: TargetId) {
        self.pending.remove(&id);
    }

    #[must_use]
    pub fn is_visible(&self, id: TargetId) -> bool {
        self.visible.contains(&id)
    }

    /// Number of targets still awaiting their first intersection.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drop every outstanding registration; called on owner teardown.
    /// Targets that already latched stay visible.
    pub fn dispose(&mut self) {
        self.pending.clear();
    }
}
