//! Modal gallery state: which project is open, which image is current,
//! and the scroll-lock resource held while the overlay is up.

use std::cmp::Ordering;

use crate::content::projects::Project;

/// Horizontal drag displacement (CSS pixels) required for a swipe to
/// resolve into a slide change; anything shorter snaps back.
pub const DRAG_THRESHOLD_PX: f64 = 60.0;

/// State of an open project modal. Exists only while a modal is on screen;
/// dismissing the modal drops it, so the image index always starts at 0 on
/// the next open.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    project: &'static Project,
    images: Vec<&'static str>,
    index: usize,
    direction: i8,
}

impl GalleryView {
    /// Open a project at its first image.
    #[must_use]
    pub fn open(project: &'static Project) -> Self {
        Self { project, images: project.image_set(), index: 0, direction: 0 }
    }

    #[must_use]
    pub fn project(&self) -> &'static Project {
        self.project
    }

    #[must_use]
    pub fn images(&self) -> &[&'static str] {
        &self.images
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Index of the image currently shown; always within `[0, count)` for
    /// any non-empty image set.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&'static str> {
        self.images.get(self.index).copied()
    }

    /// Direction of the last navigation, used to orient the slide-in
    /// animation: -1 from the left, +1 from the right, 0 before any move.
    #[must_use]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    /// Step to the neighbouring image, wrapping in both directions.
    pub fn advance(&mut self, direction: i8) {
        let n = self.images.len();
        if n < 2 {
            return;
        }
        let step = match direction {
            1 => 1,
            -1 => n - 1,
            _ => return,
        };
        self.index = (self.index + step) % n;
        self.direction = direction;
    }

    /// Jump straight to a dot indicator. The animation direction falls out
    /// of whether the target is ahead of or behind the current image;
    /// out-of-range targets and the current index are no-ops.
    pub fn jump(&mut self, target: usize) {
        if target >= self.images.len() {
            return;
        }
        match target.cmp(&self.index) {
            Ordering::Greater => self.direction = 1,
            Ordering::Less => self.direction = -1,
            Ordering::Equal => return,
        }
        self.index = target;
    }
}

/// Resolve a completed horizontal drag into a slide direction. Dragging
/// left (negative offset) pulls the next image in, dragging right the
/// previous one; below the threshold the image snaps back.
#[must_use]
pub fn resolve_drag(offset_x: f64) -> Option<i8> {
    if offset_x <= -DRAG_THRESHOLD_PX {
        Some(1)
    } else if offset_x >= DRAG_THRESHOLD_PX {
        Some(-1)
    } else {
        None
    }
}

/// The document-level scroll suspension held while a modal is open. A
/// plain boolean resource: acquiring twice or releasing twice reports
/// `false`, so the held count can never leave `{0, 1}` or go negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    #[must_use]
    pub const fn new() -> Self {
        Self { held: false }
    }

    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }

    /// Take the lock. Returns whether the state changed.
    pub fn acquire(&mut self) -> bool {
        let changed = !self.held;
        self.held = true;
        changed
    }

    /// Release the lock. Must hold on every exit path from an open modal,
    /// including owner teardown. Returns whether the state changed.
    pub fn release(&mut self) -> bool {
        let changed = self.held;
        self.held = false;
        changed
    }
}
