//! Drag session tracking and release classification.
//!
//! A [`DragSession`] records the cumulative horizontal displacement of the
//! top card during a touch interaction and, on release, classifies the
//! outcome: swipe left, swipe right, or snap back to rest. It is deliberately
//! independent of any rendering framework so the threshold logic can be
//! exercised directly in tests.

use tracing::trace;

use crate::geometry::Point;

/// Default swipe threshold as a fraction of the screen width.
///
/// A release with a horizontal displacement whose magnitude exceeds
/// `ratio * screen_width` completes a swipe; anything at or below it snaps
/// back.
pub const DEFAULT_SWIPE_THRESHOLD_RATIO: f32 = 0.25;

/// Direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// The card left the screen toward the left edge.
    Left,
    /// The card left the screen toward the right edge.
    Right,
}

impl SwipeDirection {
    /// Sign of the direction along the x axis (-1.0 for left, 1.0 for right).
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Displacement stayed within the threshold; the card returns to rest.
    SnapBack,
    /// Displacement crossed the threshold; the card exits in `direction`.
    Swipe(SwipeDirection),
}

/// Configuration for drag classification.
#[derive(Debug, Clone, Copy)]
pub struct DragConfig {
    /// Width of the screen (or deck viewport) in pixels.
    pub screen_width: f32,
    /// Swipe threshold as a fraction of `screen_width`.
    pub threshold_ratio: f32,
}

impl DragConfig {
    /// Create a config for the given screen width with the default ratio.
    pub fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            threshold_ratio: DEFAULT_SWIPE_THRESHOLD_RATIO,
        }
    }

    /// The displacement magnitude a release must exceed to complete a swipe.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.screen_width * self.threshold_ratio
    }
}

/// Tracks one pointer drag from start to release.
///
/// The session always accepts the gesture on start (no multi-touch
/// disambiguation). The vertical component of the offset is pinned to zero:
/// cards only travel horizontally.
#[derive(Debug, Clone)]
pub struct DragSession {
    config: DragConfig,
    /// Pointer that started the active drag, if any.
    active_pointer: Option<u64>,
    /// Position at which the active drag started.
    start_position: Point,
    /// Cumulative displacement since the drag started (y always 0).
    offset: Point,
}

impl DragSession {
    /// Create a session with the given configuration.
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            active_pointer: None,
            start_position: Point::ZERO,
            offset: Point::ZERO,
        }
    }

    /// The classification configuration.
    #[inline]
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Whether a drag is currently in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active_pointer.is_some()
    }

    /// The live drag offset (zero when no drag is active).
    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Begin tracking a drag for `pointer_id` at `position`.
    ///
    /// A drag already in progress for another pointer is replaced; the deck
    /// never reaches this state because it filters by pointer id, but the
    /// session itself does not assume that.
    pub fn begin(&mut self, pointer_id: u64, position: Point) {
        trace!(pointer_id, x = position.x, y = position.y, "drag started");
        self.active_pointer = Some(pointer_id);
        self.start_position = position;
        self.offset = Point::ZERO;
    }

    /// Update the drag with a new pointer position.
    ///
    /// Returns the new offset, or `None` if `pointer_id` is not the active
    /// pointer.
    pub fn update(&mut self, pointer_id: u64, position: Point) -> Option<Point> {
        if self.active_pointer != Some(pointer_id) {
            return None;
        }
        self.offset = Point::new(position.x - self.start_position.x, 0.0);
        Some(self.offset)
    }

    /// End the drag and classify the release.
    ///
    /// Returns `None` if `pointer_id` is not the active pointer. The session
    /// resets its own offset on release; the caller owns any animation that
    /// follows.
    pub fn release(&mut self, pointer_id: u64) -> Option<ReleaseOutcome> {
        if self.active_pointer != Some(pointer_id) {
            return None;
        }
        let dx = self.offset.x;
        let threshold = self.config.threshold();

        let outcome = if dx > threshold {
            ReleaseOutcome::Swipe(SwipeDirection::Right)
        } else if dx < -threshold {
            ReleaseOutcome::Swipe(SwipeDirection::Left)
        } else {
            ReleaseOutcome::SnapBack
        };

        trace!(dx, threshold, ?outcome, "drag released");
        self.active_pointer = None;
        self.offset = Point::ZERO;
        Some(outcome)
    }

    /// Abort the drag without classifying it.
    ///
    /// Used for `PointerPhase::Cancelled`; the caller decides how to return
    /// the card to rest.
    pub fn cancel(&mut self, pointer_id: u64) -> bool {
        if self.active_pointer != Some(pointer_id) {
            return false;
        }
        trace!(pointer_id, "drag cancelled");
        self.active_pointer = None;
        self.offset = Point::ZERO;
        true
    }
}
