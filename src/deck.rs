//! The swipeable card deck widget.
//!
//! [`SwipeDeck`] renders an ordered stack of data-backed cards. The user
//! drags the top card horizontally; on release it either springs back to
//! center or animates off-screen, invoking the caller's per-direction
//! callback and revealing the next card. Once every card has been swiped the
//! deck shows the caller's "no more cards" view.
//!
//! The deck is single-threaded and frame-driven: the host feeds it
//! [`PointerEvent`]s as they arrive and calls [`SwipeDeck::advance`] once per
//! frame with the elapsed time, then paints the scene returned by
//! [`SwipeDeck::scene`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use swipe_deck::{DeckConfig, DeckItem, SwipeDeck};
//!
//! struct Profile {
//!     id: u64,
//!     name: &'static str,
//! }
//!
//! impl DeckItem for Profile {
//!     fn key(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut deck = SwipeDeck::builder(DeckConfig::new(400.0))
//!     .data(vec![
//!         Profile { id: 1, name: "Ada" },
//!         Profile { id: 2, name: "Grace" },
//!     ])
//!     .render_card(|p: &Profile| p.name.to_string())
//!     .render_empty(|| "No more profiles".to_string())
//!     .on_swipe_right(|p| println!("liked {}", p.name))
//!     .build()
//!     .unwrap();
//!
//! // Per frame: deck.handle_pointer(..) for input, then
//! deck.advance(Duration::from_millis(16));
//! let scene = deck.scene();
//! # drop(scene);
//! ```

use std::time::Duration;

use tracing::{debug, warn};

use crate::animation::{
    DriverProgress, Easing, PositionDriver, RotationConfig, SpringConfig,
    DEFAULT_SWIPE_OUT_DURATION,
};
use crate::error::{DeckError, DeckResult};
use crate::event::{PointerEvent, PointerPhase};
use crate::geometry::Point;
use crate::gesture::{
    DragConfig, DragSession, ReleaseOutcome, SwipeDirection, DEFAULT_SWIPE_THRESHOLD_RATIO,
};
use crate::render::{compose_layers, CardTransform, DeckScene};

/// An item that can back a card in the deck.
///
/// The deck never inspects an item's fields; it only needs a stable key to
/// identify the card across frames.
pub trait DeckItem {
    /// Rendering key, unique within the deck.
    fn key(&self) -> u64;
}

/// Configuration for a [`SwipeDeck`].
///
/// The screen width is explicit rather than read from a display query, so the
/// same deck behaves identically on any simulated screen.
#[derive(Debug, Clone, Copy)]
pub struct DeckConfig {
    /// Width of the screen (or deck viewport) in pixels.
    pub screen_width: f32,
    /// Swipe threshold as a fraction of the screen width.
    pub threshold_ratio: f32,
    /// Duration of the forced-exit animation.
    pub swipe_out_duration: Duration,
    /// Rotation derivation for the dragged card.
    pub rotation: RotationConfig,
    /// Spring tuning for the snap-back animation.
    pub spring: SpringConfig,
}

impl DeckConfig {
    /// Create a config for the given screen width with default tuning.
    pub fn new(screen_width: f32) -> Self {
        Self {
            screen_width,
            threshold_ratio: DEFAULT_SWIPE_THRESHOLD_RATIO,
            swipe_out_duration: DEFAULT_SWIPE_OUT_DURATION,
            rotation: RotationConfig::default(),
            spring: SpringConfig::default(),
        }
    }

    fn validate(&self) -> DeckResult<()> {
        if !self.screen_width.is_finite() || self.screen_width <= 0.0 {
            return Err(DeckError::InvalidScreenWidth(self.screen_width));
        }
        if !(0.0..=1.0).contains(&self.threshold_ratio) || self.threshold_ratio == 0.0 {
            return Err(DeckError::InvalidThresholdRatio(self.threshold_ratio));
        }
        Ok(())
    }
}

type RenderCardFn<T, V> = Box<dyn FnMut(&T) -> V>;
type RenderEmptyFn<V> = Box<dyn FnMut() -> V>;
type SwipeCallback<T> = Box<dyn FnMut(&T)>;

/// Builder for [`SwipeDeck`].
///
/// `render_card` is required; everything else has a default. Swipe callbacks
/// default to no-ops.
pub struct SwipeDeckBuilder<T, V> {
    config: DeckConfig,
    data: Vec<T>,
    render_card: Option<RenderCardFn<T, V>>,
    render_empty: Option<RenderEmptyFn<V>>,
    on_swipe_left: Option<SwipeCallback<T>>,
    on_swipe_right: Option<SwipeCallback<T>>,
}

impl<T: DeckItem, V> SwipeDeckBuilder<T, V> {
    /// Set the deck's items, in top-to-bottom order.
    pub fn data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }

    /// Set the card renderer (required).
    pub fn render_card(mut self, f: impl FnMut(&T) -> V + 'static) -> Self {
        self.render_card = Some(Box::new(f));
        self
    }

    /// Set the "no more cards" renderer.
    ///
    /// Without one, the exhausted deck produces no visual at all.
    pub fn render_empty(mut self, f: impl FnMut() -> V + 'static) -> Self {
        self.render_empty = Some(Box::new(f));
        self
    }

    /// Set the callback invoked when a card is swiped left.
    pub fn on_swipe_left(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_left = Some(Box::new(f));
        self
    }

    /// Set the callback invoked when a card is swiped right.
    pub fn on_swipe_right(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_swipe_right = Some(Box::new(f));
        self
    }

    /// Validate the configuration and build the deck.
    pub fn build(self) -> DeckResult<SwipeDeck<T, V>> {
        self.config.validate()?;
        let render_card = self.render_card.ok_or(DeckError::MissingRenderCard)?;

        if self.render_empty.is_none() {
            debug!("deck built without an empty renderer; exhausted state will be blank");
        }

        Ok(SwipeDeck {
            session: DragSession::new(DragConfig {
                screen_width: self.config.screen_width,
                threshold_ratio: self.config.threshold_ratio,
            }),
            driver: PositionDriver::new(),
            config: self.config,
            items: self.data,
            cursor: 0,
            exiting: None,
            render_card,
            render_empty: self.render_empty,
            on_swipe_left: self.on_swipe_left.unwrap_or_else(|| Box::new(|_| {})),
            on_swipe_right: self.on_swipe_right.unwrap_or_else(|| Box::new(|_| {})),
        })
    }
}

/// A swipeable card deck.
///
/// See the [module documentation](self) for the interaction model.
pub struct SwipeDeck<T, V> {
    config: DeckConfig,
    items: Vec<T>,
    /// Number of items already swiped; index of the current top card.
    cursor: usize,
    session: DragSession,
    driver: PositionDriver,
    /// Direction of the forced-exit animation in flight, if any. While set,
    /// pointer input is ignored and no second exit can start.
    exiting: Option<SwipeDirection>,
    render_card: RenderCardFn<T, V>,
    render_empty: Option<RenderEmptyFn<V>>,
    on_swipe_left: SwipeCallback<T>,
    on_swipe_right: SwipeCallback<T>,
}

impl<T: DeckItem, V> SwipeDeck<T, V> {
    /// Start building a deck with the given configuration.
    pub fn builder(config: DeckConfig) -> SwipeDeckBuilder<T, V> {
        SwipeDeckBuilder {
            config,
            data: Vec::new(),
            render_card: None,
            render_empty: None,
            on_swipe_left: None,
            on_swipe_right: None,
        }
    }

    /// The deck's configuration.
    #[inline]
    pub fn config(&self) -> DeckConfig {
        self.config
    }

    /// The items backing the deck.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items already swiped.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of cards not yet swiped.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.cursor)
    }

    /// Whether every card has been swiped.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// The item currently on top of the deck, if any.
    pub fn top_item(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Whether a forced-exit animation is in flight.
    #[inline]
    pub fn is_exiting(&self) -> bool {
        self.exiting.is_some()
    }

    /// The top card's live offset from rest.
    #[inline]
    pub fn drag_offset(&self) -> Point {
        self.driver.offset()
    }

    /// The top card's current rotation in degrees, derived from its offset.
    pub fn rotation_degrees(&self) -> f32 {
        self.config
            .rotation
            .angle_for(self.driver.offset().x, self.config.screen_width)
    }

    /// Replace the deck's items.
    ///
    /// Resets the cursor and any in-flight drag or animation; mutating the
    /// data mid-deck is the caller's decision, made between frames.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
        self.exiting = None;
        self.driver.reset();
    }

    /// Feed a pointer event to the deck.
    ///
    /// Input is ignored while a forced-exit animation is in flight and once
    /// the deck is exhausted; in both cases there is no top card to drag.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.exiting.is_some() || self.is_exhausted() {
            return;
        }

        match event.phase {
            PointerPhase::Started => {
                // A fresh touch grabs the card at rest, interrupting any
                // snap-back still settling.
                self.session.begin(event.pointer_id, event.position);
                self.driver.set_offset(Point::ZERO);
            }
            PointerPhase::Moved => {
                if let Some(offset) = self.session.update(event.pointer_id, event.position) {
                    self.driver.set_offset(offset);
                }
            }
            PointerPhase::Ended => {
                match self.session.release(event.pointer_id) {
                    Some(ReleaseOutcome::SnapBack) => {
                        self.driver.spring_to(Point::ZERO, self.config.spring);
                    }
                    Some(ReleaseOutcome::Swipe(direction)) => {
                        self.start_forced_exit(direction);
                    }
                    None => {}
                }
            }
            PointerPhase::Cancelled => {
                if self.session.cancel(event.pointer_id) {
                    self.driver.spring_to(Point::ZERO, self.config.spring);
                }
            }
        }
    }

    /// Advance animations by `delta`.
    ///
    /// Call once per frame. Returns the direction of a swipe that completed
    /// during this step, if any; by the time it returns, the corresponding
    /// callback has fired, the cursor has advanced, and the next card is at
    /// rest.
    pub fn advance(&mut self, delta: Duration) -> Option<SwipeDirection> {
        match self.driver.advance(delta) {
            DriverProgress::Completed(_) => {
                let direction = self.exiting.take()?;
                self.complete_swipe(direction);
                Some(direction)
            }
            DriverProgress::Running | DriverProgress::Idle => None,
        }
    }

    /// Compose the scene for the current frame.
    pub fn scene(&mut self) -> DeckScene<V> {
        if self.is_exhausted() {
            return DeckScene::Exhausted(self.render_empty.as_mut().map(|f| f()));
        }

        let top_transform = CardTransform {
            translation: self.driver.offset(),
            rotation_degrees: self
                .config
                .rotation
                .angle_for(self.driver.offset().x, self.config.screen_width),
        };

        let Self {
            items,
            cursor,
            render_card,
            ..
        } = self;
        let entries = items[*cursor..]
            .iter()
            .map(|item| (item.key(), render_card(item)));

        DeckScene::Cards(compose_layers(entries, top_transform))
    }

    fn start_forced_exit(&mut self, direction: SwipeDirection) {
        debug!(?direction, cursor = self.cursor, "forced exit started");
        self.exiting = Some(direction);
        self.driver.animate_to(
            Point::new(direction.sign() * self.config.screen_width, 0.0),
            self.config.swipe_out_duration,
            Easing::EaseInOut,
        );
    }

    /// Finish a swipe: callback with the pre-swipe top item, then reset the
    /// drag state, then advance the cursor. The ordering matters: the
    /// callback must observe the old cursor, and the freshly revealed card
    /// must start from rest with no inherited offset or rotation.
    fn complete_swipe(&mut self, direction: SwipeDirection) {
        let Some(item) = self.items.get(self.cursor) else {
            // Unreachable while input gating holds; never index out of bounds.
            warn!(
                cursor = self.cursor,
                len = self.items.len(),
                "swipe completed past the end of the deck"
            );
            self.driver.reset();
            return;
        };

        match direction {
            SwipeDirection::Left => (self.on_swipe_left)(item),
            SwipeDirection::Right => (self.on_swipe_right)(item),
        }

        debug!(?direction, cursor = self.cursor, "swipe completed");
        self.driver.reset();
        self.cursor += 1;
    }
}
