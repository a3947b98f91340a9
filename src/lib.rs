//! A swipeable card deck ("Tinder-style" stack).
//!
//! The deck renders an ordered stack of data-backed cards. The user drags
//! the top card horizontally; on release it either springs back to center or
//! animates off-screen left/right, invoking a caller-supplied callback per
//! swipe direction and revealing the next card. When every card has been
//! swiped, the deck shows a caller-supplied "no more cards" view.
//!
//! The crate is framework-independent: it consumes abstract
//! [`PointerEvent`]s, is stepped once per frame by the host's render loop,
//! and produces a [`DeckScene`] describing what to paint. Nothing here talks
//! to a window system, which also makes every behavior deterministic under
//! test.
//!
//! # Architecture
//!
//! - [`gesture`] — drag session tracking and release classification against
//!   the swipe threshold.
//! - [`animation`] — the reusable position driver: spring snap-back, timed
//!   forced exit, and the offset-to-rotation derivation.
//! - [`render`] — pure composition of the card stack into back-to-front
//!   layers.
//! - [`deck`] — the [`SwipeDeck`] widget wiring the three together around a
//!   cursor into the caller's items.
//!
//! # Logging
//!
//! Instrumented with the `tracing` crate; swipe lifecycle events are logged
//! at debug level and per-event detail at trace level. Install a subscriber
//! (e.g. `tracing_subscriber::fmt::init()`) to see them.

pub mod animation;
pub mod deck;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod render;

pub use animation::{DriverProgress, Easing, PositionDriver, RotationConfig, SpringConfig};
pub use deck::{DeckConfig, DeckItem, SwipeDeck, SwipeDeckBuilder};
pub use error::{DeckError, DeckResult};
pub use event::{PointerEvent, PointerPhase};
pub use geometry::Point;
pub use gesture::{DragConfig, DragSession, ReleaseOutcome, SwipeDirection};
pub use render::{CardLayer, CardTransform, DeckScene};
