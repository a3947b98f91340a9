//! Error types for the deck.

use thiserror::Error;

/// Errors that can occur while building a deck.
///
/// All of these are configuration mistakes surfaced at construction time;
/// once a deck is built, its operations do not fail.
#[derive(Error, Debug)]
pub enum DeckError {
    /// No card renderer was supplied. A deck without one has no visual
    /// output at all, so this fails fast instead of rendering nothing.
    #[error("no card renderer supplied; call render_card()")]
    MissingRenderCard,

    /// The configured screen width is zero or negative, which would make the
    /// swipe threshold and rotation domain degenerate.
    #[error("invalid screen width: {0}")]
    InvalidScreenWidth(f32),

    /// The swipe threshold ratio is outside the usable (0, 1] range.
    #[error("invalid swipe threshold ratio: {0}")]
    InvalidThresholdRatio(f32),
}

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
