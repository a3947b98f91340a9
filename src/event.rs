//! Pointer input events consumed by the deck.
//!
//! The deck follows a single-pointer horizontal drag model: it tracks one
//! pointer at a time and only the horizontal component of its movement. Hosts
//! translate their platform's touch or mouse events into [`PointerEvent`]s
//! and feed them to [`SwipeDeck::handle_pointer`](crate::SwipeDeck::handle_pointer).

use crate::geometry::Point;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer made contact.
    Started,
    /// The pointer moved while in contact.
    Moved,
    /// The pointer was lifted, ending the interaction normally.
    Ended,
    /// The platform interrupted the interaction (e.g. an incoming call or a
    /// window losing focus mid-gesture).
    Cancelled,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Identifier of the pointer. Events from a pointer other than the one
    /// that started the current drag are ignored.
    pub pointer_id: u64,
    /// Position in deck-local coordinates.
    pub position: Point,
    /// Phase of the interaction.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(pointer_id: u64, position: Point, phase: PointerPhase) -> Self {
        Self {
            pointer_id,
            position,
            phase,
        }
    }
}
