//! Stack scene composition.
//!
//! Rendering is a pure function of the deck's state: given the items, the
//! cursor, and the live card transform, it produces a [`DeckScene`] the host
//! can paint. The crate never draws anything itself; each card's visual is
//! whatever the caller's `render_card` closure returns.

use crate::geometry::Point;

/// Transform applied to a card when it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransform {
    /// Translation from the card's rest position.
    pub translation: Point,
    /// Rotation around the card's center, in degrees.
    pub rotation_degrees: f32,
}

impl CardTransform {
    /// The identity transform (card at rest).
    pub const IDENTITY: Self = Self {
        translation: Point::ZERO,
        rotation_degrees: 0.0,
    };
}

/// One card in the composed scene.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayer<V> {
    /// Rendering key of the item backing this card.
    pub key: u64,
    /// The caller-rendered visual for the card.
    pub view: V,
    /// Transform to apply when painting.
    pub transform: CardTransform,
    /// Whether this card receives pointer input. Only the top of the deck is
    /// interactive.
    pub interactive: bool,
}

/// The composed scene for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckScene<V> {
    /// Cards to paint, in back-to-front order: the last layer is the
    /// interactive top of the deck and occludes the rest.
    Cards(Vec<CardLayer<V>>),
    /// The deck is exhausted. Holds the caller's "no more cards" view, or
    /// `None` if no empty renderer was configured.
    Exhausted(Option<V>),
}

impl<V> DeckScene<V> {
    /// The interactive top card, if any.
    pub fn top_card(&self) -> Option<&CardLayer<V>> {
        match self {
            Self::Cards(layers) => layers.last().filter(|layer| layer.interactive),
            Self::Exhausted(_) => None,
        }
    }

    /// Number of card layers in the scene.
    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(layers) => layers.len(),
            Self::Exhausted(_) => 0,
        }
    }
}

/// Compose the card layers for a deck that still has cards.
///
/// `entries` yields `(key, view)` pairs for every item from the cursor to the
/// end of the deck, in deck order; the first entry becomes the top card and
/// receives `top_transform`. Already-swiped items must not be passed in.
/// Output order is back-to-front per the deck's occlusion rule.
pub fn compose_layers<V>(
    entries: impl IntoIterator<Item = (u64, V)>,
    top_transform: CardTransform,
) -> Vec<CardLayer<V>> {
    let mut layers: Vec<CardLayer<V>> = entries
        .into_iter()
        .enumerate()
        .map(|(i, (key, view))| {
            let top = i == 0;
            CardLayer {
                key,
                view,
                transform: if top {
                    top_transform
                } else {
                    CardTransform::IDENTITY
                },
                interactive: top,
            }
        })
        .collect();

    // Later-indexed cards are painted first so the top of the deck lands on top.
    layers.reverse();
    layers
}
