//! Animation primitives for the deck.
//!
//! Two kinds of motion drive a card: a fixed-duration eased glide for the
//! forced exit and a spring for the snap back to rest. Both are stepped
//! explicitly by the host's frame loop through
//! [`PositionDriver::advance`], so there is no hidden clock and every
//! animation is deterministic under test.

mod driver;
mod easing;
mod spring;

pub use driver::{
    rotation_degrees, DriverProgress, PositionDriver, RotationConfig, DEFAULT_SWIPE_OUT_DURATION,
};
pub use easing::{ease, lerp_eased, Easing};
pub use spring::{Spring, SpringConfig};
