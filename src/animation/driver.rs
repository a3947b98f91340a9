//! The position driver: one reusable animated value per deck.
//!
//! The driver owns the top card's live offset from rest. While the user
//! drags, the offset is written directly; on release it is animated toward
//! one of three targets (rest, off-screen left, off-screen right). The host's
//! render loop steps the driver once per frame via [`PositionDriver::advance`]
//! and learns about completion from the returned [`DriverProgress`].

use std::time::Duration;

use tracing::trace;

use super::easing::{lerp_eased, Easing};
use super::spring::{Spring, SpringConfig};
use crate::geometry::Point;

/// Duration of the forced-exit animation.
pub const DEFAULT_SWIPE_OUT_DURATION: Duration = Duration::from_millis(250);

/// How the card's rotation is derived from its horizontal offset.
///
/// The rotation is a linear map of the offset over the domain
/// `[-domain_ratio * screen_width, +domain_ratio * screen_width]` onto
/// `[-max_angle_degrees, +max_angle_degrees]`, clamped at the endpoints.
#[derive(Debug, Clone, Copy)]
pub struct RotationConfig {
    /// Angle at the edge of the domain, in degrees.
    pub max_angle_degrees: f32,
    /// Half-width of the input domain as a multiple of the screen width.
    pub domain_ratio: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_angle_degrees: 120.0,
            domain_ratio: 1.5,
        }
    }
}

impl RotationConfig {
    /// Rotation angle in degrees for a horizontal offset on the given screen.
    pub fn angle_for(&self, offset_x: f32, screen_width: f32) -> f32 {
        let half_domain = self.domain_ratio * screen_width;
        if half_domain <= 0.0 {
            return 0.0;
        }
        (offset_x / half_domain).clamp(-1.0, 1.0) * self.max_angle_degrees
    }
}

/// Rotation angle in degrees using the default [`RotationConfig`].
#[inline]
pub fn rotation_degrees(offset_x: f32, screen_width: f32) -> f32 {
    RotationConfig::default().angle_for(offset_x, screen_width)
}

/// Result of one [`PositionDriver::advance`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriverProgress {
    /// No animation is running.
    Idle,
    /// An animation is running and has not yet reached its target.
    Running,
    /// An animation reached its target during this step. Reported exactly
    /// once per animation; the driver is idle afterwards.
    Completed(Point),
}

#[derive(Debug, Clone)]
enum Mode {
    Idle,
    Timed {
        from: Point,
        to: Point,
        elapsed: Duration,
        duration: Duration,
        easing: Easing,
    },
    Spring(Spring),
}

/// Interpolates the card offset over time toward a target.
///
/// One driver exists per deck and is reused across successive cards; the deck
/// resets it to rest as each swipe completes.
#[derive(Debug, Clone)]
pub struct PositionDriver {
    offset: Point,
    mode: Mode,
}

impl Default for PositionDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionDriver {
    /// Create a driver at rest.
    pub fn new() -> Self {
        Self {
            offset: Point::ZERO,
            mode: Mode::Idle,
        }
    }

    /// The current offset from rest.
    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Whether an animation is currently running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        !matches!(self.mode, Mode::Idle)
    }

    /// Set the offset directly, stopping any running animation.
    ///
    /// This is the live-drag path: the gesture writes through to the driver
    /// on every move.
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
        self.mode = Mode::Idle;
    }

    /// Snap to rest immediately, stopping any running animation.
    pub fn reset(&mut self) {
        self.offset = Point::ZERO;
        self.mode = Mode::Idle;
    }

    /// Start a fixed-duration eased animation toward `target`.
    pub fn animate_to(&mut self, target: Point, duration: Duration, easing: Easing) {
        trace!(x = target.x, y = target.y, ?duration, "timed animation started");
        self.mode = Mode::Timed {
            from: self.offset,
            to: target,
            elapsed: Duration::ZERO,
            duration,
            easing,
        };
    }

    /// Start a spring animation toward `target`.
    pub fn spring_to(&mut self, target: Point, config: SpringConfig) {
        trace!(x = target.x, y = target.y, "spring animation started");
        self.mode = Mode::Spring(Spring::new(config, self.offset, target));
    }

    /// Advance any running animation by `delta`.
    pub fn advance(&mut self, delta: Duration) -> DriverProgress {
        match &mut self.mode {
            Mode::Idle => DriverProgress::Idle,
            Mode::Timed {
                from,
                to,
                elapsed,
                duration,
                easing,
            } => {
                *elapsed += delta;
                let raw = if duration.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
                };

                self.offset = Point::new(
                    lerp_eased(*easing, from.x, to.x, raw),
                    lerp_eased(*easing, from.y, to.y, raw),
                );

                if raw >= 1.0 {
                    let target = *to;
                    self.offset = target;
                    self.mode = Mode::Idle;
                    DriverProgress::Completed(target)
                } else {
                    DriverProgress::Running
                }
            }
            Mode::Spring(spring) => {
                self.offset = spring.tick(delta);
                if spring.is_settled() {
                    let target = self.offset;
                    self.mode = Mode::Idle;
                    DriverProgress::Completed(target)
                } else {
                    DriverProgress::Running
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_rotation_at_rest_is_zero() {
        assert_eq!(rotation_degrees(0.0, 400.0), 0.0);
    }

    #[test]
    fn test_rotation_at_domain_edges() {
        // 1.5 * 400 = 600 maps to the full 120 degrees.
        assert_eq!(rotation_degrees(600.0, 400.0), 120.0);
        assert_eq!(rotation_degrees(-600.0, 400.0), -120.0);
    }

    #[test]
    fn test_rotation_clamps_beyond_domain() {
        assert_eq!(rotation_degrees(1000.0, 400.0), 120.0);
        assert_eq!(rotation_degrees(-1000.0, 400.0), -120.0);
    }

    #[test]
    fn test_rotation_is_linear_inside_domain() {
        // Halfway across the domain is half the angle.
        assert_eq!(rotation_degrees(300.0, 400.0), 60.0);
    }

    #[test]
    fn test_rotation_zero_width_screen() {
        assert_eq!(rotation_degrees(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_timed_animation_runs_to_completion() {
        let mut driver = PositionDriver::new();
        driver.set_offset(Point::new(150.0, 0.0));
        driver.animate_to(
            Point::new(400.0, 0.0),
            Duration::from_millis(250),
            Easing::Linear,
        );

        let mut completed = None;
        for _ in 0..32 {
            match driver.advance(FRAME) {
                DriverProgress::Completed(target) => {
                    completed = Some(target);
                    break;
                }
                DriverProgress::Running => {}
                DriverProgress::Idle => panic!("driver went idle without completing"),
            }
        }

        assert_eq!(completed, Some(Point::new(400.0, 0.0)));
        assert_eq!(driver.offset(), Point::new(400.0, 0.0));
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_completion_reported_once() {
        let mut driver = PositionDriver::new();
        driver.animate_to(Point::new(400.0, 0.0), Duration::from_millis(10), Easing::Linear);

        assert_eq!(
            driver.advance(Duration::from_millis(20)),
            DriverProgress::Completed(Point::new(400.0, 0.0))
        );
        assert_eq!(driver.advance(FRAME), DriverProgress::Idle);
    }

    #[test]
    fn test_timed_animation_interpolates() {
        let mut driver = PositionDriver::new();
        driver.animate_to(
            Point::new(100.0, 0.0),
            Duration::from_millis(100),
            Easing::Linear,
        );

        driver.advance(Duration::from_millis(50));
        assert_eq!(driver.offset(), Point::new(50.0, 0.0));
    }

    #[test]
    fn test_set_offset_cancels_animation() {
        let mut driver = PositionDriver::new();
        driver.animate_to(Point::new(400.0, 0.0), Duration::from_millis(250), Easing::Linear);
        assert!(driver.is_animating());

        driver.set_offset(Point::new(10.0, 0.0));
        assert!(!driver.is_animating());
        assert_eq!(driver.advance(FRAME), DriverProgress::Idle);
        assert_eq!(driver.offset(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_spring_animation_settles_at_rest() {
        let mut driver = PositionDriver::new();
        driver.set_offset(Point::new(90.0, 0.0));
        driver.spring_to(Point::ZERO, SpringConfig::default());

        let mut completed = false;
        for _ in 0..500 {
            if let DriverProgress::Completed(target) = driver.advance(FRAME) {
                assert_eq!(target, Point::ZERO);
                completed = true;
                break;
            }
        }

        assert!(completed);
        assert_eq!(driver.offset(), Point::ZERO);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut driver = PositionDriver::new();
        driver.animate_to(Point::new(400.0, 0.0), Duration::ZERO, Easing::Linear);
        assert_eq!(
            driver.advance(FRAME),
            DriverProgress::Completed(Point::new(400.0, 0.0))
        );
    }
}
