//! Spring physics for the snap-back animation.
//!
//! A snap back has no fixed duration: the card decelerates toward rest under
//! a damped spring and settles once both displacement and velocity drop below
//! a threshold.

use std::time::Duration;

use crate::geometry::Point;

/// Spring tuning parameters.
#[derive(Debug, Clone, Copy)]
pub struct SpringConfig {
    /// Spring stiffness (higher = faster pull toward the target).
    pub stiffness: f32,
    /// Damping coefficient (higher = less oscillation).
    pub damping: f32,
    /// Mass of the animated value.
    pub mass: f32,
    /// Displacement/velocity magnitude below which the spring settles.
    pub rest_threshold: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 180.0,
            damping: 24.0,
            mass: 1.0,
            rest_threshold: 0.5,
        }
    }
}

/// A 2D damped spring animating a [`Point`] toward a target.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    target: Point,
    current: Point,
    velocity: Point,
    settled: bool,
}

impl Spring {
    /// Create a spring at `initial` pulling toward `target`.
    pub fn new(config: SpringConfig, initial: Point, target: Point) -> Self {
        Self {
            config,
            target,
            current: initial,
            velocity: Point::ZERO,
            settled: false,
        }
    }

    /// Current value.
    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Whether the spring has settled at its target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance the spring by `delta` and return the new value.
    ///
    /// Once settled, the value is pinned exactly at the target.
    pub fn tick(&mut self, delta: Duration) -> Point {
        if self.settled {
            return self.target;
        }

        let dt = delta.as_secs_f32();
        let dx = self.current.x - self.target.x;
        let dy = self.current.y - self.target.y;

        // F = -kx - cv, semi-implicit Euler
        let ax = (-self.config.stiffness * dx - self.config.damping * self.velocity.x)
            / self.config.mass;
        let ay = (-self.config.stiffness * dy - self.config.damping * self.velocity.y)
            / self.config.mass;

        self.velocity.x += ax * dt;
        self.velocity.y += ay * dt;
        self.current.x += self.velocity.x * dt;
        self.current.y += self.velocity.y * dt;

        let displacement = self.current.distance_to(self.target);
        let speed = Point::ZERO.distance_to(self.velocity);
        if displacement < self.config.rest_threshold && speed < self.config.rest_threshold {
            self.current = self.target;
            self.velocity = Point::ZERO;
            self.settled = true;
        }

        self.current
    }
}
