//! Fairway - A top-down mini-golf simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball dynamics, terrain, shots, session state)
//! - `settings`: Data-driven input and accuracy tuning
//! - `error`: Course and settings loading errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{CourseError, SettingsError};
pub use settings::{PowerInputMode, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default course bounds (the drawing surface)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 4.0;
    /// Default cup radius
    pub const HOLE_RADIUS: f32 = 8.0;

    /// Per-tick velocity multiplier on grass
    pub const FRICTION: f32 = 0.98;
    /// Per-tick velocity multiplier inside a sand trap
    pub const SAND_FRICTION: f32 = 0.85;
    /// Below this on both axes a grounded ball stops
    pub const MIN_VELOCITY: f32 = 0.1;

    /// Vertical acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.3;
    /// Horizontal speed kept on the landing tick
    pub const LANDING_DAMPING: f32 = 0.6;
    /// Velocity factor applied on hitting a course edge
    pub const WALL_RESTITUTION: f32 = -0.7;
    /// Fraction of speed kept when bouncing off a tree
    pub const TREE_BOUNCE: f32 = 0.5;

    /// Initial ground speed per unit of putt distance (1 - FRICTION, so a putt rolls ~its distance)
    pub const PUTT_SPEED_SCALE: f32 = 0.02;
    /// Initial vertical speed per unit of (power x loft)
    pub const LOFT_SCALE: f32 = 0.4;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
