//! Shot resolution: aim + power + club -> launch
//!
//! Power is club-relative. Every club's meter tops out at `max_power`, and
//! a full swing covers that club's `max_distance`. A ball on the green (or
//! any putter stroke) is putted along the ground; everything else is
//! launched into the air.

use glam::Vec2;

use super::state::{Ball, Club};
use super::terrain::Terrain;
use super::tick::airborne_ticks;
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// A committed shot, consumed once by [`resolve_shot`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotIntent {
    pub target: Vec2,
    /// Raw meter power, in the club's power units
    pub power: f32,
    /// How clean the strike was (1.0 = perfect)
    pub accuracy: f32,
    /// Radians added to the aim direction
    pub angle_error: f32,
    pub club: Club,
}

/// What the ball was given
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedShot {
    /// Launch direction (radians)
    pub angle: f32,
    /// Nominal distance after the club cap
    pub distance: f32,
    /// Rolled along the ground rather than flown
    pub putt: bool,
    pub velocity: Vec2,
    pub vz: f32,
}

/// Whether a shot from `from` at `target` has a direction to go in
pub fn has_direction(from: Vec2, target: Vec2) -> bool {
    (target - from).length_squared() > f32::EPSILON
}

/// Horizontal launch speed that carries a lofted ball `distance` in total.
///
/// The ball covers `speed` per tick while airborne, keeps `LANDING_DAMPING`
/// of it on touchdown, then rolls at most `v / (1 - FRICTION)` on grass.
fn flight_speed(distance: f32, vz: f32) -> f32 {
    let roll_factor = LANDING_DAMPING / (1.0 - FRICTION);
    distance / (airborne_ticks(vz) as f32 + roll_factor)
}

/// Launch the ball according to `intent`.
///
/// Returns `None` and leaves the ball untouched when the target is the
/// ball's own position (no direction to hit in).
pub fn resolve_shot(ball: &mut Ball, terrain: &Terrain, intent: &ShotIntent) -> Option<ResolvedShot> {
    if !has_direction(ball.pos, intent.target) {
        return None;
    }
    let aim = intent.target - ball.pos;

    let club = &intent.club;
    let angle = normalize_angle(aim.y.atan2(aim.x) + intent.angle_error);
    let power = intent.power.max(0.0);
    let distance = (power * club.power_multiplier()).min(club.max_distance);
    let putt = club.is_putter() || terrain.is_on_green(ball.pos);

    let (speed, vz) = if putt {
        (distance * PUTT_SPEED_SCALE, 0.0)
    } else {
        let vz = power.min(club.max_power) * club.loft * LOFT_SCALE;
        (flight_speed(distance, vz), vz)
    };

    let velocity = polar_to_cartesian(speed, angle);
    ball.vel = velocity;
    if putt {
        ball.ground();
    } else {
        ball.z = 0.0;
        ball.vz = vz;
        ball.in_air = true;
    }

    Some(ResolvedShot {
        angle,
        distance,
        putt,
        velocity,
        vz,
    })
}
