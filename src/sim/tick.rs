//! Fixed-step ball dynamics
//!
//! One call to [`tick`] advances the ball by exactly one frame. There is no
//! timestep parameter: velocities are in course units per tick.
//!
//! Order within a tick:
//! 1. `pos += vel`
//! 2. flight (airborne only): height integration, landing
//! 3. ground (grounded at the start of the tick only): slopes, friction,
//!    trees, water, stop condition
//! 4. edge reflection
//! 5. hole capture (grounded only)

use glam::Vec2;

use super::course::Course;
use super::state::Ball;
use super::terrain::Terrain;
use crate::consts::*;
use crate::polar_to_cartesian;

/// What happened to the ball during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still airborne
    Flying,
    /// Came down this tick
    Landed,
    /// Grounded and still moving
    Rolling,
    /// Friction brought it to rest
    Stopped,
    /// Ended up in a water hazard; ball halted where it went in
    Splash,
    /// Dropped into the cup
    Holed,
}

/// Advance the ball by one tick on the given course
pub fn tick(ball: &mut Ball, course: &Course) -> TickOutcome {
    ball.pos += ball.vel;

    let outcome = if ball.in_air {
        flight_step(ball)
    } else {
        ground_step(ball, &course.terrain)
    };

    if outcome == TickOutcome::Splash {
        return outcome;
    }

    reflect_off_edges(ball, course.bounds);

    if !ball.in_air && course.hole.captures(ball.pos, ball.radius) {
        ball.halt();
        ball.pos = course.hole.pos;
        return TickOutcome::Holed;
    }

    outcome
}

/// Height integration; damps horizontal speed once on touchdown
fn flight_step(ball: &mut Ball) -> TickOutcome {
    ball.z += ball.vz;
    ball.vz -= GRAVITY;

    if ball.z <= 0.0 {
        ball.ground();
        ball.vel *= LANDING_DAMPING;
        log::debug!("Ball landed at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
        TickOutcome::Landed
    } else {
        TickOutcome::Flying
    }
}

/// Ticks a ball launched from the ground with vertical speed `vz` stays up,
/// counting the landing tick. Steps the same arithmetic as the flight phase.
pub fn airborne_ticks(vz: f32) -> u32 {
    let (mut z, mut vz, mut ticks) = (0.0_f32, vz, 0);
    loop {
        z += vz;
        vz -= GRAVITY;
        ticks += 1;
        if z <= 0.0 || !z.is_finite() {
            return ticks;
        }
    }
}

/// Terrain forces for a ball that started the tick on the ground
fn ground_step(ball: &mut Ball, terrain: &Terrain) -> TickOutcome {
    let regions = terrain.regions_containing(ball.pos);

    // Slopes first, then one friction pass
    ball.vel += regions.total_push();
    ball.vel *= if regions.in_sand { SAND_FRICTION } else { FRICTION };

    // Single correction per tick, even with overlapping trees
    if let Some(hit) = terrain.nearest_tree_penetration(ball.pos, ball.radius) {
        let offset = ball.pos - hit.tree.center;
        let angle = offset.y.atan2(offset.x);
        let speed = ball.vel.length() * TREE_BOUNCE;
        ball.vel = polar_to_cartesian(speed, angle);
        ball.pos = hit.tree.center + polar_to_cartesian(hit.tree.radius + ball.radius, angle);
    }

    if terrain.is_in_water(ball.pos) {
        ball.halt();
        return TickOutcome::Splash;
    }

    if ball.vel.x.abs() < MIN_VELOCITY && ball.vel.y.abs() < MIN_VELOCITY {
        ball.vel = Vec2::ZERO;
        return TickOutcome::Stopped;
    }

    TickOutcome::Rolling
}

/// Hard walls at the course edges
fn reflect_off_edges(ball: &mut Ball, bounds: Vec2) {
    let r = ball.radius;
    if ball.pos.x - r < 0.0 || ball.pos.x + r > bounds.x {
        ball.vel.x *= WALL_RESTITUTION;
        ball.pos.x = ball.pos.x.clamp(r, bounds.x - r);
    }
    if ball.pos.y - r < 0.0 || ball.pos.y + r > bounds.y {
        ball.vel.y *= WALL_RESTITUTION;
        ball.pos.y = ball.pos.y.clamp(r, bounds.y - r);
    }
}
