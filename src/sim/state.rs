//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest, waiting for a target
    Aiming,
    /// Target set, power meter running
    Charging,
    /// Ball rolling on the ground
    Moving,
    /// Ball in flight
    InAir,
    /// Ball just came to rest; becomes `Aiming` on the next tick
    Stopped,
    /// Ball is in the cup
    Won,
}

impl GamePhase {
    /// Whether the ball engine runs this tick
    pub fn is_ball_moving(&self) -> bool {
        matches!(self, GamePhase::Moving | GamePhase::InAir)
    }
}

/// The golf ball
///
/// `z`/`vz` are height and vertical speed above the course plane. Both are
/// zero whenever `in_air` is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub z: f32,
    pub vz: f32,
    pub radius: f32,
    pub in_air: bool,
}

impl Ball {
    /// A ball at rest on the ground
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            z: 0.0,
            vz: 0.0,
            radius: BALL_RADIUS,
            in_air: false,
        }
    }

    /// Put the ball down: no height, no vertical speed
    pub fn ground(&mut self) {
        self.z = 0.0;
        self.vz = 0.0;
        self.in_air = false;
    }

    /// Stop all motion and ground the ball
    pub fn halt(&mut self) {
        self.vel = Vec2::ZERO;
        self.ground();
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The cup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub pos: Vec2,
    #[serde(default = "default_hole_radius")]
    pub radius: f32,
}

fn default_hole_radius() -> f32 {
    HOLE_RADIUS
}

impl Hole {
    /// Whether a grounded ball at `pos` with `ball_radius` drops in
    pub fn captures(&self, pos: Vec2, ball_radius: f32) -> bool {
        pos.distance(self.pos) < self.radius - ball_radius
    }
}

/// A club from the bag
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Club {
    pub name: &'static str,
    /// Top of the power meter for this club
    pub max_power: f32,
    /// Distance a full-power swing covers
    pub max_distance: f32,
    /// Launch steepness; zero means the club always putts
    pub loft: f32,
}

impl Club {
    /// The bag, in selection order
    pub const CATALOG: [Club; 4] = [
        Club {
            name: "Driver",
            max_power: 20.0,
            max_distance: 250.0,
            loft: 0.6,
        },
        Club {
            name: "Iron",
            max_power: 20.0,
            max_distance: 180.0,
            loft: 0.8,
        },
        Club {
            name: "Wedge",
            max_power: 20.0,
            max_distance: 100.0,
            loft: 1.2,
        },
        Club {
            name: "Putter",
            max_power: 20.0,
            max_distance: 120.0,
            loft: 0.0,
        },
    ];

    /// Club at `index`, wrapping around the bag
    pub fn from_index(index: usize) -> Club {
        Self::CATALOG[index % Self::CATALOG.len()]
    }

    pub fn is_putter(&self) -> bool {
        self.loft == 0.0
    }

    /// Distance per unit of power
    pub fn power_multiplier(&self) -> f32 {
        self.max_distance / self.max_power
    }
}

/// Result relative to par, shown once the ball drops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Eagle,
    Birdie,
    Par,
    Bogey,
    Complete,
}

impl ScoreLabel {
    pub fn from_strokes(strokes: u32, par: u32) -> Self {
        match strokes as i64 - par as i64 {
            -2 => ScoreLabel::Eagle,
            -1 => ScoreLabel::Birdie,
            0 => ScoreLabel::Par,
            1 => ScoreLabel::Bogey,
            _ => ScoreLabel::Complete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Eagle => "Eagle!",
            ScoreLabel::Birdie => "Birdie!",
            ScoreLabel::Par => "Par!",
            ScoreLabel::Bogey => "Bogey",
            ScoreLabel::Complete => "Complete!",
        }
    }
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// A shot was struck; start the swing animation
    Swing { club: &'static str },
    /// The ball came down from a lofted shot
    Landed { pos: Vec2 },
    /// The ball rolled to a stop
    Stopped { pos: Vec2 },
    /// The ball found water and went back to its last lie
    Splash { returned_to: Vec2 },
    /// The ball dropped
    Holed { strokes: u32, label: ScoreLabel },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_labels() {
        assert_eq!(ScoreLabel::from_strokes(1, 3), ScoreLabel::Eagle);
        assert_eq!(ScoreLabel::from_strokes(2, 3), ScoreLabel::Birdie);
        assert_eq!(ScoreLabel::from_strokes(3, 3), ScoreLabel::Par);
        assert_eq!(ScoreLabel::from_strokes(4, 3), ScoreLabel::Bogey);
        assert_eq!(ScoreLabel::from_strokes(7, 3), ScoreLabel::Complete);
        // Hole in one on a par 5 is better than eagle but still generic
        assert_eq!(ScoreLabel::from_strokes(1, 5), ScoreLabel::Complete);
    }

    #[test]
    fn test_club_index_wraps() {
        assert_eq!(Club::from_index(0).name, "Driver");
        assert_eq!(Club::from_index(3).name, "Putter");
        assert_eq!(Club::from_index(4).name, "Driver");
        assert!(Club::from_index(7).is_putter());
    }

    #[test]
    fn test_power_multiplier() {
        let driver = Club::from_index(0);
        assert_eq!(driver.power_multiplier(), 12.5);
    }

    #[test]
    fn test_hole_capture_radius() {
        let hole = Hole {
            pos: Vec2::new(700.0, 300.0),
            radius: 8.0,
        };
        assert!(hole.captures(Vec2::new(703.9, 300.0), 4.0));
        assert!(!hole.captures(Vec2::new(704.0, 300.0), 4.0));
    }

    #[test]
    fn test_halt_grounds_ball() {
        let mut ball = Ball::at_rest(Vec2::new(10.0, 10.0));
        ball.vel = Vec2::new(3.0, 1.0);
        ball.z = 5.0;
        ball.vz = 2.0;
        ball.in_air = true;
        ball.halt();
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!((ball.z, ball.vz, ball.in_air), (0.0, 0.0, false));
    }
}
