//! Round state machine
//!
//! A [`Session`] owns everything mutable about a hole in progress: the ball,
//! the loaded course, stroke count, club selection and power meter. The
//! host calls the input methods when the player acts and [`Session::update`]
//! once per frame, then reads a [`Snapshot`] to draw.
//!
//! ```text
//! Aiming -> Charging -> InAir <-> Moving -> Stopped -> Aiming
//!                            \        \
//!                             `--------`-> Won
//! ```

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::course::{Course, CourseCatalog};
use super::power::PowerInput;
use super::shot::{ResolvedShot, ShotIntent, has_direction, resolve_shot};
use super::state::{Ball, Club, GameEvent, GamePhase, ScoreLabel};
use super::tick::{TickOutcome, tick};
use crate::error::CourseError;
use crate::settings::Settings;

/// Read-only view of the session for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub course_id: String,
    pub par: u32,
    pub ball: Ball,
    pub phase: GamePhase,
    pub strokes: u32,
    pub won: bool,
    pub result: Option<ScoreLabel>,
    pub club: &'static str,
    pub club_index: usize,
    pub aim_target: Option<Vec2>,
    /// Power meter level, 0.0..=1.0
    pub power_level: f32,
    pub time_ticks: u64,
}

/// One player's play of the current course
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    catalog: CourseCatalog,
    course: Course,
    ball: Ball,
    phase: GamePhase,
    strokes: u32,
    club_index: usize,
    aim_target: Option<Vec2>,
    /// Where the last shot was played from (water returns here)
    last_lie: Vec2,
    power: Box<dyn PowerInput>,
    rng: Pcg32,
    events: Vec<GameEvent>,
    time_ticks: u64,
}

impl Session {
    /// Start on the settings' course from the built-in catalog
    pub fn new(settings: Settings) -> Result<Self, CourseError> {
        let catalog = CourseCatalog::builtin()?;
        Self::with_catalog(settings, catalog)
    }

    /// Start on the settings' course from a custom catalog
    pub fn with_catalog(settings: Settings, catalog: CourseCatalog) -> Result<Self, CourseError> {
        let course = catalog.get(&settings.start_course)?.clone();
        log::info!("Loaded course '{}' ({}), par {}", course.id, course.name, course.par);
        let power = settings.build_power_input();
        let rng = Pcg32::seed_from_u64(settings.seed);
        Ok(Self {
            ball: Ball::at_rest(course.tee),
            last_lie: course.tee,
            phase: GamePhase::Aiming,
            strokes: 0,
            club_index: 0,
            aim_target: None,
            events: Vec::new(),
            time_ticks: 0,
            settings,
            catalog,
            course,
            power,
            rng,
        })
    }

    /// Swap in another course and start it from the tee
    pub fn load_course(&mut self, id: &str) -> Result<(), CourseError> {
        let course = self.catalog.get(id)?.clone();
        log::info!("Loaded course '{}' ({}), par {}", course.id, course.name, course.par);
        self.course = course;
        self.reset();
        Ok(())
    }

    /// Move on to the next course in the catalog
    pub fn next_course(&mut self) -> Result<(), CourseError> {
        let next = self
            .catalog
            .next_id(&self.course.id)
            .ok_or_else(|| CourseError::UnknownCourse {
                id: self.course.id.clone(),
            })?
            .to_string();
        self.load_course(&next)
    }

    /// Back to the tee with a clean card
    pub fn reset(&mut self) {
        self.ball = Ball::at_rest(self.course.tee);
        self.last_lie = self.course.tee;
        self.phase = GamePhase::Aiming;
        self.strokes = 0;
        self.club_index = 0;
        self.aim_target = None;
        self.power = self.settings.build_power_input();
        self.rng = Pcg32::seed_from_u64(self.settings.seed);
        self.events.clear();
        self.time_ticks = 0;
    }

    /// Follow the pointer while aiming (latest position wins)
    pub fn track_aim(&mut self, point: Vec2) {
        if self.phase == GamePhase::Aiming {
            self.aim_target = Some(point);
        }
    }

    /// Lock the aim and start the power meter
    pub fn confirm_target(&mut self, point: Vec2) {
        if self.phase != GamePhase::Aiming {
            log::debug!("Ignoring target in phase {:?}", self.phase);
            return;
        }
        self.aim_target = Some(point);
        self.power.start();
        self.phase = GamePhase::Charging;
    }

    /// Stop the configured power meter and take the shot
    pub fn release_power(&mut self) -> Option<ResolvedShot> {
        if self.phase != GamePhase::Charging {
            log::debug!("Ignoring power release in phase {:?}", self.phase);
            return None;
        }
        let reading = self.power.release();
        let value = reading.level * self.club().max_power;
        self.commit_power(value, reading.accuracy)
    }

    /// Take the pending shot with an explicit power and accuracy
    pub fn commit_power(&mut self, value: f32, accuracy: f32) -> Option<ResolvedShot> {
        if self.phase != GamePhase::Charging {
            log::debug!("Ignoring power commit in phase {:?}", self.phase);
            return None;
        }
        let Some(target) = self.aim_target else {
            self.phase = GamePhase::Aiming;
            return None;
        };

        if !has_direction(self.ball.pos, target) {
            log::debug!("Target on top of the ball, shot not taken");
            self.stop_meter();
            self.phase = GamePhase::Aiming;
            return None;
        }

        let accuracy = accuracy.clamp(0.0, 1.0);
        let spread: f32 = self.rng.random_range(-1.0..=1.0);
        let intent = ShotIntent {
            target,
            power: value,
            accuracy,
            angle_error: (1.0 - accuracy) * self.settings.max_angle_error * spread,
            club: self.club(),
        };

        let lie = self.ball.pos;
        let shot = resolve_shot(&mut self.ball, &self.course.terrain, &intent)?;
        self.stop_meter();

        self.last_lie = lie;
        self.strokes += 1;
        self.aim_target = None;
        self.phase = if shot.putt {
            GamePhase::Moving
        } else {
            GamePhase::InAir
        };
        self.events.push(GameEvent::Swing {
            club: intent.club.name,
        });
        log::info!(
            "Stroke {}: {} {} {:.0} at {:.2} rad (accuracy {:.2})",
            self.strokes,
            intent.club.name,
            if shot.putt { "putt" } else { "shot" },
            shot.distance,
            shot.angle,
            accuracy
        );
        Some(shot)
    }

    fn stop_meter(&mut self) {
        if self.power.is_active() {
            self.power.release();
        }
    }

    /// Pick a club by index (wraps around the bag)
    pub fn select_club(&mut self, index: usize) {
        match self.phase {
            GamePhase::Moving | GamePhase::InAir | GamePhase::Won => {
                log::debug!("Ignoring club change in phase {:?}", self.phase);
            }
            _ => self.club_index = index % Club::CATALOG.len(),
        }
    }

    /// Next club in the bag
    pub fn cycle_club(&mut self) {
        self.select_club(self.club_index + 1);
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.time_ticks += 1;
        match self.phase {
            GamePhase::Stopped => self.phase = GamePhase::Aiming,
            GamePhase::Charging => self.power.advance(),
            GamePhase::Moving | GamePhase::InAir => self.advance_ball(),
            GamePhase::Aiming | GamePhase::Won => {}
        }
    }

    fn advance_ball(&mut self) {
        match tick(&mut self.ball, &self.course) {
            TickOutcome::Flying => self.phase = GamePhase::InAir,
            TickOutcome::Rolling => self.phase = GamePhase::Moving,
            TickOutcome::Landed => {
                self.phase = GamePhase::Moving;
                self.events.push(GameEvent::Landed { pos: self.ball.pos });
            }
            TickOutcome::Stopped => {
                self.phase = GamePhase::Stopped;
                self.events.push(GameEvent::Stopped { pos: self.ball.pos });
            }
            TickOutcome::Splash => {
                log::info!(
                    "Splash at ({:.0}, {:.0}), back to ({:.0}, {:.0})",
                    self.ball.pos.x,
                    self.ball.pos.y,
                    self.last_lie.x,
                    self.last_lie.y
                );
                self.ball = Ball::at_rest(self.last_lie);
                self.phase = GamePhase::Stopped;
                self.events.push(GameEvent::Splash {
                    returned_to: self.last_lie,
                });
            }
            TickOutcome::Holed => {
                let label = ScoreLabel::from_strokes(self.strokes, self.course.par);
                log::info!(
                    "Holed '{}' in {} (par {}): {}",
                    self.course.id,
                    self.strokes,
                    self.course.par,
                    label.as_str()
                );
                self.phase = GamePhase::Won;
                self.events.push(GameEvent::Holed {
                    strokes: self.strokes,
                    label,
                });
            }
        }
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        let club = self.club();
        Snapshot {
            course_id: self.course.id.clone(),
            par: self.course.par,
            ball: self.ball,
            phase: self.phase,
            strokes: self.strokes,
            won: self.is_won(),
            result: self.result(),
            club: club.name,
            club_index: self.club_index,
            aim_target: self.aim_target,
            power_level: self.power.level(),
            time_ticks: self.time_ticks,
        }
    }

    /// Par-relative label once the ball is holed
    pub fn result(&self) -> Option<ScoreLabel> {
        self.is_won()
            .then(|| ScoreLabel::from_strokes(self.strokes, self.course.par))
    }

    pub fn club(&self) -> Club {
        Club::from_index(self.club_index)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }
}
