//! Course definitions and the built-in course catalog
//!
//! Courses are JSON documents. The built-in ones are compiled into the
//! crate from `assets/courses.json`; custom ones go through the same
//! validation via [`Course::from_json`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Hole;
use super::terrain::{Green, Terrain};
use crate::consts::{BALL_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::CourseError;

const BUILTIN_COURSES: &str = include_str!("../../assets/courses.json");

fn default_bounds() -> Vec2 {
    Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// One hole: layout, par and terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub par: u32,
    /// Width and height of the playing field
    #[serde(default = "default_bounds")]
    pub bounds: Vec2,
    pub tee: Vec2,
    pub hole: Hole,
    pub terrain: Terrain,
}

impl Course {
    /// Parse and validate a single course document
    pub fn from_json(json: &str) -> Result<Self, CourseError> {
        let course: Course = serde_json::from_str(json)?;
        course.validate()?;
        Ok(course)
    }

    /// Check everything the engine relies on but serde can't express
    pub fn validate(&self) -> Result<(), CourseError> {
        if self.par == 0 {
            return Err(CourseError::InvalidPar { par: self.par });
        }
        if !self.in_bounds(self.tee) {
            return Err(CourseError::OutOfBounds {
                what: "tee",
                point: self.tee,
            });
        }
        if !self.in_bounds(self.hole.pos) {
            return Err(CourseError::OutOfBounds {
                what: "hole",
                point: self.hole.pos,
            });
        }
        positive("hole", self.hole.radius)?;
        if self.hole.radius <= BALL_RADIUS {
            return Err(CourseError::HoleTooSmall {
                radius: self.hole.radius,
                ball_radius: BALL_RADIUS,
            });
        }
        match self.terrain.green {
            Green::Circle { radius, .. } => positive("green", radius)?,
            Green::Ellipse { radii, .. } => positive("green", radii.x.min(radii.y))?,
        }
        for tree in &self.terrain.trees {
            positive("tree", tree.radius)?;
            // The wall clamp would push a bounced ball back into the trunk
            let reach = tree.radius + BALL_RADIUS;
            let clear = tree.center.cmpge(Vec2::splat(reach)).all()
                && (self.bounds - tree.center).cmpge(Vec2::splat(reach)).all();
            if !clear {
                return Err(CourseError::TreeAtEdge {
                    center: tree.center,
                    reach,
                });
            }
        }
        Ok(())
    }

    /// Whether a point lies inside the playing field
    pub fn in_bounds(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.bounds.x && point.y <= self.bounds.y
    }
}

fn positive(what: &'static str, value: f32) -> Result<(), CourseError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CourseError::NonPositiveRadius { what, value })
    }
}

/// Ordered set of playable courses
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// The courses shipped with the game
    pub fn builtin() -> Result<Self, CourseError> {
        Self::from_json(BUILTIN_COURSES)
    }

    /// Parse a JSON array of courses, validating each
    pub fn from_json(json: &str) -> Result<Self, CourseError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        for course in &courses {
            course.validate()?;
        }
        Ok(Self { courses })
    }

    pub fn get(&self, id: &str) -> Result<&Course, CourseError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CourseError::UnknownCourse { id: id.to_string() })
    }

    /// Course after `id`, wrapping to the first
    pub fn next_id(&self, id: &str) -> Option<&str> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        let next = (index + 1) % self.courses.len();
        Some(self.courses[next].id.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
