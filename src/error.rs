//! Error types for loading course data and settings.
//!
//! Simulation itself never fails: bad runtime input is ignored and logged.
//! Anything that can go wrong is caught when a course or settings file is
//! loaded, so an invalid course fails loudly before a single tick runs.

use std::fmt;

use glam::Vec2;

/// Invalid or unknown course data.
#[derive(Debug)]
pub enum CourseError {
    /// A terrain polygon has fewer than three vertices.
    DegeneratePolygon {
        /// Number of vertices actually supplied.
        vertices: usize,
    },
    /// A circle (hole, tree, green) with a zero or negative radius.
    NonPositiveRadius {
        /// Which feature carried the radius.
        what: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A cup no wider than the ball can never capture it.
    HoleTooSmall { radius: f32, ball_radius: f32 },
    /// A tree whose bounce radius reaches past a course edge.
    TreeAtEdge { center: Vec2, reach: f32 },
    /// Tee or hole placed outside the course bounds.
    OutOfBounds { what: &'static str, point: Vec2 },
    /// Par must be at least one stroke.
    InvalidPar { par: u32 },
    /// No course with this id in the catalog.
    UnknownCourse { id: String },
    /// The course document is not valid JSON for a course.
    Parse(serde_json::Error),
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseError::DegeneratePolygon { vertices } => write!(
                f,
                "terrain polygon has {} vertices, need at least 3",
                vertices
            ),
            CourseError::NonPositiveRadius { what, value } => {
                write!(f, "{} radius must be positive, got {}", what, value)
            }
            CourseError::HoleTooSmall {
                radius,
                ball_radius,
            } => write!(
                f,
                "hole radius {} must be larger than the ball radius {}",
                radius, ball_radius
            ),
            CourseError::TreeAtEdge { center, reach } => write!(
                f,
                "tree at ({}, {}) needs {} clear units to every course edge",
                center.x, center.y, reach
            ),
            CourseError::OutOfBounds { what, point } => write!(
                f,
                "{} at ({}, {}) lies outside the course bounds",
                what, point.x, point.y
            ),
            CourseError::InvalidPar { par } => write!(f, "par must be at least 1, got {}", par),
            CourseError::UnknownCourse { id } => write!(f, "unknown course '{}'", id),
            CourseError::Parse(err) => write!(f, "malformed course data: {}", err),
        }
    }
}

impl std::error::Error for CourseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CourseError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CourseError {
    fn from(err: serde_json::Error) -> Self {
        CourseError::Parse(err)
    }
}

/// Settings file could not be read or parsed.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {}", err),
            SettingsError::Parse(err) => write!(f, "malformed settings: {}", err),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_error_display() {
        let err = CourseError::DegeneratePolygon { vertices: 2 };
        assert_eq!(
            err.to_string(),
            "terrain polygon has 2 vertices, need at least 3"
        );

        let err = CourseError::UnknownCourse {
            id: "nowhere".to_string(),
        };
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn test_parse_error_has_source() {
        use std::error::Error;
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = CourseError::from(parse);
        assert!(err.source().is_some());
    }
}
