//! Plane geometry for terrain queries
//!
//! Polygons are arbitrary (not necessarily convex) vertex loops tested with
//! the even-odd rule. Each polygon caches its bounding box so most
//! point tests exit before the ray cast.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::CourseError;

/// Distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Unit vector in the direction of `v`, or zero for a zero-length input
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Even-odd ray casting test over an ordered vertex loop.
///
/// Callers must pass at least three vertices; [`Polygon`] enforces this.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shortest distance from `point` to the segment `a`-`b`
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-8 {
        return distance(point, a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    distance(point, a + ab * t)
}

/// Whether a circle overlaps a segment (used for aim-line previews)
#[inline]
pub fn circle_touches_segment(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> bool {
    distance_to_segment(center, a, b) < radius
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// A terrain polygon with at least three vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon {
    vertices: Vec<Vec2>,
    bounds: Aabb,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, CourseError> {
        if vertices.len() < 3 {
            return Err(CourseError::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        let bounds = Aabb::from_points(&vertices);
        Ok(Self { vertices, bounds })
    }

    /// Axis-aligned rectangle from its top-left corner and size
    pub fn rect(origin: Vec2, size: Vec2) -> Self {
        let vertices = vec![
            origin,
            origin + Vec2::new(size.x, 0.0),
            origin + size,
            origin + Vec2::new(0.0, size.y),
        ];
        let bounds = Aabb::from_points(&vertices);
        Self { vertices, bounds }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Bounding-box rejection, then the even-odd test
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point) && point_in_polygon(point, &self.vertices)
    }
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = CourseError;

    fn try_from(vertices: Vec<Vec2>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}
