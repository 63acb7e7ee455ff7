//! Static course terrain and the per-tick queries the ball engine makes
//!
//! Terrain is built once per course load and is read-only during play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Polygon, circle_touches_segment, distance};

/// A sloped area that pushes a grounded ball every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slope {
    pub polygon: Polygon,
    /// Velocity added per tick while the ball is inside
    pub push: Vec2,
}

/// A round obstacle the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub center: Vec2,
    pub radius: f32,
}

/// Shape of the putting green
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Green {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned ellipse with semi-axes `radii.x`, `radii.y`
    Ellipse { center: Vec2, radii: Vec2 },
}

impl Green {
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            Green::Circle { center, radius } => distance(point, center) <= radius,
            Green::Ellipse { center, radii } => {
                let d = (point - center) / radii;
                d.length_squared() <= 1.0
            }
        }
    }
}

/// Sand and slope membership for a point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionQuery {
    pub in_sand: bool,
    /// Push of every slope containing the point, in course order
    pub slope_pushes: Vec<Vec2>,
}

impl RegionQuery {
    /// Sum of all slope pushes
    pub fn total_push(&self) -> Vec2 {
        self.slope_pushes.iter().copied().sum()
    }
}

/// A tree the ball is currently overlapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeHit {
    pub tree: Tree,
    /// How far the ball has sunk into the trunk
    pub overlap: f32,
}

/// All course obstacles and surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub green: Green,
    #[serde(default)]
    pub sand: Vec<Polygon>,
    #[serde(default)]
    pub slopes: Vec<Slope>,
    #[serde(default)]
    pub trees: Vec<Tree>,
    #[serde(default)]
    pub water: Vec<Polygon>,
}

impl Terrain {
    /// Flat terrain with only a green
    pub fn open(green: Green) -> Self {
        Self {
            green,
            sand: Vec::new(),
            slopes: Vec::new(),
            trees: Vec::new(),
            water: Vec::new(),
        }
    }

    /// Which sand traps and slopes contain `point`
    pub fn regions_containing(&self, point: Vec2) -> RegionQuery {
        RegionQuery {
            in_sand: self.sand.iter().any(|p| p.contains(point)),
            slope_pushes: self
                .slopes
                .iter()
                .filter(|s| s.polygon.contains(point))
                .map(|s| s.push)
                .collect(),
        }
    }

    /// First tree (in course order) overlapping a ball at `point`
    pub fn nearest_tree_penetration(&self, point: Vec2, ball_radius: f32) -> Option<TreeHit> {
        self.trees.iter().find_map(|tree| {
            let reach = tree.radius + ball_radius;
            let dist = distance(point, tree.center);
            (dist < reach).then_some(TreeHit {
                tree: *tree,
                overlap: reach - dist,
            })
        })
    }

    /// First tree a ball rolling straight from `from` to `to` would clip
    pub fn tree_blocking(&self, from: Vec2, to: Vec2, ball_radius: f32) -> Option<Tree> {
        self.trees
            .iter()
            .find(|tree| circle_touches_segment(tree.center, tree.radius + ball_radius, from, to))
            .copied()
    }

    pub fn is_on_green(&self, point: Vec2) -> bool {
        self.green.contains(point)
    }

    pub fn is_in_water(&self, point: Vec2) -> bool {
        self.water.iter().any(|p| p.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain() -> Terrain {
        let mut t = Terrain::open(Green::Circle {
            center: Vec2::new(700.0, 300.0),
            radius: 50.0,
        });
        t.sand
            .push(Polygon::rect(Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0)));
        t.slopes.push(Slope {
            polygon: Polygon::rect(Vec2::new(200.0, 100.0), Vec2::new(100.0, 100.0)),
            push: Vec2::new(0.1, 0.0),
        });
        t.slopes.push(Slope {
            polygon: Polygon::rect(Vec2::new(250.0, 150.0), Vec2::new(100.0, 100.0)),
            push: Vec2::new(0.0, -0.05),
        });
        t.trees.push(Tree {
            center: Vec2::new(400.0, 400.0),
            radius: 15.0,
        });
        t.trees.push(Tree {
            center: Vec2::new(410.0, 400.0),
            radius: 15.0,
        });
        t
    }

    #[test]
    fn test_sand_membership() {
        let t = terrain();
        assert!(t.regions_containing(Vec2::new(120.0, 120.0)).in_sand);
        assert!(!t.regions_containing(Vec2::new(20.0, 20.0)).in_sand);
    }

    #[test]
    fn test_overlapping_slopes_accumulate() {
        let t = terrain();
        let q = t.regions_containing(Vec2::new(275.0, 175.0));
        assert_eq!(q.slope_pushes.len(), 2);
        let total = q.total_push();
        assert!((total - Vec2::new(0.1, -0.05)).length() < 1e-6);

        let q = t.regions_containing(Vec2::new(210.0, 110.0));
        assert_eq!(q.slope_pushes, vec![Vec2::new(0.1, 0.0)]);
    }

    #[test]
    fn test_tree_penetration_returns_first() {
        let t = terrain();
        let hit = t
            .nearest_tree_penetration(Vec2::new(405.0, 400.0), 4.0)
            .expect("overlaps both trees");
        assert_eq!(hit.tree.center, Vec2::new(400.0, 400.0));
        assert!((hit.overlap - 14.0).abs() < 1e-5);

        assert!(t.nearest_tree_penetration(Vec2::new(300.0, 400.0), 4.0).is_none());
    }

    #[test]
    fn test_tree_blocking_line() {
        let t = terrain();
        let blocker = t
            .tree_blocking(Vec2::new(300.0, 400.0), Vec2::new(500.0, 400.0), 4.0)
            .expect("line runs through both trunks");
        assert_eq!(blocker.center, Vec2::new(400.0, 400.0));
        assert!(t
            .tree_blocking(Vec2::new(300.0, 300.0), Vec2::new(500.0, 300.0), 4.0)
            .is_none());
    }

    #[test]
    fn test_green_shapes() {
        let t = terrain();
        assert!(t.is_on_green(Vec2::new(740.0, 300.0)));
        assert!(!t.is_on_green(Vec2::new(760.0, 300.0)));

        let ellipse = Green::Ellipse {
            center: Vec2::new(0.0, 0.0),
            radii: Vec2::new(80.0, 30.0),
        };
        assert!(ellipse.contains(Vec2::new(70.0, 0.0)));
        assert!(!ellipse.contains(Vec2::new(0.0, 40.0)));
    }

    #[test]
    fn test_green_json_tagged() {
        let green: Green =
            serde_json::from_str(r#"{ "shape": "ellipse", "center": [1, 2], "radii": [3, 4] }"#)
                .unwrap();
        assert_eq!(
            green,
            Green::Ellipse {
                center: Vec2::new(1.0, 2.0),
                radii: Vec2::new(3.0, 4.0)
            }
        );
    }
}
