//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no timestep parameter
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod course;
pub mod geometry;
pub mod power;
pub mod session;
pub mod shot;
pub mod state;
pub mod terrain;
pub mod tick;

pub use course::{Course, CourseCatalog};
pub use geometry::{Polygon, distance, normalize, point_in_polygon};
pub use power::{HoldToCharge, OscillatingBar, PowerInput, PowerReading};
pub use session::{Session, Snapshot};
pub use shot::{ResolvedShot, ShotIntent, resolve_shot};
pub use state::{Ball, Club, GameEvent, GamePhase, Hole, ScoreLabel};
pub use terrain::{Green, RegionQuery, Slope, Terrain, Tree, TreeHit};
pub use tick::{TickOutcome, tick};
