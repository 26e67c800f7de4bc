//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (beams and corpses in spawn order)
//! - No rendering or platform dependencies

pub mod arc;
pub mod beam;
pub mod collision;
pub mod motion;
pub mod planet;
pub mod star;
pub mod state;
pub mod tick;

pub use arc::{ArcGeometry, ArcStroke};
pub use beam::{Beam, BeamCorpse};
pub use collision::{SweepOutcome, angle_margin, beam_hits_planet, sweep};
pub use motion::{AngularMotion, Direction, integrate};
pub use planet::{Planet, TrailHistory};
pub use star::Star;
pub use state::GameState;
pub use tick::{TickInput, TickReport, autopilot_direction, tick};
