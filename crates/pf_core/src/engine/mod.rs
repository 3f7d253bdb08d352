//! Field computation engine
//!
//! Data flows one way: grid → arrival times → pitch control → {xG, pass
//! success}. The two derived fields never read each other.

pub mod agent;
pub mod arrival_time;
pub mod config;
pub mod field;
pub mod fields;
pub mod formations;
pub mod grid;
pub mod model_constants;
pub mod pass_success;
pub mod pitch;
pub mod pitch_control;
pub mod xg_field;

pub use agent::{Agent, Ball, Squads, Team};
pub use arrival_time::{arrival_time, min_arrival_time, team_arrival_time};
pub use config::{FieldConfig, ModelParams};
pub use field::{Field, FieldKind};
pub use fields::{compute_field, FieldInputs, ModelKind};
pub use formations::Formation;
pub use grid::GridAxes;
pub use pass_success::{combine_interceptions, compute_pass_success};
pub use pitch::PitchGeometry;
pub use pitch_control::{compute_pitch_control, control_probability};
pub use xg_field::{compute_expected_goals, ShotTarget};
