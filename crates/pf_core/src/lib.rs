//! # pf_core - Pitch Control Field Engine
//!
//! Discretized spatial probability fields over a football pitch for an
//! interactive visualization client.
//!
//! ## Features
//! - Pitch control: which team reaches each cell first
//! - Expected goals if the ball is passed to each cell
//! - Pass success against defender interception
//! - Pure and deterministic; cells are computed data-parallel
//! - JSON API for easy integration with the client

// Field computations take many scalar model inputs
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;

pub use api::{compute_field_json, FieldRequest, FieldResponse};
pub use engine::{
    compute_expected_goals, compute_field, compute_pass_success, compute_pitch_control, Agent,
    Ball, Field, FieldConfig, FieldInputs, FieldKind, Formation, GridAxes, ModelKind, ModelParams,
    PitchGeometry, Squads, Team,
};
pub use error::{FieldError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_roundtrip_control() {
        let request = json!({
            "schema_version": 1,
            "model": "control",
            "formation": "4-4-2"
        });

        let result = compute_field_json(&request.to_string());
        assert!(result.is_ok(), "Computation should succeed: {:?}", result);

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["nx"], 106);
        assert_eq!(parsed["ny"], 69);
        assert_eq!(parsed["values"].as_array().unwrap().len(), 106 * 69);
    }

    #[test]
    fn test_determinism() {
        let request = json!({
            "schema_version": 1,
            "model": "pass",
            "formation": "3-5-2",
            "ball": {"x": -10.0, "y": 4.0}
        })
        .to_string();

        let result1 = compute_field_json(&request).unwrap();
        let result2 = compute_field_json(&request).unwrap();
        assert_eq!(result1, result2, "Same inputs should produce the same field");
    }

    #[test]
    fn test_all_models_end_to_end() {
        let squads = Formation::F442.squads();
        let grid = GridAxes::for_pitch(&PitchGeometry::standard(), 1.0).unwrap();
        let inputs = FieldInputs::new(&squads, &grid).with_ball(Ball::center());

        let control = compute_pitch_control(&inputs).unwrap();
        let xg = compute_expected_goals(&inputs, Team::Home).unwrap().unwrap();
        let pass = compute_pass_success(&inputs, Team::Home).unwrap().unwrap();

        for field in [&control, &xg, &pass] {
            let (lo, hi) = field.kind.value_range();
            assert_eq!(field.len(), grid.cell_count());
            assert!(field.values.iter().all(|v| (lo..=hi).contains(v)), "{:?} out of range", field.kind);
        }
    }
}
