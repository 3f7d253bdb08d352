pub mod config_env;
pub mod field_json;

pub use config_env::{field_config_from_env, FIELD_CONFIG_PATH_ENV};
pub use field_json::{
    compute_field_json, compute_field_response, FieldRequest, FieldResponse, FIELD_SCHEMA_VERSION,
};
