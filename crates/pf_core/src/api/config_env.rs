use std::env;

use crate::engine::config::FieldConfig;
use crate::error::Result;

pub const FIELD_CONFIG_PATH_ENV: &str = "PF_FIELD_CONFIG_PATH";

/// Base configuration for API calls: the file named by
/// `PF_FIELD_CONFIG_PATH` when set, defaults otherwise.
pub fn field_config_from_env() -> Result<FieldConfig> {
    field_config_from_path_var(env::var(FIELD_CONFIG_PATH_ENV).ok().as_deref())
}

/// Resolve the variable's value. Unset or blank means defaults.
pub(crate) fn field_config_from_path_var(value: Option<&str>) -> Result<FieldConfig> {
    let Some(path) = value.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(FieldConfig::default());
    };

    tracing::debug!("loading field config from {FIELD_CONFIG_PATH_ENV}='{path}'");
    FieldConfig::from_path(path)
}
