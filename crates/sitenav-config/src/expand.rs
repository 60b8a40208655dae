//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Bare `$VAR` is left alone so literal dollar signs in titles and
//! descriptions survive.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${...}` references in `value` in place.
///
/// `field` is the TOML path reported on failure (e.g. `social_links[0].target`).
pub(crate) fn expand_field(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |var| {
        std::env::var(var).map(Some)
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: match e.cause {
            VarError::NotPresent => format!("${{{}}} not set", e.var_name),
            VarError::NotUnicode(_) => format!("${{{}}} is not valid UTF-8", e.var_name),
        },
    })?;

    *value = expanded.into_owned();
    Ok(())
}
