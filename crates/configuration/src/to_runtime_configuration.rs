//! Convert a parsed configuration into the runtime configuration.

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::Secret;
use crate::version1::ParsedConfiguration;

/// Path of the REST API below the project URL.
pub const REST_PATH: &str = "rest/v1/";

/// Resolve secrets, validate the project URL and merge the built-in table names
/// into the metadata.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let connection_settings = parsed_config.connection_settings;

    let base_url = resolve_secret(&environment, connection_settings.url.0)?;
    let api_key = resolve_secret(&environment, connection_settings.api_key.0)?;
    let rest_url = rest_url(&base_url)?;

    tracing::debug!(rest_url = %rest_url, "resolved runtime configuration");

    Ok(Configuration {
        metadata: parsed_config.metadata.with_legacy_tables(),
        rest_url,
        api_key,
        schema: connection_settings.schema,
    })
}

fn resolve_secret(
    environment: &impl Environment,
    secret: Secret,
) -> Result<String, MakeRuntimeConfigurationError> {
    match secret {
        Secret::Plain(value) => Ok(value),
        Secret::FromEnvironment(variable) => Ok(environment.read(&variable)?),
    }
}

/// The REST root below a project URL. A trailing slash on the project URL is optional.
pub fn rest_url(base_url: &str) -> Result<url::Url, MakeRuntimeConfigurationError> {
    let invalid = |message: String| MakeRuntimeConfigurationError::InvalidUrl {
        url: base_url.to_string(),
        message,
    };

    let mut url = url::Url::parse(base_url.trim()).map_err(|err| invalid(err.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join(REST_PATH).map_err(|err| invalid(err.to_string()))
}
