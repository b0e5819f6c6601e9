//! Configuration for the bridge.

use query_engine_metadata::metadata;

/// The 'Configuration' type collects all the information necessary to serve requests at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration': secrets are resolved, the URL is validated and the built-in
/// legacy table names are merged into the metadata. Nothing in it changes afterwards.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    /// Root of the REST API, ending in a slash.
    pub rest_url: url::Url,
    pub api_key: String,
    pub schema: Option<String>,
}
