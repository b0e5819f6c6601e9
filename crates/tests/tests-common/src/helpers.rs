//! Small fixtures shared by integration tests.

use query_engine_metadata::metadata::Metadata;
use supabridge_configuration::Configuration;

pub const TEST_API_KEY: &str = "test-api-key";

/// Route `log` records (and `tracing` events through its `log` feature) to the
/// test output. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A runtime configuration pointing at the given REST root.
pub fn configuration(rest_url: url::Url) -> Configuration {
    Configuration {
        metadata: Metadata::empty().with_legacy_tables(),
        rest_url,
        api_key: TEST_API_KEY.to_string(),
        schema: None,
    }
}

/// A REST root nothing listens on.
pub fn unreachable_rest_url() -> url::Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    url::Url::parse(&format!("http://127.0.0.1:{port}/rest/v1/")).unwrap()
}
