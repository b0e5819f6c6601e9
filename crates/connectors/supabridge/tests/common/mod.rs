//! Common setup for the operation tests.

use supabridge::{create_state, State};
use tests_common::fake_service::FakeService;
use tests_common::helpers;

/// Start a fake service and a state pointed at it.
pub async fn setup() -> (FakeService, State) {
    helpers::init_logging();
    let service = FakeService::start().await;
    let state = create_state(
        &helpers::configuration(service.rest_url()),
        &mut prometheus::Registry::new(),
    )
    .await
    .unwrap();
    (service, state)
}

/// Deserialize a request the way a caller would send it.
pub fn request<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
