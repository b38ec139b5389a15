use crate::PlaceholderClient;
use std::sync::OnceLock;

// Global singleton so GUI and CLI share one connection pool
static PLACEHOLDER_CLIENT: OnceLock<PlaceholderClient> = OnceLock::new();

pub fn get_placeholder_client() -> &'static PlaceholderClient {
    PLACEHOLDER_CLIENT
        .get_or_init(|| PlaceholderClient::new().expect("Failed to create PlaceholderClient"))
}
