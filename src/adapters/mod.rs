// Adapters layer: concrete implementations for external systems.

pub mod api_client;
pub mod http;

pub use api_client::StarwApiClient;
pub use http::HttpPeopleSource;
