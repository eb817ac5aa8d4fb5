/// Network adapters for the Black Duck REST API
mod auth;
mod blackduck_client;
mod mapper;
mod records;
mod rest_client;

pub use blackduck_client::BlackDuckClient;
