// fleek-api: Async Rust client for the Fleek GraphQL query API

pub mod client;
pub mod error;
pub mod graphql;
pub mod queries;
pub mod transport;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, FleekClient};
pub use error::Error;
pub use graphql::Query;
pub use queries::SITES_PAGE_LIMIT;
pub use transport::TransportConfig;
pub use types::{SitesPage, WireSite};
