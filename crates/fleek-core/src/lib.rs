//! Typed access to the Fleek site query API.
//!
//! This crate sits between `fleek-api` (raw GraphQL transport and wire
//! shapes) and consumers such as the `fleek` CLI:
//!
//! - **[`Fleek`]**: facade exposing the public query operations
//!   [`list_sites_by_team()`](Fleek::list_sites_by_team) and
//!   [`get_site_by_slug()`](Fleek::get_site_by_slug). One network
//!   round-trip per call, no retries, no caching.
//!
//! - **Mapper** ([`convert`]): turns loosely typed [`WireSite`](fleek_api::WireSite)
//!   records into [`Site`], resolving the deploy-source union, parsing
//!   timestamps and validating identifiers.
//!
//! - **Domain model** ([`model`]): `Site` and friends, with [`ResourceId`]
//!   covering both string and numeric identifiers.

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::Fleek;
pub use config::FleekConfig;
pub use convert::{map_site, map_sites};
pub use error::{CoreError, MappingError};

pub use model::{
    BuildSettings, DeployCommit, DeploySettings, DeploySource, EnvironmentVariable,
    PublishedDeploy, RepositorySource, ResourceId, Site, Team,
};
