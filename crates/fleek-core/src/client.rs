// ── Site query facade ──
//
// Public query operations. Each call issues exactly one GraphQL request
// through the shared `FleekClient` session and maps the result; nothing
// is retried, cached, or paginated.

use tracing::debug;

use fleek_api::{FleekClient, TransportConfig};

use crate::config::FleekConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::Site;

/// Typed entry point to the Fleek site queries.
///
/// Cheap to clone; clones share one HTTP connection pool and can be used
/// from concurrent tasks.
#[derive(Debug, Clone)]
pub struct Fleek {
    api: FleekClient,
}

impl Fleek {
    /// Open a session from a [`FleekConfig`].
    ///
    /// Fails with [`CoreError::Configuration`] for an empty or malformed
    /// token.
    pub fn new(config: &FleekConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let api = FleekClient::with_endpoint(config.endpoint.as_str(), &config.token, &transport)?;
        debug!(endpoint = %config.endpoint, "session ready");
        Ok(Self { api })
    }

    /// Wrap an already-built API session.
    pub fn from_client(api: FleekClient) -> Self {
        Self { api }
    }

    /// The underlying API session, for raw queries.
    pub fn api(&self) -> &FleekClient {
        &self.api
    }

    /// Sites owned by `team_id`, in the order the service returns them.
    ///
    /// Only the first page (100 sites) is fetched. A team without sites
    /// yields an empty `Vec`.
    pub async fn list_sites_by_team(&self, team_id: &str) -> Result<Vec<Site>, CoreError> {
        let page = self.api.sites_by_team(team_id).await?;

        if let Some(token) = page.next_token.as_deref().filter(|t| !t.is_empty()) {
            debug!(
                team_id,
                next_token = token,
                "more sites available beyond the first page; not following"
            );
        }

        let sites = convert::map_sites(page.sites)?;
        debug!(team_id, count = sites.len(), "sites mapped");
        Ok(sites)
    }

    /// The site with the given slug.
    ///
    /// Returns [`CoreError::SiteNotFound`] when the service has no match.
    pub async fn get_site_by_slug(&self, slug: &str) -> Result<Site, CoreError> {
        let wire = self
            .api
            .site_by_slug(slug)
            .await?
            .ok_or_else(|| CoreError::SiteNotFound { slug: slug.into() })?;

        Ok(convert::map_site(wire)?)
    }
}
