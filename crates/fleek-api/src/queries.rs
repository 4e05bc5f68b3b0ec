// Site queries
//
// Both operations select the same `SiteFields` fragment so that list and
// single-site results decode into the same `WireSite` shape.

use serde_json::json;
use tracing::debug;

use crate::client::FleekClient;
use crate::error::Error;
use crate::graphql::Query;
use crate::types::{SiteBySlugData, SitesByTeamData, SitesPage, WireSite};

/// Page size requested by [`FleekClient::sites_by_team`].
pub const SITES_PAGE_LIMIT: u32 = 100;

macro_rules! site_fields {
    () => {
        r"
fragment SiteFields on Site {
  id
  name
  slug
  description
  platform
  team { id name }
  buildSettings {
    buildCommand
    baseDirectoryPath
    publishDirectoryPath
    dockerImage
    environmentVariables { name value }
  }
  deploySettings {
    autoPublishing
    prDeployPreviews
    dfinityUseProxy
    source {
      __typename
      ... on IpfsSource { cid }
      ... on Repository { type url branch }
    }
  }
  publishedDeploy {
    id
    status
    ipfsHash
    previewImage
    autoPublish
    published
    log
    repository { commit branch owner name message }
    totalTime
    startedAt
    completedAt
  }
  createdBy
  createdAt
  updatedAt
}
"
    };
}

pub const GET_SITES_BY_TEAM: Query = Query {
    operation_name: "GetSitesByTeam",
    document: concat!(
        r"query GetSitesByTeam($teamId: ID!, $limit: Int) {
  getSitesByTeam(teamId: $teamId, limit: $limit) {
    sites { ...SiteFields }
    nextToken
  }
}
",
        site_fields!()
    ),
};

pub const GET_SITE_BY_SLUG: Query = Query {
    operation_name: "GetSiteBySlug",
    document: concat!(
        r"query GetSiteBySlug($slug: String!) {
  getSiteBySlug(slug: $slug) { ...SiteFields }
}
",
        site_fields!()
    ),
};

impl FleekClient {
    /// First page (up to [`SITES_PAGE_LIMIT`]) of the sites owned by a team.
    ///
    /// `getSitesByTeam(teamId, limit: 100)`. The returned `next_token` is
    /// not followed.
    pub async fn sites_by_team(&self, team_id: &str) -> Result<SitesPage, Error> {
        debug!(team_id, "listing sites");
        let data: SitesByTeamData = self
            .execute(
                &GET_SITES_BY_TEAM,
                &json!({ "teamId": team_id, "limit": SITES_PAGE_LIMIT }),
            )
            .await?;
        Ok(data.get_sites_by_team)
    }

    /// Look up one site by slug. `None` when no site matches.
    ///
    /// `getSiteBySlug(slug)`
    pub async fn site_by_slug(&self, slug: &str) -> Result<Option<WireSite>, Error> {
        debug!(slug, "fetching site");
        let data: SiteBySlugData = self
            .execute(&GET_SITE_BY_SLUG, &json!({ "slug": slug }))
            .await?;
        Ok(data.get_site_by_slug)
    }
}
