//! Wire types for the Fleek GraphQL API.
//!
//! These mirror the JSON the remote service returns and are deliberately
//! loose: every field is defaulted so that both absent keys and `null`
//! decode to an empty value. Identifiers stay as raw JSON because the
//! service has returned both strings and integers for them.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Query payloads ───────────────────────────────────────────────────

/// `data` of the `GetSitesByTeam` operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesByTeamData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub get_sites_by_team: SitesPage,
}

/// One page of a team's sites.
///
/// `next_token` is decoded but never followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sites: Vec<WireSite>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// `data` of the `GetSiteBySlug` operation. `null` when no site matches.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBySlugData {
    #[serde(default)]
    pub get_site_by_slug: Option<WireSite>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// A site record exactly as the query engine returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSite {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: WireTeam,
    #[serde(default, deserialize_with = "null_as_default")]
    pub build_settings: WireBuildSettings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deploy_settings: WireDeploySettings,
    #[serde(default)]
    pub published_deploy: Option<WirePublishedDeploy>,
    #[serde(default)]
    pub created_by: Value,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireTeam {
    /// Expected to be a string; anything else is rejected during mapping.
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBuildSettings {
    #[serde(default)]
    pub build_command: Option<String>,
    #[serde(default)]
    pub base_directory_path: Option<String>,
    #[serde(default)]
    pub publish_directory_path: Option<String>,
    #[serde(default)]
    pub docker_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment_variables: Vec<WireEnvironmentVariable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireEnvironmentVariable {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDeploySettings {
    #[serde(default)]
    pub auto_publishing: Option<bool>,
    #[serde(default)]
    pub pr_deploy_previews: Option<bool>,
    #[serde(default)]
    pub dfinity_use_proxy: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: WireDeploySource,
}

/// The `source` union.
///
/// The query selects `... on IpfsSource { cid }` and
/// `... on Repository { type url branch }`, which the server flattens into
/// one object. Only one side is populated for any given site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireDeploySource {
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,
    /// `IpfsSource` side.
    #[serde(default)]
    pub cid: Option<String>,
    /// `Repository` side.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

// ── Published deploy ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePublishedDeploy {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ipfs_hash: Option<String>,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub auto_publish: Option<bool>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repository: WireDeployRepository,
    /// Build duration in seconds.
    #[serde(default)]
    pub total_time: Option<i64>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Commit that produced a deploy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireDeployRepository {
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nulls_decode_to_defaults() {
        let site: WireSite = serde_json::from_value(json!({
            "id": "s1",
            "name": null,
            "team": null,
            "buildSettings": null,
            "deploySettings": { "source": null },
            "publishedDeploy": null,
            "createdBy": null
        }))
        .unwrap();

        assert_eq!(site.id, json!("s1"));
        assert!(site.name.is_none());
        assert_eq!(site.team, WireTeam::default());
        assert!(site.build_settings.environment_variables.is_empty());
        assert_eq!(site.deploy_settings.source, WireDeploySource::default());
        assert!(site.published_deploy.is_none());
        assert!(site.created_by.is_null());
    }

    #[test]
    fn repository_source_flattens() {
        let settings: WireDeploySettings = serde_json::from_value(json!({
            "autoPublishing": true,
            "prDeployPreviews": false,
            "source": {
                "__typename": "Repository",
                "type": "github",
                "url": "https://github.com/a/b",
                "branch": "main"
            }
        }))
        .unwrap();

        assert_eq!(settings.auto_publishing, Some(true));
        assert_eq!(settings.source.typename.as_deref(), Some("Repository"));
        assert_eq!(settings.source.kind.as_deref(), Some("github"));
        assert!(settings.source.cid.is_none());
    }

    #[test]
    fn sites_page_keeps_next_token() {
        let data: SitesByTeamData = serde_json::from_value(json!({
            "getSitesByTeam": { "sites": [{ "id": 7 }], "nextToken": "abc" }
        }))
        .unwrap();
        assert_eq!(data.get_sites_by_team.sites.len(), 1);
        assert_eq!(data.get_sites_by_team.sites[0].id, json!(7));
        assert_eq!(data.get_sites_by_team.next_token.as_deref(), Some("abc"));
    }
}
