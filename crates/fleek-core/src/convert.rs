// ── Wire-to-domain conversions ──
//
// Bridges raw `fleek_api` wire records into `fleek_core::model` domain
// types. Absent strings and flags fall back to empty values, the deploy
// source union collapses into `DeploySource`, and timestamps are parsed
// leniently. Identifier shape violations are the only hard failures.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use fleek_api::types::{
    WireBuildSettings, WireDeployRepository, WireDeploySettings, WireDeploySource,
    WirePublishedDeploy, WireSite, WireTeam,
};

use crate::error::MappingError;
use crate::model::{
    BuildSettings, DeployCommit, DeploySettings, DeploySource, EnvironmentVariable,
    PublishedDeploy, RepositorySource, ResourceId, Site, Team,
};

// ── Helpers ────────────────────────────────────────────────────────

/// JSON type name, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse an RFC 3339 timestamp, falling back to the Unix epoch.
///
/// The service sends `""` or placeholders for deploys that have not
/// started or completed yet; those are not errors.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Drop empty strings so that optional fields are `None` rather than `Some("")`.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

/// Convert a dynamic identifier. Any scalar is accepted; `Ok(None)` only
/// for `null`. Arrays and objects are the only shapes rejected.
fn optional_id(value: &Value, field: &'static str) -> Result<Option<ResourceId>, MappingError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(ResourceId::Text(s.clone()))),
        Value::Number(n) => Ok(Some(ResourceId::Numeric(n.clone()))),
        Value::Bool(b) => Ok(Some(ResourceId::Boolean(*b))),
        Value::Array(_) | Value::Object(_) => Err(MappingError::InvalidIdentifier {
            field,
            found: json_kind(value),
        }),
    }
}

/// Like [`optional_id`], but an absent id becomes the empty string.
fn required_id(value: &Value, field: &'static str) -> Result<ResourceId, MappingError> {
    Ok(optional_id(value, field)?.unwrap_or_else(|| ResourceId::Text(String::new())))
}

// ── Team ───────────────────────────────────────────────────────────

impl TryFrom<WireTeam> for Team {
    type Error = MappingError;

    fn try_from(t: WireTeam) -> Result<Self, Self::Error> {
        let id = match t.id {
            Value::String(id) => id,
            other => {
                return Err(MappingError::TeamIdNotString {
                    found: json_kind(&other),
                });
            }
        };

        Ok(Team {
            id,
            name: t.name.unwrap_or_default(),
        })
    }
}

// ── Build settings ─────────────────────────────────────────────────

impl From<WireBuildSettings> for BuildSettings {
    fn from(b: WireBuildSettings) -> Self {
        BuildSettings {
            build_command: non_empty(b.build_command),
            base_directory: non_empty(b.base_directory_path),
            publish_directory: non_empty(b.publish_directory_path),
            docker_image: non_empty(b.docker_image),
            environment_variables: b
                .environment_variables
                .into_iter()
                .map(|v| EnvironmentVariable {
                    name: v.name.unwrap_or_default(),
                    value: v.value.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

// ── Deploy settings ────────────────────────────────────────────────

/// Resolve the source union: a content identifier wins, then a
/// repository URL, otherwise no source.
impl From<WireDeploySource> for DeploySource {
    fn from(s: WireDeploySource) -> Self {
        if let Some(cid) = non_empty(s.cid) {
            return DeploySource::Ipfs { cid };
        }

        match non_empty(s.url) {
            Some(url) => DeploySource::Repository(RepositorySource {
                kind: s.kind.unwrap_or_default(),
                url,
                branch: s.branch.unwrap_or_default(),
            }),
            None => DeploySource::None,
        }
    }
}

impl From<WireDeploySettings> for DeploySettings {
    fn from(d: WireDeploySettings) -> Self {
        DeploySettings {
            auto_publishing: d.auto_publishing.unwrap_or(false),
            pr_deploy_previews: d.pr_deploy_previews.unwrap_or(false),
            dfinity_use_proxy: d.dfinity_use_proxy.unwrap_or(false),
            source: d.source.into(),
        }
    }
}

// ── Published deploy ───────────────────────────────────────────────

impl From<WireDeployRepository> for DeployCommit {
    fn from(r: WireDeployRepository) -> Self {
        DeployCommit {
            commit: r.commit.unwrap_or_default(),
            branch: r.branch.unwrap_or_default(),
            owner: r.owner.unwrap_or_default(),
            name: r.name.unwrap_or_default(),
            message: r.message.unwrap_or_default(),
        }
    }
}

impl TryFrom<WirePublishedDeploy> for PublishedDeploy {
    type Error = MappingError;

    fn try_from(p: WirePublishedDeploy) -> Result<Self, Self::Error> {
        Ok(PublishedDeploy {
            id: optional_id(&p.id, "publishedDeploy.id")?,
            status: p.status.unwrap_or_default(),
            ipfs_hash: p.ipfs_hash.unwrap_or_default(),
            preview_image: non_empty(p.preview_image),
            auto_publish: p.auto_publish.unwrap_or(false),
            published: p.published.unwrap_or(false),
            log: non_empty(p.log),
            repository: p.repository.into(),
            // Negative build times are clamped to zero.
            total_time: Duration::from_secs(
                p.total_time.and_then(|t| u64::try_from(t).ok()).unwrap_or(0),
            ),
            started_at: parse_timestamp(p.started_at.as_deref()),
            completed_at: parse_timestamp(p.completed_at.as_deref()),
        })
    }
}

// ── Site ───────────────────────────────────────────────────────────

impl TryFrom<WireSite> for Site {
    type Error = MappingError;

    fn try_from(s: WireSite) -> Result<Self, Self::Error> {
        let id = required_id(&s.id, "site.id")?;
        let team = Team::try_from(s.team)?;
        let created_by = optional_id(&s.created_by, "createdBy")?;
        let published_deploy = s
            .published_deploy
            .map(PublishedDeploy::try_from)
            .transpose()?;

        Ok(Site {
            id,
            name: s.name.unwrap_or_default(),
            slug: s.slug.unwrap_or_default(),
            description: non_empty(s.description),
            platform: s.platform.unwrap_or_default(),
            team,
            build_settings: s.build_settings.into(),
            deploy_settings: s.deploy_settings.into(),
            published_deploy,
            created_by,
            created_at: parse_timestamp(s.created_at.as_deref()),
            updated_at: parse_timestamp(s.updated_at.as_deref()),
        })
    }
}

/// Map one wire record into a [`Site`].
pub fn map_site(wire: WireSite) -> Result<Site, MappingError> {
    Site::try_from(wire)
}

/// Map a batch in order. The first malformed record fails the whole batch.
pub fn map_sites(wire: Vec<WireSite>) -> Result<Vec<Site>, MappingError> {
    wire.into_iter().map(Site::try_from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn wire(value: Value) -> WireSite {
        serde_json::from_value(value).unwrap()
    }

    fn base_site() -> Value {
        json!({
            "id": "site-1",
            "name": "My Site",
            "slug": "my-site",
            "description": "",
            "platform": "ipfs",
            "team": { "id": "team-1", "name": "Team One" },
            "buildSettings": {
                "buildCommand": "npm run build",
                "baseDirectoryPath": "site",
                "publishDirectoryPath": "site/dist",
                "dockerImage": "node:16",
                "environmentVariables": [
                    { "name": "B", "value": "2" },
                    { "name": "A", "value": "1" }
                ]
            },
            "deploySettings": {
                "autoPublishing": true,
                "prDeployPreviews": true,
                "dfinityUseProxy": null,
                "source": { "__typename": "IpfsSource", "cid": "bafy123" }
            },
            "publishedDeploy": {
                "id": 991,
                "status": "deployed",
                "ipfsHash": "bafyhash",
                "previewImage": "https://img/preview.png",
                "autoPublish": true,
                "published": true,
                "log": "",
                "repository": {
                    "commit": "abc123",
                    "branch": "main",
                    "owner": "me",
                    "name": "repo",
                    "message": "initial"
                },
                "totalTime": 42,
                "startedAt": "2021-05-01T10:00:00Z",
                "completedAt": "2021-05-01T10:00:42+02:00"
            },
            "createdBy": "user-1",
            "createdAt": "2021-04-30T08:15:00.250Z",
            "updatedAt": "2021-05-01T10:01:00Z"
        })
    }

    #[test]
    fn maps_full_record() {
        let site = map_site(wire(base_site())).unwrap();

        assert_eq!(site.id, ResourceId::Text("site-1".into()));
        assert_eq!(site.slug, "my-site");
        assert_eq!(site.description, None);
        assert_eq!(site.created_by, Some(ResourceId::Text("user-1".into())));
        assert_eq!(
            site.deploy_settings,
            DeploySettings {
                auto_publishing: true,
                pr_deploy_previews: true,
                dfinity_use_proxy: false,
                source: DeploySource::Ipfs {
                    cid: "bafy123".into()
                },
            }
        );

        let deploy = site.published_deploy.unwrap();
        assert_eq!(deploy.id, Some(ResourceId::from(991)));
        assert_eq!(deploy.total_time, Duration::from_secs(42));
        assert_eq!(deploy.log, None);
        assert_eq!(deploy.repository.commit, "abc123");
        assert_eq!(
            deploy.completed_at.to_rfc3339(),
            "2021-05-01T08:00:42+00:00"
        );
    }

    #[test]
    fn team_name_comes_from_team() {
        let site = map_site(wire(base_site())).unwrap();
        assert_eq!(
            site.team,
            Team {
                id: "team-1".into(),
                name: "Team One".into()
            }
        );
    }

    #[test]
    fn publish_directory_comes_from_its_own_field() {
        let site = map_site(wire(base_site())).unwrap();
        assert_eq!(site.build_settings.base_directory.as_deref(), Some("site"));
        assert_eq!(
            site.build_settings.publish_directory.as_deref(),
            Some("site/dist")
        );
    }

    #[test]
    fn environment_variables_keep_wire_order() {
        let site = map_site(wire(base_site())).unwrap();
        let names: Vec<_> = site
            .build_settings
            .environment_variables
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    // ── Deploy source resolution ──

    #[test]
    fn ipfs_source() {
        let source = DeploySource::from(WireDeploySource {
            cid: Some("bafy123".into()),
            ..Default::default()
        });
        assert_eq!(source.content_identifier(), "bafy123");
        assert_eq!(source.repository_type(), "");
        assert_eq!(source.url(), "");
        assert_eq!(source.branch(), "");
    }

    #[test]
    fn repository_source_with_empty_cid() {
        let source = DeploySource::from(WireDeploySource {
            typename: Some("Repository".into()),
            cid: Some(String::new()),
            kind: Some("github".into()),
            url: Some("https://github.com/a/b".into()),
            branch: Some("main".into()),
        });
        assert_eq!(
            source,
            DeploySource::Repository(RepositorySource {
                kind: "github".into(),
                url: "https://github.com/a/b".into(),
                branch: "main".into(),
            })
        );
        assert_eq!(source.content_identifier(), "");
    }

    #[test]
    fn neither_side_populated() {
        assert_eq!(
            DeploySource::from(WireDeploySource::default()),
            DeploySource::None
        );
        let only_branch = WireDeploySource {
            branch: Some("main".into()),
            ..Default::default()
        };
        assert_eq!(DeploySource::from(only_branch), DeploySource::None);
    }

    #[test]
    fn exactly_one_side_survives() {
        let cases = [
            (Some("bafy"), None),
            (None, Some("https://github.com/a/b")),
            (Some(""), Some("https://gitlab.com/x/y")),
            (Some("bafy"), Some("")),
        ];
        for (cid, url) in cases {
            let source = DeploySource::from(WireDeploySource {
                cid: cid.map(String::from),
                url: url.map(String::from),
                ..Default::default()
            });
            let populated = [source.content_identifier(), source.url()]
                .iter()
                .filter(|s| !s.is_empty())
                .count();
            assert_eq!(populated, 1, "cid={cid:?} url={url:?} -> {source:?}");
        }
    }

    // ── Identifiers ──

    #[test]
    fn non_string_team_id_is_an_error() {
        for bad in [json!(17), json!(null), json!(true), json!({ "id": "x" })] {
            let mut value = base_site();
            value["team"]["id"] = bad.clone();
            let result = map_site(wire(value));
            assert!(
                matches!(result, Err(MappingError::TeamIdNotString { .. })),
                "team id {bad} -> {result:?}"
            );
        }
    }

    #[test]
    fn numeric_site_id() {
        let mut value = base_site();
        value["id"] = json!(12345);
        let site = map_site(wire(value)).unwrap();
        assert_eq!(site.id, ResourceId::from(12345));
    }

    #[test]
    fn any_scalar_is_a_valid_id() {
        let cases = [
            (json!(4242.0), "4242.0"),
            (json!(u64::MAX), "18446744073709551615"),
            (json!(-7), "-7"),
            (json!(true), "true"),
            (json!("QmSite"), "QmSite"),
        ];
        for (raw, shown) in cases {
            let mut value = base_site();
            value["id"] = raw.clone();
            value["publishedDeploy"]["id"] = raw.clone();
            value["createdBy"] = raw.clone();

            let site = map_site(wire(value)).unwrap_or_else(|e| panic!("id {raw} -> {e:?}"));
            assert_eq!(site.id.to_string(), shown);
            assert_eq!(
                site.published_deploy.unwrap().id.map(|id| id.to_string()).as_deref(),
                Some(shown)
            );
            assert_eq!(site.created_by.map(|id| id.to_string()).as_deref(), Some(shown));
        }
    }

    #[test]
    fn null_site_id_is_empty_text() {
        let mut value = base_site();
        value["id"] = json!(null);
        let site = map_site(wire(value)).unwrap();
        assert_eq!(site.id, ResourceId::Text(String::new()));
    }

    #[test]
    fn structured_ids_are_rejected() {
        for (bad, found) in [(json!([1, 2]), "array"), (json!({ "id": 1 }), "object")] {
            for field in ["site.id", "publishedDeploy.id", "createdBy"] {
                let mut value = base_site();
                match field {
                    "site.id" => value["id"] = bad.clone(),
                    "publishedDeploy.id" => value["publishedDeploy"]["id"] = bad.clone(),
                    _ => value["createdBy"] = bad.clone(),
                }
                assert_eq!(
                    map_site(wire(value)),
                    Err(MappingError::InvalidIdentifier { field, found })
                );
            }
        }
    }

    #[test]
    fn mixed_scalar_ids_do_not_fail_the_batch() {
        let ids = [json!("a"), json!(1.0), json!(true), json!(u64::MAX)];
        let batch = ids
            .iter()
            .map(|id| {
                let mut value = base_site();
                value["id"] = id.clone();
                wire(value)
            })
            .collect();
        let sites = map_sites(batch).unwrap();
        assert_eq!(sites.len(), 4);
        assert_eq!(sites[1].id.to_string(), "1.0");
    }

    #[test]
    fn null_creator_is_none() {
        let mut value = base_site();
        value["createdBy"] = json!(null);
        let site = map_site(wire(value)).unwrap();
        assert_eq!(site.created_by, None);
    }

    // ── Timestamps ──

    #[test]
    fn valid_timestamps_round_trip() {
        for raw in [
            "2021-05-01T10:00:00+00:00",
            "2022-12-31T23:59:59.123+00:00",
            "1999-01-01T00:00:00+00:00",
        ] {
            assert_eq!(parse_timestamp(Some(raw)).to_rfc3339(), raw);
        }
        assert_eq!(
            parse_timestamp(Some("2021-05-01T12:00:00+02:00")).to_rfc3339(),
            "2021-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn malformed_timestamps_are_epoch() {
        for raw in [Some(""), Some("not a date"), Some("2021-13-45"), None] {
            assert_eq!(parse_timestamp(raw), DateTime::<Utc>::default());
        }
    }

    #[test]
    fn incomplete_deploy_maps_without_error() {
        let mut value = base_site();
        value["publishedDeploy"]["completedAt"] = json!("");
        value["publishedDeploy"]["totalTime"] = json!(-5);
        let deploy = map_site(wire(value)).unwrap().published_deploy.unwrap();
        assert_eq!(deploy.completed_at, DateTime::<Utc>::default());
        assert_eq!(deploy.total_time, Duration::ZERO);
    }

    #[test]
    fn never_published_site() {
        let site = map_site(wire(json!({
            "id": "fresh",
            "team": { "id": "team-1" },
            "publishedDeploy": null
        })))
        .unwrap();
        assert!(site.published_deploy.is_none());
        assert!(site.deploy_settings.source.is_none());
        assert_eq!(site.created_at, DateTime::<Utc>::default());
        assert_eq!(site.team.name, "");
    }

    // ── Batches ──

    #[test]
    fn batch_preserves_order() {
        let batch: Vec<_> = (0..5)
            .map(|i| {
                let mut value = base_site();
                value["slug"] = json!(format!("site-{i}"));
                wire(value)
            })
            .collect();
        let sites = map_sites(batch).unwrap();
        let slugs: Vec<_> = sites.iter().map(|s| s.slug.clone()).collect();
        assert_eq!(slugs, vec!["site-0", "site-1", "site-2", "site-3", "site-4"]);
    }

    #[test]
    fn batch_fails_on_any_bad_element() {
        for k in 0..4 {
            let batch: Vec<_> = (0..4)
                .map(|i| {
                    let mut value = base_site();
                    if i == k {
                        value["team"]["id"] = json!(99);
                    }
                    wire(value)
                })
                .collect();
            assert_eq!(
                map_sites(batch),
                Err(MappingError::TeamIdNotString { found: "number" })
            );
        }
    }

    #[test]
    fn empty_batch() {
        assert_eq!(map_sites(Vec::new()), Ok(Vec::new()));
    }
}
