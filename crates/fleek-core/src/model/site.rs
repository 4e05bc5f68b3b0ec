// ── Site domain types ──

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource_id::ResourceId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: ResourceId,
    pub name: String,
    /// Human-readable identifier used by `get_site_by_slug`.
    pub slug: String,
    pub description: Option<String>,
    /// Hosting platform, e.g. `"ipfs"` or `"dfinity"`.
    pub platform: String,
    pub team: Team,
    pub build_settings: BuildSettings,
    pub deploy_settings: DeploySettings,
    /// `None` until the site has published at least once.
    pub published_deploy: Option<PublishedDeploy>,
    pub created_by: Option<ResourceId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    pub build_command: Option<String>,
    pub base_directory: Option<String>,
    pub publish_directory: Option<String>,
    pub docker_image: Option<String>,
    /// In the order the service returned them.
    pub environment_variables: Vec<EnvironmentVariable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySettings {
    pub auto_publishing: bool,
    pub pr_deploy_previews: bool,
    pub dfinity_use_proxy: bool,
    pub source: DeploySource,
}

// ── Deploy source ───────────────────────────────────────────────────

/// Where a site's content comes from.
///
/// At most one of content identifier and repository is ever set; the
/// accessors return `""` for whichever side is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DeploySource {
    /// No deploy source configured yet.
    #[default]
    None,
    /// Content-addressed upload pinned on IPFS.
    Ipfs { cid: String },
    /// Built from a version-controlled repository.
    Repository(RepositorySource),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySource {
    /// Provider, e.g. `"github"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub branch: String,
}

impl DeploySource {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn content_identifier(&self) -> &str {
        match self {
            Self::Ipfs { cid } => cid,
            _ => "",
        }
    }

    pub fn repository(&self) -> Option<&RepositorySource> {
        match self {
            Self::Repository(repo) => Some(repo),
            _ => None,
        }
    }

    pub fn repository_type(&self) -> &str {
        self.repository().map_or("", |r| r.kind.as_str())
    }

    pub fn url(&self) -> &str {
        self.repository().map_or("", |r| r.url.as_str())
    }

    pub fn branch(&self) -> &str {
        self.repository().map_or("", |r| r.branch.as_str())
    }
}

// ── Published deploy ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedDeploy {
    pub id: Option<ResourceId>,
    pub status: String,
    pub ipfs_hash: String,
    pub preview_image: Option<String>,
    pub auto_publish: bool,
    pub published: bool,
    pub log: Option<String>,
    pub repository: DeployCommit,
    /// Total build time, serialized as whole seconds.
    #[serde(with = "duration_secs")]
    pub total_time: Duration,
    /// Unix epoch when the service sent no parseable timestamp.
    pub started_at: DateTime<Utc>,
    /// Unix epoch until the deploy completes.
    pub completed_at: DateTime<Utc>,
}

/// Commit a deploy was built from. Empty for IPFS uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployCommit {
    pub commit: String,
    pub branch: String,
    pub owner: String,
    pub name: String,
    pub message: String,
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
