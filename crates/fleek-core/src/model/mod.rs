// ── Domain model ──
//
// Canonical, fully typed records handed to callers. Built once by the
// mapper in `convert` and never mutated afterwards.

pub mod resource_id;
pub mod site;

pub use resource_id::ResourceId;
pub use site::{
    BuildSettings, DeployCommit, DeploySettings, DeploySource, EnvironmentVariable,
    PublishedDeploy, RepositorySource, Site, Team,
};
