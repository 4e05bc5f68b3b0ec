//! Site command handlers.

use std::fmt::Write;

use tabled::Tabled;

use fleek_core::{DeploySource, Fleek, Site};

use crate::cli::{SitesArgs, SitesCommand};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::Ctx;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl SiteRow {
    fn new(site: &Site, color: bool) -> Self {
        Self {
            slug: site.slug.clone(),
            name: site.name.clone(),
            platform: site.platform.clone(),
            source: source_summary(&site.deploy_settings.source),
            status: site.published_deploy.as_ref().map_or_else(
                || output::paint_dim("unpublished", color),
                |d| output::paint_status(&d.status, color),
            ),
            updated: site.updated_at.format("%Y-%m-%d").to_string(),
        }
    }
}

fn source_summary(source: &DeploySource) -> String {
    match source {
        DeploySource::None => String::new(),
        DeploySource::Ipfs { cid } => format!("ipfs:{cid}"),
        DeploySource::Repository(repo) => format!("{}@{}", repo.url, repo.branch),
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(site: &Site, color: bool) -> String {
    let mut out = String::new();
    let field = |out: &mut String, label: &str, value: &str| {
        let _ = writeln!(out, "{label:<18} {value}");
    };

    field(&mut out, "ID:", &site.id.to_string());
    field(&mut out, "Name:", &site.name);
    field(&mut out, "Slug:", &site.slug);
    if let Some(ref description) = site.description {
        field(&mut out, "Description:", description);
    }
    field(&mut out, "Platform:", &site.platform);
    field(
        &mut out,
        "Team:",
        &format!("{} ({})", site.team.name, site.team.id),
    );
    if let Some(ref created_by) = site.created_by {
        field(&mut out, "Created by:", &created_by.to_string());
    }
    field(
        &mut out,
        "Created:",
        &site.created_at.format(TIMESTAMP_FORMAT).to_string(),
    );
    field(
        &mut out,
        "Updated:",
        &site.updated_at.format(TIMESTAMP_FORMAT).to_string(),
    );

    // Build
    let build = &site.build_settings;
    let _ = writeln!(out, "\nBuild");
    for (label, value) in [
        ("  Command:", &build.build_command),
        ("  Base directory:", &build.base_directory),
        ("  Publish dir:", &build.publish_directory),
        ("  Docker image:", &build.docker_image),
    ] {
        if let Some(value) = value {
            field(&mut out, label, value);
        }
    }
    if !build.environment_variables.is_empty() {
        let names: Vec<_> = build
            .environment_variables
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        field(&mut out, "  Env vars:", &names.join(", "));
    }

    // Deploy
    let deploy = &site.deploy_settings;
    let _ = writeln!(out, "\nDeploy");
    field(&mut out, "  Auto publish:", &deploy.auto_publishing.to_string());
    field(&mut out, "  PR previews:", &deploy.pr_deploy_previews.to_string());
    field(&mut out, "  Dfinity proxy:", &deploy.dfinity_use_proxy.to_string());
    match &deploy.source {
        DeploySource::None => field(&mut out, "  Source:", &output::paint_dim("none", color)),
        DeploySource::Ipfs { cid } => field(&mut out, "  IPFS CID:", cid),
        DeploySource::Repository(repo) => {
            field(&mut out, "  Repository:", &repo.url);
            field(&mut out, "  Provider:", &repo.kind);
            field(&mut out, "  Branch:", &repo.branch);
        }
    }

    // Published
    let _ = writeln!(out, "\nPublished deploy");
    match site.published_deploy {
        None => field(&mut out, "  Status:", &output::paint_dim("unpublished", color)),
        Some(ref d) => {
            field(&mut out, "  Status:", &output::paint_status(&d.status, color));
            if let Some(ref id) = d.id {
                field(&mut out, "  ID:", &id.to_string());
            }
            field(&mut out, "  IPFS hash:", &d.ipfs_hash);
            if !d.repository.commit.is_empty() {
                field(
                    &mut out,
                    "  Commit:",
                    &format!("{} ({})", d.repository.commit, d.repository.branch),
                );
            }
            field(
                &mut out,
                "  Build time:",
                &format!("{}s", d.total_time.as_secs()),
            );
            field(
                &mut out,
                "  Started:",
                &d.started_at.format(TIMESTAMP_FORMAT).to_string(),
            );
            field(
                &mut out,
                "  Completed:",
                &d.completed_at.format(TIMESTAMP_FORMAT).to_string(),
            );
        }
    }

    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(fleek: &Fleek, args: SitesArgs, ctx: &Ctx<'_>) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List { team } => {
            let team = config::resolve_team(team, &ctx.config, &ctx.profile)
                .ok_or(CliError::NoTeam)?;
            let sites = fleek
                .list_sites_by_team(&team)
                .await
                .map_err(|e| CliError::from_core(e, &ctx.profile))?;

            let out = output::render_list(
                &ctx.format,
                &sites,
                |s| SiteRow::new(s, ctx.color),
                |s| s.slug.clone(),
            );
            output::print_output(&out, ctx.global.quiet);
            Ok(())
        }

        SitesCommand::Get { slug } => {
            let site = fleek
                .get_site_by_slug(&slug)
                .await
                .map_err(|e| CliError::from_core(e, &ctx.profile))?;

            let out = output::render_single(
                &ctx.format,
                &site,
                |s| detail(s, ctx.color),
                |s| s.id.to_string(),
            );
            output::print_output(&out, ctx.global.quiet);
            Ok(())
        }
    }
}
