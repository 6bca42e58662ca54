// src/config.rs
// =============================================================================
// Process-wide settings, built once at startup and passed by reference to
// whatever needs them. Nothing in here changes after construction.
// =============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use crate::cli::UpstreamArgs;
use crate::github::Upstream;
use crate::service::ProjectField;

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the three raw bodies come from
    pub upstream: Upstream,
    /// Which upstream field becomes "project"
    pub project_field: ProjectField,
}

impl Config {
    pub fn new(upstream: Upstream, project_field: ProjectField) -> Self {
        Config {
            upstream,
            project_field,
        }
    }

    pub fn from_args(args: &UpstreamArgs) -> Result<Self> {
        let upstream = if args.local {
            info!("Fixture mode: reading from {}", args.fixtures_dir.display());
            Upstream::local(&args.fixtures_dir)
        } else {
            info!(
                "Remote mode: upstream {} (timeout {}s)",
                args.upstream_host, args.timeout_secs
            );
            Upstream::remote(
                args.upstream_host.clone(),
                Duration::from_secs(args.timeout_secs),
            )
            .context("Failed to create HTTP client")?
        };

        Ok(Config::new(upstream, args.project_field))
    }

    /// Fixture mode over the dataset checked in next to Cargo.toml
    #[cfg(test)]
    pub fn for_fixtures() -> Self {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("LocalSamples");
        Config::new(Upstream::local(dir), ProjectField::Name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use url::Url;

    fn args(local: bool) -> UpstreamArgs {
        UpstreamArgs {
            local,
            fixtures_dir: PathBuf::from("./LocalSamples/"),
            upstream_host: Url::parse("https://api.github.com/").unwrap(),
            timeout_secs: 3,
            project_field: ProjectField::FullName,
        }
    }

    #[test]
    fn test_local_flag_selects_fixtures() {
        let config = Config::from_args(&args(true)).unwrap();
        assert!(config.upstream.is_local());
        assert_eq!(config.project_field, ProjectField::FullName);
    }

    #[test]
    fn test_remote_by_default() {
        let config = Config::from_args(&args(false)).unwrap();
        assert!(!config.upstream.is_local());
    }
}
