// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option can also come from the environment, so the service runs the
// same way from a shell, a container or a PaaS that only hands out $PORT:
//
//   PORT                    port to listen on (required for `serve`)
//   HOST                    address to bind (default 0.0.0.0)
//   DEVENV                  "true" to serve local fixtures instead of GitHub
//   LOCAL_SAMPLES_PATH      where the fixtures live
//   GITHUB_API_HOST         upstream API root
//   UPSTREAM_TIMEOUT_SECS   per-request timeout for upstream calls
//
// Values are read once at startup and turned into a Config (see config.rs).
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::service::ProjectField;

#[derive(Parser, Debug)]
#[command(
    name = "projectinfo",
    version,
    about = "Folds GitHub project, contributor and language data into one JSON document",
    long_about = "projectinfo answers GET /projectinfo/v1/github.com/<owner>/<repo> with the project name, \
                  its owner, the top contributor and the languages used, gathered from the GitHub API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    ///
    /// Example: PORT=8080 projectinfo serve
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT")]
        port: u16,

        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        bind: String,

        #[command(flatten)]
        upstream: UpstreamArgs,
    },

    /// Answer a single request path and print the JSON response
    ///
    /// Example: projectinfo lookup /projectinfo/v1/github.com/apache/kafka --local
    Lookup {
        /// Request path, including the /projectinfo/v1/ prefix
        path: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        upstream: UpstreamArgs,
    },
}

/// Options shared by every command that talks to the upstream
#[derive(Args, Debug, Clone)]
pub struct UpstreamArgs {
    /// Serve the local fixture dataset instead of calling the upstream API
    #[arg(long, env = "DEVENV")]
    pub local: bool,

    /// Directory holding project.json, contributors.json and languages.json
    #[arg(long, env = "LOCAL_SAMPLES_PATH", default_value = "./LocalSamples/")]
    pub fixtures_dir: PathBuf,

    /// Root URL of the upstream hosting API
    #[arg(long, env = "GITHUB_API_HOST", default_value = "https://api.github.com/")]
    pub upstream_host: Url,

    /// Timeout for each upstream request, in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Which upstream field fills "project" in the response
    #[arg(long, value_enum, default_value_t = ProjectField::Name)]
    pub project_field: ProjectField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_with_flags() {
        let cli = Cli::try_parse_from([
            "projectinfo",
            "serve",
            "--port",
            "8080",
            "--local",
            "--fixtures-dir",
            "/tmp/samples",
            "--project-field",
            "full-name",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve { port, upstream, .. } => {
                assert_eq!(port, 8080);
                assert!(upstream.local);
                assert_eq!(upstream.fixtures_dir, PathBuf::from("/tmp/samples"));
                assert_eq!(upstream.project_field, ProjectField::FullName);
                assert_eq!(upstream.upstream_host.as_str(), "https://api.github.com/");
                assert_eq!(upstream.timeout_secs, 10);
            }
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_takes_a_path() {
        let cli = Cli::try_parse_from([
            "projectinfo",
            "lookup",
            "/projectinfo/v1/github.com/apache/kafka",
            "--pretty",
        ])
        .unwrap();

        match cli.command {
            Commands::Lookup { path, pretty, .. } => {
                assert_eq!(path, "/projectinfo/v1/github.com/apache/kafka");
                assert!(pretty);
            }
            other => panic!("expected lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_upstream_host_is_rejected() {
        let result = Cli::try_parse_from([
            "projectinfo",
            "lookup",
            "/projectinfo/v1/github.com/apache/kafka",
            "--upstream-host",
            "not a url",
        ]);
        assert!(result.is_err());
    }
}
