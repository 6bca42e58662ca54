// src/github/fetch.rs
// =============================================================================
// This module fetches the three raw bodies a response is built from:
//
//   GET {host}/repos/<owner>/<name>               -> project
//   GET {host}/repos/<owner>/<name>/contributors  -> contributors
//   GET {host}/repos/<owner>/<name>/languages     -> languages
//
// Two sources are supported:
// - Remote: the GitHub REST API (or anything that answers like it)
// - Local: three JSON fixture files on disk, for working offline. The fixture
//   directory holds one fixed dataset, so the requested repo path is ignored.
//
// The three fetches don't depend on each other, so they run concurrently and
// are joined. All three must succeed; the first failure wins.
//
// Rust concepts:
// - async functions: For network and file I/O
// - futures::try_join!: Run several fallible futures, stop at the first error
// - Enums with data: One type that is either a remote or a local source
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::service::{RepoPath, ServiceError};

/// Fixture file names, without the .json extension
const PROJECT_FIXTURE: &str = "project";
const CONTRIBUTORS_FIXTURE: &str = "contributors";
const LANGUAGES_FIXTURE: &str = "languages";

/// The three bodies, exactly as received
#[derive(Debug, Clone)]
pub struct RawBodies {
    pub project: Vec<u8>,
    pub contributors: Vec<u8>,
    pub languages: Vec<u8>,
}

/// Where raw bodies come from
#[derive(Debug, Clone)]
pub enum Upstream {
    Remote { client: Client, host: Url },
    Local { dir: PathBuf },
}

impl Upstream {
    /// Remote source rooted at `host`, with a per-request timeout
    ///
    /// The client is built once and shared; cloning an Upstream is cheap.
    pub fn remote(host: Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Upstream::Remote { client, host })
    }

    /// Local source reading fixtures from `dir`
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        Upstream::Local { dir: dir.into() }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Upstream::Local { .. })
    }

    /// Fetches project, contributors and languages for `repo`
    pub async fn fetch_all(&self, repo: &RepoPath) -> Result<RawBodies, ServiceError> {
        let (project, contributors, languages) = match self {
            Upstream::Remote { client, host } => {
                let project_url = endpoint_url(host, repo, None)?;
                let contributors_url = endpoint_url(host, repo, Some("contributors"))?;
                let languages_url = endpoint_url(host, repo, Some("languages"))?;

                futures::try_join!(
                    fetch_remote(client, project_url),
                    fetch_remote(client, contributors_url),
                    fetch_remote(client, languages_url),
                )?
            }
            Upstream::Local { dir } => {
                futures::try_join!(
                    read_fixture(dir, PROJECT_FIXTURE),
                    read_fixture(dir, CONTRIBUTORS_FIXTURE),
                    read_fixture(dir, LANGUAGES_FIXTURE),
                )?
            }
        };

        Ok(RawBodies {
            project,
            contributors,
            languages,
        })
    }
}

// Appends repos/<owner>/<name>[/<endpoint>] to the host's path
//
// Segments are pushed one by one (and percent-encoded by url), so nothing in
// the repo path can swap the host or climb out of the API root.
fn endpoint_url(host: &Url, repo: &RepoPath, endpoint: Option<&str>) -> Result<Url, ServiceError> {
    let mut url = host.clone();
    url.path_segments_mut()
        .map_err(|_| ServiceError::unavailable(host.as_str(), "upstream host cannot be a base URL"))?
        .pop_if_empty()
        .extend(repo.segments(endpoint));
    Ok(url)
}

// Issues one GET and returns the whole body
//
// Unreachable host, timeout, non-2xx status and a body that can't be read
// all end up as UpstreamUnavailable.
async fn fetch_remote(client: &Client, url: Url) -> Result<Vec<u8>, ServiceError> {
    debug!("GET {}", url);
    let response = client.get(url.clone()).send().await.map_err(|e| {
        warn!("No response from {}: {}", url, e);
        ServiceError::unavailable(url.as_str(), describe(&e))
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} answered HTTP {}", url, status);
        return Err(ServiceError::unavailable(url.as_str(), format!("HTTP {}", status)));
    }

    let body = response.bytes().await.map_err(|e| {
        warn!("Unable to read response body from {}: {}", url, e);
        ServiceError::unavailable(url.as_str(), describe(&e))
    })?;

    Ok(body.to_vec())
}

fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else {
        error.to_string()
    }
}

// Reads <dir>/<name>.json
async fn read_fixture(dir: &Path, name: &str) -> Result<Vec<u8>, ServiceError> {
    let path = dir.join(format!("{}.json", name));
    debug!("Reading fixture {}", path.display());

    tokio::fs::read(&path).await.map_err(|e| {
        warn!("Could not open local working file {}: {}", path.display(), e);
        ServiceError::unavailable(path.display().to_string(), e)
    })
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why try_join! and not three awaits in a row?
//    - The fetches are independent, so waiting for them one after another
//      only adds latency
//    - try_join! polls all three at once and returns early on the first Err,
//      dropping the other two futures
//
// 2. Why is the timeout on the Client?
//    - reqwest applies it to every request sent through that client,
//      covering connect, send and reading the body
//    - An expired timeout is reported like any other unreachable upstream
// -----------------------------------------------------------------------------
