// src/service/mod.rs
// =============================================================================
// The request pipeline: validate -> fetch -> shape.
//
//   run_service("/projectinfo/v1/github.com/apache/kafka", &config)
//     1. get_repo_path      -> repos/apache/kafka    (or InvalidPath, no fetch)
//     2. Upstream::fetch_all -> three raw bodies      (or UpstreamUnavailable)
//     3. build_response      -> UnifiedResponse       (or MalformedUpstreamResponse)
//
// Each stage either hands its result to the next or ends the request with an
// error. There are no retries and no partial responses.
// =============================================================================

mod error;
mod path;
mod shape;

pub use error::ServiceError;
pub use path::{get_repo_path, RepoPath, DEFAULT_REPO_PATH, SERVICE_BASE_PATH};
pub use shape::{build_response, ProjectField, UnifiedResponse};

use log::{debug, info};

use crate::config::Config;

/// Answers one request for `path`
pub async fn run_service(path: &str, config: &Config) -> Result<UnifiedResponse, ServiceError> {
    let repo = get_repo_path(path).map_err(|e| {
        info!("Rejected path {:?}", path);
        e
    })?;

    if config.upstream.is_local() {
        debug!("Fixture mode: serving local dataset for {}", repo);
    }

    let bodies = config.upstream.fetch_all(&repo).await?;

    build_response(
        &bodies.project,
        &bodies.contributors,
        &bodies.languages,
        config.project_field,
    )
}
