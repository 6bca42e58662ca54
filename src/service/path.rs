// src/service/path.rs
// =============================================================================
// Turns an inbound URL path into the upstream-relative repository path.
//
//   /projectinfo/v1/github.com/apache/kafka  ->  repos/apache/kafka
//
// Contract:
// - splitting on '/' gives exactly 6 segments
//   ["", "projectinfo", "v1", "github.com", "<owner>", "<name>"]
// - the path starts with the service base path
// - the host segment is "github.com" (or already "repos")
// - owner and name are plain segments: not empty, not "." or "..", no ':'
// On success the owner and name are kept as-is; the upstream path is always
// repos/<owner>/<name>.
//
// No I/O happens here; this is plain string work.
// =============================================================================

use std::fmt;

use super::error::ServiceError;

/// Base path this service is mounted on
pub const SERVICE_BASE_PATH: &str = "/projectinfo/v1/";

/// Repository served by fixture mode
pub const DEFAULT_REPO_PATH: &str = "repos/apache/kafka";

const DEFAULT_OWNER: &str = "apache";
const DEFAULT_NAME: &str = "kafka";

const EXPECTED_SEGMENTS: usize = 6;
const HOST_SEGMENTS: [&str; 2] = ["github.com", "repos"];

/// An upstream repository, addressed as `repos/<owner>/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    owner: String,
    name: String,
}

impl RepoPath {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upstream path segments, optionally followed by an endpoint
    /// such as "contributors"
    pub fn segments<'a>(&'a self, endpoint: Option<&'a str>) -> Vec<&'a str> {
        let mut segments = vec!["repos", self.owner.as_str(), self.name.as_str()];
        segments.extend(endpoint);
        segments
    }
}

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath {
            owner: DEFAULT_OWNER.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments(None).join("/"))
    }
}

/// Validates `original_path` and turns it into a [`RepoPath`]
///
/// On error there is no partial result; callers wanting a fallback use
/// `RepoPath::default()`.
pub fn get_repo_path(original_path: &str) -> Result<RepoPath, ServiceError> {
    let invalid = || ServiceError::InvalidPath(original_path.to_string());

    if !original_path.starts_with(SERVICE_BASE_PATH) {
        return Err(invalid());
    }

    let segments: Vec<&str> = original_path.split('/').collect();
    if segments.len() != EXPECTED_SEGMENTS {
        return Err(invalid());
    }

    let (host, owner, name) = (segments[3], segments[4], segments[5]);
    if !HOST_SEGMENTS.contains(&host) || !is_plain_segment(owner) || !is_plain_segment(name) {
        return Err(invalid());
    }

    Ok(RepoPath {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

// A segment that can't change where the upstream URL points
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && !segment.contains(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(path: &str) {
        match get_repo_path(path) {
            Err(ServiceError::InvalidPath(p)) => assert_eq!(p, path),
            other => panic!("expected InvalidPath for {:?}, got {:?}", path, other),
        }
    }

    #[test]
    fn test_github_path_becomes_repos_path() {
        let repo = get_repo_path("/projectinfo/v1/github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner(), "rust-lang");
        assert_eq!(repo.name(), "rust");
        assert_eq!(repo.to_string(), "repos/rust-lang/rust");
    }

    #[test]
    fn test_default_repo_path_passes_unchanged() {
        let path = format!("{}{}", SERVICE_BASE_PATH, DEFAULT_REPO_PATH);
        let repo = get_repo_path(&path).unwrap();
        assert_eq!(repo, RepoPath::default());
    }

    #[test]
    fn test_repo_named_github_com() {
        let repo = get_repo_path("/projectinfo/v1/github.com/owner/github.com").unwrap();
        assert_eq!(repo.to_string(), "repos/owner/github.com");
    }

    #[test]
    fn test_default_repo_path_display() {
        assert_eq!(RepoPath::default().to_string(), DEFAULT_REPO_PATH);
    }

    #[test]
    fn test_empty_path() {
        assert_invalid("");
    }

    #[test]
    fn test_too_few_segments() {
        assert_invalid("cov/fe/fe");
        assert_invalid("/projectinfo/v1/github.com/apache");
    }

    #[test]
    fn test_empty_repo_name() {
        assert_invalid("/projectinfo/v1/github.com/apache/");
    }

    #[test]
    fn test_trailing_garbage_segment() {
        assert_invalid("/projectinfo/v1/github.com/apache/kafka/extra");
        assert_invalid("/projectinfo/v1/github.com/apache/kafka/");
    }

    #[test]
    fn test_wrong_base_path() {
        assert_invalid("/projectinfo/v2/github.com/apache/kafka");
    }

    #[test]
    fn test_other_host_segment() {
        assert_invalid("/projectinfo/v1/gitlab.com/apache/kafka");
        assert_invalid("/projectinfo/v1/http:/evil.example.com/b");
    }

    #[test]
    fn test_url_scheme_in_owner_or_name() {
        assert_invalid("/projectinfo/v1/github.com/http:/evil.example.com");
        assert_invalid("/projectinfo/v1/github.com/apache/http:");
    }

    #[test]
    fn test_dot_segments() {
        assert_invalid("/projectinfo/v1/github.com/../..");
        assert_invalid("/projectinfo/v1/github.com/apache/..");
        assert_invalid("/projectinfo/v1/github.com/./kafka");
    }

    #[test]
    fn test_empty_owner() {
        assert_invalid("/projectinfo/v1/github.com//kafka");
    }

    #[test]
    fn test_endpoint_segments() {
        let repo = RepoPath::default();
        assert_eq!(repo.segments(None), vec!["repos", "apache", "kafka"]);
        assert_eq!(
            repo.segments(Some("contributors")),
            vec!["repos", "apache", "kafka", "contributors"]
        );
    }
}
