// src/service/shape.rs
// =============================================================================
// Decodes the three upstream bodies and folds them into one response.
//
//   project body       -> project, owner
//   contributors body  -> committer, commits   (first element of the array)
//   languages body     -> language             (keys of the map)
//
// The upstream API returns contributors sorted by contributions, highest
// first, so the first element is taken as the top contributor. That order is
// trusted, not re-checked here.
//
// Pure transform: no network, no files.
// =============================================================================

use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::ServiceError;

/// Project name and owner, as returned by `GET repos/<owner>/<name>`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: Option<String>,
    /// "owner/name" form of the project name
    #[serde(default)]
    pub full_name: Option<String>,
    pub owner: GithubUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubUser {
    pub login: String,
}

/// One element of `GET repos/<owner>/<name>/contributors`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u32,
}

/// Which upstream field fills `project` in the response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ProjectField {
    /// Bare name, e.g. "kafka"
    #[default]
    Name,
    /// Qualified name, e.g. "apache/kafka"
    FullName,
}

impl ProjectField {
    fn json_key(self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::FullName => "full_name",
        }
    }
}

/// The document this service returns. Field order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedResponse {
    pub project: String,
    pub owner: String,
    pub committer: String,
    pub commits: u32,
    #[serde(rename = "language")]
    pub languages: Vec<String>,
}

/// Builds the response from the three raw bodies
pub fn build_response(
    project_body: &[u8],
    contributors_body: &[u8],
    languages_body: &[u8],
    field: ProjectField,
) -> Result<UnifiedResponse, ServiceError> {
    let (project, owner) = project_info(project_body, field)?;
    let top = top_contributor(contributors_body)?;
    let languages = language_names(languages_body)?;

    Ok(UnifiedResponse {
        project,
        owner,
        committer: top.login,
        commits: top.contributions,
        languages,
    })
}

/// Returns (project name, owner login)
pub fn project_info(body: &[u8], field: ProjectField) -> Result<(String, String), ServiceError> {
    let info: ProjectInfo =
        serde_json::from_slice(body).map_err(|e| ServiceError::malformed("project", e))?;

    let name = match field {
        ProjectField::Name => info.name,
        ProjectField::FullName => info.full_name,
    };
    let name = name.ok_or_else(|| {
        ServiceError::malformed("project", format!("missing \"{}\" field", field.json_key()))
    })?;

    Ok((name, info.owner.login))
}

/// Returns the first contributor in the list
pub fn top_contributor(body: &[u8]) -> Result<Contributor, ServiceError> {
    let contributors: Vec<Contributor> =
        serde_json::from_slice(body).map_err(|e| ServiceError::malformed("contributors", e))?;

    contributors
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::malformed("contributors", "empty contributor list"))
}

/// Returns the language names, largest byte count first
pub fn language_names(body: &[u8]) -> Result<Vec<String>, ServiceError> {
    let languages: HashMap<String, u64> =
        serde_json::from_slice(body).map_err(|e| ServiceError::malformed("languages", e))?;

    let mut by_size: Vec<(String, u64)> = languages.into_iter().collect();
    by_size.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| {
        b_bytes.cmp(a_bytes).then_with(|| a_name.cmp(b_name))
    });

    Ok(by_size.into_iter().map(|(name, _)| name).collect())
}
