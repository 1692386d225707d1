//! Converts `gh repo list --json name,nameWithOwner,url` output into links.
//!
//! The GitHub CLI does the fetching; this only reshapes its JSON into the
//! YAML sequence expected under a list key in `metadata.yaml`.

use crate::error::Result;
use crate::model::Link;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repository {
    name: String,
    #[serde(default)]
    name_with_owner: String,
    url: String,
}

impl From<Repository> for Link {
    fn from(repo: Repository) -> Self {
        Link::new(repo.name, repo.name_with_owner, repo.url)
    }
}

pub fn links_from_repo_json(json: &str) -> Result<Vec<Link>> {
    let repos: Vec<Repository> = serde_json::from_str(json)?;
    Ok(repos.into_iter().map(Link::from).collect())
}

pub fn run(json: &str) -> Result<String> {
    let links = links_from_repo_json(json)?;
    Ok(serde_yaml::to_string(&links)?)
}
