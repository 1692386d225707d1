use super::LinkStore;
use crate::error::Result;
use crate::model::Link;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

pub const METADATA_FILENAME: &str = "metadata.yaml";

/// Link store backed by a single YAML document mapping list names to links.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the top-level mapping. A missing or blank file is an empty
    /// mapping; so is a document that is not valid YAML or not a mapping.
    fn load_lists(&self) -> Result<Mapping> {
        if !self.path.exists() {
            log::info!("No metadata file at {}", self.path.display());
            return Ok(Mapping::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Mapping::new());
        }

        match serde_yaml::from_str::<Value>(&content) {
            Ok(Value::Mapping(lists)) => Ok(lists),
            Ok(Value::Null) => Ok(Mapping::new()),
            Ok(_) => {
                log::warn!(
                    "Ignoring {}: top level is not a mapping of lists",
                    self.path.display()
                );
                Ok(Mapping::new())
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", self.path.display(), e);
                Ok(Mapping::new())
            }
        }
    }
}

impl LinkStore for FileStore {
    fn get_list(&self, name: &str) -> Result<Vec<Link>> {
        let mut lists = self.load_lists()?;
        let Some(value) = lists.remove(name) else {
            log::info!("List '{}' not found in {}", name, self.path.display());
            return Ok(Vec::new());
        };

        match serde_yaml::from_value::<Vec<Link>>(value) {
            Ok(links) => Ok(links),
            Err(e) => {
                log::warn!("List '{}' could not be decoded, treating as empty: {}", name, e);
                Ok(Vec::new())
            }
        }
    }
}
