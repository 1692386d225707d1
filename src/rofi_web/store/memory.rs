use super::LinkStore;
use crate::error::Result;
use crate::model::Link;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lists: HashMap<String, Vec<Link>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the named list.
    pub fn insert_list(&mut self, name: impl Into<String>, links: Vec<Link>) {
        self.lists.insert(name.into(), links);
    }
}

impl LinkStore for InMemoryStore {
    fn get_list(&self, name: &str) -> Result<Vec<Link>> {
        Ok(self.lists.get(name).cloned().unwrap_or_default())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a list of `count` generated links named `link-1`, `link-2`, ...
        pub fn with_links(mut self, list: &str, count: usize) -> Self {
            let links = (1..=count)
                .map(|i| {
                    Link::new(
                        format!("link-{}", i),
                        format!("tag-{}", i),
                        format!("https://example.com/{}", i),
                    )
                })
                .collect();
            self.store.insert_list(list, links);
            self
        }

        /// Appends a single link to the named list.
        pub fn with_link(mut self, list: &str, name: &str, tags: &str, url: &str) -> Self {
            self.store
                .lists
                .entry(list.to_string())
                .or_default()
                .push(Link::new(name, tags, url));
            self
        }
    }
}
