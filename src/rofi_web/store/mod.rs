//! # Storage Layer
//!
//! Links are grouped into named lists. The [`LinkStore`] trait is the only
//! thing the command layer knows about where those lists come from.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store backed by `metadata.yaml`
//! - [`memory::InMemoryStore`]: In-memory store for testing
//!
//! ## Storage Format
//!
//! ```text
//! ~/.config/rofi-web/
//! ├── config.yaml      # fg_color and friends
//! └── metadata.yaml    # list name -> sequence of links
//! ```
//!
//! ```yaml
//! repositories:
//!   - name: rofi-web
//!     tags: SamWolfs/rofi-web
//!     url: https://github.com/SamWolfs/rofi-web
//! ```
//!
//! ## Ordering
//!
//! A store returns links in a stable order for the lifetime of the process.
//! Selection by visible text relies on this: the first link with a matching
//! name wins.

use crate::error::Result;
use crate::model::Link;

pub mod fs;
pub mod memory;

/// Read access to named link lists.
pub trait LinkStore {
    /// Returns the links of the named list, in store order.
    ///
    /// An unknown list is not an error; it yields an empty collection.
    fn get_list(&self, name: &str) -> Result<Vec<Link>>;
}
