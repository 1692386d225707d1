//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for rofi-web operations.
//!
//! [`RofiWebApi::show`] is the mode dispatcher for the script mode: given the
//! [`Mode`] derived from the invocation, it either renders the list or
//! resolves the selection and hands the link to a [`LinkOpener`].
//!
//! ## Generic Over LinkStore
//!
//! - Production: `RofiWebApi<FileStore>`
//! - Testing: `RofiWebApi<InMemoryStore>`
//!
//! The opener is a parameter of `show` rather than a field, so tests can pass
//! a recording opener while production passes [`Launcher::host`].
//!
//! [`Launcher::host`]: crate::launcher::Launcher::host

use crate::commands;
use crate::config::RofiWebConfig;
use crate::error::Result;
use crate::launcher::LinkOpener;
use crate::model::Link;
use crate::store::LinkStore;

pub struct RofiWebApi<S: LinkStore> {
    store: S,
    config: RofiWebConfig,
}

impl<S: LinkStore> RofiWebApi<S> {
    pub fn new(store: S, config: RofiWebConfig) -> Self {
        Self { store, config }
    }

    pub fn render(&self, list: &str) -> Result<CmdResult> {
        commands::render::run(&self.store, &self.config, list)
    }

    pub fn resolve(&self, list: &str, selection: &str, payload: Option<&str>) -> Result<Link> {
        commands::resolve::run(&self.store, list, selection, payload)
    }

    /// Runs one script-mode invocation against `list`.
    pub fn show<O: LinkOpener>(&self, list: &str, mode: Mode, opener: &O) -> Result<CmdResult> {
        match mode {
            Mode::Render => self.render(list),
            Mode::Resolve { selection, payload } => {
                let link = self.resolve(list, &selection, payload.as_deref())?;
                opener.open(&link)?;
                Ok(CmdResult::default().with_opened(link))
            }
        }
    }
}

pub use crate::commands::{CmdResult, Mode};
