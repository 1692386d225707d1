//! # CLI Behavior
//!
//! This is the only place that knows about stdout, stderr, environment
//! variables and exit codes. For the overall architecture, see the library
//! documentation.
//!
//! ## `show`
//!
//! - `rofi-web show -l <list>`: print the markup option line and one row per
//!   link.
//! - `rofi-web show -l <list> <row text>`: resolve the row (preferring the
//!   `ROFI_INFO` payload when Rofi supplies one) and open the link.
//!
//! ## `gh-import`
//!
//! `gh repo list --json name,nameWithOwner,url | rofi-web gh-import` prints a
//! YAML link sequence to paste under a list in `metadata.yaml`.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `setup`: Argument parsing via clap, logging setup

mod commands;
pub mod setup;

pub use commands::run;
