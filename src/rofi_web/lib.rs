//! # rofi-web Architecture
//!
//! rofi-web is a [Rofi] *script mode*: Rofi runs the program once to obtain the
//! menu rows, then runs it again with the row the user picked. Every invocation
//! is a fresh, stateless process doing exactly one of two things.
//!
//! [Rofi]: https://github.com/davatorium/rofi
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads ROFI_INFO, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Mode dispatch: Render or Resolve                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - render: List → rows                                      │
//! │  - resolve: payload or visible text → Link                  │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                            │
//!                  ▼                            ▼
//! ┌───────────────────────────────┐  ┌──────────────────────────┐
//! │  Storage Layer (store/)       │  │  Launcher (launcher.rs)  │
//! │  - LinkStore trait            │  │  - host default handler  │
//! │  - FileStore, InMemoryStore   │  │                          │
//! └───────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! The wire format spoken with Rofi lives in [`rofi`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes its inputs as arguments (including the
//! `ROFI_INFO` payload, which is read by the CLI and passed down) and returns
//! regular Rust types. Rendering produces a [`rofi::Menu`] value; only the CLI
//! writes it to stdout.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and mode dispatcher
//! - [`commands`]: Render and resolve logic, plus the `gh` import helper
//! - [`rofi`]: Row encoding and the script-mode byte protocol
//! - [`store`]: Link store abstraction and implementations
//! - [`model`]: The [`model::Link`] record
//! - [`launcher`]: Opening a link with the host's default handler
//! - [`config`]: Configuration loading
//! - [`init`]: Config directory discovery and first-run file creation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod launcher;
pub mod model;
pub mod rofi;
pub mod store;
