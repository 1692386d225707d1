//! # rofi-web CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Typical use is as a Rofi script mode:
//!
//! ```text
//! rofi -show web -modi "web:rofi-web show -l repositories"
//! ```
//!
//! Rofi runs `rofi-web show -l repositories` to get the menu, then runs it again
//! with the picked row appended as an argument (and its payload in `ROFI_INFO`).
//!
//! Stdout carries the menu protocol and nothing else. Diagnostics, including
//! logging, go to stderr; any error exits with status 1.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
