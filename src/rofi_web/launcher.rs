//! Opening links with the host's default handler.
//!
//! Each host family has one way of handing a URL to "whatever the user
//! configured":
//!
//! | Host              | Launcher            | Command                |
//! |-------------------|---------------------|------------------------|
//! | Windows           | `ShellIndirection`  | `cmd /c start <url>`   |
//! | macOS             | `NativeOpen`        | `open <url>`           |
//! | Linux, BSDs, ...  | `GenericOpen`       | `xdg-open <url>`       |
//!
//! The handler is spawned and left running; rofi-web exits right after.

use crate::error::{RofiWebError, Result};
use crate::model::Link;
use std::process::{Command, Stdio};

/// Something that can open a resolved link.
pub trait LinkOpener {
    fn open(&self, link: &Link) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    ShellIndirection,
    NativeOpen,
    GenericOpen,
}

impl Launcher {
    /// Picks the launcher for an OS name as reported by `std::env::consts::OS`.
    pub fn for_os(os: &str) -> Self {
        match os {
            "windows" => Launcher::ShellIndirection,
            "macos" => Launcher::NativeOpen,
            _ => Launcher::GenericOpen,
        }
    }

    /// The launcher for the host this binary runs on.
    pub fn host() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn program(&self) -> &'static str {
        match self {
            Launcher::ShellIndirection => "cmd",
            Launcher::NativeOpen => "open",
            Launcher::GenericOpen => "xdg-open",
        }
    }

    pub fn args(&self, url: &str) -> Vec<String> {
        let mut args = match self {
            Launcher::ShellIndirection => vec!["/c".to_string(), "start".to_string()],
            Launcher::NativeOpen | Launcher::GenericOpen => Vec::new(),
        };
        args.push(url.to_string());
        args
    }

    pub fn command(&self, url: &str) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl LinkOpener for Launcher {
    fn open(&self, link: &Link) -> Result<()> {
        log::info!("Opening {} with {}", link.url, self.program());
        // Not waited on; the handler outlives this process.
        self.command(&link.url)
            .spawn()
            .map(drop)
            .map_err(|source| RofiWebError::Launch {
                program: self.program().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_launcher_by_os() {
        assert_eq!(Launcher::for_os("windows"), Launcher::ShellIndirection);
        assert_eq!(Launcher::for_os("macos"), Launcher::NativeOpen);
        assert_eq!(Launcher::for_os("linux"), Launcher::GenericOpen);
        assert_eq!(Launcher::for_os("freebsd"), Launcher::GenericOpen);
        assert_eq!(Launcher::for_os("openbsd"), Launcher::GenericOpen);
    }

    #[test]
    fn shell_indirection_goes_through_start() {
        let launcher = Launcher::ShellIndirection;
        assert_eq!(launcher.program(), "cmd");
        assert_eq!(
            launcher.args("https://example.com"),
            vec!["/c", "start", "https://example.com"]
        );
    }

    #[test]
    fn open_launchers_take_url_only() {
        assert_eq!(Launcher::NativeOpen.args("u"), vec!["u"]);
        assert_eq!(Launcher::GenericOpen.args("u"), vec!["u"]);
        assert_eq!(Launcher::GenericOpen.program(), "xdg-open");
    }

    #[test]
    fn command_passes_url_verbatim() {
        let cmd = Launcher::GenericOpen.command("not a url; rm -rf");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["not a url; rm -rf"]);
        assert_eq!(cmd.get_program(), "xdg-open");
    }
}
