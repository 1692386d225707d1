use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use rofi_web::api::{Mode, RofiWebApi};
use rofi_web::commands::gh;
use rofi_web::error::{Result, RofiWebError};
use rofi_web::init::{initialize, PathOverrides};
use rofi_web::launcher::Launcher;
use rofi_web::store::fs::FileStore;
use std::env::{self, VarError};
use std::io::{self, Read, Write};

/// Environment variable through which Rofi hands back the picked row's `info`.
const ROFI_INFO_ENV: &str = "ROFI_INFO";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { list, selection } => {
            let ctx = initialize(PathOverrides {
                config_file: cli.config,
                metadata_file: cli.metadata,
            })?;
            handle_show(&ctx.api, &list, selection)
        }
        // Pure stdin -> stdout conversion; never touches the config dir.
        Commands::GhImport => handle_gh_import(),
    }
}

fn handle_show(api: &RofiWebApi<FileStore>, list: &str, selection: Option<String>) -> Result<()> {
    let payload = payload_from_env(env::var(ROFI_INFO_ENV))?;
    let mode = Mode::from_invocation(selection, payload);
    log::info!("Running in {} mode", mode_name(&mode));

    let result = api.show(list, mode, &Launcher::host())?;

    if let Some(menu) = result.menu {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", menu)?;
        stdout.flush()?;
    }
    if let Some(link) = result.opened {
        log::info!("Opened '{}' ({})", link.name, link.url);
    }
    Ok(())
}

/// An unset `ROFI_INFO` means no payload. One that is set but not UTF-8 is a
/// malformed payload, never a reason to fall back to the visible text.
fn payload_from_env(var: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match var {
        Ok(payload) => Ok(Some(payload)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(RofiWebError::PayloadNotUnicode(ROFI_INFO_ENV)),
    }
}

fn handle_gh_import() -> Result<()> {
    let mut json = String::new();
    io::stdin().read_to_string(&mut json)?;
    let yaml = gh::run(&json)?;
    print!("{}", yaml);
    Ok(())
}

fn mode_name(mode: &Mode) -> &'static str {
    match mode {
        Mode::Render => "render",
        Mode::Resolve { payload: Some(_), .. } => "resolve (payload)",
        Mode::Resolve { payload: None, .. } => "resolve (visible text)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn unset_payload_is_absent() {
        assert_eq!(payload_from_env(Err(VarError::NotPresent)).unwrap(), None);
    }

    #[test]
    fn set_payload_is_passed_through() {
        let payload = payload_from_env(Ok("{}".to_string())).unwrap();
        assert_eq!(payload.as_deref(), Some("{}"));
    }

    #[test]
    fn non_unicode_payload_is_an_error() {
        let err = payload_from_env(Err(VarError::NotUnicode(OsString::from("x")))).unwrap_err();
        assert!(matches!(err, RofiWebError::PayloadNotUnicode("ROFI_INFO")));
        assert!(err.to_string().contains("Malformed selection payload"));
    }
}
