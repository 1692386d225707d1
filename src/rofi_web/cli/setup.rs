use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rofi-web", bin_name = "rofi-web", version = get_version())]
#[command(
    about = "List links and open them in the browser using Rofi",
    long_about = "Rofi Web displays lists of links in a consistent way using Rofi as a \
frontend. Lists are defined in metadata.yaml under the rofi-web config directory.\n\n\
Provide the list key to get started, e.g. rofi-web show -l repositories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: config.yaml in the rofi-web config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Metadata file holding the link lists (default: metadata.yaml in the rofi-web config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all links defined under the provided key and open selection
    Show {
        /// Name of list
        #[arg(short, long)]
        list: String,

        /// Row picked in Rofi; when present the matching link is opened
        selection: Option<String>,
    },

    /// Convert `gh repo list --json name,nameWithOwner,url` output (stdin) to a YAML link list
    GhImport,
}

/// Routes `log` output to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
