use clap::Parser;
use std::path::PathBuf;
use std::process::exit;

use sdkconfig_select::{Config, ConfigLoader, DefaultsSelector, Error};

/// Install the per-target sdkconfig defaults file.
///
/// Resolves `sdkconfig.defaults.<target>` in the project directory and
/// copies it over `sdkconfig.defaults`, the file the downstream build
/// stage reads. Intended to run as a pre-build hook; exits non-zero when
/// the per-target file is missing so the enclosing build aborts.
#[derive(Parser)]
#[command(version, about, long_about)]
struct Cli {
    /// Build target identifier, e.g. esp32 or esp32c3.
    ///
    /// Falls back to SDKCONFIG_SELECT_TARGET, the config file, and PIOENV
    /// when omitted.
    target: Option<String>,

    /// Project directory holding the defaults files.
    #[arg(short, long, value_name = "dir", default_value = ".")]
    project_dir: PathBuf,

    /// Standalone TOML config file (default: sdkconfig-select.toml in the
    /// project directory, if present).
    #[arg(short, long, value_name = "path")]
    config: Option<PathBuf>,

    /// Show resolved source and destination paths.
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> sdkconfig_select::Result<()> {
    let mut loader = ConfigLoader::new().project_dir(&cli.project_dir);
    if let Some(ref path) = cli.config {
        loader = loader.config_file(path);
    }
    let mut config = loader.load()?;

    if cli.target.is_some() {
        config.target = cli.target;
    }
    if cli.verbose {
        config.verbose = true;
    }

    let target = resolve_target(&config)?;
    DefaultsSelector::new(&cli.project_dir, target, config).install()
}

fn resolve_target(config: &Config) -> sdkconfig_select::Result<String> {
    config.target.clone().ok_or_else(|| {
        Error::config(
            "no build target specified; pass one as an argument or set \
             SDKCONFIG_SELECT_TARGET or PIOENV",
        )
    })
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        exit(1);
    }
}
