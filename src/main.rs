//! Private tangle config updater CLI
//!
//! Entry point for the `update-config` command-line tool.

use clap::Parser;
use private_tangle_config::{logging, ConfigPatcher, KeyRangeSlots, PatchTargets};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "update-config")]
#[command(about = "Write public key ranges into the private tangle configs", version)]
struct Cli {
    /// Directory containing config_private_tangle.json and
    /// config_private_tangle_autopeering.json
    #[arg(long, short = 'd', default_value = ".")]
    dir: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Public keys for the first and second range; extra keys are ignored.
    /// Everything from the first key on is taken as a key, even if it
    /// starts with `-`
    #[arg(value_name = "KEY", allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let patcher = ConfigPatcher::new(PatchTargets::in_dir(&cli.dir));
    let slots = KeyRangeSlots::from_keys(cli.keys);

    // Write failures are already logged per file and do not fail the run
    match patcher.run(&slots) {
        Ok(report) => {
            if !report.all_written() {
                tracing::debug!(failed = report.failures().count(), "some config files were not written");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error loading configuration: {}", e);
            ExitCode::FAILURE
        }
    }
}
