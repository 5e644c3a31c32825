//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Release CLI propagating versions across package manifests."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use horizon_logging as logging;
use horizon_versioning::{SyncError, SyncSettings, Synchronizer};

mod build_info;

use build_info::BuildInfo;

#[derive(Debug, Parser)]
#[command(
    name = "horizon-release",
    disable_version_flag = true,
    about = "Write one version into the client, server and cli package manifests",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'V',
        long = "version",
        action = ArgAction::SetTrue,
        help = "Print extended version information and exit"
    )]
    show_version: bool,

    /// Version copied verbatim into every manifest (e.g. 1.2.3).
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    release: Option<String>,
}

fn main() -> Result<ExitCode> {
    logging::init();
    let cli = Cli::parse();
    if cli.show_version {
        println!("{}", BuildInfo::current().extended());
        return Ok(ExitCode::SUCCESS);
    }

    let synchronizer = Synchronizer::new(SyncSettings::from_env());
    match synchronizer.synchronize(cli.release.as_deref()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(SyncError::MissingVersion) => {
            eprintln!("{}", SyncError::MissingVersion);
            Ok(ExitCode::FAILURE)
        }
        Err(error) => Err(error.into()),
    }
}
