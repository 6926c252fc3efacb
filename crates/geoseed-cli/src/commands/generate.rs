//! Implementation of the `geoseed gen` command.
//!
//! Responsibility: resolve the output directory argument, call the core seed
//! service, and display results.  No business logic lives here.

use tracing::{debug, info, instrument};

use geoseed_adapters::LocalFilesystem;
use geoseed_core::application::SeedService;

use crate::{
    cli::{GenArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Usage line printed when no output directory is given.
///
/// Printed to *stdout* with a clean exit: the missing argument is guidance,
/// not a failure.
pub const GEN_USAGE: &str = "usage: geoseed gen output_dir";

/// Execute the `geoseed gen` command.
///
/// Dispatch sequence:
/// 1. Take the first output directory; print the usage line if there is none
/// 2. Build the filesystem adapter and the seed service
/// 3. Seed and report the written files
#[instrument(skip_all)]
pub fn execute(
    args: GenArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve the target directory.  Extra positionals are ignored.
    let Some(output_dir) = args.output_dirs.first() else {
        println!("{GEN_USAGE}");
        return Ok(());
    };
    if args.output_dirs.len() > 1 {
        debug!(
            ignored = args.output_dirs.len() - 1,
            "Ignoring extra output directories"
        );
    }

    // 2. Create adapter and service
    let filesystem = Box::new(LocalFilesystem::new());
    let service = SeedService::new(filesystem);

    info!(dir = %output_dir.display(), "Seed started");

    // 3. Seed and report
    let report = service.seed(output_dir).map_err(CliError::Core)?;

    output.success(&format!(
        "Seeded {} sample file(s) into {}",
        report.written.len(),
        report.directory.display(),
    ))?;
    if !output.is_quiet() {
        for path in &report.written {
            output.print(&format!("  {}", path.display()))?;
        }
    }

    Ok(())
}
