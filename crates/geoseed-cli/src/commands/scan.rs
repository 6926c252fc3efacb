//! Implementation of the `geoseed scan` command.

use std::path::PathBuf;

use tracing::{info, instrument};

use geoseed_adapters::{LocalFilesystem, WalkdirWalker};
use geoseed_core::{application::InventoryService, domain::GeoFileEntry};

use crate::{
    cli::{ScanArgs, ScanFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `geoseed scan` command.
#[instrument(skip_all)]
pub fn execute(
    args: ScanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Positional wins, then the configured default, then the current dir.
    let root = args
        .dir
        .or(config.defaults.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    if args.output.is_some() && matches!(args.format, ScanFormat::Table | ScanFormat::List) {
        return Err(CliError::InvalidInput {
            message: "--output requires --format json or --format csv".into(),
        });
    }

    let filesystem = Box::new(LocalFilesystem::new());
    let walker = Box::new(WalkdirWalker::new(config.scan.follow_links));
    let service = InventoryService::new(filesystem, walker);

    info!(root = %root.display(), "Scan started");
    let entries = service.scan(&root).map_err(CliError::Core)?;

    match args.format {
        ScanFormat::Table => {
            if entries.is_empty() {
                output.info(&format!("No geodata files under {}", root.display()))?;
                return Ok(());
            }
            output.header(&format!("Geodata files under {}:", root.display()))?;
            for entry in &entries {
                output.print(&format_row(entry))?;
            }
            output.print(&format!("  {} file(s)", entries.len()))?;
        }

        ScanFormat::List => {
            for entry in &entries {
                println!("{}", entry.path.display());
            }
        }

        ScanFormat::Json => {
            // Serialise to stdout (bypasses OutputManager because JSON output
            // must be parseable even in non-TTY pipes).
            let json = render_json(&entries)?;
            emit(&json, args.output.as_deref())?;
        }

        ScanFormat::Csv => {
            let csv = render_csv(&entries);
            emit(&csv, args.output.as_deref())?;
        }
    }

    Ok(())
}

// ── rendering ─────────────────────────────────────────────────────────────────

/// One table row: kind, size, timestamp, status, path, detail.
fn format_row(entry: &GeoFileEntry) -> String {
    let mut row = format!(
        "  {:<7} {:>10}  {}  {:<5}  {}",
        entry.kind.as_str(),
        entry.size,
        entry.modified.format("%Y-%m-%d %H:%M"),
        entry.status.label(),
        entry.path.display(),
    );
    if let Some(detail) = &entry.detail {
        row.push_str(&format!("  ({detail})"));
    }
    if let Some(message) = entry.status.message() {
        row.push_str(&format!("  [{message}]"));
    }
    row
}

fn render_json(entries: &[GeoFileEntry]) -> CliResult<String> {
    serde_json::to_string_pretty(entries).map_err(|e| CliError::InvalidInput {
        message: format!("failed to serialise scan report: {e}"),
    })
}

fn render_csv(entries: &[GeoFileEntry]) -> String {
    let mut out = String::from("path,kind,size,modified,status,detail\n");
    for entry in entries {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            csv_field(&entry.path.display().to_string()),
            entry.kind.as_str(),
            entry.size,
            entry.modified.to_rfc3339(),
            entry.status.label(),
            csv_field(entry.detail.as_deref().unwrap_or("")),
        ));
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write a rendered report to a file, or print it to stdout.
fn emit(rendered: &str, destination: Option<&std::path::Path>) -> CliResult<()> {
    match destination {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_cli_context(|| format!("writing report to '{}'", path.display()))?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
