use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use shotwell_mover_core::{PrefixPair, RewriteOptions, default_catalog_path};
use shotwell_mover_sqlite::{PrefixRewriter, RewriteReport};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Tool for changing paths of media files stored in Shotwell's database.
#[derive(Debug, Parser)]
#[command(name = "shotwell-mover", version)]
struct Cli {
    /// Path prefix currently stored in the database.
    old_prefix: String,
    /// Path prefix to store instead.
    new_prefix: String,
    /// Path to Shotwell's DB file.
    #[arg(long, value_name = "PATH", default_value_os_t = default_catalog_path())]
    db_file: PathBuf,
    /// Check if the version of Shotwell's DB schema is supported [default].
    #[arg(long, overrides_with = "no_schema_check")]
    schema_check: bool,
    /// Skip the schema version check.
    #[arg(long, overrides_with = "schema_check")]
    no_schema_check: bool,
    /// Ignore media files in Shotwell's DB that don't start with OLD_PREFIX.
    #[arg(long)]
    ignore_different_prefix: bool,
    /// Back up Shotwell's DB file [default].
    #[arg(long, overrides_with = "no_backup")]
    backup: bool,
    /// Do not back up Shotwell's DB file.
    #[arg(long, overrides_with = "backup")]
    no_backup: bool,
    /// Log each step to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> RewriteOptions {
        RewriteOptions {
            schema_check: self.schema_check || !self.no_schema_check,
            ignore_different_prefix: self.ignore_different_prefix,
            backup: self.backup || !self.no_backup,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(reason) = check_db_file(&cli.db_file) {
        Cli::command()
            .error(
                ErrorKind::ValueValidation,
                format!("invalid value for '--db-file <PATH>': {reason}"),
            )
            .exit();
    }
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let options = cli.options();
    debug!(?options, db = %cli.db_file.display(), "starting prefix rewrite");

    let prefixes = PrefixPair::new(&cli.old_prefix, &cli.new_prefix);
    let report = PrefixRewriter::new(&cli.db_file, options)
        .run(&prefixes)
        .map_err(|e| e.to_string())?;

    print_report(&prefixes, &report);
    Ok(())
}

fn print_report(prefixes: &PrefixPair, report: &RewriteReport) {
    println!(
        "Successfully replaced old prefix {} with new prefix {} in media files stored in \
         Shotwell's database located at {}.",
        prefixes.old,
        prefixes.new,
        report.db_path.display()
    );
    if let Some(backup) = &report.backup_path {
        println!("Backup of the original database: {}", backup.display());
    }
    for table in &report.tables {
        debug!(table = table.table, rows = table.rows_updated, "table rewritten");
    }
}

/// Accepts only paths to existing files.
///
/// Runs after parsing rather than as a value parser so the platform default
/// is only checked when it is actually used.
fn check_db_file(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File '{}' does not exist.", path.display()));
    }
    if path.is_dir() {
        return Err(format!("File '{}' is a directory.", path.display()));
    }
    Ok(())
}
