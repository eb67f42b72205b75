use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Workspace schedule checker.
///
/// Validates autostart/autostop schedules, renders their helper text, and
/// previews which workspaces a template dormancy change would affect.
#[derive(Parser, Debug)]
#[command(name = "autosched", version, about = "Workspace schedule checker")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a schedule file (YAML or JSON). Exits 1 when invalid.
    Validate {
        file: PathBuf,

        /// Template policy file; defaults to a fully permissive policy
        #[arg(long)]
        policy: Option<PathBuf>,
    },

    /// Print the shutdown helper text for a TTL in hours
    DescribeShutdown {
        #[arg(allow_negative_numbers = true)]
        ttl_hours: f64,
    },

    /// Preview workspaces that would go dormant or be deleted
    Preview {
        /// Workspace records file (YAML or JSON list)
        #[arg(long)]
        records: PathBuf,

        /// Inactivity period before a workspace goes dormant
        #[arg(long, env = "TIME_TIL_DORMANT_MS")]
        dormant_ms: Option<u64>,

        /// Dormancy period before a workspace is deleted
        #[arg(long, env = "TIME_TIL_DORMANT_AUTODELETE_MS")]
        autodelete_ms: Option<u64>,

        /// Reference instant (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Template name, used to print the record queries to run
        #[arg(long)]
        template: Option<String>,
    },

    /// Print the next autostart for a schedule file
    NextStart {
        file: PathBuf,

        /// Compute the start after this instant (RFC 3339); defaults to now
        #[arg(long)]
        after: Option<DateTime<Utc>>,
    },

    /// Print the stored autostart cron spec for a schedule file
    Cron { file: PathBuf },

    /// Flip autostart and/or autostop in a schedule file and print the result as YAML
    Toggle {
        file: PathBuf,

        #[arg(long)]
        autostart: bool,

        #[arg(long)]
        autostop: bool,
    },

    /// Print the effective configuration
    Config,
}
