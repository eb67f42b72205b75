mod cli;
mod input;

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};

use autosched_core::{Config, DormancyPolicy, TemplatePolicy, WorkspaceRecord};
use autosched_rules::{
    autostart_cron, checked_defaults, describe_activity_bump, describe_shutdown, next_autostart,
    preview, validate, ScheduleConfig, WorkspaceQuery,
};

use crate::cli::{CliArgs, Command};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    autosched_core::config::load_dotenv();
    let mut config = Config::from_env();
    config.schedule = checked_defaults(config.schedule);
    config.log_summary();

    let args = CliArgs::parse();
    run(args.command, &config)
}

fn run(command: Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::Validate { file, policy } => {
            let cfg: ScheduleConfig = input::load(&file)?;
            let policy: TemplatePolicy = match policy {
                Some(path) => input::load(&path)?,
                None => TemplatePolicy::default(),
            };

            let result = validate(&cfg, &policy);
            for w in &result.warnings {
                warn!(field = %w.field, "{}", w.message);
            }
            print_json(&serde_json::json!({
                "result": result,
                "shutdown": describe_shutdown(cfg.ttl_hours),
                "activityBump": describe_activity_bump(&policy),
            }))?;

            Ok(if result.valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }

        Command::DescribeShutdown { ttl_hours } => {
            println!("{}", describe_shutdown(ttl_hours));
            Ok(ExitCode::SUCCESS)
        }

        Command::Preview {
            records,
            dormant_ms,
            autodelete_ms,
            now,
            template,
        } => {
            if let Some(name) = &template {
                info!(
                    dormancy = %WorkspaceQuery::dormancy_candidates(name.as_str()),
                    deletion = %WorkspaceQuery::deletion_candidates(name.as_str()),
                    "record queries"
                );
            }

            let records: Vec<WorkspaceRecord> = input::load(&records)?;
            let policy = DormancyPolicy {
                time_til_dormant_ms: dormant_ms,
                time_til_dormant_autodelete_ms: autodelete_ms,
            };
            let now = now.unwrap_or_else(Utc::now);

            let result = preview(&records, &policy, now);
            info!(
                dormant = result.going_dormant.len(),
                deleted = result.going_to_be_deleted.len(),
                %now,
                "dormancy preview"
            );
            print_json(&result)?;
            Ok(ExitCode::SUCCESS)
        }

        Command::NextStart { file, after } => {
            let cfg: ScheduleConfig = input::load(&file)?;
            let after = after.unwrap_or_else(Utc::now);
            let next = next_autostart(&cfg, after)
                .with_context(|| format!("cannot schedule {}", file.display()))?;
            match next {
                Some(at) => println!("{}", at.to_rfc3339()),
                None => println!("autostart disabled"),
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Cron { file } => {
            let cfg: ScheduleConfig = input::load(&file)?;
            let spec = autostart_cron(&cfg)
                .with_context(|| format!("cannot build cron spec for {}", file.display()))?;
            println!("{}", spec.unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }

        Command::Toggle {
            file,
            autostart,
            autostop,
        } => {
            let mut cfg: ScheduleConfig = input::load(&file)?;
            if autostart {
                cfg = cfg.toggle_autostart(&config.schedule);
            }
            if autostop {
                cfg = cfg.toggle_autostop(config.schedule.ttl_hours);
            }
            let out = serde_yaml::to_string(&cfg).context("failed to serialize schedule")?;
            print!("{out}");
            Ok(ExitCode::SUCCESS)
        }

        Command::Config => {
            print_json(&config.summary())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
