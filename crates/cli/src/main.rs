// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use stagehand::{AllocationConfig, ConflictResolution, PackageSwitchPolicy};
use stagehand_api::{ReplayOutcome, Session, replay};
use stagehand_audit::{Actor, Cause};
use std::path::PathBuf;
use tracing::info;

/// Stagehand - replay a recorded event editing session and print the save payload
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the session JSON file.
    session: PathBuf,

    /// Override the session's package switch policy.
    #[arg(long, value_enum)]
    package_switch: Option<PackageSwitchArg>,

    /// Override the session's conflict resolution policy.
    #[arg(long, value_enum)]
    conflict_resolution: Option<ConflictResolutionArg>,

    /// Actor id recorded on every audit event.
    #[arg(long, default_value = "cli")]
    actor: String,

    /// Print the audit log instead of the save payload.
    #[arg(long)]
    audit: bool,

    /// Pretty-print JSON output.
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PackageSwitchArg {
    Reset,
    Preserve,
    Revalidate,
}

impl From<PackageSwitchArg> for PackageSwitchPolicy {
    fn from(arg: PackageSwitchArg) -> Self {
        match arg {
            PackageSwitchArg::Reset => Self::Reset,
            PackageSwitchArg::Preserve => Self::Preserve,
            PackageSwitchArg::Revalidate => Self::Revalidate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConflictResolutionArg {
    AssignOnly,
    RecordOverride,
}

impl From<ConflictResolutionArg> for ConflictResolution {
    fn from(arg: ConflictResolutionArg) -> Self {
        match arg {
            ConflictResolutionArg::AssignOnly => Self::AssignOnly,
            ConflictResolutionArg::RecordOverride => Self::RecordOverride,
        }
    }
}

impl Args {
    /// Layers command-line policy overrides on top of the session's config.
    fn effective_config(&self, base: AllocationConfig) -> AllocationConfig {
        AllocationConfig {
            package_switch: self
                .package_switch
                .map_or(base.package_switch, PackageSwitchPolicy::from),
            conflict_resolution: self
                .conflict_resolution
                .map_or(base.conflict_resolution, ConflictResolution::from),
        }
    }
}

fn render(outcome: &ReplayOutcome, audit: bool, pretty: bool) -> Result<String> {
    if audit {
        let json: String = if pretty {
            serde_json::to_string_pretty(&outcome.audit_log)?
        } else {
            serde_json::to_string(&outcome.audit_log)?
        };
        return Ok(json);
    }

    Ok(outcome.payload.to_json(pretty)?)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let raw: String = std::fs::read_to_string(&args.session)
        .wrap_err_with(|| format!("Failed to read session file {}", args.session.display()))?;
    let mut session: Session = Session::from_json(&raw)
        .wrap_err_with(|| format!("Failed to parse session file {}", args.session.display()))?;
    session.config = args.effective_config(session.config);

    info!(
        event_id = %session.event_id,
        commands = session.commands.len(),
        "Replaying session"
    );

    let actor: Actor = Actor::new(args.actor.clone(), String::from("cli"));
    let cause: Cause = Cause::new(
        args.session.display().to_string(),
        String::from("Offline session replay"),
    );
    let outcome: ReplayOutcome = replay(&session, &actor, &cause)?;

    println!("{}", render(&outcome, args.audit, args.pretty)?);
    Ok(())
}
