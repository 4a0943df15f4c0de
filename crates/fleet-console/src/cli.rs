//! Command-line interface.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use fleet_cases::CaseTab;

/// Fleet console - derive and report operational cases from an asset fixture.
#[derive(Parser, Debug)]
#[command(name = "fleet-console", version, about)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Asset fixture JSON (overrides `fixture_path` from the config).
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Score seed for a reproducible case order.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Reference date (YYYY-MM-DD) for relative ages; defaults to today (UTC).
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List derived cases, ranked by risk.
    Cases {
        /// Match against case id or asset id (case-insensitive).
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = TabArg::All)]
        tab: TabArg,
    },
    /// Fleet readiness, case counts, top-risk cases and recent alerts.
    Summary,
    /// One asset's record and its derived cases.
    Asset {
        id: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabArg {
    All,
    Critical,
    Warning,
}

impl From<TabArg> for CaseTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::All => CaseTab::All,
            TabArg::Critical => CaseTab::Critical,
            TabArg::Warning => CaseTab::Warning,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}
