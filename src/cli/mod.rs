//! The command-line front end. Each submodule owns one entity's
//! subcommands and its table rendering; everything else lives in the
//! store and report modules.

mod clients;
mod managers;
mod projects;
mod reports;
mod staff;
mod tasks;
mod timelog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::backup;
use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::models::StaffKind;

#[derive(Parser)]
#[command(
    name = "schedule-plus",
    about = "Clients, projects, tasks, staff, and time logs for a small firm",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage clients
    #[command(subcommand)]
    Client(clients::ClientCommand),
    /// Manage project managers
    #[command(subcommand)]
    Manager(managers::ManagerCommand),
    /// Manage projects
    #[command(subcommand)]
    Project(projects::ProjectCommand),
    /// Manage tasks
    #[command(subcommand)]
    Task(tasks::TaskCommand),
    /// Manage employs
    #[command(subcommand)]
    Employ(staff::StaffCommand),
    /// Manage subconsultants
    #[command(subcommand)]
    Subconsultant(staff::StaffCommand),
    /// Manage time log entries
    #[command(subcommand)]
    Log(timelog::LogCommand),
    /// Reports over logged time
    #[command(subcommand)]
    Report(reports::ReportCommand),
    /// Dump the full database to a file with pg_dump
    Backup { file: PathBuf },
}

pub async fn run(config: &Config, db: &Database, command: Command) -> Result<()> {
    match command {
        Command::Client(cmd) => clients::run(db, cmd).await,
        Command::Manager(cmd) => managers::run(db, cmd).await,
        Command::Project(cmd) => projects::run(db, cmd).await,
        Command::Task(cmd) => tasks::run(db, cmd).await,
        Command::Employ(cmd) => staff::run(db, StaffKind::Employ, cmd).await,
        Command::Subconsultant(cmd) => staff::run(db, StaffKind::Subconsultant, cmd).await,
        Command::Log(cmd) => timelog::run(db, cmd).await,
        Command::Report(cmd) => reports::run(db, cmd).await,
        Command::Backup { file } => {
            backup::dump_database(config, &file)?;
            println!("database dumped to {}", file.display());
            Ok(())
        }
    }
}

/// Placeholder for absent optional columns in listings.
pub(crate) fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
