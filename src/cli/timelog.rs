use clap::{Args, Subcommand};

use crate::db::Database;
use crate::error::Result;
use crate::forms::{TimeLogForm, parse_date};
use crate::models::TimeLogDetail;

use super::opt;

#[derive(Subcommand)]
pub enum LogCommand {
    /// Add a time log entry
    Add(LogArgs),
    /// Replace a time log entry (a fresh id is derived from the new fields)
    Update {
        log_id: String,
        #[command(flatten)]
        args: LogArgs,
    },
    /// Delete a time log entry
    Delete { log_id: String },
    /// List entries, all of them or one date's
    List {
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Args)]
pub struct LogArgs {
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub client: String,
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub task: String,
    #[arg(long)]
    pub employ: String,
    #[arg(long)]
    pub hours: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl LogArgs {
    fn into_form(self) -> TimeLogForm {
        TimeLogForm {
            log_date: self.date,
            client_id: self.client,
            project_no: self.project,
            task_id: self.task,
            employ_id: self.employ,
            hours: self.hours,
            notes: self.notes,
        }
    }
}

pub(crate) fn render_log_table(rows: &[TimeLogDetail]) {
    println!(
        "{:<28} {:<12} {:<16} {:<16} {:<16} {:<16} {:>7} NOTES",
        "LOG ID", "DATE", "CLIENT", "PROJECT", "TASK", "EMPLOYEE", "HOURS"
    );
    for row in rows {
        println!(
            "{:<28} {:<12} {:<16} {:<16} {:<16} {:<16} {:>7.2} {}",
            row.log_id,
            row.log_date.format("%Y-%m-%d"),
            opt(&row.client),
            opt(&row.project),
            opt(&row.task),
            opt(&row.employee),
            row.hours,
            opt(&row.notes)
        );
    }
}

pub async fn run(db: &Database, cmd: LogCommand) -> Result<()> {
    match cmd {
        LogCommand::Add(args) => {
            let log = args.into_form().validate()?;
            db.create_time_log(&log).await?;
            println!("time log '{}' added", log.log_id);
        }
        LogCommand::Update { log_id, args } => {
            let log = args.into_form().validate()?;
            db.update_time_log(&log_id, &log).await?;
            println!("time log '{log_id}' replaced by '{}'", log.log_id);
        }
        LogCommand::Delete { log_id } => {
            if db.delete_time_log(&log_id).await? {
                println!("time log '{log_id}' deleted");
            } else {
                println!("no time log '{log_id}'");
            }
        }
        LogCommand::List { date } => {
            let date = date.map(|d| parse_date("date", &d)).transpose()?;
            let logs = db.list_logs(date).await?;
            if logs.is_empty() {
                match date {
                    Some(date) => println!("no log entries for {date}"),
                    None => println!("no log entries yet"),
                }
                return Ok(());
            }
            render_log_table(&logs);
        }
    }

    Ok(())
}
