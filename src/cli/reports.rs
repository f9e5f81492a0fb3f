use clap::Subcommand;

use crate::db::Database;
use crate::error::Result;
use crate::forms::{parse_date, parse_date_range};
use crate::report;

use super::{opt, timelog::render_log_table};

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Entries and total hours for one date
    Day {
        /// YYYY-MM-DD
        date: String,
    },
    /// Per-task hours summary for a project
    Project { project_no: String },
    /// Billed amounts for a task over an inclusive date range
    Task {
        task_id: i32,
        /// YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// YYYY-MM-DD
        #[arg(long)]
        to: String,
    },
}

fn fmt_date(date: Option<chrono::NaiveDate>) -> String {
    date.map_or_else(|| "N/A".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

pub async fn run(db: &Database, cmd: ReportCommand) -> Result<()> {
    match cmd {
        ReportCommand::Day { date } => {
            let date = parse_date("date", &date)?;
            let day = report::day_report(db, date).await?;
            if day.rows.is_empty() {
                println!("no log entries for {}", day.date);
            } else {
                render_log_table(&day.rows);
            }
            println!("Total Hours: {:.2}", day.total_hours);
        }
        ReportCommand::Project { project_no } => {
            let project = report::project_report(db, &project_no).await?;
            // One row means only the synthetic total: nothing to report.
            if project.rows.len() == 1 {
                println!("no tasks under project '{}'", project.project_no);
                return Ok(());
            }
            println!(
                "{:<8} {:<24} {:<12} {:<12} {:>12} EMPLOYEES",
                "TASK ID", "TASK", "FIRST LOG", "LAST LOG", "TOTAL HOURS"
            );
            for row in &project.rows {
                let task_id =
                    row.task_id.map_or_else(String::new, |id| id.to_string());
                println!(
                    "{:<8} {:<24} {:<12} {:<12} {:>12.2} {}",
                    task_id,
                    row.task_name,
                    fmt_date(row.first_log),
                    fmt_date(row.last_log),
                    row.total_hours,
                    row.employees
                );
            }
            println!(
                "report generated for project '{}' ({:.2} hours logged)",
                project.project_no, project.total_hours
            );
        }
        ReportCommand::Task { task_id, from, to } => {
            let (from, to) = parse_date_range(&from, &to)?;
            let billing = report::task_billing_report(db, task_id, from, to).await?;
            if billing.rows.is_empty() {
                println!("no logs for task #{task_id} between {from} and {to}");
            } else {
                println!(
                    "{:<28} {:<12} {:<16} {:>7} {:>10} {:>10} {:>10} NOTES",
                    "LOG ID", "DATE", "EMPLOYEE", "HOURS", "RATE", "LUMPSUM", "AMOUNT"
                );
                for row in &billing.rows {
                    println!(
                        "{:<28} {:<12} {:<16} {:>7.2} {:>10.2} {:>10.2} {:>10.2} {}",
                        row.log_id,
                        row.log_date.format("%Y-%m-%d"),
                        opt(&row.employee),
                        row.hours,
                        billing.hourly_rate,
                        billing.lumpsum,
                        row.line_amount,
                        opt(&row.notes)
                    );
                }
            }
            println!("Total Hours: {:.2}", billing.total_hours);
            println!("Total Amount: ${:.2}", billing.total_amount);
        }
    }

    Ok(())
}
