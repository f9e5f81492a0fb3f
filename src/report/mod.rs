//! The reporting engine: totals per date, per-task summaries per
//! project, and billed amounts per task over a date range.
//!
//! Aggregation is done in plain code over fetched rows; the async
//! functions at the bottom only pair a store fetch with the matching
//! summarization.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::db::Database;
use crate::error::Result;
use crate::models::TimeLogDetail;

/// Label of the synthetic row closing a project report.
pub const PROJECT_TOTAL_LABEL: &str = "PROJECT TOTAL";

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TaskRef {
    pub task_id: i32,
    pub task_name: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProjectLogRow {
    pub task_id: i32,
    pub log_date: NaiveDate,
    pub employee: Option<String>,
    pub hours: f64,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TaskLogRow {
    pub log_id: String,
    pub log_date: NaiveDate,
    pub employee: Option<String>,
    pub hours: f64,
    pub notes: Option<String>,
}

/// All entries for one date plus their summed hours. An empty day is a
/// valid report with a 0.00 total.
#[derive(Debug)]
pub struct DayReport {
    pub date: NaiveDate,
    pub rows: Vec<TimeLogDetail>,
    pub total_hours: f64,
}

/// One line of a project report. The final line is synthetic: no task
/// id, the `PROJECT_TOTAL_LABEL` name, and the summed hours of every
/// task above it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTaskSummary {
    pub task_id: Option<i32>,
    pub task_name: String,
    pub first_log: Option<NaiveDate>,
    pub last_log: Option<NaiveDate>,
    pub total_hours: f64,
    pub employees: String,
}

#[derive(Debug)]
pub struct ProjectReport {
    pub project_no: String,
    pub rows: Vec<ProjectTaskSummary>,
    pub total_hours: f64,
}

/// One billed log line: the entry plus `hours * hourly_rate`.
#[derive(Debug, Clone)]
pub struct BilledLogRow {
    pub log_id: String,
    pub log_date: NaiveDate,
    pub employee: Option<String>,
    pub hours: f64,
    pub line_amount: f64,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub struct TaskBillingReport {
    pub hourly_rate: f64,
    pub lumpsum: f64,
    pub rows: Vec<BilledLogRow>,
    pub total_hours: f64,
    pub total_amount: f64,
}

/// Sum the hours of one date's entries.
pub fn summarize_day(date: NaiveDate, rows: Vec<TimeLogDetail>) -> DayReport {
    let total_hours = rows.iter().map(|r| r.hours).sum();

    DayReport {
        date,
        rows,
        total_hours,
    }
}

/// Summarize every task of a project: date span, summed hours, and the
/// distinct employees who logged against it. Tasks without logs are
/// kept with empty dates and zero hours. Rows are ordered by task name
/// and closed with the synthetic project total.
pub fn summarize_project_tasks(
    project_no: &str,
    tasks: Vec<TaskRef>,
    logs: Vec<ProjectLogRow>,
) -> ProjectReport {
    struct Acc {
        first: Option<NaiveDate>,
        last: Option<NaiveDate>,
        hours: f64,
        employees: BTreeSet<String>,
    }

    let mut by_task: HashMap<i32, Acc> = HashMap::new();
    for log in logs {
        let acc = by_task.entry(log.task_id).or_insert(Acc {
            first: None,
            last: None,
            hours: 0.0,
            employees: BTreeSet::new(),
        });
        acc.first = Some(acc.first.map_or(log.log_date, |d| d.min(log.log_date)));
        acc.last = Some(acc.last.map_or(log.log_date, |d| d.max(log.log_date)));
        acc.hours += log.hours;
        if let Some(employee) = log.employee {
            acc.employees.insert(employee);
        }
    }

    let mut tasks = tasks;
    tasks.sort_by(|a, b| a.task_name.cmp(&b.task_name).then(a.task_id.cmp(&b.task_id)));

    let mut rows = Vec::with_capacity(tasks.len() + 1);
    let mut total_hours = 0.0;
    for task in tasks {
        let (first_log, last_log, hours, employees) = match by_task.remove(&task.task_id) {
            Some(acc) => (
                acc.first,
                acc.last,
                acc.hours,
                acc.employees.into_iter().collect::<Vec<_>>().join(", "),
            ),
            None => (None, None, 0.0, String::new()),
        };
        total_hours += hours;
        rows.push(ProjectTaskSummary {
            task_id: Some(task.task_id),
            task_name: task.task_name,
            first_log,
            last_log,
            total_hours: hours,
            employees,
        });
    }

    rows.push(ProjectTaskSummary {
        task_id: None,
        task_name: PROJECT_TOTAL_LABEL.to_string(),
        first_log: None,
        last_log: None,
        total_hours,
        employees: String::new(),
    });

    ProjectReport {
        project_no: project_no.to_string(),
        rows,
        total_hours,
    }
}

/// Price a task's log rows.
///
/// Each line is `hours * hourly_rate`. Total hours are always the row
/// sum. The total amount is the lumpsum when one is set and positive —
/// it replaces the hourly computation rather than adding to it — and
/// the sum of line amounts otherwise. A lumpsum of zero counts as
/// absent.
pub fn bill_task_logs(hourly_rate: f64, lumpsum: f64, rows: Vec<TaskLogRow>) -> TaskBillingReport {
    let mut total_hours = 0.0;
    let mut hourly_total = 0.0;

    let rows: Vec<BilledLogRow> = rows
        .into_iter()
        .map(|row| {
            let line_amount = row.hours * hourly_rate;
            total_hours += row.hours;
            hourly_total += line_amount;
            BilledLogRow {
                log_id: row.log_id,
                log_date: row.log_date,
                employee: row.employee,
                hours: row.hours,
                line_amount,
                notes: row.notes,
            }
        })
        .collect();

    let total_amount = if lumpsum > 0.0 { lumpsum } else { hourly_total };

    TaskBillingReport {
        hourly_rate,
        lumpsum,
        rows,
        total_hours,
        total_amount,
    }
}

/// Total hours and entries for one date.
pub async fn day_report(db: &Database, date: NaiveDate) -> Result<DayReport> {
    let rows = db.day_logs(date).await?;
    Ok(summarize_day(date, rows))
}

/// Per-task summary for every task under a project.
pub async fn project_report(db: &Database, project_no: &str) -> Result<ProjectReport> {
    let tasks = db.project_task_refs(project_no).await?;
    let logs = db.project_log_rows(project_no).await?;
    Ok(summarize_project_tasks(project_no, tasks, logs))
}

/// Billed amounts for one task over an inclusive date range.
pub async fn task_billing_report(
    db: &Database,
    task_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<TaskBillingReport> {
    let (hourly_rate, lumpsum) = db.task_rates(task_id).await?;
    let rows = db.task_log_rows(task_id, from, to).await?;
    Ok(bill_task_logs(hourly_rate, lumpsum, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_log(id: &str, day: u32, employee: Option<&str>, hours: f64) -> TaskLogRow {
        TaskLogRow {
            log_id: id.to_string(),
            log_date: date(2024, 3, day),
            employee: employee.map(str::to_string),
            hours,
            notes: None,
        }
    }

    fn project_log(task_id: i32, day: u32, employee: &str, hours: f64) -> ProjectLogRow {
        ProjectLogRow {
            task_id,
            log_date: date(2024, 3, day),
            employee: Some(employee.to_string()),
            hours,
        }
    }

    fn detail(hours: f64) -> TimeLogDetail {
        TimeLogDetail {
            log_id: "20240309-1-E-01-x".to_string(),
            log_date: date(2024, 3, 9),
            client: Some("Acme".to_string()),
            project: Some("Bridge".to_string()),
            task: Some("Estimating".to_string()),
            employee: Some("Rosa".to_string()),
            hours,
            notes: None,
        }
    }

    #[test]
    fn empty_day_totals_zero() {
        let report = summarize_day(date(2024, 3, 9), Vec::new());

        assert!(report.rows.is_empty());
        assert_eq!(report.total_hours, 0.0);
    }

    #[test]
    fn day_total_is_the_row_sum() {
        let report = summarize_day(date(2024, 3, 9), vec![detail(3.0), detail(4.5)]);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_hours, 7.5);
    }

    #[test]
    fn lumpsum_replaces_hourly_total() {
        let report = bill_task_logs(
            10.0,
            50.0,
            vec![task_log("a", 1, Some("Rosa"), 3.0), task_log("b", 2, Some("Ira"), 4.0)],
        );

        assert_eq!(report.total_hours, 7.0);
        assert_eq!(report.total_amount, 50.0);
        // Line amounts still reflect the hourly computation.
        assert_eq!(report.rows[0].line_amount, 30.0);
        assert_eq!(report.rows[1].line_amount, 40.0);
    }

    #[test]
    fn zero_lumpsum_falls_back_to_line_amounts() {
        let report = bill_task_logs(
            10.0,
            0.0,
            vec![task_log("a", 1, Some("Rosa"), 3.0), task_log("b", 2, Some("Ira"), 4.0)],
        );

        assert_eq!(report.total_hours, 7.0);
        assert_eq!(report.total_amount, 70.0);
    }

    #[test]
    fn empty_range_bills_nothing() {
        let report = bill_task_logs(10.0, 0.0, Vec::new());

        assert!(report.rows.is_empty());
        assert_eq!(report.total_hours, 0.0);
        assert_eq!(report.total_amount, 0.0);
    }

    #[test]
    fn project_report_keeps_zero_log_tasks_and_appends_total() {
        let tasks = vec![
            TaskRef { task_id: 2, task_name: "Scheduling".to_string() },
            TaskRef { task_id: 1, task_name: "Estimating".to_string() },
            TaskRef { task_id: 3, task_name: "Closeout".to_string() },
        ];
        let logs = vec![
            project_log(1, 9, "Rosa", 3.0),
            project_log(1, 2, "Ira", 4.0),
            project_log(2, 5, "Rosa", 1.5),
        ];

        let report = summarize_project_tasks("P-100", tasks, logs);

        // Three tasks plus the synthetic total row.
        assert_eq!(report.rows.len(), 4);

        // Ordered by task name; total row last.
        let names: Vec<&str> = report.rows.iter().map(|r| r.task_name.as_str()).collect();
        assert_eq!(names, vec!["Closeout", "Estimating", "Scheduling", PROJECT_TOTAL_LABEL]);

        let closeout = &report.rows[0];
        assert_eq!(closeout.task_id, Some(3));
        assert_eq!(closeout.first_log, None);
        assert_eq!(closeout.last_log, None);
        assert_eq!(closeout.total_hours, 0.0);
        assert_eq!(closeout.employees, "");

        let estimating = &report.rows[1];
        assert_eq!(estimating.first_log, Some(date(2024, 3, 2)));
        assert_eq!(estimating.last_log, Some(date(2024, 3, 9)));
        assert_eq!(estimating.total_hours, 7.0);
        assert_eq!(estimating.employees, "Ira, Rosa");

        let total = report.rows.last().unwrap();
        assert_eq!(total.task_id, None);
        assert_eq!(total.total_hours, 8.5);
        assert_eq!(report.total_hours, 8.5);
    }

    #[test]
    fn duplicate_employees_are_listed_once() {
        let tasks = vec![TaskRef { task_id: 1, task_name: "Estimating".to_string() }];
        let logs = vec![
            project_log(1, 1, "Rosa", 2.0),
            project_log(1, 2, "Rosa", 2.0),
        ];

        let report = summarize_project_tasks("P-100", tasks, logs);

        assert_eq!(report.rows[0].employees, "Rosa");
        assert_eq!(report.rows[0].total_hours, 4.0);
    }

    #[test]
    fn project_with_no_tasks_reports_only_the_total_row() {
        let report = summarize_project_tasks("P-100", Vec::new(), Vec::new());

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].task_name, PROJECT_TOTAL_LABEL);
        assert_eq!(report.total_hours, 0.0);
    }

    #[test]
    fn unattributed_logs_still_count_their_hours() {
        // An employee deleted after logging leaves the name null.
        let tasks = vec![TaskRef { task_id: 1, task_name: "Estimating".to_string() }];
        let logs = vec![ProjectLogRow {
            task_id: 1,
            log_date: date(2024, 3, 1),
            employee: None,
            hours: 2.0,
        }];

        let report = summarize_project_tasks("P-100", tasks, logs);

        assert_eq!(report.rows[0].total_hours, 2.0);
        assert_eq!(report.rows[0].employees, "");
    }
}
