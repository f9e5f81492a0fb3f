use chrono::NaiveDate;

/// One dated record of hours worked by one employee against one task.
///
/// The dimension references are nullable: deleting a client, project,
/// task, or employee keeps the log row and only nulls that reference.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TimeLog {
    pub log_id: String,
    pub log_date: NaiveDate,
    pub client_id: Option<String>,
    pub project_no: Option<String>,
    pub task_id: Option<i32>,
    pub employ_id: Option<String>,
    pub hours: f64,
    pub notes: Option<String>,
}

/// A time-log row joined to its dimension names for display.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TimeLogDetail {
    pub log_id: String,
    pub log_date: NaiveDate,
    pub client: Option<String>,
    pub project: Option<String>,
    pub task: Option<String>,
    pub employee: Option<String>,
    pub hours: f64,
    pub notes: Option<String>,
}

/// Compose a log id from the fields that identify the entry, plus a
/// wall-clock disambiguator so the same employee can log the same task
/// twice on one date.
pub fn compose_log_id(date: NaiveDate, task_id: i32, employ_id: &str) -> String {
    let stamp = chrono::Utc::now().format("%H%M%S%f");
    format!("{}-{}-{}-{}", date.format("%Y%m%d"), task_id, employ_id, stamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_id_encodes_date_task_and_employee() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let id = compose_log_id(date, 17, "E-02");

        assert!(id.starts_with("20240309-17-E-02-"));
        assert!(id.len() > "20240309-17-E-02-".len());
    }
}
