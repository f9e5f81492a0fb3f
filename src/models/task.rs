/// Allowed values for `task_status`.
pub const TASK_STATUSES: &[&str] = &["Completed", "In Progress", "Not Done"];

/// A billable (or not) unit of work under a project.
///
/// `hourly_rate` and `lumpsum` are only meaningful when `billable` is
/// set; a non-billable task stores NULL for both.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Task {
    pub task_id: i32,
    pub client_id: String,
    pub project_no: String,
    pub task_name: String,
    pub billable: bool,
    pub hourly_rate: Option<f64>,
    pub lumpsum: Option<f64>,
    pub task_status: Option<String>,
    pub notes: Option<String>,
}
