/// Allowed values for `project_type`.
pub const PROJECT_TYPES: &[&str] = &["Estimatic", "Scheduling"];

/// Allowed values for `project_status`.
pub const PROJECT_STATUSES: &[&str] = &["Completed", "In Progress", "Not Started"];

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Project {
    pub project_no: String,
    pub client_id: String,
    pub project_name: String,
    pub client_project_manager: Option<String>,
    pub project_type: Option<String>,
    pub project_status: Option<String>,
    pub notes: Option<String>,
}
