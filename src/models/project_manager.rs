#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProjectManager {
    pub pm_id: i32,
    pub client_id: String,
    pub manager_name: String,
    pub notes: Option<String>,
}
