#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Client {
    pub client_id: String,
    pub client_name: String,
    pub client_address: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub notes: Option<String>,
}
