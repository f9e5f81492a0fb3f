use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Client, Project, ProjectManager, Staff, StaffKind, Task, TimeLog, TimeLogDetail};
use crate::report::{ProjectLogRow, TaskLogRow, TaskRef};

/// Tables, created in dependency order. Cascade behavior lives here and
/// only here: deleting a client removes its managers, projects, and
/// tasks, while time-log rows survive with the reference nulled.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS client (
        client_id TEXT PRIMARY KEY,
        client_name TEXT NOT NULL,
        client_address TEXT,
        state TEXT,
        city TEXT,
        zip_code TEXT,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS project_manager (
        pm_id SERIAL PRIMARY KEY,
        client_id TEXT NOT NULL REFERENCES client(client_id) ON DELETE CASCADE,
        manager_name TEXT NOT NULL,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS project (
        project_no TEXT PRIMARY KEY,
        client_id TEXT NOT NULL REFERENCES client(client_id) ON DELETE CASCADE,
        project_name TEXT NOT NULL,
        client_project_manager TEXT,
        project_type TEXT,
        project_status TEXT,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS task (
        task_id SERIAL PRIMARY KEY,
        client_id TEXT NOT NULL REFERENCES client(client_id) ON DELETE CASCADE,
        project_no TEXT NOT NULL REFERENCES project(project_no) ON DELETE CASCADE,
        task_name TEXT NOT NULL,
        billable BOOLEAN NOT NULL,
        hourly_rate NUMERIC(10,2),
        lumpsum NUMERIC(10,2),
        task_status TEXT,
        notes TEXT
    )",
    "CREATE TABLE IF NOT EXISTS employ (
        employ_id TEXT PRIMARY KEY,
        employ_name TEXT NOT NULL,
        employ_contact_number TEXT NOT NULL,
        employ_email_address TEXT NOT NULL,
        hourly_rate NUMERIC(10,2) NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS subconsultant (
        subconsultant_id TEXT PRIMARY KEY,
        subconsultant_name TEXT NOT NULL,
        subconsultant_contact_number TEXT NOT NULL,
        subconsultant_email_address TEXT NOT NULL,
        hourly_rate NUMERIC(10,2) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS time_log (
        log_id TEXT PRIMARY KEY,
        log_date DATE NOT NULL,
        client_id TEXT REFERENCES client(client_id) ON DELETE SET NULL,
        project_no TEXT REFERENCES project(project_no) ON DELETE SET NULL,
        task_id INT REFERENCES task(task_id) ON DELETE SET NULL,
        employ_id TEXT REFERENCES employ(employ_id) ON DELETE SET NULL,
        hours NUMERIC(5,2) NOT NULL,
        notes TEXT
    )",
];

/// Additive-only evolution for columns older deployments predate.
const SCHEMA_UPGRADES: &[&str] = &[
    "ALTER TABLE task ADD COLUMN IF NOT EXISTS hourly_rate NUMERIC(10,2)",
    "ALTER TABLE task ADD COLUMN IF NOT EXISTS lumpsum NUMERIC(10,2)",
    "ALTER TABLE task ADD COLUMN IF NOT EXISTS notes TEXT",
    "ALTER TABLE employ ADD COLUMN IF NOT EXISTS hourly_rate NUMERIC(10,2) NOT NULL DEFAULT 0",
];

const TASK_SELECT: &str = "SELECT task_id, client_id, project_no, task_name, billable, \
     hourly_rate::float8 AS hourly_rate, lumpsum::float8 AS lumpsum, task_status, notes \
     FROM task";

const LOG_DETAIL_SELECT: &str = "SELECT tl.log_id, tl.log_date, \
     c.client_name AS client, p.project_name AS project, \
     t.task_name AS task, e.employ_name AS employee, \
     tl.hours::float8 AS hours, tl.notes \
     FROM time_log tl \
     LEFT JOIN client c ON tl.client_id = c.client_id \
     LEFT JOIN project p ON tl.project_no = p.project_no \
     LEFT JOIN task t ON tl.task_id = t.task_id \
     LEFT JOIN employ e ON tl.employ_id = e.employ_id";

/// Database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url())
            .await
            .map_err(Error::Connection)?;

        Ok(Self { pool })
    }

    /// Create missing tables and append columns added after the first
    /// release. Never drops or rewrites anything.
    pub async fn ensure_schema(&self) -> Result<()> {
        for ddl in SCHEMA.iter().chain(SCHEMA_UPGRADES) {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        debug!("schema is up to date");
        Ok(())
    }

    async fn exists(&self, table: &str, id_column: &str, id: &str) -> Result<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE {id_column} = $1)");
        let found = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    // Client operations
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT client_id, client_name, client_address, state, city, zip_code, notes \
             FROM client ORDER BY client_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn get_client(&self, client_id: &str) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT client_id, client_name, client_address, state, city, zip_code, notes \
             FROM client WHERE client_id = $1",
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn create_client(&self, client: &Client) -> Result<()> {
        if self.exists("client", "client_id", &client.client_id).await? {
            return Err(Error::constraint(format!(
                "client id '{}' already exists",
                client.client_id
            )));
        }

        sqlx::query(
            "INSERT INTO client (client_id, client_name, client_address, state, city, zip_code, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&client.client_id)
        .bind(&client.client_name)
        .bind(&client.client_address)
        .bind(&client.state)
        .bind(&client.city)
        .bind(&client.zip_code)
        .bind(&client.notes)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn update_client(&self, client: &Client) -> Result<()> {
        if !self.exists("client", "client_id", &client.client_id).await? {
            return Err(Error::constraint(format!(
                "client id '{}' does not exist",
                client.client_id
            )));
        }

        sqlx::query(
            "UPDATE client \
             SET client_name = $1, client_address = $2, state = $3, city = $4, zip_code = $5, notes = $6 \
             WHERE client_id = $7",
        )
        .bind(&client.client_name)
        .bind(&client.client_address)
        .bind(&client.state)
        .bind(&client.city)
        .bind(&client.zip_code)
        .bind(&client.notes)
        .bind(&client.client_id)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    /// Delete a client. Dependent managers, projects, and tasks fall to
    /// the cascade rules; time logs keep their rows with the client
    /// reference nulled.
    pub async fn delete_client(&self, client_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM client WHERE client_id = $1")
            .bind(client_id)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(result.rows_affected() > 0)
    }

    // Project manager operations
    pub async fn list_managers(&self, client_id: Option<&str>) -> Result<Vec<ProjectManager>> {
        let managers = match client_id {
            Some(client_id) => {
                sqlx::query_as::<_, ProjectManager>(
                    "SELECT pm_id, client_id, manager_name, notes FROM project_manager \
                     WHERE client_id = $1 ORDER BY manager_name ASC",
                )
                .bind(client_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProjectManager>(
                    "SELECT pm_id, client_id, manager_name, notes FROM project_manager \
                     ORDER BY client_id ASC, manager_name ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(managers)
    }

    pub async fn get_manager(&self, pm_id: i32) -> Result<Option<ProjectManager>> {
        let manager = sqlx::query_as::<_, ProjectManager>(
            "SELECT pm_id, client_id, manager_name, notes FROM project_manager WHERE pm_id = $1",
        )
        .bind(pm_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(manager)
    }

    pub async fn create_manager(&self, manager: &ProjectManager) -> Result<i32> {
        let pm_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO project_manager (client_id, manager_name, notes) \
             VALUES ($1, $2, $3) RETURNING pm_id",
        )
        .bind(&manager.client_id)
        .bind(&manager.manager_name)
        .bind(&manager.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(pm_id)
    }

    pub async fn update_manager(&self, manager: &ProjectManager) -> Result<()> {
        if self.get_manager(manager.pm_id).await?.is_none() {
            return Err(Error::constraint(format!(
                "manager {} does not exist",
                manager.pm_id
            )));
        }

        sqlx::query(
            "UPDATE project_manager SET client_id = $1, manager_name = $2, notes = $3 \
             WHERE pm_id = $4",
        )
        .bind(&manager.client_id)
        .bind(&manager.manager_name)
        .bind(&manager.notes)
        .bind(manager.pm_id)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn delete_manager(&self, pm_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM project_manager WHERE pm_id = $1")
            .bind(pm_id)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(result.rows_affected() > 0)
    }

    // Project operations
    pub async fn list_projects(&self, client_id: Option<&str>) -> Result<Vec<Project>> {
        let projects = match client_id {
            Some(client_id) => {
                sqlx::query_as::<_, Project>(
                    "SELECT project_no, client_id, project_name, client_project_manager, \
                     project_type, project_status, notes \
                     FROM project WHERE client_id = $1 ORDER BY project_no ASC",
                )
                .bind(client_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Project>(
                    "SELECT project_no, client_id, project_name, client_project_manager, \
                     project_type, project_status, notes \
                     FROM project ORDER BY project_no ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(projects)
    }

    pub async fn get_project(&self, project_no: &str) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT project_no, client_id, project_name, client_project_manager, \
             project_type, project_status, notes \
             FROM project WHERE project_no = $1",
        )
        .bind(project_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    pub async fn create_project(&self, project: &Project) -> Result<()> {
        if self.exists("project", "project_no", &project.project_no).await? {
            return Err(Error::constraint(format!(
                "project no '{}' already exists",
                project.project_no
            )));
        }

        sqlx::query(
            "INSERT INTO project (project_no, client_id, project_name, client_project_manager, \
             project_type, project_status, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&project.project_no)
        .bind(&project.client_id)
        .bind(&project.project_name)
        .bind(&project.client_project_manager)
        .bind(&project.project_type)
        .bind(&project.project_status)
        .bind(&project.notes)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn update_project(&self, project: &Project) -> Result<()> {
        if !self.exists("project", "project_no", &project.project_no).await? {
            return Err(Error::constraint(format!(
                "project no '{}' does not exist",
                project.project_no
            )));
        }

        sqlx::query(
            "UPDATE project \
             SET client_id = $1, project_name = $2, client_project_manager = $3, \
                 project_type = $4, project_status = $5, notes = $6 \
             WHERE project_no = $7",
        )
        .bind(&project.client_id)
        .bind(&project.project_name)
        .bind(&project.client_project_manager)
        .bind(&project.project_type)
        .bind(&project.project_status)
        .bind(&project.notes)
        .bind(&project.project_no)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    /// Delete a project; its tasks cascade with it.
    pub async fn delete_project(&self, project_no: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM project WHERE project_no = $1")
            .bind(project_no)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(result.rows_affected() > 0)
    }

    // Task operations
    pub async fn list_tasks(&self, project_no: Option<&str>) -> Result<Vec<Task>> {
        let tasks = match project_no {
            Some(project_no) => {
                sqlx::query_as::<_, Task>(&format!(
                    "{TASK_SELECT} WHERE project_no = $1 ORDER BY task_id ASC"
                ))
                .bind(project_no)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(&format!("{TASK_SELECT} ORDER BY task_id ASC"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(tasks)
    }

    pub async fn get_task(&self, task_id: i32) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(&format!("{TASK_SELECT} WHERE task_id = $1"))
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    pub async fn create_task(&self, task: &Task) -> Result<i32> {
        let task_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO task (client_id, project_no, task_name, billable, hourly_rate, \
             lumpsum, task_status, notes) \
             VALUES ($1, $2, $3, $4, $5::numeric, $6::numeric, $7, $8) RETURNING task_id",
        )
        .bind(&task.client_id)
        .bind(&task.project_no)
        .bind(&task.task_name)
        .bind(task.billable)
        .bind(task.hourly_rate)
        .bind(task.lumpsum)
        .bind(&task.task_status)
        .bind(&task.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(task_id)
    }

    pub async fn update_task(&self, task: &Task) -> Result<()> {
        if self.get_task(task.task_id).await?.is_none() {
            return Err(Error::constraint(format!(
                "task {} does not exist",
                task.task_id
            )));
        }

        sqlx::query(
            "UPDATE task \
             SET client_id = $1, project_no = $2, task_name = $3, billable = $4, \
                 hourly_rate = $5::numeric, lumpsum = $6::numeric, task_status = $7, notes = $8 \
             WHERE task_id = $9",
        )
        .bind(&task.client_id)
        .bind(&task.project_no)
        .bind(&task.task_name)
        .bind(task.billable)
        .bind(task.hourly_rate)
        .bind(task.lumpsum)
        .bind(&task.task_status)
        .bind(&task.notes)
        .bind(task.task_id)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn delete_task(&self, task_id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM task WHERE task_id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(result.rows_affected() > 0)
    }

    // Employ / subconsultant operations. The two tables are
    // structurally identical, so every query is built from the kind.
    pub async fn list_staff(&self, kind: StaffKind) -> Result<Vec<Staff>> {
        let t = kind.table();
        let sql = format!(
            "SELECT {t}_id AS id, {t}_name AS name, {t}_contact_number AS contact_number, \
             {t}_email_address AS email_address, hourly_rate::float8 AS hourly_rate \
             FROM {t} ORDER BY {t}_name ASC"
        );
        let staff = sqlx::query_as::<_, Staff>(&sql).fetch_all(&self.pool).await?;

        Ok(staff)
    }

    pub async fn get_staff(&self, kind: StaffKind, id: &str) -> Result<Option<Staff>> {
        let t = kind.table();
        let sql = format!(
            "SELECT {t}_id AS id, {t}_name AS name, {t}_contact_number AS contact_number, \
             {t}_email_address AS email_address, hourly_rate::float8 AS hourly_rate \
             FROM {t} WHERE {t}_id = $1"
        );
        let staff = sqlx::query_as::<_, Staff>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(staff)
    }

    pub async fn create_staff(&self, kind: StaffKind, staff: &Staff) -> Result<()> {
        let t = kind.table();
        if self.exists(t, &format!("{t}_id"), &staff.id).await? {
            return Err(Error::constraint(format!(
                "{kind} id '{}' already exists",
                staff.id
            )));
        }

        let sql = format!(
            "INSERT INTO {t} ({t}_id, {t}_name, {t}_contact_number, {t}_email_address, hourly_rate) \
             VALUES ($1, $2, $3, $4, $5::numeric)"
        );
        sqlx::query(&sql)
            .bind(&staff.id)
            .bind(&staff.name)
            .bind(&staff.contact_number)
            .bind(&staff.email_address)
            .bind(staff.hourly_rate)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn update_staff(&self, kind: StaffKind, staff: &Staff) -> Result<()> {
        let t = kind.table();
        if !self.exists(t, &format!("{t}_id"), &staff.id).await? {
            return Err(Error::constraint(format!(
                "{kind} id '{}' does not exist",
                staff.id
            )));
        }

        let sql = format!(
            "UPDATE {t} SET {t}_name = $1, {t}_contact_number = $2, {t}_email_address = $3, \
             hourly_rate = $4::numeric WHERE {t}_id = $5"
        );
        sqlx::query(&sql)
            .bind(&staff.name)
            .bind(&staff.contact_number)
            .bind(&staff.email_address)
            .bind(staff.hourly_rate)
            .bind(&staff.id)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn delete_staff(&self, kind: StaffKind, id: &str) -> Result<bool> {
        let t = kind.table();
        let sql = format!("DELETE FROM {t} WHERE {t}_id = $1");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(result.rows_affected() > 0)
    }

    // Time log operations
    /// All log entries, or the entries for one date, newest first.
    pub async fn list_logs(&self, date: Option<NaiveDate>) -> Result<Vec<TimeLogDetail>> {
        let logs = match date {
            Some(date) => {
                sqlx::query_as::<_, TimeLogDetail>(&format!(
                    "{LOG_DETAIL_SELECT} WHERE tl.log_date = $1 ORDER BY tl.log_id DESC"
                ))
                .bind(date)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TimeLogDetail>(&format!(
                    "{LOG_DETAIL_SELECT} ORDER BY tl.log_date DESC, tl.log_id DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(logs)
    }

    /// The entries for one date in entry order, for the day report.
    pub async fn day_logs(&self, date: NaiveDate) -> Result<Vec<TimeLogDetail>> {
        let logs = sqlx::query_as::<_, TimeLogDetail>(&format!(
            "{LOG_DETAIL_SELECT} WHERE tl.log_date = $1 ORDER BY tl.log_id ASC"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn create_time_log(&self, log: &TimeLog) -> Result<()> {
        sqlx::query(
            "INSERT INTO time_log (log_id, log_date, client_id, project_no, task_id, \
             employ_id, hours, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7::numeric, $8)",
        )
        .bind(&log.log_id)
        .bind(log.log_date)
        .bind(&log.client_id)
        .bind(&log.project_no)
        .bind(log.task_id)
        .bind(&log.employ_id)
        .bind(log.hours)
        .bind(&log.notes)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    /// Replace a log entry. The id is regenerated by the caller from
    /// the new field values, so the old id addresses the row.
    pub async fn update_time_log(&self, old_log_id: &str, log: &TimeLog) -> Result<()> {
        if !self.exists("time_log", "log_id", old_log_id).await? {
            return Err(Error::constraint(format!(
                "time log '{old_log_id}' does not exist"
            )));
        }

        sqlx::query(
            "UPDATE time_log \
             SET log_id = $1, log_date = $2, client_id = $3, project_no = $4, task_id = $5, \
                 employ_id = $6, hours = $7::numeric, notes = $8 \
             WHERE log_id = $9",
        )
        .bind(&log.log_id)
        .bind(log.log_date)
        .bind(&log.client_id)
        .bind(&log.project_no)
        .bind(log.task_id)
        .bind(&log.employ_id)
        .bind(log.hours)
        .bind(&log.notes)
        .bind(old_log_id)
        .execute(&self.pool)
        .await
        .map_err(Error::from_db)?;

        Ok(())
    }

    pub async fn delete_time_log(&self, log_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM time_log WHERE log_id = $1")
            .bind(log_id)
            .execute(&self.pool)
            .await
            .map_err(Error::from_db)?;

        Ok(result.rows_affected() > 0)
    }

    // Report row fetches. Aggregation itself happens in the report
    // module; these only hand over the raw rows.
    /// Hourly rate and lumpsum for a task, defaulting to 0 when unset
    /// or when the task no longer exists.
    pub async fn task_rates(&self, task_id: i32) -> Result<(f64, f64)> {
        let rates = sqlx::query_as::<_, (f64, f64)>(
            "SELECT COALESCE(hourly_rate::float8, 0.0), COALESCE(lumpsum::float8, 0.0) \
             FROM task WHERE task_id = $1",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rates.unwrap_or((0.0, 0.0)))
    }

    pub async fn project_task_refs(&self, project_no: &str) -> Result<Vec<TaskRef>> {
        let tasks = sqlx::query_as::<_, TaskRef>(
            "SELECT task_id, task_name FROM task WHERE project_no = $1 ORDER BY task_name ASC",
        )
        .bind(project_no)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn project_log_rows(&self, project_no: &str) -> Result<Vec<ProjectLogRow>> {
        let rows = sqlx::query_as::<_, ProjectLogRow>(
            "SELECT tl.task_id, tl.log_date, e.employ_name AS employee, tl.hours::float8 AS hours \
             FROM time_log tl \
             JOIN task t ON tl.task_id = t.task_id \
             LEFT JOIN employ e ON tl.employ_id = e.employ_id \
             WHERE t.project_no = $1",
        )
        .bind(project_no)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Log rows for one task inside an inclusive date range, oldest
    /// first.
    pub async fn task_log_rows(
        &self,
        task_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TaskLogRow>> {
        let rows = sqlx::query_as::<_, TaskLogRow>(
            "SELECT tl.log_id, tl.log_date, e.employ_name AS employee, \
             tl.hours::float8 AS hours, tl.notes \
             FROM time_log tl \
             LEFT JOIN employ e ON tl.employ_id = e.employ_id \
             WHERE tl.task_id = $1 AND tl.log_date BETWEEN $2 AND $3 \
             ORDER BY tl.log_date ASC, tl.log_id ASC",
        )
        .bind(task_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Connect and bring the schema up to date.
pub async fn init(config: &Config) -> Result<Database> {
    let db = Database::new(config).await?;
    db.ensure_schema().await?;

    Ok(db)
}
