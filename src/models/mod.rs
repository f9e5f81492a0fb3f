mod client;
mod project;
mod project_manager;
mod staff;
mod task;
mod time_log;

pub use client::Client;
pub use project::{PROJECT_STATUSES, PROJECT_TYPES, Project};
pub use project_manager::ProjectManager;
pub use staff::{Staff, StaffKind};
pub use task::{TASK_STATUSES, Task};
pub use time_log::{TimeLog, TimeLogDetail, compose_log_id};
