//! Input validation for every mutating operation.
//!
//! Each form takes the raw text a user submitted, applies the
//! presence/numeric/billable rules, and produces a model ready for the
//! store. The store is never called with unvalidated input.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{
    Client, PROJECT_STATUSES, PROJECT_TYPES, Project, ProjectManager, Staff, TASK_STATUSES, Task,
    TimeLog, compose_log_id,
};

/// Trim and require a non-empty value.
fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    Ok(value.to_string())
}

/// Trim an optional value; empty becomes NULL.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Parse a strictly positive number.
fn positive(field: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("{field} must be a number")))?;
    if parsed <= 0.0 {
        return Err(Error::validation(format!("{field} must be a positive number")));
    }
    Ok(parsed)
}

/// Parse a non-negative number, treating empty input as zero.
fn rate_or_zero(field: &str, value: &str) -> Result<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| Error::validation(format!("{field} must be a number")))?;
    if parsed < 0.0 {
        return Err(Error::validation(format!("{field} cannot be negative")));
    }
    Ok(parsed)
}

/// Membership check against an allowed list; empty means unset.
fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<Option<String>> {
    match optional(value) {
        None => Ok(None),
        Some(v) if allowed.contains(&v.as_str()) => Ok(Some(v)),
        Some(v) => Err(Error::validation(format!(
            "{field} must be one of {}, got '{v}'",
            allowed.join(", ")
        ))),
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::validation(format!("{field} must be a date in YYYY-MM-DD form")))
}

/// Parse an inclusive date range.
pub fn parse_date_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate)> {
    let from = parse_date("start date", from)?;
    let to = parse_date("end date", to)?;
    if from > to {
        return Err(Error::validation("start date must not be after end date"));
    }
    Ok((from, to))
}

pub struct ClientForm {
    pub client_id: String,
    pub client_name: String,
    pub client_address: String,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub notes: String,
}

impl ClientForm {
    pub fn validate(self) -> Result<Client> {
        let client_id = required("client id", &self.client_id)?;
        let client_name = required("client name", &self.client_name)?;
        let zip_code = optional(&self.zip_code);
        if let Some(zip) = &zip_code {
            if !zip.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::validation("zip code must be numeric"));
            }
        }
        Ok(Client {
            client_id,
            client_name,
            client_address: optional(&self.client_address),
            state: optional(&self.state),
            city: optional(&self.city),
            zip_code,
            notes: optional(&self.notes),
        })
    }
}

pub struct ManagerForm {
    pub client_id: String,
    pub manager_name: String,
    pub notes: String,
}

impl ManagerForm {
    /// Produces a manager with `pm_id` 0; the store assigns the real id.
    pub fn validate(self) -> Result<ProjectManager> {
        Ok(ProjectManager {
            pm_id: 0,
            client_id: required("client id", &self.client_id)?,
            manager_name: required("manager name", &self.manager_name)?,
            notes: optional(&self.notes),
        })
    }
}

pub struct ProjectForm {
    pub project_no: String,
    pub client_id: String,
    pub project_name: String,
    pub manager: String,
    pub project_type: String,
    pub project_status: String,
    pub notes: String,
}

impl ProjectForm {
    pub fn validate(self) -> Result<Project> {
        Ok(Project {
            project_no: required("project no", &self.project_no)?,
            client_id: required("client id", &self.client_id)?,
            project_name: required("project name", &self.project_name)?,
            client_project_manager: optional(&self.manager),
            project_type: one_of("project type", &self.project_type, PROJECT_TYPES)?,
            project_status: one_of("project status", &self.project_status, PROJECT_STATUSES)?,
            notes: optional(&self.notes),
        })
    }
}

pub struct TaskForm {
    pub client_id: String,
    pub project_no: String,
    pub task_name: String,
    pub billable: String,
    pub hourly_rate: String,
    pub lumpsum: String,
    pub task_status: String,
    pub notes: String,
}

impl TaskForm {
    /// Produces a task with `task_id` 0; the store assigns the real id.
    ///
    /// Billing fields are gated on the billable flag: a non-billable
    /// task stores NULL for both rates no matter what was typed, and a
    /// billable task needs a positive hourly rate or lumpsum.
    pub fn validate(self) -> Result<Task> {
        let billable = match self.billable.trim() {
            b if b.eq_ignore_ascii_case("yes") => true,
            b if b.eq_ignore_ascii_case("no") => false,
            _ => return Err(Error::validation("billable must be Yes or No")),
        };

        let (hourly_rate, lumpsum) = if billable {
            let rate = rate_or_zero("hourly rate", &self.hourly_rate)?;
            let lump = rate_or_zero("lumpsum", &self.lumpsum)?;
            if rate <= 0.0 && lump <= 0.0 {
                return Err(Error::validation(
                    "a billable task needs a positive hourly rate or lumpsum",
                ));
            }
            // Zero means "not provided" and is stored as NULL.
            (
                (rate > 0.0).then_some(rate),
                (lump > 0.0).then_some(lump),
            )
        } else {
            (None, None)
        };

        Ok(Task {
            task_id: 0,
            client_id: required("client id", &self.client_id)?,
            project_no: required("project no", &self.project_no)?,
            task_name: required("task name", &self.task_name)?,
            billable,
            hourly_rate,
            lumpsum,
            task_status: one_of("task status", &self.task_status, TASK_STATUSES)?,
            notes: optional(&self.notes),
        })
    }
}

pub struct StaffForm {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub email_address: String,
    pub hourly_rate: String,
}

impl StaffForm {
    pub fn validate(self, label: &str) -> Result<Staff> {
        Ok(Staff {
            id: required(&format!("{label} id"), &self.id)?,
            name: required(&format!("{label} name"), &self.name)?,
            contact_number: required("contact number", &self.contact_number)?,
            email_address: required("email address", &self.email_address)?,
            hourly_rate: positive("hourly rate", &self.hourly_rate)?,
        })
    }
}

pub struct TimeLogForm {
    pub log_date: String,
    pub client_id: String,
    pub project_no: String,
    pub task_id: String,
    pub employ_id: String,
    pub hours: String,
    pub notes: String,
}

impl TimeLogForm {
    /// Every field except notes is required; the log id is composed
    /// from the validated fields.
    pub fn validate(self) -> Result<TimeLog> {
        let log_date = parse_date("date", &self.log_date)?;
        let client_id = required("client id", &self.client_id)?;
        let project_no = required("project no", &self.project_no)?;
        let task_id: i32 = required("task id", &self.task_id)?
            .parse()
            .map_err(|_| Error::validation("task id must be a number"))?;
        let employ_id = required("employ id", &self.employ_id)?;
        let hours = positive("hours", &self.hours)?;

        Ok(TimeLog {
            log_id: compose_log_id(log_date, task_id, &employ_id),
            log_date,
            client_id: Some(client_id),
            project_no: Some(project_no),
            task_id: Some(task_id),
            employ_id: Some(employ_id),
            hours,
            notes: optional(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_form() -> ClientForm {
        ClientForm {
            client_id: "C-01".into(),
            client_name: "Acme".into(),
            client_address: "".into(),
            state: "Ohio".into(),
            city: "Columbus".into(),
            zip_code: "43004".into(),
            notes: "".into(),
        }
    }

    fn task_form(billable: &str, rate: &str, lump: &str) -> TaskForm {
        TaskForm {
            client_id: "C-01".into(),
            project_no: "P-100".into(),
            task_name: "Estimating".into(),
            billable: billable.into(),
            hourly_rate: rate.into(),
            lumpsum: lump.into(),
            task_status: "In Progress".into(),
            notes: "".into(),
        }
    }

    #[test]
    fn client_fields_are_trimmed() {
        let mut form = client_form();
        form.client_id = "  C-01  ".into();
        form.client_name = " Acme ".into();

        let client = form.validate().unwrap();
        assert_eq!(client.client_id, "C-01");
        assert_eq!(client.client_name, "Acme");
    }

    #[test]
    fn empty_client_id_is_rejected() {
        let mut form = client_form();
        form.client_id = "   ".into();

        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn non_numeric_zip_is_rejected() {
        let mut form = client_form();
        form.zip_code = "43a04".into();

        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn empty_zip_is_stored_as_null() {
        let mut form = client_form();
        form.zip_code = "  ".into();

        assert_eq!(form.validate().unwrap().zip_code, None);
    }

    #[test]
    fn billable_task_with_no_positive_rate_is_rejected() {
        assert!(matches!(
            task_form("Yes", "0", "0").validate(),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            task_form("Yes", "", "").validate(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn billable_task_keeps_only_positive_rates() {
        let task = task_form("Yes", "10", "0").validate().unwrap();
        assert_eq!(task.hourly_rate, Some(10.0));
        assert_eq!(task.lumpsum, None);
    }

    #[test]
    fn non_billable_task_clears_rates() {
        let task = task_form("No", "95.50", "1200").validate().unwrap();
        assert!(!task.billable);
        assert_eq!(task.hourly_rate, None);
        assert_eq!(task.lumpsum, None);
    }

    #[test]
    fn non_numeric_rate_is_rejected() {
        assert!(matches!(
            task_form("Yes", "ten", "").validate(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn unknown_task_status_is_rejected() {
        let mut form = task_form("No", "", "");
        form.task_status = "Paused".into();

        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn hours_must_be_positive() {
        let form = TimeLogForm {
            log_date: "2024-03-09".into(),
            client_id: "C-01".into(),
            project_no: "P-100".into(),
            task_id: "4".into(),
            employ_id: "E-02".into(),
            hours: "-2".into(),
            notes: "".into(),
        };

        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn time_log_id_is_composed_from_fields() {
        let form = TimeLogForm {
            log_date: "2024-03-09".into(),
            client_id: "C-01".into(),
            project_no: "P-100".into(),
            task_id: "4".into(),
            employ_id: "E-02".into(),
            hours: "7.5".into(),
            notes: " site visit ".into(),
        };

        let log = form.validate().unwrap();
        assert!(log.log_id.starts_with("20240309-4-E-02-"));
        assert_eq!(log.hours, 7.5);
        assert_eq!(log.notes.as_deref(), Some("site visit"));
    }

    #[test]
    fn reversed_date_range_is_rejected() {
        assert!(parse_date_range("2024-04-01", "2024-03-01").is_err());
        assert!(parse_date_range("2024-03-01", "2024-03-01").is_ok());
    }

    #[test]
    fn staff_rate_must_be_positive() {
        let form = StaffForm {
            id: "E-02".into(),
            name: "Rosa".into(),
            contact_number: "555-0199".into(),
            email_address: "rosa@example.com".into(),
            hourly_rate: "0".into(),
        };

        assert!(matches!(form.validate("employ"), Err(Error::Validation(_))));
    }
}
