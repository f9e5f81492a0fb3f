use std::fmt;

/// Which of the two structurally identical staff tables a record
/// belongs to. Employs and subconsultants share a shape but are stored
/// and managed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffKind {
    Employ,
    Subconsultant,
}

impl StaffKind {
    /// Table name, which is also the column-name prefix
    /// (`employ_id`, `subconsultant_id`, ...).
    pub fn table(self) -> &'static str {
        match self {
            StaffKind::Employ => "employ",
            StaffKind::Subconsultant => "subconsultant",
        }
    }
}

impl fmt::Display for StaffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub contact_number: String,
    pub email_address: String,
    pub hourly_rate: f64,
}
