use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure categories for the application.
///
/// `Config` and `Connection` are fatal at startup; `Validation` and
/// `Constraint` abort only the triggering action and are surfaced to the
/// user as a correctable message.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Constraint(String),

    #[error("backup failed: {0}")]
    Backup(String),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Error::Constraint(msg.into())
    }

    /// Reclassify database errors raised by a mutating statement.
    ///
    /// Unique and foreign-key violations (SQLSTATE 23505 / 23503) become
    /// recoverable constraint errors; everything else passes through.
    pub fn from_db(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.code().as_deref() {
                Some("23505") => {
                    return Error::Constraint(format!("duplicate key: {}", db_err.message()));
                }
                Some("23503") => {
                    return Error::Constraint(format!(
                        "missing referenced record: {}",
                        db_err.message()
                    ));
                }
                _ => {}
            }
        }
        Error::Db(err)
    }
}
