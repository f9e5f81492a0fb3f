use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};

/// Dump the whole database to `output` as SQL text.
///
/// Runs the external `pg_dump` utility against the configured database
/// and writes its stdout verbatim. Failures (utility missing, non-zero
/// exit) are reported to the caller; nothing is retried.
pub fn dump_database(config: &Config, output: &Path) -> Result<()> {
    let result = Command::new("pg_dump")
        .arg("--host")
        .arg(&config.db_host)
        .arg("--username")
        .arg(&config.db_user)
        .arg("--dbname")
        .arg(&config.db_name)
        .env("PGPASSWORD", &config.db_password)
        .output()
        .map_err(|e| Error::Backup(format!("could not run pg_dump: {e}")))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(Error::Backup(format!(
            "pg_dump exited with {}: {}",
            result.status,
            stderr.trim()
        )));
    }

    fs::write(output, &result.stdout)
        .map_err(|e| Error::Backup(format!("could not write {}: {e}", output.display())))?;

    info!(bytes = result.stdout.len(), path = %output.display(), "database dumped");
    Ok(())
}
