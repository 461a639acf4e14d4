use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use crate::error::ForumError;

/// Append-only credential file of `name,password` lines.
///
/// Names are not unique; `verify` returns on the first matching line.
pub struct CredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one credential line, creating the file on first use.
    ///
    /// A comma or line break in either field would split the record, so those
    /// are refused with `InvalidInput` before anything is written.
    pub async fn register(&self, name: &str, password: &str) -> Result<(), ForumError> {
        for (label, value) in [("name", name), ("password", password)] {
            if value.contains([',', '\n', '\r']) {
                return Err(ForumError::InvalidInput(format!(
                    "{} contains a reserved character",
                    label
                )));
            }
        }

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(format!("{},{}\n", name, password).as_bytes())
            .await?;
        file.flush().await?;

        Ok(())
    }

    /// Scans the file line by line for an exact `name`/`password` match.
    ///
    /// Fields are compared as bytes, so a line that is not UTF-8 only fails
    /// to match instead of aborting the scan.
    pub async fn verify(&self, name: &str, password: &str) -> Result<bool, ForumError> {
        let file = fs::File::open(&self.path).await?;
        let mut lines = BufReader::new(file).split(b'\n');

        while let Some(line) = lines.next_segment().await? {
            let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);
            let mut fields = line.split(|b| *b == b',');
            let (Some(stored_name), Some(stored_password)) = (fields.next(), fields.next())
            else {
                continue;
            };

            if stored_name == name.as_bytes() && stored_password == password.as_bytes() {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
