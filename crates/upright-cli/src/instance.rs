//! Single-instance enforcement.
//!
//! A lock file in the settings directory stands in for a named OS mutex.
//! The file is removed on drop; a lock left behind by a crashed process
//! must be deleted by hand (known limitation).

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

const LOCK_FILE: &str = "upright.lock";

pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Try to take the process-wide lock.
    ///
    /// Returns `None` when another copy already holds it (or the lock file
    /// cannot be created at all), in which case the caller exits without
    /// starting any loops.
    pub fn acquire(dir: &Path) -> Option<Self> {
        let path = dir.join(LOCK_FILE);
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(mut file) => {
                let _ = write!(file, "{}", std::process::id());
                Some(Self { path })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => None,
            Err(e) => {
                warn!("could not create instance lock at {}: {e}", path.display());
                None
            }
        }
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
