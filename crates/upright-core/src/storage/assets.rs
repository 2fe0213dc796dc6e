//! Supporting assets written to the settings directory.
//!
//! The toast channel references the icon by path, and the About dialog
//! points at the on-disk license text, so both are materialized at startup.
//! Failures here are logged and otherwise ignored: a missing icon degrades
//! the toast, it never blocks a reminder.

use tracing::warn;

use super::SettingsStore;

static ICON_DATA: &[u8] = include_bytes!("../../assets/upright.ico");
static LICENSE_DATA: &[u8] = include_bytes!("../../../../LICENSE");

/// Write the embedded icon and license text into the settings directory,
/// skipping files that already match the embedded bytes.
pub fn ensure_resources(store: &SettingsStore) {
    write_if_stale(store, &store.icon_path(), ICON_DATA);
    write_if_stale(store, &store.license_path(), LICENSE_DATA);
}

fn write_if_stale(store: &SettingsStore, path: &std::path::Path, data: &[u8]) {
    let up_to_date = matches!(std::fs::read(path), Ok(on_disk) if on_disk == data);
    if up_to_date {
        return;
    }
    if let Err(e) = std::fs::write(path, data) {
        warn!(dir = %store.dir().display(), "could not write {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resources_are_written_once() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());

        ensure_resources(&store);
        assert!(store.icon_path().exists());
        assert!(store.license_path().exists());
        assert_eq!(std::fs::read(store.icon_path()).unwrap(), ICON_DATA);
    }

    #[test]
    fn stale_resources_are_rewritten() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::with_dir(dir.path());
        std::fs::write(store.icon_path(), b"garbage").unwrap();

        ensure_resources(&store);
        assert_eq!(std::fs::read(store.icon_path()).unwrap(), ICON_DATA);
    }
}
