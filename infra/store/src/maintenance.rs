use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{error, info, warn};
use walkdir::WalkDir;

const TMP_MARKER: &str = ".tsptmp.";
const STALE_AFTER: Duration = Duration::from_secs(300);

/// Removes leftover temp files under `root` and prunes directories that end
/// up empty. Files younger than the staleness cutoff are kept, they may
/// belong to a write still in flight.
pub(crate) async fn purge_tmp(root: &Path) {
    let root = root.to_path_buf();
    let sweep = Sweep { removed: 0, failed: 0, now: SystemTime::now() };

    match tokio::task::spawn_blocking(move || sweep.run(&root)).await {
        Ok(Sweep { removed, failed, .. }) if removed > 0 || failed > 0 => {
            info!(removed, failed, "Purged stale temp files");
        },
        Err(e) => error!(error = %e, "Temp file sweep panicked"),
        _ => {},
    }
}

struct Sweep {
    removed: usize,
    failed: usize,
    now: SystemTime,
}

impl Sweep {
    fn run(mut self, root: &Path) -> Self {
        for entry in WalkDir::new(root).contents_first(true).into_iter().flatten() {
            let path = entry.path();
            if path == root {
                continue;
            }
            if entry.file_type().is_dir() {
                let _ = std::fs::remove_dir(path);
            } else if entry.file_type().is_file() && self.is_target(path) {
                self.remove(path);
            }
        }
        self
    }

    fn is_target(&self, path: &Path) -> bool {
        let marked = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(TMP_MARKER));
        marked && self.age_of(path).is_none_or(|age| age > STALE_AFTER)
    }

    fn age_of(&self, path: &Path) -> Option<Duration> {
        let modified = std::fs::metadata(path).ok()?.modified().ok()?;
        self.now.duration_since(modified).ok()
    }

    fn remove(&mut self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => self.removed += 1,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not remove temp file");
                self.failed += 1;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_temp_files_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.tsptmp.1");
        std::fs::write(&path, b"{}").unwrap();

        let sweep = Sweep { removed: 0, failed: 0, now: SystemTime::now() };
        assert!(!sweep.is_target(&path));
    }

    #[test]
    fn only_old_marker_files_are_targets() {
        let dir = tempfile::tempdir().unwrap();
        let tmp = dir.path().join("settings.tsptmp.1");
        let real = dir.path().join("settings");
        std::fs::write(&tmp, b"{}").unwrap();
        std::fs::write(&real, b"{}").unwrap();

        let sweep =
            Sweep { removed: 0, failed: 0, now: SystemTime::now() + STALE_AFTER * 2 };
        assert!(sweep.is_target(&tmp));
        assert!(!sweep.is_target(&real));
    }
}
