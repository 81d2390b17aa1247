use std::io;
use std::path::Path;
use std::time::SystemTime;

use walkdir::WalkDir;

/// Find the most recent modification time for files with the given extension under `dir`.
pub fn newest_mtime_with_extension(dir: &Path, ext: &str) -> io::Result<SystemTime> {
    let mut newest = SystemTime::UNIX_EPOCH;
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
    {
        let is_match = entry.path().extension().map(|e| e == ext).unwrap_or(false);
        if !is_match {
            continue;
        }

        if let Ok(modified) = entry.metadata().map_err(io::Error::from).and_then(|m| m.modified()) {
            newest = newest.max(modified);
        }
    }

    Ok(newest)
}

/// Value rebuilt from asset files whenever one of them changes on disk.
pub struct AssetCache<T> {
    pub value: T,
    pub mtime: SystemTime,
}

impl<T: Clone> AssetCache<T> {
    /// Return the cached value, rebuilding it first when `mtime` is newer.
    pub fn refresh(
        lock: &std::sync::RwLock<AssetCache<T>>,
        mtime: SystemTime,
        build: impl Fn() -> T,
    ) -> T {
        if let Ok(guard) = lock.read() {
            if guard.mtime >= mtime {
                return guard.value.clone();
            }
        }

        if let Ok(mut guard) = lock.write() {
            if guard.mtime < mtime {
                guard.value = build();
                guard.mtime = mtime;
            }
            return guard.value.clone();
        }

        // Poisoned lock: build without caching.
        build()
    }
}
