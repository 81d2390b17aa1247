use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

use log::error;

use crate::lonan::cache::{self, AssetCache};

/// Browser script inlined at the end of every page.
pub fn inline_script() -> String {
    static SCRIPT: OnceLock<RwLock<AssetCache<String>>> = OnceLock::new();

    let mtime = cache::newest_mtime_with_extension(&scripts_root(), "js")
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let cache = SCRIPT.get_or_init(|| {
        RwLock::new(AssetCache {
            value: load_script(&scripts_root().join("site.js")),
            mtime,
        })
    });

    AssetCache::refresh(cache, mtime, || load_script(&scripts_root().join("site.js")))
}

/// Read `path`, guarding against a literal `</script>` ending the inline tag early.
pub fn load_script(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(source) => source.replace("</script", "<\\/script"),
        Err(err) => {
            error!("Failed to inline script {}: {err}", path.display());
            String::new()
        }
    }
}

fn scripts_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/assets/scripts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_closing_script_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.js");
        fs::write(&path, "const s = '</script>';").unwrap();
        assert_eq!(load_script(&path), "const s = '<\\/script>';");
    }

    #[test]
    fn missing_script_is_empty() {
        assert_eq!(load_script(Path::new("/nonexistent/site.js")), "");
    }

    #[test]
    fn shipped_script_is_inlined() {
        let script = inline_script();
        assert!(script.contains(r#"searchParams.get("open")"#));
        assert!(!script.contains("localStorage"));
    }
}
