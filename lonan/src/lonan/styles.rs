use std::{
    path::{Path, PathBuf},
    sync::{OnceLock, RwLock},
    time::SystemTime,
};

use log::warn;

use crate::lonan::cache::{self, AssetCache};

/// Brand palette, emitted as CSS custom properties ahead of the compiled sheet.
const BRAND_VARIABLES: &str = r#":root {
  --color-gold: #F5B800;
  --color-gold-dark: #D9A300;
  --color-black: #0A0A0A;
  --color-gray-dark: #4A4A4A;
  --color-gray-light: #F5F5F5;
  --color-white: #FFFFFF;
  --font-ar: "Tajawal", "Cairo", system-ui, sans-serif;
  --font-en: "Poppins", system-ui, sans-serif;
}
"#;

pub fn compiled_styles() -> String {
    static STYLES: OnceLock<RwLock<AssetCache<String>>> = OnceLock::new();

    let scss_mtime = latest_scss_mtime();
    let cache = STYLES.get_or_init(|| {
        RwLock::new(AssetCache {
            value: compile_scss(&scss_entry_path()),
            mtime: scss_mtime,
        })
    });

    AssetCache::refresh(cache, scss_mtime, || compile_scss(&scss_entry_path()))
}

/// Compile `entry` with its directory on the load path; on failure only the
/// brand variables are served.
pub fn compile_scss(entry: &Path) -> String {
    let include_path = entry
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(scss_root);

    match grass::from_path(
        entry,
        &grass::Options::default()
            .load_path(include_path)
            .style(grass::OutputStyle::Compressed),
    ) {
        Ok(css) => format!("{BRAND_VARIABLES}\n{css}"),
        Err(err) => {
            warn!("Failed to compile SCSS at {:?}: {err}", entry);
            BRAND_VARIABLES.to_string()
        }
    }
}

fn scss_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/assets/styles/")
}

fn scss_entry_path() -> PathBuf {
    scss_root().join("site.scss")
}

fn latest_scss_mtime() -> SystemTime {
    cache::newest_mtime_with_extension(&scss_root(), "scss").unwrap_or(SystemTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn compiles_nested_rules() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("site.scss");
        fs::write(dir.path().join("_mixins.scss"), "$gap: 4px;").unwrap();
        fs::write(&entry, "@import 'mixins';\n.card { .title { margin: $gap; } }").unwrap();

        let css = compile_scss(&entry);
        assert!(css.starts_with(":root"));
        assert!(css.contains(".card .title{margin:4px}"));
    }

    #[test]
    fn broken_sheet_falls_back_to_variables() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("site.scss");
        fs::write(&entry, ".card { color: ").unwrap();
        assert_eq!(compile_scss(&entry), BRAND_VARIABLES);
    }

    #[test]
    fn shipped_stylesheet_compiles() {
        let css = compiled_styles();
        assert!(css.contains("--color-gold"));
        assert!(css.contains("[dir=rtl]"));
    }
}
