use std::path::{Component, Path};

/// Path components of one data file, available to propstrings by name.
///
/// For `data/pages/home.en.yml`:
///
/// | key                  | value                     |
/// |----------------------|---------------------------|
/// | `path`               | `data/pages/home.en.yml`  |
/// | `root`               | (empty)                   |
/// | `dir`, `dirname`     | `data/pages`              |
/// | `base`               | `home.en.yml`             |
/// | `name`, `basename`   | `home.en`                 |
/// | `extname`            | `.yml`                    |
/// | `ext`                | `yml`                     |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMeta {
    pub path: String,
    pub root: String,
    pub dir: String,
    pub base: String,
    pub name: String,
    pub extname: String,
    pub ext: String,
}

impl PathMeta {
    pub fn from_path(path: &Path) -> Self {
        let root: std::path::PathBuf = path
            .components()
            .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect();

        let lossy = |p: Option<&std::ffi::OsStr>| {
            p.map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
        };

        let ext = lossy(path.extension());
        let extname = if ext.is_empty() {
            String::new()
        } else {
            format!(".{}", ext)
        };

        Self {
            path: path.to_string_lossy().to_string(),
            root: root.to_string_lossy().to_string(),
            dir: path
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
            base: lossy(path.file_name()),
            name: lossy(path.file_stem()),
            extname,
            ext,
        }
    }

    /// Look up a metadata property by the name used in propstrings.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "path" => &self.path,
            "root" => &self.root,
            "dir" | "dirname" => &self.dir,
            "base" => &self.base,
            "name" | "basename" => &self.name,
            "extname" => &self.extname,
            "ext" => &self.ext,
            _ => return None,
        };
        Some(value.as_str())
    }
}
