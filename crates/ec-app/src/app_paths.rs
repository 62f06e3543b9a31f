use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub settings_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_data_root(root: &Path) -> Self {
        Self {
            settings_path: root.join("settings.json"),
            logs_dir: root.join("logs"),
        }
    }
}
