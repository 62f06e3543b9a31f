use std::path::PathBuf;

use anyhow::{Context, Result};

/// Platform data root for the application. The directory itself is created
/// lazily by whichever adapter first writes under it.
pub fn data_root() -> Result<PathBuf> {
    let root = dirs::data_dir()
        .context("no platform data directory available")?
        .join("expatcare");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_root_ends_with_app_directory() {
        // Headless environments may expose no data directory at all.
        if let Ok(root) = data_root() {
            assert!(root.ends_with("expatcare"));
        }
    }
}
