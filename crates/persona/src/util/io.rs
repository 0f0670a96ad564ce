//! I/O utility functions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temp file path used while writing `path` (`target_mix.json` -> `target_mix.json.tmp`)
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a sibling `.tmp` file, then renamed over
/// the target so readers never observe a half-written file.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("target_mix.json"), &json)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp = temp_path(path);
    fs::write(&temp, content)?;
    fs::rename(&temp, path)?;
    Ok(())
}
