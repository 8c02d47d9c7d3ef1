use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Copies a single file, creating missing parent directories and overwriting
/// any existing destination.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, target)?;
    Ok(())
}

/// Recursively copies a directory tree into `target`. Files already present
/// under the target are overwritten; entries only present under the target
/// are left alone.
pub fn copy_dir_recursive(source: &Path, target: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory not found: {}", source.display()),
        )
        .into());
    }

    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
