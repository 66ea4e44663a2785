//! Saving the bundled resume document for the visitor.

use crate::utils::error::ShowcaseError;
use std::fs;
use std::path::{Path, PathBuf};

/// The user's download folder, falling back to the home directory.
pub fn download_dir() -> Result<PathBuf, ShowcaseError> {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(ShowcaseError::NoDownloadDir)
}

/// Copies `source` into `dest_dir` as `file_name` and returns the new path.
/// An existing file of that name is replaced.
pub fn export_resume(
    source: &Path,
    dest_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, ShowcaseError> {
    if !source.is_file() {
        return Err(ShowcaseError::ResumeNotFound(source.display().to_string()));
    }
    fs::create_dir_all(dest_dir)?;
    let target = dest_dir.join(file_name);
    fs::copy(source, &target)?;
    crate::utils::logger::info(&format!("Resume saved to {}", target.display()));
    Ok(target)
}
