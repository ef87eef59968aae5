use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the directory every git command runs in: the directory holding
/// the running executable, independent of the shell's current directory.
pub fn resolve_work_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    program_dir(&exe)
}

/// The cleaned parent directory of `exe`, made absolute against the current
/// directory when `exe` is relative
pub fn program_dir(exe: &Path) -> Result<PathBuf> {
    let exe = if exe.is_absolute() {
        exe.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read the current directory")?
            .join(exe)
    };

    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("Executable path {} has no parent directory", exe.display()))?;

    Ok(path_clean::clean(dir))
}
