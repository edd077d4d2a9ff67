use std::path::{Path, PathBuf};

use crate::error::MemseedError;

/// Store location relative to the install root.
pub const DEFAULT_STORE_PATH: &str = "dist/data/memory.json";

/// `<root>/bin/memseed-init` -> `<root>`. Falls back to the executable's own
/// directory when it has no parent.
pub fn install_root_from_exe(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new(""));
    exe_dir.parent().unwrap_or(exe_dir).to_path_buf()
}

pub fn install_root() -> Result<PathBuf, MemseedError> {
    let exe = std::env::current_exe().map_err(|e| MemseedError::io("<current executable>", e))?;
    Ok(install_root_from_exe(&exe))
}
