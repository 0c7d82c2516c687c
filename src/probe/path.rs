//! Executable lookup on PATH.
//!
//! Lookups iterate PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems and is sometimes a shell builtin.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        for candidate in candidates(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool), dir.join(format!("{}.exe", tool))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

/// Resolve an interpreter given either a bare name or a path.
///
/// Bare names are looked up on `path_entries`. Anything with a path
/// separator is taken as a path, relative ones against `base`.
pub fn resolve_interpreter(
    interpreter: &str,
    base: &Path,
    path_entries: &[PathBuf],
) -> Option<PathBuf> {
    let as_path = Path::new(interpreter);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        let full = if as_path.is_absolute() {
            as_path.to_path_buf()
        } else {
            base.join(as_path)
        };
        return (full.is_file() && is_executable(&full)).then_some(full);
    }

    resolve_tool_path(interpreter, path_entries)
}
