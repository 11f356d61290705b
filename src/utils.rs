use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Get home directory or panic with a clear message.
pub fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Could not determine home directory")
}

/// Compute total size of a directory recursively.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Count regular files in a directory recursively.
pub fn file_count(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count() as u64
}

/// Get size of a file or directory.
pub fn entry_size(path: &Path) -> u64 {
    if path.is_dir() {
        dir_size(path)
    } else {
        path.metadata().map(|m| m.len()).unwrap_or(0)
    }
}

/// Safely remove a file or directory. Returns bytes freed on success.
pub fn safe_remove(path: &Path) -> Result<u64, std::io::Error> {
    let size = entry_size(path);
    if path.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    Ok(size)
}

/// Result of emptying a directory: bytes freed plus per-entry failures.
pub struct ClearStats {
    pub freed: u64,
    pub errors: Vec<String>,
}

/// Remove everything inside `dir`, leaving the directory itself in place.
/// Failures on individual entries are collected, never propagated.
pub fn clear_dir_contents(dir: &Path) -> ClearStats {
    let mut stats = ClearStats {
        freed: 0,
        errors: Vec::new(),
    };

    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            stats.errors.push(format!("Cannot read {}: {e}", dir.display()));
            return stats;
        }
    };

    for entry in read_dir.flatten() {
        let path = entry.path();
        match safe_remove(&path) {
            Ok(freed) => stats.freed += freed,
            Err(e) => stats
                .errors
                .push(format!("Failed to remove {}: {e}", path.display())),
        }
    }

    stats
}

/// Remove `dir` entirely and recreate it empty. Returns bytes freed.
/// Used for caches whose owning process expects the directory to pre-exist.
pub fn recreate_dir(dir: &Path) -> Result<u64, std::io::Error> {
    let size = if dir.exists() {
        let s = dir_size(dir);
        std::fs::remove_dir_all(dir)?;
        s
    } else {
        0
    };
    std::fs::create_dir_all(dir)?;
    Ok(size)
}

/// The `n` largest immediate children of `dir`, sorted descending by size.
pub fn largest_entries(dir: &Path, n: usize) -> Vec<(PathBuf, u64)> {
    let mut entries: Vec<(PathBuf, u64)> = match std::fs::read_dir(dir) {
        Ok(rd) => rd
            .flatten()
            .map(|entry| {
                let path = entry.path();
                let size = entry_size(&path);
                (path, size)
            })
            .collect(),
        Err(_) => return Vec::new(),
    };

    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// Shorten a path for display by replacing home dir with ~.
pub fn display_path(path: &Path) -> String {
    let home = home_dir();
    if let Ok(relative) = path.strip_prefix(&home) {
        format!("~/{}", relative.display())
    } else {
        path.display().to_string()
    }
}
