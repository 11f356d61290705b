use super::{CleanTask, TargetReport, TaskReport};
use crate::output::format_size;
use crate::utils;
use std::path::{Path, PathBuf};

/// Candidate install roots, highest priority first. Native install,
/// legacy symlinked layout, then the Flatpak sandbox.
const ROOT_CANDIDATES: &[&str] = &[
    ".local/share/Steam",
    ".steam/steam",
    ".var/app/com.valvesoftware.Steam/.local/share/Steam",
];

/// Root-relative cache directories safe to empty while Steam is closed.
const CACHE_SUBDIRS: &[(&str, &str)] = &[
    ("steamapps/shadercache", "Shader cache"),
    ("steamapps/downloading", "Download staging"),
    ("steamapps/temp", "Download temp"),
    ("config/htmlcache", "Web view cache"),
    ("logs", "Logs"),
    ("dumps", "Crash dumps"),
    ("depotcache", "Depot cache"),
];

const COMPATDATA_TOP_N: usize = 10;

/// First candidate whose steamapps subdirectory exists wins; the rest
/// are ignored even if present.
pub fn resolve_install_root(home: &Path) -> Option<PathBuf> {
    ROOT_CANDIDATES
        .iter()
        .map(|rel| home.join(rel))
        .find(|root| root.join("steamapps").is_dir())
}

pub struct SteamCaches {
    home: PathBuf,
}

impl SteamCaches {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }
}

impl CleanTask for SteamCaches {
    fn label(&self) -> &'static str {
        "Steam caches"
    }

    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();

        let Some(root) = resolve_install_root(&self.home) else {
            report
                .targets
                .push(TargetReport::skipped("Steam installation", "not found"));
            return report;
        };

        for (rel, label) in CACHE_SUBDIRS {
            let dir = root.join(rel);
            if !dir.is_dir() {
                report.targets.push(TargetReport::skipped(*label, "not found"));
                continue;
            }

            if dry_run {
                let size = utils::dir_size(&dir);
                report.targets.push(TargetReport::cleared(*label, size, true));
            } else {
                let stats = utils::clear_dir_contents(&dir);
                report
                    .targets
                    .push(TargetReport::cleared(*label, stats.freed, false));
                report.errors.extend(stats.errors);
            }
        }

        report
    }
}

/// Report-only: compatdata holds per-game Proton prefixes whose app IDs
/// only a human can map back to installed games. Never deleted here.
pub struct CompatData {
    home: PathBuf,
}

impl CompatData {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }
}

impl CleanTask for CompatData {
    fn label(&self) -> &'static str {
        "Proton compatdata (report only)"
    }

    fn run(&self, _dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();

        let Some(root) = resolve_install_root(&self.home) else {
            report
                .targets
                .push(TargetReport::skipped("Steam installation", "not found"));
            return report;
        };

        let compatdata = root.join("steamapps/compatdata");
        if !compatdata.is_dir() {
            report
                .targets
                .push(TargetReport::skipped("compatdata", "not found"));
            return report;
        }

        let total = utils::dir_size(&compatdata);
        let entries = std::fs::read_dir(&compatdata)
            .map(|rd| rd.count())
            .unwrap_or(0);
        report
            .targets
            .push(TargetReport::report_only("compatdata:", total));
        report.targets.push(TargetReport::info(
            "prefixes:",
            format!("{entries} entries"),
        ));

        for (path, size) in utils::largest_entries(&compatdata, COMPATDATA_TOP_N) {
            let app_id = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            report
                .targets
                .push(TargetReport::info(format_size(size), format!("app {app_id}")));
        }

        report.targets.push(TargetReport::info(
            "hint:",
            "remove prefixes of uninstalled games by app ID".to_string(),
        ));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::Outcome;
    use std::fs;

    #[test]
    fn first_existing_candidate_wins() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(home.path().join(".steam/steam/steamapps")).unwrap();
        fs::create_dir_all(
            home.path()
                .join(".var/app/com.valvesoftware.Steam/.local/share/Steam/steamapps"),
        )
        .unwrap();

        let root = resolve_install_root(home.path()).unwrap();
        assert_eq!(root, home.path().join(".steam/steam"));
    }

    #[test]
    fn higher_priority_candidate_shadows_lower() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(home.path().join(".local/share/Steam/steamapps")).unwrap();
        fs::create_dir_all(home.path().join(".steam/steam/steamapps")).unwrap();

        let root = resolve_install_root(home.path()).unwrap();
        assert_eq!(root, home.path().join(".local/share/Steam"));
    }

    #[test]
    fn candidate_without_steamapps_marker_is_ignored() {
        let home = tempfile::tempdir().unwrap();
        // Root dir exists but has no steamapps marker.
        fs::create_dir_all(home.path().join(".local/share/Steam")).unwrap();
        fs::create_dir_all(home.path().join(".steam/steam/steamapps")).unwrap();

        let root = resolve_install_root(home.path()).unwrap();
        assert_eq!(root, home.path().join(".steam/steam"));
    }

    #[test]
    fn no_candidates_resolves_to_none() {
        let home = tempfile::tempdir().unwrap();
        assert!(resolve_install_root(home.path()).is_none());
    }

    #[test]
    fn missing_root_yields_single_not_found_skip() {
        let home = tempfile::tempdir().unwrap();

        let report = SteamCaches::new(home.path().to_path_buf()).run(false);
        assert_eq!(report.targets.len(), 1);
        assert_eq!(report.targets[0].label, "Steam installation");
        assert!(matches!(
            &report.targets[0].outcome,
            Outcome::Skipped { reason } if reason == "not found"
        ));
        assert!(report.errors.is_empty());
        assert_eq!(report.reclaimed(), 0);

        let compat = CompatData::new(home.path().to_path_buf()).run(false);
        assert_eq!(compat.targets.len(), 1);
        assert!(matches!(compat.targets[0].outcome, Outcome::Skipped { .. }));
    }

    #[test]
    fn dry_run_measures_existing_subdirs_without_deleting() {
        let home = tempfile::tempdir().unwrap();
        let shadercache = home
            .path()
            .join(".local/share/Steam/steamapps/shadercache");
        fs::create_dir_all(&shadercache).unwrap();
        let file = shadercache.join("pipeline.bin");
        fs::write(&file, vec![0u8; 64]).unwrap();

        let report = SteamCaches::new(home.path().to_path_buf()).run(true);
        assert_eq!(report.reclaimed(), 64);
        assert!(file.exists());
        // the other fixed subdirs are absent and reported as skipped
        assert!(report
            .targets
            .iter()
            .any(|t| matches!(t.outcome, Outcome::Skipped { .. })));
    }

    #[test]
    fn confirmed_run_empties_existing_subdirs() {
        let home = tempfile::tempdir().unwrap();
        let logs = home.path().join(".local/share/Steam/logs");
        fs::create_dir_all(home.path().join(".local/share/Steam/steamapps")).unwrap();
        fs::create_dir_all(&logs).unwrap();
        fs::write(logs.join("content_log.txt"), vec![0u8; 32]).unwrap();

        let report = SteamCaches::new(home.path().to_path_buf()).run(false);
        assert_eq!(report.reclaimed(), 32);
        assert!(logs.is_dir());
        assert_eq!(fs::read_dir(&logs).unwrap().count(), 0);
    }
}
