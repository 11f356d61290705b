use super::{CleanTask, TargetReport, TaskReport};
use crate::utils;

pub struct MesaShaderCache;

impl CleanTask for MesaShaderCache {
    fn label(&self) -> &'static str {
        "Mesa shader cache"
    }

    /// Mesa expects the cache directory itself to exist, so this one is
    /// removed and recreated rather than just emptied.
    fn run(&self, dry_run: bool) -> TaskReport {
        let mut report = TaskReport::new();
        let cache = utils::home_dir().join(".cache/mesa_shader_cache");

        if dry_run {
            let size = utils::entry_size(&cache);
            report
                .targets
                .push(TargetReport::cleared("mesa_shader_cache", size, true));
            return report;
        }

        match utils::recreate_dir(&cache) {
            Ok(freed) => report
                .targets
                .push(TargetReport::cleared("mesa_shader_cache", freed, false)),
            Err(e) => report
                .errors
                .push(format!("Failed to recreate {}: {e}", cache.display())),
        }
        report
    }
}
