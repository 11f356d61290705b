use super::{CheckResult, Probe, ProbeReport};
use crate::output::format_size;
use crate::utils;

/// Mesa's default cap when MESA_SHADER_CACHE_MAX_SIZE is unset.
const DEFAULT_CACHE_CAP: &str = "1G";

pub struct ShaderCache;

fn cache_summary(size: u64, files: u64) -> String {
    format!("Cache size: {} ({} files)", format_size(size), files)
}

impl Probe for ShaderCache {
    fn label(&self) -> &'static str {
        "Mesa shader cache"
    }

    fn run(&self) -> ProbeReport {
        let cache_dir = utils::home_dir().join(".cache/mesa_shader_cache");

        let cache_check = if cache_dir.exists() {
            let size = utils::dir_size(&cache_dir);
            let files = utils::file_count(&cache_dir);
            CheckResult::pass(cache_summary(size, files))
        } else {
            CheckResult::warn("shader cache doesn't exist yet")
        };

        let cap_check = match std::env::var("MESA_SHADER_CACHE_MAX_SIZE") {
            Ok(v) if !v.is_empty() => {
                CheckResult::pass(format!("MESA_SHADER_CACHE_MAX_SIZE={v}"))
            }
            _ => CheckResult::warn(format!(
                "MESA_SHADER_CACHE_MAX_SIZE not set, default ({DEFAULT_CACHE_CAP})"
            )),
        };

        ProbeReport::from_checks(vec![cache_check, cap_check])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_size_and_file_count() {
        assert_eq!(
            cache_summary(42 * 1024 * 1024, 3),
            "Cache size: 42M (3 files)"
        );
        assert_eq!(cache_summary(0, 0), "Cache size: 0B (0 files)");
    }
}

