use super::{CheckResult, Probe, ProbeReport};
use crate::exec;
use std::path::Path;

const GPU_MODULE: &str = "amdgpu";
const RENDER_NODE: &str = "/dev/dri/renderD128";

pub struct KernelGpu;

/// A module counts as loaded when it appears as the first field of an
/// lsmod line. Substring matches would also hit dependent modules.
fn module_loaded(lsmod_output: &str, module: &str) -> bool {
    lsmod_output
        .lines()
        .any(|line| line.split_whitespace().next() == Some(module))
}

impl Probe for KernelGpu {
    fn label(&self) -> &'static str {
        "Kernel GPU driver"
    }

    fn run(&self) -> ProbeReport {
        let module_check = match exec::run("lsmod", &[]) {
            Some(out) if module_loaded(&out, GPU_MODULE) => {
                CheckResult::pass(format!("{GPU_MODULE} module loaded"))
            }
            Some(_) => CheckResult::fail(format!("{GPU_MODULE} module not loaded")),
            None => CheckResult::fail("lsmod not available"),
        };

        let node_check = if Path::new(RENDER_NODE).exists() {
            CheckResult::pass(format!("{RENDER_NODE} present"))
        } else {
            CheckResult::fail(format!("{RENDER_NODE} missing"))
        };

        ProbeReport::from_checks(vec![module_check, node_check])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSMOD: &str = "\
Module                  Size  Used by
amdgpu              12345678  42
drm_ttm_helper         16384  1 amdgpu
snd_hda_intel          53248  3
";

    #[test]
    fn finds_module_in_first_column() {
        assert!(module_loaded(LSMOD, "amdgpu"));
        assert!(module_loaded(LSMOD, "snd_hda_intel"));
    }

    #[test]
    fn ignores_module_named_in_used_by_column() {
        // drm_ttm_helper's "Used by" column mentions amdgpu; a module that
        // only appears there must not count as loaded.
        assert!(!module_loaded(LSMOD, "nouveau"));
        let without_amdgpu = "drm_ttm_helper 16384 1 amdgpu\n";
        assert!(!module_loaded(without_amdgpu, "amdgpu"));
    }
}
