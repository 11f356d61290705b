use super::{CheckResult, Probe, ProbeReport};
use crate::exec;
use std::ffi::OsStr;
use sysinfo::{ProcessesToUpdate, System};

const DAEMON: &str = "gamemoded";

pub struct Services;

fn daemon_pids(sys: &System, name: &str) -> Vec<String> {
    sys.processes_by_exact_name(OsStr::new(name))
        .map(|p| p.pid().to_string())
        .collect()
}

impl Probe for Services {
    fn label(&self) -> &'static str {
        "Session services"
    }

    fn run(&self) -> ProbeReport {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let daemon_check = {
            let pids = daemon_pids(&sys, DAEMON);
            if pids.is_empty() {
                CheckResult::warn(format!("{DAEMON} not running"))
            } else {
                CheckResult::pass(format!("{DAEMON} running (pid {})", pids.join(", ")))
            }
        };

        let x_clients_check = match exec::run("xlsclients", &[]) {
            Some(out) => {
                let count = out.lines().filter(|l| !l.trim().is_empty()).count();
                CheckResult::pass(format!("{count} X clients connected"))
            }
            None => CheckResult::warn("xlsclients not available (no X session?)"),
        };

        ProbeReport::from_checks(vec![daemon_check, x_clients_check])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_lookup_does_not_match_other_processes() {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);
        assert!(daemon_pids(&sys, "definitely-not-a-real-daemon").is_empty());
    }
}
