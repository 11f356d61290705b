use std::path::Path;
use std::process::Command;

/// Run a command and return its stdout if it exited successfully.
/// A missing binary or non-zero exit yields None.
pub fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a command with one extra environment variable set, returning
/// combined stdout and stderr. Driver help listings land on stderr.
pub fn run_with_env(
    program: &str,
    args: &[&str],
    key: &str,
    value: &str,
) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .env(key, value)
        .output()
        .ok()?;
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Some(text)
}

/// True if the command ran and exited with status zero.
pub fn succeeds(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Look for an executable on PATH.
pub fn command_exists(name: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| is_executable(&dir.join(name)))
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout() {
        let out = run("echo", &["hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn run_returns_none_for_missing_binary() {
        assert!(run("definitely-not-a-real-tool", &[]).is_none());
    }

    #[test]
    fn succeeds_reflects_exit_status() {
        assert!(succeeds("true", &[]));
        assert!(!succeeds("false", &[]));
    }

    #[test]
    fn command_exists_finds_shell() {
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely-not-a-real-tool"));
    }
}
