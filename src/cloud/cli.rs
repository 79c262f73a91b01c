//! OpenStack CLI execution.
//!
//! Runs `openstack` commands and hands back their stdout.

use crate::error::{InventoryError, Result};
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Largest stdout accepted from a single command.
const MAX_OUTPUT_BYTES: usize = 5_000_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings kept whole.
/// A non-zero exit is returned as [`InventoryError::Command`] carrying stderr.
pub fn run(cmd: &str) -> Result<String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd)
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    log::trace!("split cmds={:?}", cmds);

    let Some((program, args)) = cmds.split_first() else {
        return Err(InventoryError::Command("empty command".to_string()));
    };

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        InventoryError::Command(format!("failed to execute {program}: {e}"))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(InventoryError::Command(format!(
            "{cmd}: {}",
            stderr.trim()
        )));
    }

    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(InventoryError::Command(format!(
            "response too large: {} bytes for command: {cmd}",
            output.stdout.len()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| InventoryError::Command(format!("invalid UTF-8 from {cmd}: {e}")))
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_openstack() {
        let input = "openstack --os-cloud vnf_prod server show 'my server' -f json";
        let split: Vec<&str> = split_and_strip(input)
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        assert_eq!(
            split,
            vec!["openstack", "--os-cloud", "vnf_prod", "server", "show", "my server", "-f", "json"]
        );
    }

    #[test]
    fn test_split_and_strip_empty_quotes() {
        let input = "Empty '' Single Quotes";
        let expected = vec!["Empty", "", "Single", "Quotes"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_run_empty_command() {
        assert!(matches!(run("   "), Err(InventoryError::Command(_))));
    }

    #[test]
    fn test_run_missing_program() {
        let err = run("definitely-not-an-openstack-binary --version").unwrap_err();
        assert!(err.to_string().contains("failed to execute"), "{err}");
    }
}
