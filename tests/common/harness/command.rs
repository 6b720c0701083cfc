//! Fluent wrapper around assert_cmd::Command.

// Test utility: not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `orgtree` binary.
pub struct OrgCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl OrgCommand {
    /// Creates a new command for the `orgtree` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--db` option.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points config lookup at `dir` instead of the real home.
    pub fn config_home(mut self, dir: &Path) -> Self {
        self.config_home = Some(dir.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("orgtree").expect("Failed to find orgtree binary");
        cmd.env_remove("ORGTREE_LOG");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `add <name> -D <desc>`.
    pub fn add(self, name: &str, desc: &str) -> Self {
        self.args(["add", name, "-D", desc])
    }

    /// Configures for the `tree` command.
    pub fn tree(self) -> Self {
        self.args(["tree"])
    }

    /// Configures for `show <id>`.
    pub fn show(self, id: impl ToString) -> Self {
        self.args(["show".to_string(), id.to_string()])
    }

    /// Configures for `edit <id>`.
    pub fn edit(self, id: impl ToString) -> Self {
        self.args(["edit".to_string(), id.to_string()])
    }

    /// Configures for `rm <id>`.
    pub fn rm(self, id: impl ToString) -> Self {
        self.args(["rm".to_string(), id.to_string()])
    }

    /// Configures for `search <query>`.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for OrgCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        OrgCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = OrgCommand::new().tree().format_json();
        assert_eq!(cmd.get_args(), ["tree", "--format", "json"]);
    }
}
