//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::OrgCommand;
use orgtree::cli::handlers::open_service;
use orgtree::domain::{NewPosition, PositionId};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and config home.
///
/// Everything lives under one temp directory that is removed on drop, so the
/// user's real `~/.config/orgtree/config.toml` never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the database path passed with `--db`.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("positions.db")
    }

    /// Returns the directory used as the config home.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Writes `orgtree/config.toml` under the config home.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config_home().join("orgtree");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Inserts a position directly through the library and returns its id.
    pub fn add_position(&self, name: &str, parent: Option<PositionId>) -> PositionId {
        let service = open_service(&self.db_path()).expect("Failed to open database");
        service
            .create(&NewPosition::new(name, format!("{name} role")).parent(parent))
            .expect("Failed to seed position")
            .id
    }

    /// Seeds CEO(1) -> CTO(2) -> Engineer(3).
    pub fn seed_chain(&self) -> [PositionId; 3] {
        let ceo = self.add_position("CEO", None);
        let cto = self.add_position("CTO", Some(ceo));
        let engineer = self.add_position("Engineer", Some(cto));
        [ceo, cto, engineer]
    }

    /// Seeds a single chain of `depth` positions, each reporting to the last.
    pub fn seed_deep_chain(&self, depth: usize) -> PositionId {
        let service = open_service(&self.db_path()).expect("Failed to open database");
        let mut parent = None;
        for level in 1..=depth {
            let created = service
                .create(&NewPosition::new(format!("Level {level}"), "rung").parent(parent))
                .expect("Failed to seed position");
            parent = Some(created.id);
        }
        parent.expect("depth must be positive")
    }

    /// Creates a command bound to this environment's database and config home.
    pub fn cmd(&self) -> OrgCommand {
        OrgCommand::new()
            .config_home(&self.config_home())
            .db(&self.db_path())
    }

    /// Creates a command that uses the config file instead of `--db`.
    pub fn cmd_without_db(&self) -> OrgCommand {
        OrgCommand::new().config_home(&self.config_home())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seed_creates_database() {
        let env = TestEnv::new();
        let [ceo, cto, engineer] = env.seed_chain();
        assert!(env.db_path().exists());
        assert_eq!(
            [ceo.get(), cto.get(), engineer.get()],
            [1, 2, 3]
        );
    }

    #[test]
    fn test_env_command_points_at_db() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }
}
