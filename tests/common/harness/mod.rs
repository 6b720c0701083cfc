//! Test harness for CLI integration tests.
//!
//! Provides isolated databases and config directories, programmatic
//! seeding, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::OrgCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
