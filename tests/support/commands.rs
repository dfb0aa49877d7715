//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an authfile command running in the test directory.
    ///
    /// Logging and colors are reset so output is deterministic.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("authfile").expect("failed to find authfile binary");
        cmd.env_remove("AUTHFILE_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `authfile netrc` with extra arguments.
    pub fn netrc(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("netrc")
            .args(args)
            .output()
            .expect("failed to run authfile netrc")
    }

    /// Shortcut for `authfile registry` with extra arguments.
    pub fn registry(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("registry")
            .args(args)
            .output()
            .expect("failed to run authfile registry")
    }

    /// Shortcut for `authfile build`.
    pub fn build(&self) -> Output {
        self.cmd()
            .arg("build")
            .output()
            .expect("failed to run authfile build")
    }

    /// Shortcut for `authfile check`.
    pub fn check(&self, file: &str) -> Output {
        self.cmd()
            .args(["check", file])
            .output()
            .expect("failed to run authfile check")
    }
}
