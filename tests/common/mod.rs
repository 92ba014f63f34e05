use assert_cmd::Command;
use tempfile::TempDir;

pub struct CliOutput {
    pub stdout: String,
    #[allow(dead_code)]
    pub stderr: String,
}

/// Runs a record keeper binary in script mode inside isolated home and
/// working directories.
pub struct CliHarness {
    home: TempDir,
    workdir: TempDir,
}

impl CliHarness {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
            workdir: tempfile::tempdir().expect("create temp workdir"),
        }
    }

    pub fn run_script(&self, bin: &str, script: &str) -> CliOutput {
        let mut cmd = Command::cargo_bin(bin).expect("binary exists");
        cmd.env("RECORD_KEEPER_HOME", self.home.path())
            .env("RECORD_KEEPER_CLI_SCRIPT", "1")
            .current_dir(self.workdir.path())
            .write_stdin(script.to_string());
        let output = cmd.output().expect("run script CLI");
        if !output.status.success() {
            panic!(
                "script CLI failed: status={}\nstdout:\n{}\nstderr:\n{}",
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
