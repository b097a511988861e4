//! External process invocation
//!
//! Every package manager, npx and husky call goes through [`CommandRunner`]
//! so the stages can be exercised without touching the real tooling.

use std::fmt;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A program plus its arguments, run from the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout followed by stderr, for error reports
    pub fn combined(&self) -> String {
        match (self.stdout.trim().is_empty(), self.stderr.trim().is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.stdout.trim_end().to_string(),
            (true, false) => self.stderr.trim_end().to_string(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr.trim_end()),
        }
    }
}

/// Runs external commands to completion.
///
/// There is no timeout: a hung command hangs the run.
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        command: &ShellCommand,
    ) -> impl Future<Output = io::Result<CommandOutput>> + Send;
}

/// Runs commands as real child processes inside the project directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
        let output = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run `command` and fold spawn errors and non-zero exits into one
/// captured-output string. `Ok` only when the process exited 0.
pub async fn run_checked<R: CommandRunner>(
    runner: &R,
    command: &ShellCommand,
) -> Result<CommandOutput, String> {
    match runner.run(command).await {
        Ok(output) if output.success => Ok(output),
        Ok(output) => {
            let mut report = format!(
                "`{}` exited with code {}",
                command,
                output.code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
            );
            let captured = output.combined();
            if !captured.is_empty() {
                report.push('\n');
                report.push_str(&captured);
            }
            Err(report)
        }
        Err(e) => Err(format!("Failed to run `{}`: {}", command, e)),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every command and answers from a scripted list of failures
    #[derive(Default)]
    pub struct RecordingRunner {
        pub calls: Mutex<Vec<ShellCommand>>,
        failing: Vec<String>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Any command whose rendered form contains `needle` exits 1
        pub fn failing_on(needle: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failing: vec![needle.to_string()],
            }
        }

        pub fn rendered(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|c| c.to_string())
                .collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &ShellCommand) -> io::Result<CommandOutput> {
            self.calls.lock().unwrap().push(command.clone());
            let rendered = command.to_string();
            let fails = self.failing.iter().any(|n| rendered.contains(n.as_str()));
            Ok(CommandOutput {
                success: !fails,
                code: Some(if fails { 1 } else { 0 }),
                stdout: String::new(),
                stderr: if fails {
                    format!("{} failed", command.program)
                } else {
                    String::new()
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_spaced_args() {
        let cmd = ShellCommand::new("npm")
            .args(["pkg", "set"])
            .arg("scripts.format=prettier --write .");
        assert_eq!(cmd.to_string(), "npm pkg set 'scripts.format=prettier --write .'");
    }

    #[test]
    fn test_combined_output() {
        let out = CommandOutput {
            success: false,
            code: Some(1),
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
        };
        assert_eq!(out.combined(), "out\nerr");
    }

    #[tokio::test]
    async fn test_run_checked_reports_failure() {
        let runner = testing::RecordingRunner::failing_on("yarn");
        let err = run_checked(&runner, &ShellCommand::new("yarn").arg("add"))
            .await
            .unwrap_err();
        assert!(err.contains("exited with code 1"));
        assert!(err.contains("yarn failed"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_captures_status() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());

        let ok = runner
            .run(&ShellCommand::new("sh").args(["-c", "echo hello"]))
            .await
            .unwrap();
        assert!(ok.success);
        assert_eq!(ok.stdout.trim(), "hello");

        let failed = runner
            .run(&ShellCommand::new("sh").args(["-c", "exit 3"]))
            .await
            .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(3));
    }
}
