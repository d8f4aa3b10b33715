//! Blocking subprocess execution with captured output.

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Result of a command execution.
#[derive(Debug)]
pub struct ExecResult {
    /// Captured standard output (lossily decoded).
    pub stdout: String,
    /// Captured standard error (lossily decoded).
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Run `command` through `sh -c`, feeding `input` on stdin.
///
/// Stdout and stderr are captured and the call blocks until the process
/// exits. A non-zero exit is *not* an error here; inspect
/// [`ExecResult::success`]. `env` entries are added to the child's
/// environment.
///
/// Stdin is written from a separate thread so a child that produces output
/// before consuming all of its input cannot deadlock on a full pipe.
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned or its pipes fail.
pub fn run_shell_with_input(
    command: &str,
    input: &str,
    env: &[(&str, &Path)],
) -> std::io::Result<ExecResult> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (k, v) in env {
        cmd.env(k, v);
    }

    let mut child = cmd.spawn()?;
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_owned();
        std::thread::spawn(move || stdin.write_all(input.as_bytes()))
    });

    let output = child.wait_with_output()?;

    if let Some(handle) = writer {
        match handle.join() {
            // A child that exits without reading all its input closes the
            // pipe; its exit status is what matters then.
            Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e),
            Err(_) => return Err(std::io::Error::other("stdin writer thread panicked")),
            _ => {}
        }
    }

    Ok(ExecResult::from(output))
}
