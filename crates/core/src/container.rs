//! Container invocation building and execution.
//!
//! Builds the `docker run` command for one job and executes it, capturing
//! the complete stdout/stderr of the run. Arguments are always passed as a
//! literal vector to the process-spawn API, never through a shell, so
//! user-supplied URLs and column names cannot be interpreted as shell
//! syntax.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use uuid::Uuid;

use crate::error::CoreError;

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Output beyond this limit is truncated to bound memory use under very
/// verbose containers.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// One `docker run` invocation for one job.
#[derive(Debug, Clone)]
pub struct ContainerInvocation {
    executable: String,
    image: String,
    container_name: String,
    mounts: Vec<(PathBuf, String)>,
    env: Vec<(String, String)>,
    args: Vec<String>,
    timeout: Option<Duration>,
}

/// Captured result of a finished container run.
///
/// A non-zero exit code is a normal outcome here; interpreting it is the
/// handler's job.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Process exit code (`-1` if terminated by a signal).
    pub exit_code: i32,
    /// Complete stdout captured from the run.
    pub stdout: String,
    /// Complete stderr captured from the run.
    pub stderr: String,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Forward the captured container output to the debug log, one line at a
    /// time, skipping blank lines. Operators read these when a user reports
    /// a failed run; the raw streams are never returned to the user.
    pub fn log_output(&self) {
        for line in self.stdout.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!("container stdout: {line}");
        }
        for line in self.stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!("container stderr: {line}");
        }
    }
}

impl ContainerInvocation {
    /// Start building an invocation of `image` via `executable`.
    ///
    /// The container name gets a random suffix so that concurrent jobs on
    /// the same image never collide.
    pub fn new(executable: &str, image: &str) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            executable: executable.to_string(),
            image: image.to_string(),
            container_name: format!("{image}_{}", &suffix[..10]),
            mounts: Vec::new(),
            env: Vec::new(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Mount `host_dir` at `container_dir` inside the container.
    pub fn mount(mut self, host_dir: PathBuf, container_dir: &str) -> Self {
        self.mounts.push((host_dir, container_dir.to_string()));
        self
    }

    /// Set an environment variable inside the container.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Append one argument for the container entrypoint.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments for the container entrypoint.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Limit the wall-clock runtime of the container. `None` (the default)
    /// trusts the container to terminate on its own.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    /// The full argument vector handed to the runtime executable.
    pub fn command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "run".to_string(),
            "--rm".to_string(),
            "--name".to_string(),
            self.container_name.clone(),
        ];
        for (host_dir, container_dir) in &self.mounts {
            argv.push("-v".to_string());
            argv.push(format!("{}:{container_dir}", host_dir.display()));
        }
        for (key, value) in &self.env {
            argv.push("-e".to_string());
            argv.push(format!("{key}={value}"));
        }
        argv.push(self.image.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Execute the invocation and capture its output.
    ///
    /// Ensures every host mount directory exists first (idempotent, safe
    /// against concurrent jobs creating the same directories), then spawns
    /// the runtime with piped stdout/stderr and waits for it to exit.
    pub async fn run(&self) -> Result<RunOutcome, CoreError> {
        for (host_dir, _) in &self.mounts {
            tokio::fs::create_dir_all(host_dir).await?;
        }

        let argv = self.command_line();
        tracing::debug!(
            container = %self.container_name,
            command = ?argv,
            "starting container run"
        );

        let mut cmd = Command::new(&self.executable);
        cmd.args(&argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| CoreError::Spawn {
            executable: self.executable.clone(),
            source,
        })?;

        // Read both streams in spawned tasks so `child.wait()` (which needs
        // `&mut child`) can run concurrently with the capture.
        let stdout_handle = child.stdout.take();
        let stderr_handle = child.stderr.take();
        let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
        let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => waited?,
                // `child` is dropped here and killed via `kill_on_drop`.
                Err(_elapsed) => {
                    return Err(CoreError::Timeout {
                        limit_secs: limit.as_secs(),
                    })
                }
            },
            None => child.wait().await?,
        };

        let stdout_bytes = stdout_task.await.unwrap_or_default();
        let stderr_bytes = stderr_task.await.unwrap_or_default();
        let outcome = RunOutcome {
            exit_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
            stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
        };
        tracing::debug!(
            container = %self.container_name,
            exit_code = outcome.exit_code,
            "finished container run"
        );
        Ok(outcome)
    }
}

/// Read an entire output stream into a byte buffer, capped at
/// [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
    }
    buf
}
