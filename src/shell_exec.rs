//! External command execution.
//!
//! Every VCS probe goes through [`Cmd`], which logs the invocation, applies an
//! optional timeout, and records a trace line with the duration. A prompt is
//! rendered on every keystroke-return, so a hung tool must never stall it.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use wait_timeout::ChildExt;

/// Monotonic epoch for trace timestamps.
static TRACE_EPOCH: OnceLock<Instant> = OnceLock::new();

fn trace_epoch() -> &'static Instant {
    TRACE_EPOCH.get_or_init(Instant::now)
}

/// Builder for executing commands with logging, tracing, and an optional timeout.
///
/// ```ignore
/// let output = Cmd::new("git")
///     .args(["status", "--porcelain", "-b"])
///     .current_dir(&dir)
///     .env_clear()
///     .env("LANG", "C")
///     .timeout(Duration::from_millis(300))
///     .run()?;
/// ```
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    context: Option<String>,
    timeout: Option<Duration>,
    env_clear: bool,
    envs: Vec<(String, String)>,
}

impl Cmd {
    /// Create a new command builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            context: None,
            timeout: None,
            env_clear: false,
            envs: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Set the logging context (typically the segment name).
    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// Kill the command if it runs longer than `duration`.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Start the child with an empty environment; only `env()` entries are passed.
    ///
    /// The program is then looked up on the `PATH` given via `env()`.
    pub fn env_clear(mut self) -> Self {
        self.env_clear = true;
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.envs.push((key.into(), val.into()));
        self
    }

    /// Execute the command and capture its output.
    ///
    /// A non-zero exit is not an error here; callers inspect `status`.
    /// Exceeding the timeout returns `io::ErrorKind::TimedOut`.
    pub fn run(self) -> io::Result<Output> {
        let cmd_str = if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        };

        match &self.context {
            Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
            None => log::debug!("$ {}", cmd_str),
        }

        let t0 = Instant::now();
        let ts = t0.duration_since(*trace_epoch()).as_micros() as u64;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if self.env_clear {
            cmd.env_clear();
        }
        for (key, val) in &self.envs {
            cmd.env(key, val);
        }
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let result = match self.timeout {
            Some(timeout) => run_with_timeout(&mut cmd, timeout),
            None => cmd.stdin(Stdio::null()).output(),
        };

        let dur_us = t0.elapsed().as_micros() as u64;
        let ctx = self.context.as_deref().unwrap_or("-");
        match &result {
            Ok(output) => log::debug!(
                "[trace] ts={} context={} cmd=\"{}\" dur_us={} ok={}",
                ts,
                ctx,
                cmd_str,
                dur_us,
                output.status.success()
            ),
            Err(e) => log::debug!(
                "[trace] ts={} context={} cmd=\"{}\" dur_us={} err=\"{}\"",
                ts,
                ctx,
                cmd_str,
                dur_us,
                e
            ),
        }

        result
    }
}

/// Spawn the process, drain stdout/stderr on background threads, and wait up
/// to `timeout`.
///
/// On Unix the child leads its own process group, so expiry kills the whole
/// tree (wrapper scripts, hooks) rather than only the direct child. The reader
/// threads are detached on expiry: a descendant outside the group may still
/// hold the pipes open.
fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> io::Result<Output> {
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Readers run in parallel so a full pipe buffer can't deadlock the child
    let mut stdout_handle = child.stdout.take();
    let mut stderr_handle = child.stderr.take();
    let stdout_thread = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(ref mut handle) = stdout_handle {
            let _ = handle.read_to_end(&mut buf);
        }
        buf
    });
    let stderr_thread = std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(ref mut handle) = stderr_handle {
            let _ = handle.read_to_end(&mut buf);
        }
        buf
    });

    let status = match child.wait_timeout(timeout)? {
        Some(status) => status,
        None => {
            kill_tree(&mut child);
            let _ = child.wait();
            drop((stdout_thread, stderr_thread));
            return Err(io::Error::new(io::ErrorKind::TimedOut, "command timed out"));
        }
    };

    let stdout = stdout_thread.join().unwrap_or_default();
    let stderr = stderr_thread.join().unwrap_or_default();

    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

/// SIGKILL the child's process group.
#[cfg(unix)]
fn kill_tree(child: &mut std::process::Child) {
    let pgid = nix::unistd::Pid::from_raw(child.id() as i32);
    if let Err(e) = nix::sys::signal::killpg(pgid, nix::sys::signal::Signal::SIGKILL) {
        log::debug!("killpg {pgid} failed: {e}");
        let _ = child.kill();
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut std::process::Child) {
    let _ = child.kill();
}
