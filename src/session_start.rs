use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::input::HookRequest;
use crate::response::HookResponse;
use crate::watch_log;

const INDEXER_BIN: &str = "ygrep";
const INDEX_TIMEOUT: Duration = Duration::from_secs(60);

const INSTALL_HINT: &str =
    "ygrep not installed. Install with: cargo install --path /path/to/ygrep";
const SKILL_INSTRUCTION: &str =
    "You must load ygrep skill for searching and exploring rather than grep";

/// SessionStart hook: refresh the workspace index (fast if already indexed)
/// and tell the session to use ygrep for searching. Every fault is caught,
/// logged, and downgraded to a "continue" response; blocking the host
/// session is worse than a degraded outcome.
pub fn run(request: &HookRequest) -> HookResponse {
    match refresh_index(&request.cwd()) {
        Ok(Outcome::IndexerMissing) => HookResponse::continue_with(INSTALL_HINT),
        Ok(Outcome::Refreshed) => HookResponse::continue_with(SKILL_INSTRUCTION),
        Err(err) => {
            let message = format!("{err:#}");
            watch_log::append_error(&message);
            HookResponse::continue_with(format!("ygrep watch failed: {message}"))
        }
    }
}

enum Outcome {
    IndexerMissing,
    Refreshed,
}

fn refresh_index(cwd: &Path) -> Result<Outcome> {
    let binary = match probe_indexer()? {
        Some(path) => path,
        None => return Ok(Outcome::IndexerMissing),
    };

    run_with_timeout(
        Command::new(binary).arg("index").current_dir(cwd),
        INDEX_TIMEOUT,
    )?;
    Ok(Outcome::Refreshed)
}

/// Look up the indexer on PATH. Not-found is an expected answer; other probe
/// failures are faults.
fn probe_indexer() -> Result<Option<PathBuf>> {
    match which::which(INDEXER_BIN) {
        Ok(path) => Ok(Some(path)),
        Err(which::Error::CannotFindBinaryPath) => Ok(None),
        Err(err) => Err(err).context("probing PATH for ygrep"),
    }
}

/// Run a command with all stdio discarded, waiting at most `timeout`. The
/// exit status is deliberately ignored (the refresh is best-effort); a child
/// that outlives the bound is killed and reported as a fault.
fn run_with_timeout(command: &mut Command, timeout: Duration) -> Result<()> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawning ygrep index")?;

    let start = Instant::now();
    loop {
        match child.try_wait().context("waiting for ygrep index")? {
            Some(_status) => return Ok(()),
            None if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                bail!("ygrep index timed out after {}s", timeout.as_secs());
            }
            None => std::thread::sleep(Duration::from_millis(50)),
        }
    }
}
