//! Child process helpers for external validators.

use std::io::Read;
use std::process::{Child, Output};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Check if a command is installed, using `which` (or `where` on Windows).
pub fn command_exists(command: &str) -> bool {
    #[cfg(windows)]
    let lookup_cmd = "where";
    #[cfg(not(windows))]
    let lookup_cmd = "which";

    std::process::Command::new(lookup_cmd)
        .arg(command)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Wait for child process with timeout.
///
/// Polls since std::process has no native timeout. Piped stdout and stderr
/// are drained on background threads while polling. On timeout the child is
/// killed and reaped, and an error of kind `TimedOut` is returned.
pub fn wait_with_timeout(child: &mut Child, timeout: Duration) -> std::io::Result<Output> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    let stdout = spawn_reader(child.stdout.take());
    let stderr = spawn_reader(child.stderr.take());

    loop {
        match child.try_wait()? {
            Some(status) => {
                return Ok(Output {
                    status,
                    stdout: join_reader(stdout),
                    stderr: join_reader(stderr),
                });
            }
            None => {
                if start.elapsed() >= timeout {
                    // Kill and reap to prevent zombie process. The readers are
                    // left to finish on their own: a grandchild may still hold
                    // the pipes open.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        "Process timed out",
                    ));
                }
                thread::sleep(poll_interval);
            }
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut p| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            p.read_to_end(&mut buf).ok();
            buf
        })
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
