use std::process::{Child, Command};
use std::thread::{self, JoinHandle};

use super::UiLinkOpener;

/// Hands URLs to the operating system's default browser.
pub struct DesktopLinkOpener;

fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

/// Wait on the launcher in the background so it never lingers as a zombie.
fn reap(mut child: Child) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(err) = child.wait() {
            tracing::debug!(error = %err, "could not wait on browser launcher");
        }
    })
}

impl UiLinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        match browser_command(url).spawn() {
            Ok(child) => {
                tracing::debug!(url, "opened link in browser");
                reap(child);
            }
            Err(err) => tracing::warn!(url, error = %err, "failed to open link"),
        }
    }
}
